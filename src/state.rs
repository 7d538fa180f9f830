use crate::automation::{AutomationAssistant, UnavailableAssistant};
use crate::locale::Locale;
use crate::source::DataSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<DataSource>,
    pub locale: Arc<Locale>,
    pub assistant: Arc<dyn AutomationAssistant>,
}

impl AppState {
    pub fn new(source: DataSource, locale: Locale) -> Self {
        Self {
            source: Arc::new(source),
            locale: Arc::new(locale),
            assistant: Arc::new(UnavailableAssistant),
        }
    }

    pub fn with_assistant(mut self, assistant: impl AutomationAssistant + 'static) -> Self {
        self.assistant = Arc::new(assistant);
        self
    }
}
