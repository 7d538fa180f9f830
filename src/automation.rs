//! AI-assisted marketing automation.
//!
//! Only the seam exists: the dashboard calls an [`AutomationAssistant`] with
//! the current statistics, and the shipped assistant reports that the
//! capability is not available yet.

use crate::models::StatsBundle;
use serde::Serialize;
use thiserror::Error;

/// Suggestions an assistant produces from one statistics bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AutomationReport {
    pub insights: String,
    pub experiments: Vec<String>,
    pub campaigns: Vec<String>,
    pub emails: Vec<String>,
}

#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("{0} is not available yet")]
    NotAvailable(String),
}

pub trait AutomationAssistant: Send + Sync {
    fn name(&self) -> &str;

    fn analyze(&self, stats: &StatsBundle) -> Result<AutomationReport, AutomationError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableAssistant;

impl AutomationAssistant for UnavailableAssistant {
    fn name(&self) -> &str {
        "AI automation"
    }

    fn analyze(&self, _stats: &StatsBundle) -> Result<AutomationReport, AutomationError> {
        Err(AutomationError::NotAvailable(self.name().to_owned()))
    }
}
