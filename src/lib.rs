pub mod app;
pub mod automation;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod locale;
pub mod models;
pub mod source;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use config::DashboardConfig;
pub use locale::Locale;
pub use source::DataSource;
pub use state::AppState;
pub use stats::{build_stats, build_stats_with};
