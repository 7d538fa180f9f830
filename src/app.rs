use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/automation/run", post(handlers::run_automation))
        .with_state(state)
}
