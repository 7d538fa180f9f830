use crate::automation::{AutomationError, AutomationReport};
use crate::errors::AppError;
use crate::models::{DashboardPayload, Snapshot, StatsBundle};
use crate::state::AppState;
use crate::stats::{build_dashboard, build_stats_with};
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::Utc;
use tracing::{error, info, warn};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardPayload>, AppError> {
    let snapshot = load_snapshot(&state).await?;
    let payload = build_dashboard(&snapshot, &state.locale, Utc::now());
    report_double_counting(&payload.stats);
    Ok(Json(payload))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsBundle>, AppError> {
    let snapshot = load_snapshot(&state).await?;
    let stats = build_stats_with(&snapshot, &state.locale);
    report_double_counting(&stats);
    Ok(Json(stats))
}

pub async fn run_automation(
    State(state): State<AppState>,
) -> Result<Json<AutomationReport>, AppError> {
    let snapshot = load_snapshot(&state).await?;
    let stats = build_stats_with(&snapshot, &state.locale);

    match state.assistant.analyze(&stats) {
        Ok(report) => {
            info!(assistant = state.assistant.name(), "automation run finished");
            Ok(Json(report))
        }
        Err(err @ AutomationError::NotAvailable(_)) => {
            info!("automation requested but unavailable");
            Err(AppError::not_implemented(err.to_string()))
        }
    }
}

async fn load_snapshot(state: &AppState) -> Result<Snapshot, AppError> {
    state.source.load_snapshot().await.map_err(|err| {
        error!("failed to load dashboard data from {}: {err}", state.source.describe());
        AppError::from(err)
    })
}

fn report_double_counting(stats: &StatsBundle) {
    if stats.multi_code_orders > 0 {
        warn!(
            orders = stats.multi_code_orders,
            "orders with several discount codes count their revenue once per code"
        );
    }
}
