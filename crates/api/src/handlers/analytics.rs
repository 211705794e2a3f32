//! Handler for the dashboard analytics summary.

use axum::extract::State;
use axum::Json;

use pulse_store::analytics::{compute_summary, AnalyticsSummary};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /analytics
///
/// Aggregate the full record set into the dashboard summary. Reads a
/// fresh snapshot on every call; nothing is cached. The response-time
/// placeholder comes from configuration, not from the data.
pub async fn get_analytics(State(state): State<AppState>) -> AppResult<Json<AnalyticsSummary>> {
    let records = state.store.list_all().await;
    let summary = compute_summary(&records, chrono::Utc::now(), &state.config.avg_response_time);

    Ok(Json(summary))
}
