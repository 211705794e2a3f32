//! Route definitions for the analytics dashboard.
//!
//! Mounted at `/analytics` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Analytics routes.
///
/// ```text
/// GET    /           -> get_analytics
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(analytics::get_analytics))
}
