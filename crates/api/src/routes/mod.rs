pub mod analytics;
pub mod feedback;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /feedback              list (GET, with query filters), submit (POST)
/// /feedback/{id}         get, partial update (PATCH), delete
/// /analytics             dashboard summary (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/feedback", feedback::router())
        .nest("/analytics", analytics::router())
}
