//! Route definitions for the feedback resource.
//!
//! Mounted at `/feedback` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Feedback routes.
///
/// ```text
/// GET    /           -> list_feedback (query filters)
/// POST   /           -> create_feedback
/// GET    /{id}       -> get_feedback
/// PATCH  /{id}       -> update_feedback
/// DELETE /{id}       -> delete_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(feedback::list_feedback).post(feedback::create_feedback),
        )
        .route(
            "/{id}",
            get(feedback::get_feedback)
                .patch(feedback::update_feedback)
                .delete(feedback::delete_feedback),
        )
}
