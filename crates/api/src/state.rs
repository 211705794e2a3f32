use std::sync::Arc;

use pulse_store::FeedbackStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory feedback store.
    pub store: Arc<FeedbackStore>,
    /// Server configuration (CORS origins, timeouts, display placeholders).
    pub config: Arc<ServerConfig>,
}
