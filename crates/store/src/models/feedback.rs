//! Feedback entity model and DTOs.
//!
//! All wire serialization is camelCase: the dashboard client's contract
//! predates this backend and is preserved as-is.

use serde::{Deserialize, Serialize};
use pulse_core::types::{FeedbackId, Timestamp};

/// A single submitted feedback record.
///
/// `id`, `sentiment`, `status`, and the timestamps are assigned by the
/// store; callers can never supply them. `sentiment` is computed once at
/// creation and never recomputed; a `None` is counted as neutral by the
/// analytics aggregator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: FeedbackId,
    pub user_name: String,
    pub user_email: Option<String>,
    pub category: String,
    pub priority: String,
    pub message: String,
    pub status: String,
    pub sentiment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting new feedback.
///
/// An empty-string email is treated as absent (the submission form sends
/// `""` when the field is left blank); a missing priority defaults to
/// medium.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedback {
    pub user_name: String,
    pub user_email: Option<String>,
    pub category: String,
    pub priority: Option<String>,
    pub message: String,
}

/// DTO for partially updating a feedback record.
///
/// Only supplied fields are touched. `user_email: Some("")` clears the
/// stored address, mirroring the create-time normalisation. Sentiment is
/// deliberately not updatable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedback {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
}

/// Query parameters accepted by the feedback list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackListParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    /// Inclusive lower bound on `createdAt` (RFC 3339).
    pub start_date: Option<Timestamp>,
    /// Inclusive upper bound on `createdAt` (RFC 3339).
    pub end_date: Option<Timestamp>,
}
