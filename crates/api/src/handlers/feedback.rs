//! Handlers for the `/feedback` resource.
//!
//! Field validation happens here, before the store is touched; the store
//! trusts its inputs. Not-found results from the store are mapped to
//! [`CoreError::NotFound`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pulse_core::error::CoreError;
use pulse_core::feedback;
use pulse_core::types::FeedbackId;
use pulse_store::models::{CreateFeedback, Feedback, FeedbackListParams, UpdateFeedback};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /feedback
// ---------------------------------------------------------------------------

/// List feedback records, most recent first.
///
/// Accepts the filters `status`, `category`, `search`, and
/// `startDate`+`endDate` (both required for the range to apply). When
/// several are present the most specific one wins: date range, then
/// search, then category, then status.
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(params): Query<FeedbackListParams>,
) -> AppResult<Json<Vec<Feedback>>> {
    // Validate enum-valued filters up front.
    if let Some(ref status) = params.status {
        feedback::validate_status(status)?;
    }
    if let Some(ref category) = params.category {
        feedback::validate_category(category)?;
    }

    let records = match params {
        FeedbackListParams {
            start_date: Some(start),
            end_date: Some(end),
            ..
        } => state.store.by_date_range(start, end).await,
        FeedbackListParams {
            search: Some(ref query),
            ..
        } => state.store.search(query).await,
        FeedbackListParams {
            category: Some(ref category),
            ..
        } => state.store.by_category(category).await,
        FeedbackListParams {
            status: Some(ref status),
            ..
        } => state.store.by_status(status).await,
        _ => state.store.list_all().await,
    };

    Ok(Json(records))
}

// ---------------------------------------------------------------------------
// POST /feedback
// ---------------------------------------------------------------------------

/// Submit a new feedback record. Returns 201 with the stored record.
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<impl IntoResponse> {
    feedback::validate_user_name(&input.user_name)?;
    if let Some(ref email) = input.user_email {
        feedback::validate_user_email(email)?;
    }
    feedback::validate_category(&input.category)?;
    if let Some(ref priority) = input.priority {
        feedback::validate_priority(priority)?;
    }
    feedback::validate_message(&input.message)?;

    let record = state.store.create(input).await;

    tracing::info!(
        feedback_id = %record.id,
        category = %record.category,
        sentiment = record.sentiment.as_deref().unwrap_or_default(),
        "Feedback submitted",
    );

    Ok((StatusCode::CREATED, Json(record)))
}

// ---------------------------------------------------------------------------
// GET /feedback/:id
// ---------------------------------------------------------------------------

/// Get a single feedback record by ID.
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<FeedbackId>,
) -> AppResult<Json<Feedback>> {
    let record = state
        .store
        .get(id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;

    Ok(Json(record))
}

// ---------------------------------------------------------------------------
// PATCH /feedback/:id
// ---------------------------------------------------------------------------

/// Partially update a feedback record. Only supplied fields change.
pub async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<FeedbackId>,
    Json(updates): Json<UpdateFeedback>,
) -> AppResult<Json<Feedback>> {
    if let Some(ref user_name) = updates.user_name {
        feedback::validate_user_name(user_name)?;
    }
    if let Some(ref email) = updates.user_email {
        feedback::validate_user_email(email)?;
    }
    if let Some(ref category) = updates.category {
        feedback::validate_category(category)?;
    }
    if let Some(ref priority) = updates.priority {
        feedback::validate_priority(priority)?;
    }
    if let Some(ref status) = updates.status {
        feedback::validate_status(status)?;
    }
    if let Some(ref message) = updates.message {
        feedback::validate_message(message)?;
    }

    let record = state
        .store
        .update(id, updates)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;

    tracing::info!(
        feedback_id = %record.id,
        status = %record.status,
        "Feedback updated",
    );

    Ok(Json(record))
}

// ---------------------------------------------------------------------------
// DELETE /feedback/:id
// ---------------------------------------------------------------------------

/// Delete a feedback record. Returns 204 No Content on success.
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<FeedbackId>,
) -> AppResult<impl IntoResponse> {
    let removed = state.store.delete(id).await;

    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }));
    }

    tracing::info!(feedback_id = %id, "Feedback deleted");

    Ok(StatusCode::NO_CONTENT)
}
