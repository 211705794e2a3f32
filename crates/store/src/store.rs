//! The in-memory feedback repository.

use tokio::sync::RwLock;
use uuid::Uuid;

use pulse_core::feedback::{DEFAULT_PRIORITY, STATUS_NEW};
use pulse_core::sentiment::classify;
use pulse_core::types::{FeedbackId, Timestamp};

use crate::models::{CreateFeedback, Feedback, UpdateFeedback};

/// Owns the canonical feedback collection.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Mutations hold the write guard for
/// their whole step, so they are atomic and serialized with respect to
/// each other; reads take the read guard and may run concurrently but
/// never observe a partially applied mutation.
///
/// The collection is kept in insertion order. All listing operations sort
/// by `created_at` descending with a stable sort, so records created with
/// identical timestamps come back in insertion order. Lookups and filters
/// are linear scans, which is deliberate: the data volumes are dashboard
/// scale, not production scale.
pub struct FeedbackStore {
    records: RwLock<Vec<Feedback>>,
}

impl FeedbackStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Insert a new feedback record.
    ///
    /// Assigns a fresh id, runs the sentiment classifier on the message,
    /// sets the initial status, defaults the priority, normalises an
    /// empty-string email to absent, and stamps both timestamps with the
    /// same instant. Input is assumed validated by the caller.
    pub async fn create(&self, input: CreateFeedback) -> Feedback {
        let now = chrono::Utc::now();
        let sentiment = classify(&input.message);

        let record = Feedback {
            id: Uuid::new_v4(),
            user_name: input.user_name,
            user_email: input.user_email.filter(|e| !e.is_empty()),
            category: input.category,
            priority: input.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            message: input.message,
            status: STATUS_NEW.to_string(),
            sentiment: Some(sentiment.to_string()),
            created_at: now,
            updated_at: now,
        };

        self.records.write().await.push(record.clone());
        record
    }

    /// Point lookup by id.
    pub async fn get(&self, id: FeedbackId) -> Option<Feedback> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Return every record, most recent first.
    pub async fn list_all(&self) -> Vec<Feedback> {
        let mut records: Vec<Feedback> = self.records.read().await.clone();
        sort_newest_first(&mut records);
        records
    }

    /// Merge the supplied fields onto an existing record.
    ///
    /// Unsupplied fields are left untouched; `updated_at` is refreshed.
    /// Returns `None` if the id is unknown; update never creates.
    pub async fn update(&self, id: FeedbackId, updates: UpdateFeedback) -> Option<Feedback> {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|r| r.id == id)?;

        if let Some(user_name) = updates.user_name {
            record.user_name = user_name;
        }
        if let Some(user_email) = updates.user_email {
            record.user_email = Some(user_email).filter(|e| !e.is_empty());
        }
        if let Some(category) = updates.category {
            record.category = category;
        }
        if let Some(priority) = updates.priority {
            record.priority = priority;
        }
        if let Some(status) = updates.status {
            record.status = status;
        }
        if let Some(message) = updates.message {
            record.message = message;
        }
        record.updated_at = chrono::Utc::now();

        Some(record.clone())
    }

    /// Remove a record. Returns whether a removal occurred.
    pub async fn delete(&self, id: FeedbackId) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        records.len() < before
    }

    /// All records with the given status, most recent first.
    pub async fn by_status(&self, status: &str) -> Vec<Feedback> {
        self.filtered(|r| r.status == status).await
    }

    /// All records in the given category, most recent first.
    pub async fn by_category(&self, category: &str) -> Vec<Feedback> {
        self.filtered(|r| r.category == category).await
    }

    /// All records created within `[start, end]` (inclusive), most recent
    /// first.
    pub async fn by_date_range(&self, start: Timestamp, end: Timestamp) -> Vec<Feedback> {
        self.filtered(|r| r.created_at >= start && r.created_at <= end)
            .await
    }

    /// Case-insensitive substring search over message, submitter name,
    /// and category.
    pub async fn search(&self, query: &str) -> Vec<Feedback> {
        let query = query.to_lowercase();
        self.filtered(|r| {
            r.message.to_lowercase().contains(&query)
                || r.user_name.to_lowercase().contains(&query)
                || r.category.to_lowercase().contains(&query)
        })
        .await
    }

    /// Current number of records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<Feedback>
    where
        F: Fn(&Feedback) -> bool,
    {
        let mut records: Vec<Feedback> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        sort_newest_first(&mut records);
        records
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable descending sort by `created_at`; equal timestamps keep their
/// insertion order.
fn sort_newest_first(records: &mut [Feedback]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
