/// Feedback records are identified by random v4 UUIDs.
pub type FeedbackId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
