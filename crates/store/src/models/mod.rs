pub mod feedback;

pub use feedback::{CreateFeedback, Feedback, FeedbackListParams, UpdateFeedback};
