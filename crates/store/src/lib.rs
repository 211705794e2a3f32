//! In-memory feedback repository and analytics aggregation.
//!
//! The store is volatile by design: the collection lives for the process
//! lifetime and is rebuilt empty on restart. Durability is an explicit
//! non-goal of the platform.

pub mod analytics;
pub mod models;
pub mod store;

pub use store::FeedbackStore;
