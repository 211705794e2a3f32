//! Feedback field catalogue and validation.
//!
//! Defines the valid categories, priorities, and statuses for feedback
//! records, plus the validation helpers used by the API layer. The store
//! itself trusts its inputs; every write path must validate here first.

use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// All valid feedback categories.
pub const VALID_CATEGORIES: &[&str] = &[
    "bug-report",
    "feature-request",
    "ui-ux",
    "performance",
    "general",
    "other",
];

// ---------------------------------------------------------------------------
// Priorities
// ---------------------------------------------------------------------------

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";

/// All valid feedback priorities.
pub const VALID_PRIORITIES: &[&str] = &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];

/// Priority assigned when a submission omits one.
pub const DEFAULT_PRIORITY: &str = PRIORITY_MEDIUM;

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// Initial status for newly submitted feedback.
pub const STATUS_NEW: &str = "new";
/// Feedback has been looked at by the team.
pub const STATUS_REVIEWED: &str = "reviewed";
/// Work on the underlying issue is underway.
pub const STATUS_IN_PROGRESS: &str = "in-progress";
/// The feedback has been addressed.
pub const STATUS_RESOLVED: &str = "resolved";

/// All valid feedback statuses.
pub const VALID_STATUSES: &[&str] =
    &[STATUS_NEW, STATUS_REVIEWED, STATUS_IN_PROGRESS, STATUS_RESOLVED];

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Minimum length for the message field (characters).
pub const MIN_MESSAGE_LENGTH: usize = 10;

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Validate that a category string is one of the known categories.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid feedback category '{}'. Must be one of: {:?}",
            category, VALID_CATEGORIES
        )))
    }
}

/// Validate that a priority string is one of the known priorities.
pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    if VALID_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid feedback priority '{}'. Must be one of: {:?}",
            priority, VALID_PRIORITIES
        )))
    }
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid feedback status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

/// Validate the submitter name (must be non-empty).
pub fn validate_user_name(user_name: &str) -> Result<(), CoreError> {
    if user_name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".to_string()));
    }
    Ok(())
}

/// Validate an optional email address.
///
/// The empty string is accepted (the submission form sends it when the
/// field is left blank) and is normalised away at the store layer.
pub fn validate_user_email(email: &str) -> Result<(), CoreError> {
    if email.is_empty() || email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{}' is not a valid email address",
            email
        )))
    }
}

/// Validate the message length.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.chars().count() < MIN_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message must be at least {} characters",
            MIN_MESSAGE_LENGTH
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_are_valid() {
        for c in VALID_CATEGORIES {
            assert!(validate_category(c).is_ok(), "Category '{c}' should be valid");
        }
    }

    #[test]
    fn unknown_category_is_invalid() {
        assert!(validate_category("spam").is_err());
        assert!(validate_category("").is_err());
    }

    #[test]
    fn all_priorities_are_valid() {
        for p in VALID_PRIORITIES {
            assert!(validate_priority(p).is_ok(), "Priority '{p}' should be valid");
        }
    }

    #[test]
    fn unknown_priority_is_invalid() {
        assert!(validate_priority("urgent").is_err());
    }

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "Status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(validate_status("closed").is_err());
        assert!(validate_status("").is_err());
    }

    #[test]
    fn blank_user_name_is_invalid() {
        assert!(validate_user_name("").is_err());
        assert!(validate_user_name("   ").is_err());
        assert!(validate_user_name("Ada").is_ok());
    }

    #[test]
    fn empty_email_is_accepted() {
        assert!(validate_user_email("").is_ok());
    }

    #[test]
    fn well_formed_email_is_accepted() {
        assert!(validate_user_email("ada@example.com").is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        assert!(validate_user_email("not-an-email").is_err());
        assert!(validate_user_email("missing@tld@twice").is_err());
    }

    #[test]
    fn short_message_is_rejected() {
        assert!(validate_message("too short").is_err());
        assert!(validate_message("this one is long enough").is_ok());
    }

    #[test]
    fn message_length_is_counted_in_characters() {
        // Ten multibyte characters must pass even though the byte length
        // check would be misleading.
        assert!(validate_message("éééééééééé").is_ok());
    }
}
