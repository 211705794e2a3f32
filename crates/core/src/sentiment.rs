//! Keyword-heuristic sentiment classification.
//!
//! Deliberately not a language model: a fixed pair of word lists and a
//! substring count is the entire classifier. Sentiment is assigned once,
//! when a record is created, and never recomputed.

// ---------------------------------------------------------------------------
// Sentiment constants
// ---------------------------------------------------------------------------

pub const SENTIMENT_POSITIVE: &str = "positive";
pub const SENTIMENT_NEUTRAL: &str = "neutral";
pub const SENTIMENT_NEGATIVE: &str = "negative";

/// All valid sentiment values.
pub const VALID_SENTIMENTS: &[&str] =
    &[SENTIMENT_POSITIVE, SENTIMENT_NEUTRAL, SENTIMENT_NEGATIVE];

// ---------------------------------------------------------------------------
// Keyword lists
// ---------------------------------------------------------------------------

/// Words whose presence pulls a message towards `positive`.
pub const POSITIVE_WORDS: &[&str] = &[
    "love",
    "great",
    "awesome",
    "excellent",
    "amazing",
    "perfect",
    "fantastic",
    "wonderful",
];

/// Words whose presence pulls a message towards `negative`.
pub const NEGATIVE_WORDS: &[&str] = &[
    "hate",
    "terrible",
    "awful",
    "bad",
    "horrible",
    "worst",
    "broken",
    "useless",
    "issue",
    "problem",
    "bug",
];

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Classify a feedback message as positive, neutral, or negative.
///
/// Case-insensitive substring matching: each non-overlapping occurrence
/// of a listed word counts once, and the list with the higher total
/// wins. Ties (including no matches at all) are `neutral`. Any input is
/// valid; the empty string classifies as neutral.
pub fn classify(message: &str) -> &'static str {
    let lower = message.to_lowercase();

    let positive_count: usize = POSITIVE_WORDS
        .iter()
        .map(|word| lower.matches(word).count())
        .sum();
    let negative_count: usize = NEGATIVE_WORDS
        .iter()
        .map(|word| lower.matches(word).count())
        .sum();

    if positive_count > negative_count {
        SENTIMENT_POSITIVE
    } else if negative_count > positive_count {
        SENTIMENT_NEGATIVE
    } else {
        SENTIMENT_NEUTRAL
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
