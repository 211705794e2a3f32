//! Dashboard analytics aggregation.
//!
//! Pure functions over a snapshot of the feedback collection: the caller
//! takes `FeedbackStore::list_all()` and hands it in together with the
//! evaluation instant, so results are always fresh and day bucketing is
//! testable. All bucketing is UTC; a trend entry's label and its bounds
//! derive from the same UTC calendar day.

use std::collections::HashMap;

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use pulse_core::feedback::{STATUS_NEW, STATUS_RESOLVED};
use pulse_core::sentiment::{SENTIMENT_NEGATIVE, SENTIMENT_NEUTRAL, SENTIMENT_POSITIVE};
use pulse_core::types::Timestamp;

use crate::models::Feedback;

/// Number of calendar days covered by the trend series (today inclusive).
const TREND_WINDOW_DAYS: u64 = 7;

/// One calendar day of the trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// UTC calendar day, formatted `YYYY-MM-DD`.
    pub date: String,
    /// Records created during this day.
    pub total: u64,
    /// Of those, records currently marked resolved.
    pub resolved: u64,
}

/// The dashboard summary payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_feedback: u64,
    pub pending_review: u64,
    /// Static display placeholder from configuration; never derived from
    /// the data. Response-time tracking would need a status transition
    /// log the data model does not have.
    pub avg_response_time: String,
    pub satisfaction_score: String,
    pub category_breakdown: HashMap<String, u64>,
    pub sentiment_breakdown: HashMap<String, u64>,
    pub status_breakdown: HashMap<String, u64>,
    pub trends: Vec<TrendPoint>,
}

/// Compute the dashboard summary for a snapshot of the collection.
///
/// Aggregation over zero records is valid: all totals are zero, the
/// breakdowns are empty, the trend series still has seven all-zero
/// entries, and the satisfaction score is `0.0/5`.
pub fn compute_summary(
    records: &[Feedback],
    now: Timestamp,
    avg_response_time: &str,
) -> AnalyticsSummary {
    let total_feedback = records.len() as u64;
    let pending_review = records.iter().filter(|r| r.status == STATUS_NEW).count() as u64;

    let mut category_breakdown: HashMap<String, u64> = HashMap::new();
    let mut sentiment_breakdown: HashMap<String, u64> = HashMap::new();
    let mut status_breakdown: HashMap<String, u64> = HashMap::new();

    for record in records {
        *category_breakdown
            .entry(record.category.clone())
            .or_insert(0) += 1;

        // An absent sentiment counts as neutral.
        let sentiment = record.sentiment.as_deref().unwrap_or(SENTIMENT_NEUTRAL);
        *sentiment_breakdown.entry(sentiment.to_string()).or_insert(0) += 1;

        *status_breakdown.entry(record.status.clone()).or_insert(0) += 1;
    }

    AnalyticsSummary {
        total_feedback,
        pending_review,
        avg_response_time: avg_response_time.to_string(),
        satisfaction_score: satisfaction_score(&sentiment_breakdown, total_feedback),
        category_breakdown,
        sentiment_breakdown,
        status_breakdown,
        trends: compute_trends(records, now),
    }
}

/// Day-bucketed totals for today and the six preceding UTC calendar
/// days, oldest first.
fn compute_trends(records: &[Feedback], now: Timestamp) -> Vec<TrendPoint> {
    let mut trends = Vec::with_capacity(TREND_WINDOW_DAYS as usize);

    for offset in (0..TREND_WINDOW_DAYS).rev() {
        let day = now.date_naive() - chrono::Days::new(offset);

        // Each bound is built independently from the day itself; the
        // window is the inclusive [00:00:00.000, 23:59:59.999] range.
        let day_start = day.and_time(NaiveTime::MIN).and_utc();
        let day_end = day.and_time(NaiveTime::MIN).and_utc() + Duration::days(1)
            - Duration::milliseconds(1);

        let mut total = 0;
        let mut resolved = 0;
        for record in records {
            if record.created_at >= day_start && record.created_at <= day_end {
                total += 1;
                if record.status == STATUS_RESOLVED {
                    resolved += 1;
                }
            }
        }

        trends.push(TrendPoint {
            date: day.format("%Y-%m-%d").to_string(),
            total,
            resolved,
        });
    }

    trends
}

/// Weighted sentiment average rendered as `X.Y/5`.
///
/// positive = 5, neutral = 3, negative = 1, divided by the total record
/// count. When no record classified positive the fixed `0.0/5` is
/// returned, matching the dashboard's historical behaviour.
fn satisfaction_score(sentiment_breakdown: &HashMap<String, u64>, total_feedback: u64) -> String {
    let positive = breakdown_count(sentiment_breakdown, SENTIMENT_POSITIVE);
    if positive == 0 {
        return "0.0/5".to_string();
    }

    let neutral = breakdown_count(sentiment_breakdown, SENTIMENT_NEUTRAL);
    let negative = breakdown_count(sentiment_breakdown, SENTIMENT_NEGATIVE);

    let weighted = positive * 5 + neutral * 3 + negative;
    let score = weighted as f64 / total_feedback as f64;
    format!("{score:.1}/5")
}

fn breakdown_count(breakdown: &HashMap<String, u64>, key: &str) -> u64 {
    breakdown.get(key).copied().unwrap_or(0)
}
