//! Queue classification and the advisory priority score.
//!
//! Classification runs exactly once, at submission time, with the
//! submission-time clock reading. The priority score is a derived ranking
//! hint for operator views; the authoritative admission order is always the
//! per-queue `priority_index` (see [`crate::priority`]).

use crate::types::{QueueType, Thresholds, Timestamp};

/// Jobs picked up within this window (or already overdue) are urgent.
pub const URGENT_WINDOW_SECS: i64 = 3600;

/// Classify a job into a queue. First match wins:
///
/// 1. pickup within [`URGENT_WINDOW_SECS`] of `now` (including a pickup
///    already in the past) -> urgent, regardless of page count;
/// 2. `pages <= small_pages` -> normal;
/// 3. otherwise bulk.
pub fn classify(
    pages: i32,
    pickup_time: Option<Timestamp>,
    now: Timestamp,
    thresholds: &Thresholds,
) -> QueueType {
    if let Some(pickup) = pickup_time {
        if (pickup - now).num_seconds() <= URGENT_WINDOW_SECS {
            return QueueType::Urgent;
        }
    }
    if pages <= thresholds.small_pages {
        QueueType::Normal
    } else {
        QueueType::Bulk
    }
}

/// Advisory ranking hint:
/// `5*urgent + 3*(1/max(pages,1)) + 2*aged + 8*manual_boost`.
///
/// `aged` is true once the order has waited longer than `aging_minutes`.
/// Never persisted and never used as the admission sort key.
pub fn priority_score(
    queue_type: QueueType,
    pages: i32,
    created_at: Timestamp,
    manual_boost: bool,
    now: Timestamp,
    thresholds: &Thresholds,
) -> f64 {
    let mut score = 0.0;
    if queue_type == QueueType::Urgent {
        score += 5.0;
    }
    score += 3.0 / f64::from(pages.max(1));
    if (now - created_at).num_minutes() > i64::from(thresholds.aging_minutes) {
        score += 2.0;
    }
    if manual_boost {
        score += 8.0;
    }
    score
}
