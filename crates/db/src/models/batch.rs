//! Batch operation DTOs.
//!
//! Batch operations are partial-success by contract: ids that do not exist
//! (or rows not in an eligible state) are silently skipped, and the counts
//! are the signal. `affected_count` may be less than `requested_count`.

use printdesk_core::types::{Id, OrderStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Id set for `POST /orders/batch/cancel` and `/orders/batch/delete`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSelection {
    pub order_ids: Vec<Id>,
}

/// Uniform field set applied by `POST /orders/batch/update`.
///
/// A `status` here is still the single defined per-order transition: only
/// rows sitting in the target's valid predecessor state are touched.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BatchFields {
    pub status: Option<OrderStatus>,
    pub assigned_printer_id: Option<Id>,
    #[validate(range(min = 0, max = 100, message = "progressPct must be 0-100"))]
    pub progress_pct: Option<i16>,
}

/// Request body for `POST /orders/batch/update`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdate {
    pub order_ids: Vec<Id>,
    #[validate(nested)]
    pub fields: BatchFields,
}

/// Response envelope for every batch operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub requested_count: usize,
    pub affected_count: u64,
}
