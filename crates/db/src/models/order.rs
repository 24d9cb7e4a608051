//! Order entity model and DTOs.

use printdesk_core::types::{
    ColorMode, Id, JobSpec, OrderStatus, PaperSize, PaymentStatus, QueueType, Sides, Timestamp,
};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `orders` table.
///
/// `pickup_time` and `paid_at` travel as epoch seconds on the wire (the
/// established client contract); the audit timestamps are RFC 3339.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Id,
    pub student_name: String,
    pub mobile: String,
    pub file_name: String,
    pub pages: i32,
    pub copies: i32,
    pub color: ColorMode,
    pub sides: Sides,
    pub size: PaperSize,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub pickup_time: Option<Timestamp>,
    pub queue_type: QueueType,
    pub priority_index: i64,
    pub manual_boost: bool,
    pub price_total: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub transaction_id: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub paid_at: Option<Timestamp>,
    pub assigned_printer_id: Option<Id>,
    pub progress_pct: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    /// The priced/classified portion of the order.
    pub fn spec(&self) -> JobSpec {
        JobSpec {
            pages: self.pages,
            copies: self.copies,
            color: self.color,
            sides: self.sides,
            size: self.size,
        }
    }
}

/// DTO for submitting a new order via `POST /api/v1/orders`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub student_name: String,
    pub mobile: String,
    pub file_name: String,
    #[validate(range(min = 1, message = "pages must be at least 1"))]
    pub pages: i32,
    #[validate(range(min = 1, message = "copies must be at least 1"))]
    pub copies: i32,
    pub color: ColorMode,
    pub sides: Sides,
    pub size: PaperSize,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub pickup_time: Option<Timestamp>,
}

impl CreateOrder {
    pub fn spec(&self) -> JobSpec {
        JobSpec {
            pages: self.pages,
            copies: self.copies,
            color: self.color,
            sides: self.sides,
            size: self.size,
        }
    }
}

/// DTO for `POST /orders/{id}/confirm-payment`. The transaction id is a
/// trusted client assertion, recorded as-is.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPayment {
    pub transaction_id: Option<String>,
}

/// DTO for `POST /orders/{id}/transition`.
#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub target: OrderStatus,
}

/// DTO for `POST /orders/{id}/priority`.
#[derive(Debug, Deserialize)]
pub struct PriorityRequest {
    pub direction: printdesk_core::priority::Direction,
}

/// Patch DTO for `PATCH /orders/{id}`.
///
/// `assigned_printer_id` distinguishes "absent" from "set to null" so the
/// operator can release a printer from an order.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[validate(range(min = 0, max = 100, message = "progressPct must be 0-100"))]
    pub progress_pct: Option<i16>,
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_printer_id: Option<Option<Id>>,
    /// Only the paid -> refunded move is accepted here; the unpaid -> paid
    /// transition belongs exclusively to payment confirmation.
    pub payment_status: Option<PaymentStatus>,
}

/// Query parameters for `GET /api/v1/orders`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    /// `|`-separated set of statuses, e.g. `Queued|Printing`.
    pub status: Option<String>,
    pub queue_type: Option<QueueType>,
}

/// Deserialize a present-but-possibly-null field into `Some(inner)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
