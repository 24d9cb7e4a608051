//! Shared domain types: id/timestamp aliases, enums, and config snapshots.
//!
//! Enum columns are PostgreSQL enum types; each Rust enum derives
//! [`sqlx::Type`] with the matching `type_name`. Wire casing follows the
//! established client contract (statuses PascalCase, everything else
//! lowercase, paper sizes uppercase).

use serde::{Deserialize, Serialize};

/// Order and printer ids are opaque UUIDs, immutable once assigned.
pub type Id = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Queued,
    Printing,
    Ready,
    Collected,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Queued => "Queued",
            OrderStatus::Printing => "Printing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Collected => "Collected",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "queued" => Ok(OrderStatus::Queued),
            "printing" => Ok(OrderStatus::Printing),
            "ready" => Ok(OrderStatus::Ready),
            "collected" => Ok(OrderStatus::Collected),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(crate::error::CoreError::InvalidSpecification(format!(
                "unknown order status '{other}'"
            ))),
        }
    }
}

/// Payment state. Gates operator visibility: only paid orders reach the
/// operator queue (see [`crate::admission`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Refunded,
}

/// Queue a job is scheduled into. Assigned once at creation by the
/// classifier, never re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "queue_type", rename_all = "lowercase")]
pub enum QueueType {
    Urgent,
    Normal,
    Bulk,
}

impl QueueType {
    pub fn as_str(self) -> &'static str {
        match self {
            QueueType::Urgent => "urgent",
            QueueType::Normal => "normal",
            QueueType::Bulk => "bulk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "color_mode", rename_all = "lowercase")]
pub enum ColorMode {
    Bw,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "print_sides", rename_all = "lowercase")]
pub enum Sides {
    Single,
    Duplex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "paper_size", rename_all = "lowercase")]
pub enum PaperSize {
    A4,
    A3,
}

/// Printer operational status. Owned and mutated exclusively by operator
/// actions; orders hold a weak reference by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "printer_status", rename_all = "lowercase")]
pub enum PrinterStatus {
    Idle,
    Printing,
    Offline,
    Error,
}

/// The physical characteristics of a print job, as priced and classified.
#[derive(Debug, Clone, Copy)]
pub struct JobSpec {
    pub pages: i32,
    pub copies: i32,
    pub color: ColorMode,
    pub sides: Sides,
    pub size: PaperSize,
}

/// Versioned pricing table. Read at order-creation time only; `price_total`
/// is frozen at the rates in effect when the order was submitted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rates {
    pub bw_single_a4: f64,
    pub bw_duplex_a4: f64,
    pub color_single_a4: f64,
    pub color_duplex_a4: f64,
    pub min_charge: f64,
    pub effective_date: Timestamp,
}

/// Classifier and scoring thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    /// Jobs at or below this page count classify as `normal`.
    pub small_pages: i32,
    /// Page-count chunking hint for operator tooling.
    pub chunk_pages: i32,
    /// Waiting longer than this earns the advisory aging boost.
    pub aging_minutes: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            small_pages: 15,
            chunk_pages: 100,
            aging_minutes: 12,
        }
    }
}

/// Operator settings: the shared admin secret digest plus thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// SHA-256 hex digest of the shared admin secret.
    pub admin_pass_hash: String,
    #[sqlx(flatten)]
    pub thresholds: Thresholds,
}
