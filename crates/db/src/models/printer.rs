//! Printer entity model and DTOs.

use printdesk_core::types::{Id, PrinterStatus, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `printers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Printer {
    pub id: Id,
    pub name: String,
    pub status: PrinterStatus,
    pub ppm: i32,
    pub color: bool,
    pub duplex: bool,
    pub a4: bool,
    pub a3: bool,
    pub current_job_id: Option<Id>,
    pub progress_pct: i16,
    pub updated_at: Timestamp,
}

/// DTO for registering a printer.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrinter {
    pub name: String,
    #[validate(range(min = 1, message = "ppm must be at least 1"))]
    pub ppm: i32,
    pub color: bool,
    pub duplex: bool,
    pub a4: bool,
    pub a3: bool,
}

/// Patch DTO for `PATCH /printers/{id}`. `current_job_id` distinguishes
/// "absent" from "set to null" so a finished job can be detached.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PrinterUpdate {
    pub status: Option<PrinterStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub current_job_id: Option<Option<Id>>,
    #[validate(range(min = 0, max = 100, message = "progressPct must be 0-100"))]
    pub progress_pct: Option<i16>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
