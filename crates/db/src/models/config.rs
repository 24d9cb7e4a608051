//! Update DTOs for the single-row rates and settings tables.

use printdesk_core::types::Thresholds;
use serde::Deserialize;
use validator::Validate;

/// Body for `PUT /rates`. `effective_date` is stamped server-side.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatesUpdate {
    #[validate(range(min = 0.0))]
    pub bw_single_a4: f64,
    #[validate(range(min = 0.0))]
    pub bw_duplex_a4: f64,
    #[validate(range(min = 0.0))]
    pub color_single_a4: f64,
    #[validate(range(min = 0.0))]
    pub color_duplex_a4: f64,
    #[validate(range(min = 0.0))]
    pub min_charge: f64,
}

/// Body for `PUT /settings`. The hash is stored as given; the server never
/// sees the plaintext admin secret on this path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub admin_pass_hash: String,
    pub thresholds: Thresholds,
}
