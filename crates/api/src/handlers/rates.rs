//! Handlers for the `/rates` resource.
//!
//! The pricing table is a single row. Writes invalidate the config cache
//! deterministically so the next quote sees the new rates immediately,
//! without waiting out the TTL.

use axum::extract::State;
use axum::Json;
use printdesk_core::types::Rates;
use printdesk_db::models::config::RatesUpdate;
use printdesk_db::repositories::RatesRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AdminAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/rates
pub async fn get(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Rates>>> {
    let rates = RatesRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: rates }))
}

/// PUT /api/v1/rates
pub async fn put(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Json(input): Json<RatesUpdate>,
) -> AppResult<Json<DataResponse<Rates>>> {
    input.validate()?;
    let rates = RatesRepo::set(&state.pool, &input).await?;
    state.config_cache.invalidate_rates().await;
    tracing::info!(min_charge = rates.min_charge, "rates updated");
    Ok(Json(DataResponse { data: rates }))
}
