//! Handlers for the `/settings` resource.
//!
//! Settings hold the classifier thresholds and the admin secret digest.
//! Writes invalidate the config cache so threshold changes and secret
//! rotations take effect on the next request.

use axum::extract::State;
use axum::Json;
use printdesk_core::types::Settings;
use printdesk_db::models::config::SettingsUpdate;
use printdesk_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::middleware::auth::AdminAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn get(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Settings>>> {
    let settings = SettingsRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/settings
pub async fn put(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Json(input): Json<SettingsUpdate>,
) -> AppResult<Json<DataResponse<Settings>>> {
    let settings = SettingsRepo::set(&state.pool, &input).await?;
    state.config_cache.invalidate_settings().await;
    tracing::info!("settings updated");
    Ok(Json(DataResponse { data: settings }))
}
