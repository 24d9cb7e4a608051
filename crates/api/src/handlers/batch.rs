//! Handlers for `/orders/batch/*`.
//!
//! Each operation is one statement over the whole id set; partial success
//! is the contract. Unknown ids and rows in an ineligible state are
//! silently skipped, and `affectedCount` tells the caller how many landed.
//! Delete is irreversible and lives on its own endpoint so the intent is
//! always explicit.

use axum::extract::State;
use axum::Json;
use printdesk_db::models::batch::{BatchOutcome, BatchSelection, BatchUpdate};
use printdesk_db::repositories::OrderRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AdminAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/orders/batch/update
pub async fn update(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Json(input): Json<BatchUpdate>,
) -> AppResult<Json<DataResponse<BatchOutcome>>> {
    input.validate()?;
    let affected = OrderRepo::batch_update(&state.pool, &input.order_ids, &input.fields).await?;
    tracing::info!(
        requested = input.order_ids.len(),
        affected,
        "batch update applied"
    );
    Ok(Json(DataResponse {
        data: BatchOutcome {
            requested_count: input.order_ids.len(),
            affected_count: affected,
        },
    }))
}

/// POST /api/v1/orders/batch/cancel
pub async fn cancel(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Json(input): Json<BatchSelection>,
) -> AppResult<Json<DataResponse<BatchOutcome>>> {
    let affected = OrderRepo::batch_cancel(&state.pool, &input.order_ids).await?;
    tracing::info!(
        requested = input.order_ids.len(),
        affected,
        "batch cancel applied"
    );
    Ok(Json(DataResponse {
        data: BatchOutcome {
            requested_count: input.order_ids.len(),
            affected_count: affected,
        },
    }))
}

/// POST /api/v1/orders/batch/delete
pub async fn delete(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Json(input): Json<BatchSelection>,
) -> AppResult<Json<DataResponse<BatchOutcome>>> {
    let affected = OrderRepo::batch_delete(&state.pool, &input.order_ids).await?;
    tracing::warn!(
        requested = input.order_ids.len(),
        affected,
        "batch delete applied"
    );
    Ok(Json(DataResponse {
        data: BatchOutcome {
            requested_count: input.order_ids.len(),
            affected_count: affected,
        },
    }))
}
