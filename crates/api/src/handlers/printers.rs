//! Handlers for the `/printers` resource.
//!
//! Printers are owned and mutated exclusively by operator actions; orders
//! reference them by id but never mutate them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use printdesk_core::error::CoreError;
use printdesk_core::types::Id;
use printdesk_db::models::printer::{CreatePrinter, Printer, PrinterUpdate};
use printdesk_db::repositories::PrinterRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/printers
pub async fn create(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Json(input): Json<CreatePrinter>,
) -> AppResult<(StatusCode, Json<DataResponse<Printer>>)> {
    input.validate()?;
    let printer = PrinterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: printer })))
}

/// GET /api/v1/printers
pub async fn list(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Printer>>>> {
    let printers = PrinterRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: printers }))
}

/// GET /api/v1/printers/{id}
pub async fn get_by_id(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<DataResponse<Printer>>> {
    let printer = PrinterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Printer",
            id,
        }))?;
    Ok(Json(DataResponse { data: printer }))
}

/// PATCH /api/v1/printers/{id}
pub async fn update(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(input): Json<PrinterUpdate>,
) -> AppResult<Json<DataResponse<Printer>>> {
    input.validate()?;
    let printer = PrinterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Printer",
            id,
        }))?;
    Ok(Json(DataResponse { data: printer }))
}
