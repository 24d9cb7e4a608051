//! Route definitions for the `/printers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::printers;
use crate::state::AppState;

/// Routes mounted at `/printers`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(printers::list).post(printers::create))
        .route("/{id}", get(printers::get_by_id).patch(printers::update))
}
