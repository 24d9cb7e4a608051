pub mod health;
pub mod orders;
pub mod printers;

use axum::routing::get;
use axum::Router;

use crate::handlers::{rates, settings};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /orders                        create (public), list (admin)
/// /orders/queue                  operator queue view (admin)
/// /orders/batch/update           uniform batch patch (admin)
/// /orders/batch/cancel           batch soft-cancel (admin)
/// /orders/batch/delete           irreversible batch delete (admin)
/// /orders/{id}                   get (public), patch (admin)
/// /orders/{id}/confirm-payment   confirm payment (public)
/// /orders/{id}/transition        operator state transition (admin)
/// /orders/{id}/priority          manual promote/demote (admin)
///
/// /printers                      list, create (admin)
/// /printers/{id}                 get, patch (admin)
///
/// /rates                         get, put (admin)
/// /settings                      get, put (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/orders", orders::router())
        .nest("/printers", printers::router())
        .route("/rates", get(rates::get).put(rates::put))
        .route("/settings", get(settings::get).put(settings::put))
}
