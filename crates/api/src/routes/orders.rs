//! Route definitions for the `/orders` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{batch, orders};
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// Fixed segments (`/queue`, `/batch/*`) are registered alongside the
/// `/{id}` captures; axum gives literal segments precedence.
///
/// ```text
/// POST   /                       -> create (public)
/// GET    /                       -> list (admin)
/// GET    /queue                  -> queue_view (admin)
/// POST   /batch/update           -> batch update (admin)
/// POST   /batch/cancel           -> batch cancel (admin)
/// POST   /batch/delete           -> batch delete (admin)
/// GET    /{id}                   -> get_by_id (public)
/// PATCH  /{id}                   -> update (admin)
/// POST   /{id}/confirm-payment   -> confirm_payment (public)
/// POST   /{id}/transition        -> transition (admin)
/// POST   /{id}/priority          -> adjust_priority (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create).get(orders::list))
        .route("/queue", get(orders::queue_view))
        .route("/batch/update", post(batch::update))
        .route("/batch/cancel", post(batch::cancel))
        .route("/batch/delete", post(batch::delete))
        .route("/{id}", get(orders::get_by_id).patch(orders::update))
        .route("/{id}/confirm-payment", post(orders::confirm_payment))
        .route("/{id}/transition", post(orders::transition))
        .route("/{id}/priority", post(orders::adjust_priority))
}
