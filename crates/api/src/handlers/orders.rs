//! Handlers for the `/orders` resource.
//!
//! Submission and payment confirmation are public (students place orders);
//! everything else requires [`AdminAuth`]. Pricing and classification run
//! exactly once, at submission time, and their outputs are frozen on the
//! order even if rates or thresholds change later.

use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use printdesk_core::error::CoreError;
use printdesk_core::priority::Direction;
use printdesk_core::types::{Id, OrderStatus, PaymentStatus, QueueType};
use printdesk_core::{classify, pricing, state as lifecycle};
use printdesk_db::models::order::{
    ConfirmPayment, CreateOrder, Order, OrderListQuery, OrderUpdate, PriorityRequest,
    TransitionRequest,
};
use printdesk_db::repositories::OrderRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// An order augmented with its advisory priority score.
///
/// The score is derived at read time and never persisted; the authoritative
/// admission order is the row sequence itself (per-queue discipline over
/// `priorityIndex`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredOrder {
    #[serde(flatten)]
    pub order: Order,
    pub priority_score: f64,
}

/// The operator's view of all three queues, each already admission-filtered
/// and sorted by its discipline.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueSnapshot {
    pub urgent: Vec<ScoredOrder>,
    pub normal: Vec<ScoredOrder>,
    pub bulk: Vec<ScoredOrder>,
}

/// POST /api/v1/orders
///
/// Runs the full creation pipeline: price quote against the current rates
/// snapshot, queue classification against the submission-time clock, then
/// insertion in `Pending`/`unpaid` at the tail of the assigned queue.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<DataResponse<Order>>)> {
    input.validate()?;

    let rates = state.config_cache.rates(&state.pool).await?;
    let settings = state.config_cache.settings(&state.pool).await?;

    let price_total = pricing::quote(&input.spec(), &rates)?;
    let queue_type = classify::classify(
        input.pages,
        input.pickup_time,
        Utc::now(),
        &settings.thresholds,
    );

    let order = OrderRepo::create(&state.pool, &input, queue_type, price_total).await?;
    tracing::info!(
        order_id = %order.id,
        queue = queue_type.as_str(),
        price_total,
        "order created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// GET /api/v1/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<DataResponse<Order>>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;
    Ok(Json(DataResponse { data: order }))
}

/// GET /api/v1/orders
///
/// `status` accepts a `|`-separated set (e.g. `Queued|Printing`);
/// `queueType` narrows to one queue.
pub async fn list(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<DataResponse<Vec<Order>>>> {
    let statuses = query
        .status
        .as_deref()
        .map(parse_status_set)
        .transpose()?;
    let orders = OrderRepo::list(&state.pool, statuses, query.queue_type).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /api/v1/orders/queue
///
/// The operator view: every queue admission-filtered (paid, in-flight
/// statuses only) and sorted by its discipline, each row annotated with
/// its advisory priority score.
pub async fn queue_view(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<QueueSnapshot>>> {
    let settings = state.config_cache.settings(&state.pool).await?;
    let now = Utc::now();

    let mut snapshot = QueueSnapshot {
        urgent: Vec::new(),
        normal: Vec::new(),
        bulk: Vec::new(),
    };
    for queue in [QueueType::Urgent, QueueType::Normal, QueueType::Bulk] {
        let scored = OrderRepo::queue_view(&state.pool, queue)
            .await?
            .into_iter()
            .map(|order| {
                let priority_score = classify::priority_score(
                    order.queue_type,
                    order.pages,
                    order.created_at,
                    order.manual_boost,
                    now,
                    &settings.thresholds,
                );
                ScoredOrder {
                    order,
                    priority_score,
                }
            })
            .collect();
        match queue {
            QueueType::Urgent => snapshot.urgent = scored,
            QueueType::Normal => snapshot.normal = scored,
            QueueType::Bulk => snapshot.bulk = scored,
        }
    }
    Ok(Json(DataResponse { data: snapshot }))
}

/// POST /api/v1/orders/{id}/confirm-payment
///
/// The single unpaid -> paid transition. The conditional update in the
/// repository makes the precondition check and the write atomic, so of two
/// racing confirmations exactly one wins; this handler classifies the
/// loser's failure from the post-transition row.
pub async fn confirm_payment(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(input): Json<ConfirmPayment>,
) -> AppResult<Json<DataResponse<Order>>> {
    let confirmed =
        OrderRepo::confirm_payment(&state.pool, id, input.transaction_id.as_deref()).await?;

    match confirmed {
        Some(order) => {
            tracing::info!(order_id = %order.id, "payment confirmed");
            Ok(Json(DataResponse { data: order }))
        }
        None => {
            let order = OrderRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;
            if order.payment_status == PaymentStatus::Paid {
                Err(AppError::Core(CoreError::AlreadyConfirmed { id }))
            } else {
                Err(AppError::Core(CoreError::InvalidStateTransition {
                    id,
                    from: order.status,
                    attempted: OrderStatus::Queued,
                }))
            }
        }
    }
}

/// POST /api/v1/orders/{id}/transition
///
/// Operator transitions advance exactly one step (`Queued -> Printing ->
/// Ready -> Collected`); `Cancelled` is reachable from any cancellable
/// state. Anything else is rejected with the order's current state.
pub async fn transition(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(input): Json<TransitionRequest>,
) -> AppResult<Json<DataResponse<Order>>> {
    let updated = if input.target == OrderStatus::Cancelled {
        OrderRepo::cancel(&state.pool, id).await?
    } else {
        match lifecycle::required_predecessor(input.target) {
            Some(required_from) => {
                OrderRepo::transition(&state.pool, id, input.target, required_from).await?
            }
            // Pending and Queued are never operator targets: Pending only
            // exists at creation and Queued is owned by payment confirmation.
            None => None,
        }
    };

    match updated {
        Some(order) => {
            tracing::info!(order_id = %order.id, status = %order.status, "order transitioned");
            Ok(Json(DataResponse { data: order }))
        }
        None => {
            let order = OrderRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;
            Err(AppError::Core(CoreError::InvalidStateTransition {
                id,
                from: order.status,
                attempted: input.target,
            }))
        }
    }
}

/// POST /api/v1/orders/{id}/priority
///
/// Manual promote/demote within the order's queue. Boundary moves are
/// silent no-ops and index-gap exhaustion is remediated internally, so the
/// only client-visible failure is an unknown order.
pub async fn adjust_priority(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(input): Json<PriorityRequest>,
) -> AppResult<Json<DataResponse<Order>>> {
    let order = OrderRepo::adjust_priority(&state.pool, id, input.direction)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;
    if input.direction == Direction::Up {
        tracing::debug!(order_id = %order.id, index = order.priority_index, "order promoted");
    }
    Ok(Json(DataResponse { data: order }))
}

/// PATCH /api/v1/orders/{id}
///
/// Operator-owned execution fields. The only payment-status move accepted
/// here is paid -> refunded; unpaid -> paid belongs exclusively to
/// payment confirmation.
pub async fn update(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(input): Json<OrderUpdate>,
) -> AppResult<Json<DataResponse<Order>>> {
    input.validate()?;
    match input.payment_status {
        None | Some(PaymentStatus::Refunded) => {}
        Some(_) => {
            return Err(AppError::BadRequest(
                "paymentStatus may only be set to 'refunded' here".into(),
            ))
        }
    }

    let updated = OrderRepo::update(&state.pool, id, &input).await?;
    match updated {
        Some(order) => Ok(Json(DataResponse { data: order })),
        None => {
            // The row either does not exist or failed the refund precondition.
            OrderRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;
            Err(AppError::BadRequest(
                "only a paid order can be refunded".into(),
            ))
        }
    }
}

/// Parse the `|`-separated `status` query parameter.
fn parse_status_set(raw: &str) -> Result<Vec<OrderStatus>, AppError> {
    raw.split('|')
        .filter(|part| !part.trim().is_empty())
        .map(|part| OrderStatus::from_str(part).map_err(AppError::Core))
        .collect()
}
