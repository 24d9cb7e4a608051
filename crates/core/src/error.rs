use crate::types::{Id, OrderStatus};

/// Domain error taxonomy.
///
/// Priority-index collisions are deliberately absent: a collision triggers
/// an internal queue reindex and the requested reorder still succeeds, so
/// callers never observe it as a failure.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: Id },

    #[error("Invalid specification: {0}")]
    InvalidSpecification(String),

    #[error("Order {id} cannot transition from {from} to {attempted}")]
    InvalidStateTransition {
        id: Id,
        from: OrderStatus,
        attempted: OrderStatus,
    },

    #[error("Payment already confirmed for order {id}")]
    AlreadyConfirmed { id: Id },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
