//! Order lifecycle state machine.
//!
//! `Pending -> Queued -> Printing -> Ready -> Collected`, with `Cancelled`
//! reachable from Pending, Queued, or Printing. No transition skips forward
//! more than one step. Pending and Queued are not valid operator targets:
//! orders are born Pending and reach Queued only through the payment
//! confirmation path, which is the sole unpaid -> paid transition.

use crate::error::CoreError;
use crate::types::{Id, OrderStatus};

/// States from which an order may still be cancelled.
pub const CANCELLABLE: [OrderStatus; 3] = [
    OrderStatus::Pending,
    OrderStatus::Queued,
    OrderStatus::Printing,
];

/// The single state an order must be in for an operator transition to
/// `target`. `None` for targets operators may not request directly.
pub fn required_predecessor(target: OrderStatus) -> Option<OrderStatus> {
    match target {
        OrderStatus::Printing => Some(OrderStatus::Queued),
        OrderStatus::Ready => Some(OrderStatus::Printing),
        OrderStatus::Collected => Some(OrderStatus::Ready),
        OrderStatus::Pending | OrderStatus::Queued | OrderStatus::Cancelled => None,
    }
}

pub fn can_cancel(from: OrderStatus) -> bool {
    CANCELLABLE.contains(&from)
}

/// Whether `from -> to` is a permitted transition.
pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    match to {
        OrderStatus::Cancelled => can_cancel(from),
        _ => required_predecessor(to) == Some(from),
    }
}

/// Validate a transition, producing the typed failure for the offending
/// order id when it is not permitted.
pub fn validate_transition(id: Id, from: OrderStatus, to: OrderStatus) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::InvalidStateTransition {
            id,
            from,
            attempted: to,
        })
    }
}
