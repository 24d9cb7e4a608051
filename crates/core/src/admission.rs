//! Admission filter: which orders the operator view may see.
//!
//! A read-time projection, never a stored flag, so a paid order can never be
//! hidden nor an unpaid one leak through stale denormalized state. The state
//! machine guarantees every status here implies `payment_status = paid`.

use crate::types::OrderStatus;

/// Statuses exposed to the operator view.
pub const OPERATOR_VISIBLE: [OrderStatus; 3] = [
    OrderStatus::Queued,
    OrderStatus::Printing,
    OrderStatus::Ready,
];

pub fn operator_visible(status: OrderStatus) -> bool {
    OPERATOR_VISIBLE.contains(&status)
}
