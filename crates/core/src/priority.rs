//! Priority index arithmetic for manual reordering.
//!
//! Each queue maintains its own namespace of `priority_index` values.
//! Fresh orders are appended at `max(index) + 1000`; the deliberate gaps
//! allow cheap midpoint insertion without reindexing on every reorder.
//! When repeated bisection exhausts the gap between two neighbors, the
//! whole queue is reindexed to 1000, 2000, 3000, ... in its current order
//! and the requested move is retried. The planning here is pure; execution
//! (inside a transaction) lives in the repository layer.

use serde::Deserialize;

/// Gap between freshly assigned priority indices.
pub const INDEX_GAP: i64 = 1000;

/// Requested direction for a manual reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Outcome of planning a manual move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePlan {
    /// The order is already at the boundary; the move is a silent no-op.
    Noop,
    /// Assign the order this index.
    Assign(i64),
    /// The midpoint is not strictly between the neighbors; reindex the
    /// queue and retry. Internal remediation, never a caller-visible error.
    Reindex,
}

/// Plan a move for the member at `pos` within `indices`, the queue's
/// current indices in ascending order.
///
/// Promote takes the midpoint with the previous neighbor, demote with the
/// next; both are no-ops at the queue boundary.
pub fn plan_move(indices: &[i64], pos: usize, direction: Direction) -> MovePlan {
    let (lo, hi) = match direction {
        Direction::Up => {
            if pos == 0 {
                return MovePlan::Noop;
            }
            (indices[pos - 1], indices[pos])
        }
        Direction::Down => {
            if pos + 1 >= indices.len() {
                return MovePlan::Noop;
            }
            (indices[pos], indices[pos + 1])
        }
    };
    let mid = midpoint(lo, hi);
    if mid > lo && mid < hi {
        MovePlan::Assign(mid)
    } else {
        MovePlan::Reindex
    }
}

/// Fresh indices for a reindexed queue of `len` members: 1000, 2000, ...
pub fn reindex_assignments(len: usize) -> impl Iterator<Item = i64> {
    (1..=len as i64).map(|i| i * INDEX_GAP)
}

/// Overflow-safe midpoint of two indices.
fn midpoint(lo: i64, hi: i64) -> i64 {
    lo + (hi - lo) / 2
}
