//! Repository for the `orders` table.
//!
//! Every status literal is a bound enum value, never a string in the SQL.
//! Batch operations are single statements over `id = ANY($ids)`; their
//! affected-row count is the partial-success signal.

use printdesk_core::admission::OPERATOR_VISIBLE;
use printdesk_core::priority::{self, Direction, MovePlan};
use printdesk_core::state;
use printdesk_core::types::{Id, OrderStatus, PaymentStatus, QueueType};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::batch::BatchFields;
use crate::models::order::{CreateOrder, Order, OrderUpdate};

/// Column list for `orders` queries.
const COLUMNS: &str = "\
    id, student_name, mobile, file_name, pages, copies, color, sides, size, \
    pickup_time, queue_type, priority_index, manual_boost, price_total, \
    status, payment_status, transaction_id, paid_at, assigned_printer_id, \
    progress_pct, created_at, updated_at";

/// Provides persistence for print orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order in `Pending`/`unpaid` with a freshly allocated
    /// priority index at the tail of its queue (`max(index) + 1000`,
    /// computed inside the INSERT so allocation and insertion are one
    /// statement).
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrder,
        queue_type: QueueType,
        price_total: f64,
    ) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders \
                 (id, student_name, mobile, file_name, pages, copies, color, sides, size, \
                  pickup_time, queue_type, priority_index, price_total) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, \
                 (SELECT COALESCE(MAX(priority_index), 0) + $12 FROM orders WHERE queue_type = $11), \
                 $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.student_name)
            .bind(&input.mobile)
            .bind(&input.file_name)
            .bind(input.pages)
            .bind(input.copies)
            .bind(input.color)
            .bind(input.sides)
            .bind(input.size)
            .bind(input.pickup_time)
            .bind(queue_type)
            .bind(priority::INDEX_GAP)
            .bind(price_total)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List orders, optionally filtered by a status set and/or queue.
    pub async fn list(
        pool: &PgPool,
        statuses: Option<Vec<OrderStatus>>,
        queue_type: Option<QueueType>,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders \
             WHERE ($1::order_status[] IS NULL OR status = ANY($1)) \
               AND ($2::queue_type IS NULL OR queue_type = $2) \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(statuses)
            .bind(queue_type)
            .fetch_all(pool)
            .await
    }

    /// Operator view of one queue: admission-filtered and sorted by the
    /// queue's discipline. The normal queue is shortest-job-first with an
    /// FCFS tie-break; urgent and bulk are FCFS by priority index. Ties on
    /// priority index break on creation order, never left ambiguous.
    pub async fn queue_view(pool: &PgPool, queue: QueueType) -> Result<Vec<Order>, sqlx::Error> {
        let order_by = match queue {
            QueueType::Normal => "pages ASC, priority_index ASC, created_at ASC",
            QueueType::Urgent | QueueType::Bulk => "priority_index ASC, created_at ASC",
        };
        let query = format!(
            "SELECT {COLUMNS} FROM orders \
             WHERE queue_type = $1 AND status = ANY($2) \
             ORDER BY {order_by}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(queue)
            .bind(OPERATOR_VISIBLE.to_vec())
            .fetch_all(pool)
            .await
    }

    /// The single unpaid -> paid transition. Checks the `Pending`/`unpaid`
    /// precondition and writes the new state in one atomic statement, so
    /// of two racing confirmations exactly one can win; the loser gets
    /// `None` and classifies the failure from the post-transition row.
    pub async fn confirm_payment(
        pool: &PgPool,
        id: Id,
        transaction_id: Option<&str>,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders \
             SET status = $2, payment_status = $3, paid_at = NOW(), \
                 transaction_id = COALESCE($4, transaction_id), updated_at = NOW() \
             WHERE id = $1 AND status = $5 AND payment_status = $6 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(OrderStatus::Queued)
            .bind(PaymentStatus::Paid)
            .bind(transaction_id)
            .bind(OrderStatus::Pending)
            .bind(PaymentStatus::Unpaid)
            .fetch_optional(pool)
            .await
    }

    /// Operator transition gated on the target's single valid predecessor.
    pub async fn transition(
        pool: &PgPool,
        id: Id,
        target: OrderStatus,
        required_from: OrderStatus,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET status = $2, updated_at = NOW() \
             WHERE id = $1 AND status = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(target)
            .bind(required_from)
            .fetch_optional(pool)
            .await
    }

    /// Soft-cancel, permitted from Pending, Queued, or Printing.
    pub async fn cancel(pool: &PgPool, id: Id) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET status = $2, updated_at = NOW() \
             WHERE id = $1 AND status = ANY($3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(OrderStatus::Cancelled)
            .bind(state::CANCELLABLE.to_vec())
            .fetch_optional(pool)
            .await
    }

    /// Patch operator-owned fields. A refund only lands if the order is
    /// currently paid (checked in the same statement).
    pub async fn update(
        pool: &PgPool,
        id: Id,
        update: &OrderUpdate,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET \
                 progress_pct = COALESCE($2, progress_pct), \
                 assigned_printer_id = CASE WHEN $3 THEN $4 ELSE assigned_printer_id END, \
                 payment_status = COALESCE($5, payment_status), \
                 updated_at = NOW() \
             WHERE id = $1 AND ($5::payment_status IS NULL OR payment_status = $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(update.progress_pct)
            .bind(update.assigned_printer_id.is_some())
            .bind(update.assigned_printer_id.flatten())
            .bind(update.payment_status)
            .bind(PaymentStatus::Paid)
            .fetch_optional(pool)
            .await
    }

    /// Manual promote/demote within the order's queue.
    ///
    /// Locks the queue members, plans the move in core, and applies it.
    /// Midpoint exhaustion reindexes the queue to fresh 1000-gapped indices
    /// and retries; the caller never sees the remediation. Boundary moves
    /// return the order unchanged. `None` means the order does not exist.
    pub async fn adjust_priority(
        pool: &PgPool,
        id: Id,
        direction: Direction,
    ) -> Result<Option<Order>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let queue: Option<(QueueType,)> =
            sqlx::query_as("SELECT queue_type FROM orders WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((queue,)) = queue else {
            return Ok(None);
        };

        let members: Vec<(Id, i64)> = sqlx::query_as(
            "SELECT id, priority_index FROM orders WHERE queue_type = $1 \
             ORDER BY priority_index ASC, created_at ASC FOR UPDATE",
        )
        .bind(queue)
        .fetch_all(&mut *tx)
        .await?;

        let Some(pos) = members.iter().position(|(member, _)| *member == id) else {
            return Ok(None);
        };
        let indices: Vec<i64> = members.iter().map(|(_, idx)| *idx).collect();

        let order = match priority::plan_move(&indices, pos, direction) {
            MovePlan::Noop => Self::fetch_in_tx(&mut tx, id).await?,
            MovePlan::Assign(new_index) => {
                Self::apply_move(&mut tx, id, new_index, direction).await?
            }
            MovePlan::Reindex => {
                tracing::info!(
                    queue = queue.as_str(),
                    members = members.len(),
                    "priority index gap exhausted, reindexing queue"
                );
                for ((member, _), fresh) in members
                    .iter()
                    .zip(priority::reindex_assignments(members.len()))
                {
                    sqlx::query("UPDATE orders SET priority_index = $2 WHERE id = $1")
                        .bind(member)
                        .bind(fresh)
                        .execute(&mut *tx)
                        .await?;
                }
                let fresh: Vec<i64> = priority::reindex_assignments(members.len()).collect();
                match priority::plan_move(&fresh, pos, direction) {
                    MovePlan::Assign(new_index) => {
                        Self::apply_move(&mut tx, id, new_index, direction).await?
                    }
                    MovePlan::Noop | MovePlan::Reindex => Self::fetch_in_tx(&mut tx, id).await?,
                }
            }
        };

        tx.commit().await?;
        Ok(Some(order))
    }

    /// Uniform batch patch. A `status` field is applied only to rows in the
    /// target's valid predecessor state; everything else is skipped and the
    /// affected count tells the caller how many landed.
    pub async fn batch_update(
        pool: &PgPool,
        ids: &[Id],
        fields: &BatchFields,
    ) -> Result<u64, sqlx::Error> {
        let eligible_from: Vec<OrderStatus> = match fields.status {
            Some(OrderStatus::Cancelled) => state::CANCELLABLE.to_vec(),
            Some(target) => state::required_predecessor(target).into_iter().collect(),
            None => Vec::new(),
        };
        let result = sqlx::query(
            "UPDATE orders SET \
                 status = COALESCE($2, status), \
                 assigned_printer_id = COALESCE($3, assigned_printer_id), \
                 progress_pct = COALESCE($4, progress_pct), \
                 updated_at = NOW() \
             WHERE id = ANY($1) AND ($2::order_status IS NULL OR status = ANY($5))",
        )
        .bind(ids)
        .bind(fields.status)
        .bind(fields.assigned_printer_id)
        .bind(fields.progress_pct)
        .bind(eligible_from)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Batch soft-cancel; only cancellable rows are affected.
    pub async fn batch_cancel(pool: &PgPool, ids: &[Id]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE orders SET status = $2, updated_at = NOW() \
             WHERE id = ANY($1) AND status = ANY($3)",
        )
        .bind(ids)
        .bind(OrderStatus::Cancelled)
        .bind(state::CANCELLABLE.to_vec())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Irreversible hard delete, distinct from cancellation.
    pub async fn batch_delete(pool: &PgPool, ids: &[Id]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn apply_move(
        tx: &mut Transaction<'_, Postgres>,
        id: Id,
        new_index: i64,
        direction: Direction,
    ) -> Result<Order, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET priority_index = $2, \
                 manual_boost = (manual_boost OR $3), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(new_index)
            .bind(direction == Direction::Up)
            .fetch_one(&mut **tx)
            .await
    }

    async fn fetch_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: Id,
    ) -> Result<Order, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_one(&mut **tx)
            .await
    }
}
