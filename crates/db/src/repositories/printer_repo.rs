//! Repository for the `printers` table. Printers are owned and mutated
//! exclusively by operator actions; orders reference them by id only.

use printdesk_core::types::Id;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::printer::{CreatePrinter, Printer, PrinterUpdate};

const COLUMNS: &str = "\
    id, name, status, ppm, color, duplex, a4, a3, \
    current_job_id, progress_pct, updated_at";

pub struct PrinterRepo;

impl PrinterRepo {
    pub async fn create(pool: &PgPool, input: &CreatePrinter) -> Result<Printer, sqlx::Error> {
        let query = format!(
            "INSERT INTO printers (id, name, ppm, color, duplex, a4, a3) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Printer>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(input.ppm)
            .bind(input.color)
            .bind(input.duplex)
            .bind(input.a4)
            .bind(input.a3)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Printer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM printers ORDER BY name ASC");
        sqlx::query_as::<_, Printer>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Printer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM printers WHERE id = $1");
        sqlx::query_as::<_, Printer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Id,
        update: &PrinterUpdate,
    ) -> Result<Option<Printer>, sqlx::Error> {
        let query = format!(
            "UPDATE printers SET \
                 status = COALESCE($2, status), \
                 current_job_id = CASE WHEN $3 THEN $4 ELSE current_job_id END, \
                 progress_pct = COALESCE($5, progress_pct), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Printer>(&query)
            .bind(id)
            .bind(update.status)
            .bind(update.current_job_id.is_some())
            .bind(update.current_job_id.flatten())
            .bind(update.progress_pct)
            .fetch_optional(pool)
            .await
    }
}
