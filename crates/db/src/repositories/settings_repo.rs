//! Repository for the single-row `settings` table.

use printdesk_core::types::Settings;
use sqlx::PgPool;

use crate::models::config::SettingsUpdate;

const COLUMNS: &str = "admin_pass_hash, small_pages, chunk_pages, aging_minutes";

pub struct SettingsRepo;

impl SettingsRepo {
    /// The row is seeded by the initial migration, so it always exists.
    pub async fn get(pool: &PgPool) -> Result<Settings, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE singleton");
        sqlx::query_as::<_, Settings>(&query).fetch_one(pool).await
    }

    pub async fn set(pool: &PgPool, update: &SettingsUpdate) -> Result<Settings, sqlx::Error> {
        let query = format!(
            "UPDATE settings SET \
                 admin_pass_hash = $1, small_pages = $2, \
                 chunk_pages = $3, aging_minutes = $4 \
             WHERE singleton \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Settings>(&query)
            .bind(&update.admin_pass_hash)
            .bind(update.thresholds.small_pages)
            .bind(update.thresholds.chunk_pages)
            .bind(update.thresholds.aging_minutes)
            .fetch_one(pool)
            .await
    }
}
