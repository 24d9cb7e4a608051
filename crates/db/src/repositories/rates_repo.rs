//! Repository for the single-row `rates` table.

use printdesk_core::types::Rates;
use sqlx::PgPool;

use crate::models::config::RatesUpdate;

const COLUMNS: &str = "\
    bw_single_a4, bw_duplex_a4, color_single_a4, color_duplex_a4, \
    min_charge, effective_date";

pub struct RatesRepo;

impl RatesRepo {
    /// The row is seeded by the initial migration, so it always exists.
    pub async fn get(pool: &PgPool) -> Result<Rates, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rates WHERE singleton");
        sqlx::query_as::<_, Rates>(&query).fetch_one(pool).await
    }

    /// Replace the rate card, stamping `effective_date` server-side.
    /// Orders priced under the previous card keep their frozen totals.
    pub async fn set(pool: &PgPool, update: &RatesUpdate) -> Result<Rates, sqlx::Error> {
        let query = format!(
            "UPDATE rates SET \
                 bw_single_a4 = $1, bw_duplex_a4 = $2, \
                 color_single_a4 = $3, color_duplex_a4 = $4, \
                 min_charge = $5, effective_date = NOW() \
             WHERE singleton \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rates>(&query)
            .bind(update.bw_single_a4)
            .bind(update.bw_duplex_a4)
            .bind(update.color_single_a4)
            .bind(update.color_duplex_a4)
            .bind(update.min_charge)
            .fetch_one(pool)
            .await
    }
}
