//! TTL cache over the rates and settings snapshots.
//!
//! Rates and settings change rarely but are read on every order creation,
//! so they are cached for a bounded TTL. The cache is injected through
//! `AppState` rather than hidden in a process-global, and the PUT handlers
//! invalidate it deterministically instead of relying on wall-clock expiry
//! alone. It is never consulted for payment-state decisions: those read and
//! write the orders table directly.

use std::time::{Duration, Instant};

use printdesk_core::types::{Rates, Settings};
use printdesk_db::repositories::{RatesRepo, SettingsRepo};
use printdesk_db::DbPool;
use tokio::sync::RwLock;

struct Cached<T> {
    fetched_at: Instant,
    value: T,
}

pub struct ConfigCache {
    ttl: Duration,
    rates: RwLock<Option<Cached<Rates>>>,
    settings: RwLock<Option<Cached<Settings>>>,
}

impl ConfigCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            rates: RwLock::new(None),
            settings: RwLock::new(None),
        }
    }

    /// Current rates, served from cache while fresh.
    pub async fn rates(&self, pool: &DbPool) -> Result<Rates, sqlx::Error> {
        if let Some(cached) = self.rates.read().await.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.value.clone());
            }
        }
        let fresh = RatesRepo::get(pool).await?;
        *self.rates.write().await = Some(Cached {
            fetched_at: Instant::now(),
            value: fresh.clone(),
        });
        Ok(fresh)
    }

    /// Current settings, served from cache while fresh.
    pub async fn settings(&self, pool: &DbPool) -> Result<Settings, sqlx::Error> {
        if let Some(cached) = self.settings.read().await.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.value.clone());
            }
        }
        let fresh = SettingsRepo::get(pool).await?;
        *self.settings.write().await = Some(Cached {
            fetched_at: Instant::now(),
            value: fresh.clone(),
        });
        Ok(fresh)
    }

    /// Called by `PUT /rates` after a successful write.
    pub async fn invalidate_rates(&self) {
        *self.rates.write().await = None;
    }

    /// Called by `PUT /settings` after a successful write.
    pub async fn invalidate_settings(&self) {
        *self.settings.write().await = None;
    }
}
