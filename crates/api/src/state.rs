use std::sync::Arc;

use crate::cache::ConfigCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: printdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// TTL cache over the rates/settings snapshots.
    pub config_cache: Arc<ConfigCache>,
}
