//! Shared application state handed to every handler.

use std::sync::Arc;

use foodlog_db::DbPool;

use crate::config::ServerConfig;

/// Cloned into each request by the `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the diary database.
    pub pool: DbPool,
    /// Server settings, shared across workers.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
