use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;

/// Shared state handed to the router at construction: the store pool and
/// the configuration (bearer secret included).
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: AppConfig) -> Self {
        Self { pool, config: Arc::new(config) }
    }
}
