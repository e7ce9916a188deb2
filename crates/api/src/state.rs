use std::sync::Arc;

use ymdb_core::blob::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted and everything else is
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ymdb_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Poster image storage.
    pub blob_store: Arc<dyn BlobStore>,
}
