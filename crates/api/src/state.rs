use std::sync::Arc;

use folio_media::MediaUploader;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration, including the admin credential and JWT secret.
    pub config: Arc<ServerConfig>,
    /// Media upload facade over the configured provider.
    pub media: Arc<MediaUploader>,
}
