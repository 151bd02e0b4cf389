use std::sync::Arc;

use folio_db::store::SharedStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record store every page and API call reads from and writes to.
    pub store: SharedStore,
    /// Server configuration (auth settings are read by the session extractors).
    pub config: Arc<ServerConfig>,
}
