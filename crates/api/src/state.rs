use std::sync::Arc;

use redb::Database;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The database
/// handle is opened exactly once at startup by the composition root and
/// lives for the life of the process — there is no global store instance.
#[derive(Clone)]
pub struct AppState {
    /// Article database, shared by every request.
    pub db: Arc<Database>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
