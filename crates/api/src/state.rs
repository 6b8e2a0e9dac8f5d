use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; the configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the engine parameters used by
    /// the build check handler.
    pub config: Arc<ServerConfig>,
}
