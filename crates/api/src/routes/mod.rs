pub mod builds;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /builds/check                                    evaluate a build (POST)
/// /builds/rules                                    list compatibility rules (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/builds", builds::router())
}
