//! Route definitions for the `/builds` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::builds;
use crate::state::AppState;

/// Routes mounted at `/builds`.
///
/// ```text
/// POST   /check   -> check_build
/// GET    /rules   -> list_rules
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check", post(builds::check_build))
        .route("/rules", get(builds::list_rules))
}
