//! Route definition for the readiness probe.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// ```text
/// GET /health    -> readiness
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::readiness))
}
