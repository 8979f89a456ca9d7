use axum::routing::post;
use axum::Router;

use crate::handlers::quizzes;
use crate::state::AppState;

/// Quiz routes.
///
/// ```text
/// POST /quizzes   -> quiz_next
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(quizzes::quiz_next))
}
