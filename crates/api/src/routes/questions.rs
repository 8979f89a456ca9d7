//! Route definitions for questions.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Question routes.
///
/// ```text
/// GET    /questions                 -> list_questions
/// POST   /questions                 -> add_or_search_question
/// DELETE /questions/{question_id}   -> delete_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::add_or_search_question),
        )
        .route("/questions/{question_id}", delete(questions::delete_question))
}
