pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the trivia route tree (mounted at the root, no version prefix).
///
/// Route hierarchy:
///
/// ```text
/// /categories                                      list category names (GET)
/// /categories/{category_id}/questions              questions in a category (GET)
///
/// /questions                                       list (GET), create or search (POST)
/// /questions/{question_id}                         delete (DELETE)
///
/// /quizzes                                         next quiz question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(questions::router())
        .merge(quizzes::router())
}
