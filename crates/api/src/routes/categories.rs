//! Route definitions for categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, questions};
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET /categories                            -> list_categories
/// GET /categories/{category_id}/questions    -> list_questions_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions::list_questions_by_category),
        )
}
