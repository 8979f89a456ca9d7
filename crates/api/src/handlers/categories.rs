use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;
use axum::Json;
use trivia_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CategoryList, Envelope};
use crate::state::AppState;

/// GET /categories
///
/// List every category name in id order. The endpoint takes no parameters;
/// any query string (e.g. `?page=2`) is rejected with 404.
pub async fn list_categories(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<impl IntoResponse> {
    if query.as_deref().is_some_and(|q| !q.is_empty()) {
        return Err(AppError::NotFound(
            "categories listing does not accept query parameters".into(),
        ));
    }

    let categories = CategoryRepo::list_types(&state.pool)
        .await
        .map_err(AppError::read)?;

    Ok(Json(Envelope::ok(CategoryList { categories })))
}
