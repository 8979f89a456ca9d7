//! Handlers for question listing, search, creation and deletion.
//!
//! Every handler answers with the paginated [`QuestionPage`] envelope.
//! Storage failures are classified coarsely: read endpoints answer 404,
//! the create/search endpoint answers 422.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use trivia_core::catalog::check_category_bound;
use trivia_core::error::CoreError;
use trivia_core::pagination::require_page;
use trivia_core::types::DbId;
use trivia_db::models::lenient;
use trivia_db::models::question::CreateQuestion;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::query::PageParams;
use crate::response::{Envelope, QuestionPage};
use crate::state::AppState;

/// Body of `POST /questions`.
///
/// A non-empty `searchTerm` turns the request into a search; otherwise the
/// remaining fields describe a question to insert.
#[derive(Debug, Deserialize)]
pub struct QuestionPayload {
    #[serde(rename = "searchTerm", default, deserialize_with = "lenient::text")]
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub question: CreateQuestion,
}

impl QuestionPayload {
    /// The search term, if this payload is a search.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.is_empty())
    }
}

/// GET /questions?page=N
///
/// All questions in id order, sliced to the requested page. An empty page
/// (including any page past the end) is 404.
pub async fn list_questions(
    State(state): State<AppState>,
    params: PageParams,
) -> AppResult<impl IntoResponse> {
    let page = params.page();

    let questions = QuestionRepo::list(&state.pool)
        .await
        .map_err(AppError::read)?;
    require_page(&questions, page)?;

    let categories = CategoryRepo::list_types(&state.pool)
        .await
        .map_err(AppError::read)?;

    Ok(Json(Envelope::ok(QuestionPage::new(&questions, page, categories))))
}

/// DELETE /questions/{question_id}?page=N
///
/// Permanently delete a question, then return the refreshed listing.
/// 404 when the id does not exist or when no questions remain afterwards.
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
    params: PageParams,
) -> AppResult<impl IntoResponse> {
    QuestionRepo::find_by_id(&state.pool, question_id)
        .await
        .map_err(AppError::read)?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        }))?;

    let deleted = QuestionRepo::delete(&state.pool, question_id)
        .await
        .map_err(AppError::read)?;
    if !deleted {
        // Lost a race with a concurrent delete.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        }));
    }

    tracing::info!(question_id, "Question deleted");

    let questions = QuestionRepo::list(&state.pool)
        .await
        .map_err(AppError::read)?;
    if questions.is_empty() {
        return Err(AppError::NotFound("no questions remain".into()));
    }

    let categories = CategoryRepo::list_types(&state.pool)
        .await
        .map_err(AppError::read)?;

    let page = params.page();
    Ok(Json(Envelope::ok(QuestionPage::new(&questions, page, categories))))
}

/// POST /questions?page=N
///
/// With a non-empty `searchTerm`: case-insensitive substring search over the
/// question text; zero matches is still a success. Otherwise: insert the
/// question as given (no field validation) and return the full listing.
pub async fn add_or_search_question(
    State(state): State<AppState>,
    params: PageParams,
    AppJson(payload): AppJson<QuestionPayload>,
) -> AppResult<impl IntoResponse> {
    let page = params.page();

    let questions = match payload.search_term() {
        Some(term) => {
            let matches = QuestionRepo::search(&state.pool, term)
                .await
                .map_err(AppError::write)?;
            tracing::debug!(term, matches = matches.len(), "Question search");
            matches
        }
        None => {
            let created = QuestionRepo::create(&state.pool, &payload.question)
                .await
                .map_err(AppError::write)?;
            tracing::info!(
                question_id = created.id,
                category = ?created.category,
                "Question created",
            );
            QuestionRepo::list(&state.pool)
                .await
                .map_err(AppError::write)?
        }
    };

    let categories = CategoryRepo::list_types(&state.pool)
        .await
        .map_err(AppError::write)?;

    Ok(Json(Envelope::ok(QuestionPage::new(&questions, page, categories))))
}

/// GET /categories/{category_id}/questions?page=N
///
/// Questions whose category equals `category_id`. Negative ids and ids
/// above the fixed category count are 404; any other id, even one with no
/// questions, yields a successful (possibly empty) page. `total_questions` is the filtered count.
pub async fn list_questions_by_category(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
    params: PageParams,
) -> AppResult<impl IntoResponse> {
    check_category_bound(category_id)?;

    let questions = QuestionRepo::list_by_category(&state.pool, category_id)
        .await
        .map_err(AppError::read)?;

    let categories = CategoryRepo::list_types(&state.pool)
        .await
        .map_err(AppError::read)?;

    let page = params.page();
    Ok(Json(Envelope::ok(QuestionPage::new(&questions, page, categories))))
}
