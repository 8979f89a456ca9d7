use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use trivia_core::quiz::{choose_next, unseen, QuizScope};
use trivia_core::types::DbId;
use trivia_db::models::lenient;
use trivia_db::repositories::QuestionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{Envelope, QuizQuestion};
use crate::state::AppState;

/// Category selector sent by the quiz client (`{"id": 0, "type": "click"}`).
/// Only `id` is read.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    /// `0` selects every category.
    #[serde(deserialize_with = "lenient::required_int")]
    pub id: DbId,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    /// Ids of questions already asked in this quiz session.
    pub previous_questions: Vec<DbId>,
}

/// POST /quizzes
///
/// Return a random question from the requested category that is not in
/// `previous_questions`, or `question: null` once the pool is exhausted.
pub async fn quiz_next(
    State(state): State<AppState>,
    AppJson(request): AppJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let scope = QuizScope::from_category_id(request.quiz_category.id);

    let candidates = match scope {
        QuizScope::All => QuestionRepo::list(&state.pool).await,
        QuizScope::Category(id) => QuestionRepo::list_by_category(&state.pool, id).await,
    }
    .map_err(AppError::write)?;

    let remaining = unseen(candidates, &request.previous_questions, |q| q.id);
    let question = choose_next(&remaining, &mut rand::rng());

    tracing::debug!(
        ?scope,
        seen = request.previous_questions.len(),
        remaining = remaining.len(),
        question_id = question.as_ref().map(|q| q.id),
        "Quiz question selected",
    );

    Ok(Json(Envelope::ok(QuizQuestion { question })))
}
