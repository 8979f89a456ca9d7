//! Shared response envelope types for API handlers.
//!
//! Every successful response is `{ "success": true, ...payload }`. Use
//! [`Envelope::ok`] with one of the payload structs below instead of ad-hoc
//! `serde_json::json!` bodies.

use serde::Serialize;
use trivia_core::pagination::paginate;
use trivia_db::models::question::Question;

/// Standard `{ "success": bool, ...T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok(CategoryList { categories })))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload of `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

/// Paginated question listing shared by every question-returning endpoint.
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Size of the full (filtered) result set before slicing.
    pub total_questions: usize,
    /// Always `null`; category context is not tracked.
    pub current_category: Option<String>,
    pub categories: Vec<String>,
}

impl QuestionPage {
    /// Slice `all` to `page` and attach the totals and category names.
    pub fn new(all: &[Question], page: i64, categories: Vec<String>) -> Self {
        Self {
            questions: paginate(all, page).to_vec(),
            total_questions: all.len(),
            current_category: None,
            categories,
        }
    }
}

/// Payload of `POST /quizzes`. `question` is `null` once the pool is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub question: Option<Question>,
}

/// Payload of `GET /health`. Counts are `null` when storage is unreachable.
#[derive(Debug, Serialize)]
pub struct Readiness {
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub categories: Option<usize>,
    pub questions: Option<i64>,
}
