//! Repository for the `questions` table.

use sqlx::PgPool;
use trivia_core::search::build_like_pattern;
use trivia_core::types::DbId;

use crate::models::question::{CreateQuestion, Question};

/// Column list for questions queries.
const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides create, read and delete operations for questions.
///
/// Questions are never updated in place. List methods return full ordered
/// result sets; callers slice them into pages.
pub struct QuestionRepo;

impl QuestionRepo {
    /// List all questions, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// List questions in one category, ordered by id ascending.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over the question text, ordered by id.
    ///
    /// An empty term matches every question.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let Some(pattern) = build_like_pattern(term) else {
            return Self::list(pool).await;
        };
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE question ILIKE $1 ESCAPE '\\'
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Find a question by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all questions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }

    /// Insert a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
