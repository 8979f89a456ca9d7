//! Question model and create DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::types::DbId;

use super::lenient;

/// A row from the `questions` table.
///
/// Every column except `id` is nullable: inserts store whatever the client
/// sent, including nothing.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}

/// DTO for inserting a question. Fields are passed through unvalidated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestion {
    #[serde(default, deserialize_with = "lenient::text")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub category: Option<DbId>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub difficulty: Option<i32>,
}
