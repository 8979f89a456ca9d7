pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;
