//! Integration tests for the question and category repositories.
//!
//! Each test runs against a freshly migrated and seeded database.

use sqlx::PgPool;
use trivia_db::models::question::CreateQuestion;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

/// Number of questions inserted by the seed migration.
const SEEDED_QUESTIONS: i64 = 19;

fn new_question(text: &str, category: i64) -> CreateQuestion {
    CreateQuestion {
        question: Some(text.to_string()),
        answer: Some("answer".to_string()),
        category: Some(category),
        difficulty: Some(2),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_seeds_categories_and_questions(pool: PgPool) {
    trivia_db::health_check(&pool).await.unwrap();

    let types = CategoryRepo::list_types(&pool).await.unwrap();
    assert_eq!(
        types,
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );

    let categories = CategoryRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);

    assert_eq!(QuestionRepo::count(&pool).await.unwrap(), SEEDED_QUESTIONS);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_ordered_by_id(pool: PgPool) {
    let questions = QuestionRepo::list(&pool).await.unwrap();
    assert_eq!(questions.len() as i64, SEEDED_QUESTIONS);
    assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_category_filters_exactly(pool: PgPool) {
    let science = QuestionRepo::list_by_category(&pool, 1).await.unwrap();
    assert!(!science.is_empty());
    assert!(science.iter().all(|q| q.category == Some(1)));

    let nothing = QuestionRepo::list_by_category(&pool, 0).await.unwrap();
    assert!(nothing.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive(pool: PgPool) {
    let lower = QuestionRepo::search(&pool, "title").await.unwrap();
    let upper = QuestionRepo::search(&pool, "TITLE").await.unwrap();

    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
    for q in &lower {
        let text = q.question.as_deref().unwrap().to_lowercase();
        assert!(text.contains("title"), "unexpected match: {text}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    let hits = QuestionRepo::search(&pool, "%").await.unwrap();
    assert!(hits.is_empty(), "no seeded question contains a literal '%'");

    QuestionRepo::create(&pool, &new_question("Is 100% of the moon cheese?", 1))
        .await
        .unwrap();
    let hits = QuestionRepo::search(&pool, "100%").await.unwrap();
    assert_eq!(hits.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_find(pool: PgPool) {
    let created = QuestionRepo::create(&pool, &new_question("Who wrote Hamlet?", 4))
        .await
        .unwrap();

    let found = QuestionRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created question should exist");
    assert_eq!(found, created);
    assert_eq!(found.category, Some(4));
    assert_eq!(
        QuestionRepo::count(&pool).await.unwrap(),
        SEEDED_QUESTIONS + 1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_passes_nulls_through(pool: PgPool) {
    let created = QuestionRepo::create(&pool, &CreateQuestion::default())
        .await
        .unwrap();
    assert_eq!(created.question, None);
    assert_eq!(created.answer, None);
    assert_eq!(created.category, None);
    assert_eq!(created.difficulty, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let created = QuestionRepo::create(&pool, &new_question("Temporary?", 2))
        .await
        .unwrap();

    assert!(QuestionRepo::delete(&pool, created.id).await.unwrap());
    assert!(QuestionRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!QuestionRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_dto_accepts_form_style_json(pool: PgPool) {
    let input: CreateQuestion = serde_json::from_value(serde_json::json!({
        "question": "In what year was the first ever Wimbledon Championship held?",
        "answer": 1877,
        "category": "6",
        "difficulty": 3,
    }))
    .unwrap();

    let created = QuestionRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.answer.as_deref(), Some("1877"));
    assert_eq!(created.category, Some(6));
    assert_eq!(created.difficulty, Some(3));
}
