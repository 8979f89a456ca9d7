use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::response::{Envelope, Readiness};
use crate::state::AppState;

/// GET /health
///
/// Whether the trivia data can be served right now. 200 with the category
/// and question counts when storage answers; 503 with `success: false` and
/// null counts when it does not.
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");

    let counts = tokio::try_join!(
        CategoryRepo::list_types(&state.pool),
        QuestionRepo::count(&state.pool),
    );

    match counts {
        Ok((categories, questions)) => (
            StatusCode::OK,
            Json(Envelope::ok(Readiness {
                version,
                categories: Some(categories.len()),
                questions: Some(questions),
            })),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Envelope {
                    success: false,
                    data: Readiness {
                        version,
                        categories: None,
                        questions: None,
                    },
                }),
            )
        }
    }
}
