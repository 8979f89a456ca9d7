//! Shared query parameter types for API handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use trivia_core::pagination::parse_page;

use crate::error::AppError;
use crate::extract::AppQuery;
use crate::state::AppState;

/// Page selector (`?page=N`) for question listings.
///
/// Kept as raw text so a non-integer value falls back to page 1 instead of
/// rejecting the request. When `page` is repeated the first value wins.
#[derive(Debug, Default)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// Pick the first `page` value out of decoded query pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value);
        Self { page }
    }

    /// The requested 1-based page.
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

impl FromRequestParts<AppState> for PageParams {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AppQuery(pairs) =
            AppQuery::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        Ok(Self::from_pairs(pairs))
    }
}
