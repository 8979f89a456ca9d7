use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use trivia_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// `sqlx::Error` has no `From` impl; classify it with [`AppError::read`] or
/// [`AppError::write`]. The string payloads are for logs only; clients
/// always receive the fixed message for the status code (see
/// [`public_message`]).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trivia_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A missing resource, route or page.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A request payload that is missing, malformed or could not be stored.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// A bad request with a human-readable cause.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable cause.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify a storage failure on a read endpoint. Reads surface as 404.
    pub fn read(err: sqlx::Error) -> Self {
        tracing::warn!(error = %err, "Read failed, responding 404");
        AppError::NotFound(err.to_string())
    }

    /// Classify a storage failure on a write endpoint. Writes surface as 422.
    pub fn write(err: sqlx::Error) -> Self {
        tracing::warn!(error = %err, "Write failed, responding 422");
        AppError::Unprocessable(err.to_string())
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(
                CoreError::NotFound { .. }
                | CoreError::PageOutOfRange { .. }
                | CoreError::CategoryOutOfRange { .. },
            ) => StatusCode::NOT_FOUND,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The client-facing message for an error status.
pub fn public_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request, try again",
        StatusCode::NOT_FOUND => "request not found",
        StatusCode::UNPROCESSABLE_ENTITY => "cannot process request",
        _ => "internal server error",
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: public_message(status),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
