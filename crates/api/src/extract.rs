//! Extractors whose rejections render as [`AppError`] envelopes.
//!
//! axum's stock `Json`, `Path` and `Query` reject with plain-text 400/415/422
//! responses. These wrappers keep the extraction logic and route the
//! rejection through `AppError` instead: an unreadable body becomes a 422,
//! an unparseable path segment a 404 and an undecodable query string a 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Missing, non-JSON or wrongly shaped bodies are 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. A segment that does not parse (e.g. `/questions/abc`) is 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string. A query that does not deserialize into `T` is 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
