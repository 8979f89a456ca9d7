//! Fixed-size page slicing shared by every list endpoint.
//!
//! Pages are 1-based. Slicing never fails by itself: a page past the end
//! (or below 1) is simply empty, and callers decide whether an empty page
//! is an error.

use crate::error::CoreError;

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the request does not carry a usable `page` value.
pub const DEFAULT_PAGE: i64 = 1;

/// Interpret a raw `page` query value.
///
/// Missing or non-integer input falls back to [`DEFAULT_PAGE`].
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Return the `page`-th slice of `items`.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }
    let Some(start) = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// Like [`paginate`], but treats an empty page as [`CoreError::PageOutOfRange`].
pub fn require_page<T>(items: &[T], page: i64) -> Result<&[T], CoreError> {
    let slice = paginate(items, page);
    if slice.is_empty() {
        return Err(CoreError::PageOutOfRange { page });
    }
    Ok(slice)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
