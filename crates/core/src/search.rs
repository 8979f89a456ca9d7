//! Question text search helpers.

/// Escape character used in generated `ILIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Build a case-insensitive substring pattern for `ILIKE`.
///
/// `%` and `_` in the term are escaped so they match literally. Returns
/// `None` for an empty term, which callers treat as "not a search".
///
/// # Examples
///
/// ```
/// use trivia_core::search::build_like_pattern;
/// assert_eq!(build_like_pattern("title"), Some("%title%".to_string()));
/// assert_eq!(build_like_pattern("100%"), Some("%100\\%%".to_string()));
/// assert_eq!(build_like_pattern(""), None);
/// ```
pub fn build_like_pattern(term: &str) -> Option<String> {
    if term.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_term_in_wildcards() {
        assert_eq!(build_like_pattern("Title").as_deref(), Some("%Title%"));
    }

    #[test]
    fn escapes_wildcards_and_backslash() {
        assert_eq!(build_like_pattern("a_b").as_deref(), Some("%a\\_b%"));
        assert_eq!(build_like_pattern("a\\b").as_deref(), Some("%a\\\\b%"));
    }

    #[test]
    fn whitespace_is_a_valid_term() {
        assert_eq!(build_like_pattern(" ").as_deref(), Some("% %"));
    }

    #[test]
    fn empty_term_is_not_a_search() {
        assert_eq!(build_like_pattern(""), None);
    }
}
