//! The fixed category taxonomy.

use crate::error::CoreError;
use crate::types::DbId;

/// Number of seeded categories. Category ids are expected in `1..=TOTAL_CATEGORIES`.
pub const TOTAL_CATEGORIES: DbId = 6;

/// Quiz category id meaning "questions from every category".
pub const ALL_CATEGORIES: DbId = 0;

/// Reject category ids outside `0..=TOTAL_CATEGORIES`.
///
/// This is a numeric bound only: `0` and ids with no rows pass and simply
/// match nothing. Negative ids never name a category and are rejected.
pub fn check_category_bound(id: DbId) -> Result<(), CoreError> {
    if !(0..=TOTAL_CATEGORIES).contains(&id) {
        return Err(CoreError::CategoryOutOfRange {
            id,
            max: TOTAL_CATEGORIES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn ids_within_bound_pass() {
        for id in 1..=TOTAL_CATEGORIES {
            assert!(check_category_bound(id).is_ok());
        }
    }

    #[test]
    fn zero_is_not_rejected() {
        assert!(check_category_bound(0).is_ok());
    }

    #[test]
    fn ids_above_bound_fail() {
        assert_matches!(
            check_category_bound(10),
            Err(CoreError::CategoryOutOfRange { id: 10, max: 6 })
        );
        assert!(check_category_bound(7).is_err());
    }

    #[test]
    fn negative_ids_fail() {
        assert_matches!(
            check_category_bound(-1),
            Err(CoreError::CategoryOutOfRange { id: -1, max: 6 })
        );
    }
}
