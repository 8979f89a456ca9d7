//! Quiz question selection.
//!
//! A quiz pool is every question in the requested category (or in all
//! categories) minus the ones the player has already seen. The next
//! question is drawn uniformly at random from what remains.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::ALL_CATEGORIES;
use crate::types::DbId;

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// Every question regardless of category.
    All,
    /// Questions whose category equals the given id.
    Category(DbId),
}

impl QuizScope {
    /// Map a requested category id to a scope; [`ALL_CATEGORIES`] selects everything.
    pub fn from_category_id(id: DbId) -> Self {
        if id == ALL_CATEGORIES {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }
}

/// Drop every candidate whose id appears in `previous`.
pub fn unseen<T>(candidates: Vec<T>, previous: &[DbId], id_of: impl Fn(&T) -> DbId) -> Vec<T> {
    candidates
        .into_iter()
        .filter(|c| !previous.contains(&id_of(c)))
        .collect()
}

/// Pick one element uniformly at random, or `None` when the pool is exhausted.
pub fn choose_next<T: Clone, R: Rng + ?Sized>(pool: &[T], rng: &mut R) -> Option<T> {
    pool.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn zero_category_means_all() {
        assert_eq!(QuizScope::from_category_id(0), QuizScope::All);
        assert_eq!(QuizScope::from_category_id(3), QuizScope::Category(3));
    }

    #[test]
    fn unseen_removes_previous_ids() {
        let pool = vec![1_i64, 2, 3, 4];
        assert_eq!(unseen(pool, &[2, 4, 99], |id| *id), vec![1, 3]);
    }

    #[test]
    fn unseen_keeps_everything_without_history() {
        let pool = vec![5_i64, 6];
        assert_eq!(unseen(pool, &[], |id| *id), vec![5, 6]);
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: Vec<i64> = Vec::new();
        assert_eq!(choose_next(&empty, &mut rng), None);
    }

    #[test]
    fn choice_comes_from_the_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = vec![10_i64, 20, 30];
        for _ in 0..50 {
            let picked = choose_next(&pool, &mut rng).unwrap();
            assert!(pool.contains(&picked));
        }
    }

    #[test]
    fn repeated_draws_exhaust_the_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let all = vec![1_i64, 2, 3, 4, 5];
        let mut seen = Vec::new();
        loop {
            let pool = unseen(all.clone(), &seen, |id| *id);
            match choose_next(&pool, &mut rng) {
                Some(id) => seen.push(id),
                None => break,
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, all);
    }
}
