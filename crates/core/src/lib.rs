//! Domain logic for the trivia service.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates build on it.

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod quiz;
pub mod search;
pub mod types;
