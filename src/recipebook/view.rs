//! # View Projection
//!
//! The listing a user sees is never stored on its own. It is recomputed from the
//! canonical collection and the current search term every time either one changes,
//! so it cannot drift out of date.
//!
//! Matching rules:
//! - Only `ingredients` is searched.
//! - Both sides are lowercased before a plain substring test.
//! - A term that is empty or only whitespace selects everything.
//! - Non-blank terms are used as typed (no trimming), matching live input.
//! - Collection order is kept.

use crate::model::Record;

/// Derive the visible subset of `collection` for `term`.
pub fn project(collection: &[Record], term: &str) -> Vec<Record> {
    if term.trim().is_empty() {
        return collection.to_vec();
    }

    let needle = term.to_lowercase();
    collection
        .iter()
        .filter(|record| record.ingredients.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Whether `record` would appear in the projection for `term`.
pub fn matches(record: &Record, term: &str) -> bool {
    term.trim().is_empty() || record.ingredients.to_lowercase().contains(&term.to_lowercase())
}
