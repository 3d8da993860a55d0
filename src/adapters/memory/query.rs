//! Shared list-read helpers for the in-memory repositories.
//!
//! The doubles must reproduce the exact filter/sort/paginate semantics
//! of the PostgreSQL adapter; these helpers keep that logic in one
//! place.

use std::cmp::Ordering;

use crate::domain::foundation::SortOrder;

/// Applies the sort direction and breaks ties deterministically so
/// chunked pagination always reproduces one full enumeration.
///
/// `primary` compares the sort field; `tie_break` must be a total
/// order (the entity id).
pub fn ordered<F, G, T>(mut items: Vec<T>, order: SortOrder, primary: F, tie_break: G) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
    G: Fn(&T, &T) -> Ordering,
{
    items.sort_by(|a, b| {
        let cmp = match order {
            SortOrder::Asc => primary(a, b),
            SortOrder::Desc => primary(b, a),
        };
        cmp.then_with(|| tie_break(a, b))
    });
    items
}

/// Skips `offset` items of the sorted, filtered sequence and keeps at
/// most `limit`.
pub fn paginate<T>(items: Vec<T>, offset: u64, limit: u64) -> Vec<T> {
    items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

/// Case-insensitive substring match.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
