//! Duplicate detection in a single pass.
//!
//! The nested-loop version compares every pair of positions and costs
//! O(n²). Remembering what has already been seen in a hash set brings it
//! down to O(n) expected time at the price of O(n) extra space.

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Returns `true` if at least two positions of `sequence` hold equal elements.
///
/// Stops at the first repeated element.
///
/// ```
/// use perf_guide::has_duplicates;
///
/// assert!(has_duplicates(&[1, 2, 3, 2]));
/// assert!(!has_duplicates(&[1, 2, 3]));
/// ```
pub fn has_duplicates<T: Eq + Hash>(sequence: &[T]) -> bool {
    first_duplicate(sequence).is_some()
}

/// Same contract as [`has_duplicates`], written as "build the set, compare sizes".
///
/// Always scans the whole input, so it never short-circuits.
pub fn has_duplicates_by_count<T: Eq + Hash>(sequence: &[T]) -> bool {
    let distinct: FxHashSet<&T> = sequence.iter().collect();
    distinct.len() < sequence.len()
}

/// Returns the element whose second occurrence comes earliest in `sequence`.
pub fn first_duplicate<T: Eq + Hash>(sequence: &[T]) -> Option<&T> {
    let mut seen = FxHashSet::with_capacity_and_hasher(sequence.len(), Default::default());
    // insert() reports false when the element is already present
    sequence.iter().find(|&item| !seen.insert(item))
}
