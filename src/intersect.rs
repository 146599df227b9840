use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Elements present in both `a` and `b`, each reported once.
///
/// `b` is hashed once up front and `a` is scanned once, so the cost is
/// O(n + m) instead of rescanning `b` for every element of `a`. Results come
/// out in order of first appearance in `a`.
///
/// ```
/// use perf_guide::intersect;
///
/// assert_eq!(intersect(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// ```
pub fn intersect<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let lookup: FxHashSet<&T> = b.iter().collect();
    let mut emitted: FxHashSet<&T> = FxHashSet::default();

    a.iter()
        .filter(|item| lookup.contains(item) && emitted.insert(*item))
        .cloned()
        .collect()
}
