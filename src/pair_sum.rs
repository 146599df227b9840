//! Two-sum lookup.
//!
//! Enumerating every pair is O(n²). Scanning once while remembering the
//! values already seen turns each step into a constant-time question: has
//! the complement `target - x` shown up earlier?

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Integer types usable by the pair-sum finder.
///
/// `complement` returns `None` when `target - value` does not fit in the
/// type; no element of the type can complete the pair in that case.
pub trait Complement: Copy + Eq + Hash {
    fn complement(target: Self, value: Self) -> Option<Self>;
}

macro_rules! impl_complement {
    ($($t:ty),* $(,)?) => {
        $(
            impl Complement for $t {
                #[inline]
                fn complement(target: Self, value: Self) -> Option<Self> {
                    target.checked_sub(value)
                }
            }
        )*
    };
}

impl_complement!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Returns `true` if two elements at different positions sum to `target`.
///
/// An element never pairs with itself: `[5]` with target `10` is `false`,
/// while `[5, 5]` is `true`.
///
/// ```
/// use perf_guide::has_pair_with_sum;
///
/// assert!(has_pair_with_sum(&[2, 7, 11, 15], 9));
/// assert!(!has_pair_with_sum(&[1, 2, 3], 10));
/// ```
pub fn has_pair_with_sum<T: Complement>(sequence: &[T], target: T) -> bool {
    find_pair_with_sum(sequence, target).is_some()
}

/// Indices `(i, j)` with `i < j` of the first pair completed during the scan.
///
/// `j` is the smallest index that completes any pair; `i` is the earliest
/// position holding its complement.
pub fn find_pair_with_sum<T: Complement>(sequence: &[T], target: T) -> Option<(usize, usize)> {
    if sequence.len() < 2 {
        return None;
    }

    // value -> first index it was seen at
    let mut seen: FxHashMap<T, usize> =
        FxHashMap::with_capacity_and_hasher(sequence.len(), Default::default());

    for (j, &value) in sequence.iter().enumerate() {
        if let Some(wanted) = T::complement(target, value) {
            if let Some(&i) = seen.get(&wanted) {
                return Some((i, j));
            }
        }
        seen.entry(value).or_insert(j);
    }

    None
}
