//! The slow versions.
//!
//! Each function here is the anti-pattern its optimized counterpart replaces.
//! They serve as test oracles and as the baselines timed by the comparison
//! harness and the benchmarks.

// ============================================================================
// Nested loops: compare every pair
// ============================================================================

pub fn has_duplicates<T: PartialEq>(sequence: &[T]) -> bool {
    for i in 0..sequence.len() {
        for j in (i + 1)..sequence.len() {
            if sequence[i] == sequence[j] {
                return true;
            }
        }
    }
    false
}

// ============================================================================
// Repeated search: rescan `b` for every element of `a`
// ============================================================================

pub fn intersect<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    for item in a {
        if b.contains(item) && !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}

// ============================================================================
// String concatenation in a loop: a fresh string every iteration
// ============================================================================

pub fn join<T: std::fmt::Display>(sequence: &[T], delimiter: &str) -> String {
    let mut out = String::new();
    for (i, item) in sequence.iter().enumerate() {
        // copies everything built so far, every time
        out = if i == 0 {
            format!("{}", item)
        } else {
            format!("{}{}{}", out, delimiter, item)
        };
    }
    out
}

// ============================================================================
// Enumerate all pairs
// ============================================================================

pub fn has_pair_with_sum(sequence: &[i64], target: i64) -> bool {
    for i in 0..sequence.len() {
        for j in (i + 1)..sequence.len() {
            if sequence[i].checked_add(sequence[j]) == Some(target) {
                return true;
            }
        }
    }
    false
}

// ============================================================================
// Recursion without a cache
// ============================================================================

/// Exponential time; keep `n` small.
pub fn fibonacci(n: u32) -> u128 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}
