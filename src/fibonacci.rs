//! Fibonacci numbers, two ways.
//!
//! Plain recursion recomputes the same subproblems exponentially often.
//! Caching each result (memoization) or walking upward while keeping only
//! the last two values both make it linear.

use crate::error::{GuideError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Largest index whose Fibonacci number fits in a `u128`.
pub const MAX_FIBONACCI_INDEX: u32 = 186;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Recursive evaluation backed by a per-call [`MemoTable`].
    Memoized,
    /// Bottom-up loop over the last two values.
    #[default]
    Iterative,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Memoized, Strategy::Iterative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Memoized => "memoized",
            Strategy::Iterative => "iterative",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memoized" | "memo" => Ok(Strategy::Memoized),
            "iterative" | "iter" => Ok(Strategy::Iterative),
            other => Err(GuideError::invalid_argument(format!(
                "unknown fibonacci strategy '{}' (expected 'memoized' or 'iterative')",
                other
            ))),
        }
    }
}

/// Cache of already computed Fibonacci numbers keyed by index.
///
/// A table is meant to live for one top-level computation. Entries are
/// written once and never change afterwards.
#[derive(Debug, Default)]
pub struct MemoTable {
    values: FxHashMap<u32, u128>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, k: u32) -> Option<u128> {
        self.values.get(&k).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// F(n), filling the table with every subproblem on the way.
    ///
    /// Fails with [`GuideError::Overflow`] past [`MAX_FIBONACCI_INDEX`].
    pub fn fibonacci(&mut self, n: u32) -> Result<u128> {
        if n > MAX_FIBONACCI_INDEX {
            return Err(GuideError::Overflow { n: n as i64 });
        }
        Ok(self.fill(n))
    }

    fn fill(&mut self, n: u32) -> u128 {
        if n < 2 {
            return n as u128;
        }
        if let Some(value) = self.get(n) {
            trace!(n, "memo hit");
            return value;
        }

        let value = self.fill(n - 1) + self.fill(n - 2);
        self.values.entry(n).or_insert(value);
        value
    }
}

fn iterative(n: u32) -> u128 {
    if n == 0 {
        return 0;
    }
    // stop at F(n) itself so the largest index never computes F(n + 1)
    let (mut prev, mut curr) = (0u128, 1u128);
    for _ in 1..n {
        let next = prev + curr;
        prev = curr;
        curr = next;
    }
    curr
}

/// Computes F(n) with the requested strategy.
///
/// Fails with [`GuideError::InvalidArgument`] for negative `n` and with
/// [`GuideError::Overflow`] past [`MAX_FIBONACCI_INDEX`].
///
/// ```
/// use perf_guide::{fibonacci, Strategy};
///
/// assert_eq!(fibonacci(10, Strategy::Iterative).unwrap(), 55);
/// assert_eq!(fibonacci(10, Strategy::Memoized).unwrap(), 55);
/// assert!(fibonacci(-1, Strategy::Iterative).is_err());
/// ```
pub fn fibonacci(n: i64, strategy: Strategy) -> Result<u128> {
    if n < 0 {
        return Err(GuideError::invalid_argument(format!(
            "n must be non-negative, got {}",
            n
        )));
    }
    let index = u32::try_from(n)
        .ok()
        .filter(|&k| k <= MAX_FIBONACCI_INDEX)
        .ok_or(GuideError::Overflow { n })?;

    debug!(n = index, %strategy, "computing fibonacci");
    let value = match strategy {
        Strategy::Memoized => MemoTable::new().fibonacci(index)?,
        Strategy::Iterative => iterative(index),
    };
    Ok(value)
}
