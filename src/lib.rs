//! Reference algorithms from the performance optimization guide.
//!
//! Five small, pure functions, each the fast answer to a classic slow
//! pattern:
//!
//! - [`has_duplicates`]: a hash set instead of nested loops
//! - [`intersect`]: hash one side instead of rescanning it
//! - [`join`]: one growable buffer instead of repeated concatenation
//! - [`has_pair_with_sum`]: look up complements instead of enumerating pairs
//! - [`fibonacci`]: memoized or iterative instead of plain recursion
//!
//! The slow versions live in [`naive`] for comparison, and [`harness`] times
//! one against the other.

pub mod complexity;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod fibonacci;
pub mod harness;
pub mod intersect;
pub mod join;
pub mod naive;
pub mod pair_sum;

pub use complexity::{reference_table, Algorithm, Complexity, ComplexityProfile};
pub use config::GuideConfig;
pub use duplicates::{first_duplicate, has_duplicates, has_duplicates_by_count};
pub use error::{GuideError, Result};
pub use fibonacci::{fibonacci, MemoTable, Strategy, MAX_FIBONACCI_INDEX};
pub use intersect::intersect;
pub use join::join;
pub use pair_sum::{find_pair_with_sum, has_pair_with_sum, Complement};
