//! Big-O annotations for every algorithm in the crate and its baseline.

use serde::Serialize;
use std::fmt;

/// Growth classes, declared from fastest- to slowest-growing.
///
/// `Ord` follows declaration order. It is only meaningful when comparing the
/// two sides of one algorithm's profile; classes over different measures
/// (e.g. `OutputLength` and `Product`) have no true ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Constant,
    Linear,
    /// Linear in the combined size of two inputs.
    LinearSum,
    /// Linear in the total length of the produced output.
    OutputLength,
    /// Product of two input sizes.
    Product,
    Quadratic,
    /// Quadratic in the total length of the produced output.
    OutputLengthSquared,
    Exponential,
}

impl Complexity {
    pub fn notation(&self) -> &'static str {
        match self {
            Complexity::Constant => "O(1)",
            Complexity::Linear => "O(n)",
            Complexity::LinearSum => "O(n + m)",
            Complexity::OutputLength => "O(L)",
            Complexity::Product => "O(n * m)",
            Complexity::Quadratic => "O(n^2)",
            Complexity::OutputLengthSquared => "O(L^2)",
            Complexity::Exponential => "O(2^n)",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    HasDuplicates,
    Intersect,
    Join,
    HasPairWithSum,
    FibonacciMemoized,
    FibonacciIterative,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::HasDuplicates,
        Algorithm::Intersect,
        Algorithm::Join,
        Algorithm::HasPairWithSum,
        Algorithm::FibonacciMemoized,
        Algorithm::FibonacciIterative,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::HasDuplicates => "has_duplicates",
            Algorithm::Intersect => "intersect",
            Algorithm::Join => "join",
            Algorithm::HasPairWithSum => "has_pair_with_sum",
            Algorithm::FibonacciMemoized => "fibonacci (memoized)",
            Algorithm::FibonacciIterative => "fibonacci (iterative)",
        }
    }

    /// Costs of the optimized implementation and of the anti-pattern it replaces.
    pub fn profile(&self) -> ComplexityProfile {
        use Complexity::*;

        let (time, space, naive_time, naive_space) = match self {
            Algorithm::HasDuplicates => (Linear, Linear, Quadratic, Constant),
            // the baseline's result buffer is scanned too, but it is bounded by n
            Algorithm::Intersect => (LinearSum, Linear, Product, Linear),
            Algorithm::Join => (OutputLength, OutputLength, OutputLengthSquared, OutputLength),
            Algorithm::HasPairWithSum => (Linear, Linear, Quadratic, Constant),
            Algorithm::FibonacciMemoized => (Linear, Linear, Exponential, Linear),
            Algorithm::FibonacciIterative => (Linear, Constant, Exponential, Linear),
        };

        ComplexityProfile {
            algorithm: *self,
            time,
            space,
            naive_time,
            naive_space,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityProfile {
    pub algorithm: Algorithm,
    pub time: Complexity,
    pub space: Complexity,
    pub naive_time: Complexity,
    pub naive_space: Complexity,
}

impl ComplexityProfile {
    pub fn improves_time(&self) -> bool {
        self.time < self.naive_time
    }
}

pub fn reference_table() -> Vec<ComplexityProfile> {
    Algorithm::ALL.iter().map(Algorithm::profile).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_beats_its_baseline_on_time() {
        for profile in reference_table() {
            assert!(
                profile.improves_time(),
                "{} does not improve on {}",
                profile.time,
                profile.naive_time
            );
        }
    }

    #[test]
    fn iterative_fibonacci_is_constant_space() {
        let profile = Algorithm::FibonacciIterative.profile();
        assert_eq!(profile.space, Complexity::Constant);
        assert_eq!(Algorithm::FibonacciMemoized.profile().space, Complexity::Linear);
    }

    #[test]
    fn notation_strings() {
        assert_eq!(Complexity::Quadratic.to_string(), "O(n^2)");
        assert_eq!(Complexity::LinearSum.to_string(), "O(n + m)");
    }

    #[test]
    fn table_lists_each_algorithm_once() {
        let table = reference_table();
        assert_eq!(table.len(), Algorithm::ALL.len());
        for (profile, algorithm) in table.iter().zip(Algorithm::ALL) {
            assert_eq!(profile.algorithm, algorithm);
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_value(Algorithm::HasPairWithSum.profile()).unwrap();
        assert_eq!(json["algorithm"], "has_pair_with_sum");
        assert_eq!(json["naive_time"], "quadratic");
    }
}
