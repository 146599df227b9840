//! Scenario runner and optimized-vs-naive timing comparison.

use crate::complexity::{Algorithm, ComplexityProfile};
use crate::config::GuideConfig;
use crate::error::Result;
use crate::fibonacci::{fibonacci, Strategy};
use crate::{duplicates, intersect, join, naive, pair_sum};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Index used when timing naive recursion; larger values take seconds.
pub const COMPARE_FIBONACCI_INDEX: u32 = 24;

// ============================================================================
// Scenarios
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub call: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

impl ScenarioOutcome {
    fn new(name: &str, call: String, expected: String, actual: String) -> Self {
        let passed = expected == actual;
        Self {
            name: name.to_string(),
            call,
            expected,
            actual,
            passed,
        }
    }
}

/// Runs the worked examples for every algorithm.
pub fn run_scenarios(config: &GuideConfig) -> Result<Vec<ScenarioOutcome>> {
    let mut outcomes = Vec::new();
    let d = &config.delimiter;

    for (input, expected) in [(vec![1, 2, 3, 2], true), (vec![1, 2, 3], false)] {
        outcomes.push(ScenarioOutcome::new(
            "duplicates",
            format!("has_duplicates({:?})", input),
            expected.to_string(),
            duplicates::has_duplicates(&input).to_string(),
        ));
    }

    let mut common = intersect::intersect(&[1, 2, 3], &[2, 3, 4]);
    common.sort_unstable();
    outcomes.push(ScenarioOutcome::new(
        "intersect",
        "intersect([1, 2, 3], [2, 3, 4])".to_string(),
        format!("{:?}", [2, 3]),
        format!("{:?}", common),
    ));

    outcomes.push(ScenarioOutcome::new(
        "join",
        format!("join([1, 2, 3], {:?})", d),
        format!("1{d}2{d}3"),
        join::join(&[1, 2, 3], d),
    ));

    for (input, target, expected) in [(vec![2, 7, 11, 15], 9, true), (vec![1, 2, 3], 10, false)] {
        outcomes.push(ScenarioOutcome::new(
            "pair_sum",
            format!("has_pair_with_sum({:?}, {})", input, target),
            expected.to_string(),
            pair_sum::has_pair_with_sum(&input, target).to_string(),
        ));
    }

    for (n, strategy, expected) in [
        (10, Strategy::Iterative, 55u128),
        (0, Strategy::Memoized, 0),
        (1, Strategy::Memoized, 1),
    ] {
        outcomes.push(ScenarioOutcome::new(
            "fibonacci",
            format!("fibonacci({}, {})", n, strategy),
            expected.to_string(),
            fibonacci(n, strategy)?.to_string(),
        ));
    }

    let failed = outcomes.iter().filter(|o| !o.passed).count();
    info!(total = outcomes.len(), failed, "scenarios finished");
    Ok(outcomes)
}

// ============================================================================
// Timing comparison
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub algorithm: Algorithm,
    pub input_size: usize,
    pub optimized_micros: f64,
    pub naive_micros: f64,
    /// `naive / optimized`; above 1.0 means the optimized version won.
    pub speedup: f64,
    /// Whether both implementations produced the same answer.
    pub agree: bool,
    pub complexity: ComplexityProfile,
}

/// Fastest of `rounds` runs (at least one), plus the value from the last run.
fn best_of<R>(rounds: u32, mut f: impl FnMut() -> R) -> (Duration, R) {
    let start = Instant::now();
    let mut value = black_box(f());
    let mut best = start.elapsed();

    for _ in 1..rounds {
        let start = Instant::now();
        value = black_box(f());
        best = best.min(start.elapsed());
    }
    (best, value)
}

fn comparison<R: PartialEq>(
    algorithm: Algorithm,
    input_size: usize,
    rounds: u32,
    optimized: impl FnMut() -> R,
    baseline: impl FnMut() -> R,
) -> Comparison {
    let (fast, fast_value) = best_of(rounds, optimized);
    let (slow, slow_value) = best_of(rounds, baseline);

    let optimized_micros = fast.as_secs_f64() * 1e6;
    let naive_micros = slow.as_secs_f64() * 1e6;
    let speedup = if optimized_micros > 0.0 {
        naive_micros / optimized_micros
    } else {
        f64::INFINITY
    };

    debug!(%algorithm, input_size, optimized_micros, naive_micros, "timed");
    Comparison {
        algorithm,
        input_size,
        optimized_micros,
        naive_micros,
        speedup,
        agree: fast_value == slow_value,
        complexity: algorithm.profile(),
    }
}

/// Distinct values in shuffled order; the worst case for early-exit scans.
pub fn distinct_input(size: usize, rng: &mut StdRng) -> Vec<i64> {
    let mut values: Vec<i64> = (0..size as i64).collect();
    values.shuffle(rng);
    values
}

/// Times every optimized algorithm against its naive baseline.
pub fn compare(config: &GuideConfig) -> Result<Vec<Comparison>> {
    config.validate()?;

    let size = config.compare_size;
    let rounds = config.compare_rounds;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let a = distinct_input(size, &mut rng);
    // half of `b` overlaps with `a`
    let b: Vec<i64> = distinct_input(size, &mut rng)
        .into_iter()
        .map(|x| x + size as i64 / 2)
        .collect();
    // no pair of non-negative values reaches a negative target
    let unreachable = -1i64;
    let fib_n = COMPARE_FIBONACCI_INDEX;

    info!(size, rounds, seed = config.seed, "running comparisons");

    let results = vec![
        comparison(
            Algorithm::HasDuplicates,
            size,
            rounds,
            || duplicates::has_duplicates(&a),
            || naive::has_duplicates(&a),
        ),
        comparison(
            Algorithm::Intersect,
            size,
            rounds,
            || intersect::intersect(&a, &b),
            || naive::intersect(&a, &b),
        ),
        comparison(
            Algorithm::Join,
            size,
            rounds,
            || join::join(&a, &config.delimiter),
            || naive::join(&a, &config.delimiter),
        ),
        comparison(
            Algorithm::HasPairWithSum,
            size,
            rounds,
            || pair_sum::has_pair_with_sum(&a, unreachable),
            || naive::has_pair_with_sum(&a, unreachable),
        ),
        comparison(
            Algorithm::FibonacciMemoized,
            fib_n as usize,
            rounds,
            || fibonacci(fib_n as i64, Strategy::Memoized).ok(),
            || Some(naive::fibonacci(fib_n)),
        ),
        comparison(
            Algorithm::FibonacciIterative,
            fib_n as usize,
            rounds,
            || fibonacci(fib_n as i64, Strategy::Iterative).ok(),
            || Some(naive::fibonacci(fib_n)),
        ),
    ];

    Ok(results)
}
