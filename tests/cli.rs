//! Integration tests for the perf-guide binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn perf_guide() -> Command {
    Command::cargo_bin("perf-guide").unwrap()
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be valid JSON")
}

#[test]
fn test_help_lists_subcommands() {
    perf_guide()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scenarios"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("fib"))
        .stdout(predicate::str::contains("complexity"));
}

mod fib {
    use super::*;

    #[test]
    fn test_fib_prints_value() {
        perf_guide()
            .args(["fib", "10"])
            .assert()
            .success()
            .stdout(predicate::str::contains("fibonacci(10) = "))
            .stdout(predicate::str::contains("55"));
    }

    #[test]
    fn test_fib_negative_index_fails() {
        perf_guide()
            .args(["fib", "-1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("n must be non-negative"));
    }

    #[test]
    fn test_fib_overflow_fails() {
        perf_guide()
            .args(["fib", "187", "--strategy", "memoized"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not fit in 128 bits"));
    }

    #[test]
    fn test_fib_unknown_strategy_rejected() {
        perf_guide()
            .args(["fib", "5", "--strategy", "recursive"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown fibonacci strategy"));
    }

    #[test]
    fn test_fib_json() {
        let json = json_stdout(perf_guide().args(["fib", "20", "--strategy", "memo", "--json"]));
        assert_eq!(json["n"], 20);
        assert_eq!(json["strategy"], "memoized");
        assert_eq!(json["value"], "6765");
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_scenarios_all_pass() {
        perf_guide()
            .arg("scenarios")
            .assert()
            .success()
            .stdout(predicate::str::contains("PASS"))
            .stdout(predicate::str::contains("FAIL").not());
    }

    #[test]
    fn test_scenarios_json() {
        let json = json_stdout(perf_guide().args(["scenarios", "--json"]));
        let outcomes = json.as_array().unwrap();

        assert_eq!(outcomes.len(), 9);
        assert!(outcomes.iter().all(|o| o["passed"] == true));
    }
}

#[test]
fn test_compare_json_agrees_with_baselines() {
    let json = json_stdout(perf_guide().args(["compare", "--size", "50", "--json"]));
    let results = json.as_array().unwrap();

    assert_eq!(results.len(), 6);
    for result in results {
        assert_eq!(result["agree"], true, "{}", result["algorithm"]);
    }
    assert_eq!(results[0]["input_size"], 50);
}

#[test]
fn test_complexity_table() {
    perf_guide()
        .arg("complexity")
        .assert()
        .success()
        .stdout(predicate::str::contains("has_pair_with_sum"))
        .stdout(predicate::str::contains("O(n^2)"));

    let json = json_stdout(perf_guide().args(["complexity", "--json"]));
    assert_eq!(json.as_array().unwrap().len(), 6);
}

mod config {
    use super::*;

    #[test]
    fn test_config_delimiter_used_by_scenarios() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guide.toml");
        fs::write(&path, "delimiter = \" | \"\n").unwrap();

        let json = json_stdout(
            perf_guide()
                .arg("--config")
                .arg(&path)
                .args(["scenarios", "--json"]),
        );
        let join = json
            .as_array()
            .unwrap()
            .iter()
            .find(|o| o["name"] == "join")
            .unwrap();
        assert_eq!(join["actual"], "1 | 2 | 3");
    }

    #[test]
    fn test_config_strategy_is_default_for_fib() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guide.toml");
        fs::write(&path, "strategy = \"memoized\"\n").unwrap();

        let json = json_stdout(
            perf_guide()
                .arg("--config")
                .arg(&path)
                .args(["fib", "7", "--json"]),
        );
        assert_eq!(json["strategy"], "memoized");
        assert_eq!(json["value"], "13");
    }

    #[test]
    fn test_missing_config_fails() {
        let dir = TempDir::new().unwrap();
        perf_guide()
            .arg("--config")
            .arg(dir.path().join("absent.toml"))
            .arg("complexity")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load config"));
    }

    #[test]
    fn test_malformed_config_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guide.toml");
        fs::write(&path, "threads = 4\n").unwrap();

        perf_guide()
            .arg("--config")
            .arg(&path)
            .arg("complexity")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load config"));
    }
}
