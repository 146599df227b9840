use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use itertools::Itertools;
use perf_guide::harness::{self, Comparison, ScenarioOutcome};
use perf_guide::{fibonacci, reference_table, ComplexityProfile, GuideConfig, Strategy};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, trace};

#[derive(Parser)]
#[command(name = "perf-guide")]
#[command(about = "Run and time the performance guide's reference algorithms", long_about = None)]
struct Cli {
    /// Increase log verbosity (info by default, -v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML file with run settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the worked examples and check their results
    Scenarios,
    /// Time each algorithm against its naive baseline
    Compare {
        /// Input size, overriding the config file
        #[arg(short, long)]
        size: Option<usize>,
    },
    /// Compute the n-th Fibonacci number
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// memoized or iterative; defaults to the configured strategy
        #[arg(short, long)]
        strategy: Option<Strategy>,
    },
    /// Print the Big-O reference table
    Complexity,
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_scenarios(outcomes: &[ScenarioOutcome]) {
    println!("{}", "Scenarios".bold());
    for outcome in outcomes {
        let mark = if outcome.passed {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        println!("  [{}] {} = {}", mark, outcome.call, outcome.actual);
        if !outcome.passed {
            println!("         expected {}", outcome.expected.yellow());
        }
    }
}

fn print_comparisons(results: &[Comparison]) {
    println!(
        "{:<24} {:>8} {:>14} {:>14} {:>10}  {}",
        "algorithm".bold(),
        "n".bold(),
        "optimized (us)".bold(),
        "naive (us)".bold(),
        "speedup".bold(),
        "big-o".bold()
    );
    for r in results {
        let speedup = format!("{:.1}x", r.speedup);
        let speedup = if r.speedup >= 1.0 {
            speedup.green()
        } else {
            speedup.red()
        };
        println!(
            "{:<24} {:>8} {:>14.1} {:>14.1} {:>10}  {} vs {}",
            r.algorithm.name(),
            r.input_size,
            r.optimized_micros,
            r.naive_micros,
            speedup,
            r.complexity.time,
            r.complexity.naive_time,
        );
        if !r.agree {
            println!("  {}", "results differ from the baseline".red());
        }
    }
}

fn print_reference_table(table: &[ComplexityProfile]) {
    println!(
        "{:<24} {:>10} {:>10} {:>12} {:>12}",
        "algorithm".bold(),
        "time".bold(),
        "space".bold(),
        "naive time".bold(),
        "naive space".bold()
    );
    for p in table {
        println!(
            "{:<24} {:>10} {:>10} {:>12} {:>12}",
            p.algorithm.name(),
            p.time.to_string(),
            p.space.to_string(),
            p.naive_time.to_string(),
            p.naive_space.to_string()
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let config = GuideConfig::load_or_default(cli.config.as_deref())?;
    debug!(?config, "effective config");

    match cli.command {
        Commands::Scenarios => {
            let outcomes = harness::run_scenarios(&config)?;
            if cli.json {
                print_json(&outcomes)?;
            } else {
                print_scenarios(&outcomes);
            }

            let failed: Vec<&ScenarioOutcome> = outcomes.iter().filter(|o| !o.passed).collect();
            if !failed.is_empty() {
                bail!(
                    "{} scenario(s) failed: {}",
                    failed.len(),
                    failed.iter().map(|o| &o.call).join(", ")
                );
            }
        }
        Commands::Compare { size } => {
            let config = match size {
                Some(size) => config.with_compare_size(size),
                None => config,
            };
            let results = harness::compare(&config).context("comparison run failed")?;
            if cli.json {
                print_json(&results)?;
            } else {
                print_comparisons(&results);
            }
        }
        Commands::Fib { n, strategy } => {
            let strategy = strategy.unwrap_or(config.strategy);
            let value = fibonacci(n, strategy)
                .with_context(|| format!("cannot compute fibonacci({})", n))?;
            if cli.json {
                print_json(&serde_json::json!({
                    "n": n,
                    "strategy": strategy,
                    "value": value.to_string(),
                }))?;
            } else {
                println!("fibonacci({}) = {} ({})", n, value.to_string().green(), strategy);
            }
        }
        Commands::Complexity => {
            let table = reference_table();
            if cli.json {
                print_json(&table)?;
            } else {
                print_reference_table(&table);
            }
        }
    }

    Ok(())
}
