//! SeatPlan Headless Seating Harness
//!
//! Runs the seat assignment pipeline in-process and prints the resulting
//! passenger → seat mapping, or sweeps many seeds and audits every run.
//! No rendering — the mapping is the hand-off point for any front end.
//!
//! Usage:
//!   cargo run -p seatplan-simtest
//!   cargo run -p seatplan-simtest -- --passengers 120 --seed 7
//!   cargo run -p seatplan-simtest -- --config cabin.toml --json
//!   cargo run -p seatplan-simtest -- --sweep 200 --verbose

mod logger;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use seatplan_logic::audit::audit_chart;
use seatplan_logic::config::SimulationConfig;
use seatplan_logic::report::{build_report, SeatingReport};
use seatplan_logic::simulation::run_simulation;
use seatplan_logic::{SeatingChart, SeatingError};

#[derive(Parser, Debug)]
#[command(
    name = "seatplan-simtest",
    version,
    about = "Seat passengers and print or audit the mapping"
)]
struct Cli {
    /// Number of passengers to seat (overrides the config file).
    #[arg(short, long)]
    passengers: Option<usize>,

    /// Random seed; omit for a fresh seed from system entropy.
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with total_seats, first_class_count, max_arrival_time, ...
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the report (including the mapping) as JSON.
    #[arg(long)]
    json: bool,

    /// Run N consecutive seeds and audit each result instead of printing a mapping.
    #[arg(long, value_name = "N")]
    sweep: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "resolved configuration");

    if let Some(runs) = cli.sweep {
        let results = sweep(&config, runs);
        let failed = print_summary(&results, cli.verbose);
        if failed > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    let chart = run_simulation(&config).context("seating run failed")?;
    let report = build_report(&chart);
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print_chart(&config, &chart, &report);
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(passengers) = cli.passengers {
        config.passenger_count = passengers;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.ensure_valid()?;
    Ok(config)
}

// ── Single run output ───────────────────────────────────────────────────

fn print_chart(config: &SimulationConfig, chart: &SeatingChart, report: &SeatingReport) {
    let seed = config
        .seed
        .map_or_else(|| "entropy".to_string(), |s| s.to_string());
    println!(
        "=== SeatPlan: {} passengers, {} seats ({} first), seed {} ===\n",
        report.total_passengers,
        report.total_seats,
        chart.layout().first_class_count(),
        seed
    );

    println!(
        "{:>9}  {:>7}  {:>4}  {:<7}  {:<8}  {:<13}",
        "passenger", "arrival", "seat", "class", "kind", "preference"
    );
    for p in chart.passengers() {
        let Some(seat) = p.assigned_seat.and_then(|id| chart.layout().seat(id)) else {
            continue;
        };
        println!(
            "{:>9}  {:>7}  {:>4}  {:<7}  {:<8}  {:<13}",
            p.id,
            p.arrival_time,
            seat.id,
            seat.cabin_class.label(),
            format!("{:?}", seat.kind),
            format!("{:?}", p.preference),
        );
    }

    println!();
    for class in &report.classes {
        println!(
            "  {:<7} {:>3}/{:<3} seats occupied ({:.0}%), {} passengers",
            class.class.label(),
            class.occupied,
            class.seats,
            class.load_factor() * 100.0,
            class.passengers
        );
    }
    println!(
        "  window  {}/{} satisfied, aisle {}/{} satisfied",
        report.window.satisfied,
        report.window.requested,
        report.aisle.satisfied,
        report.aisle.requested
    );
}

// ── Seed sweep ──────────────────────────────────────────────────────────

fn sweep(config: &SimulationConfig, runs: u64) -> Vec<TestResult> {
    println!("--- Seed sweep ({} runs) ---", runs);
    let base = config.seed.unwrap_or(0);

    (base..base.saturating_add(runs))
        .map(|seed| {
            let config = SimulationConfig {
                seed: Some(seed),
                ..config.clone()
            };
            check_run(&config, seed)
        })
        .collect()
}

fn check_run(config: &SimulationConfig, seed: u64) -> TestResult {
    let name = format!("seed_{seed}");
    match run_simulation(config) {
        Ok(chart) => {
            let violations = audit_chart(&chart);
            TestResult {
                name,
                passed: violations.is_empty(),
                detail: if violations.is_empty() {
                    format!("{} passengers seated", chart.passengers().len())
                } else {
                    violations
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; ")
                },
            }
        }
        Err(e @ SeatingError::NoSeatAvailable { .. }) => TestResult {
            name,
            passed: false,
            detail: format!("class exhausted: {e}"),
        },
        Err(e) => TestResult {
            name,
            passed: false,
            detail: e.to_string(),
        },
    }
}

fn print_summary(results: &[TestResult], verbose: bool) -> usize {
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );
    failed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["seatplan-simtest", "-p", "40", "--seed", "3"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.passenger_count, 40);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.total_seats, 159);
    }

    #[test]
    fn sweep_audits_every_seed() {
        let config = SimulationConfig {
            seed: Some(10),
            ..Default::default()
        };
        let results = sweep(&config, 5);
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["seed_10", "seed_11", "seed_12", "seed_13", "seed_14"]);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn exhausted_class_fails_the_check() {
        let config = SimulationConfig {
            total_seats: 20,
            first_class_count: 20,
            passenger_count: 20,
            ..Default::default()
        };
        let result = check_run(&config, 1);
        assert!(!result.passed);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli =
            Cli::try_parse_from(["seatplan-simtest", "--config", "/nonexistent/cabin.toml"]).unwrap();
        let err = resolve_config(&cli).unwrap_err();
        assert!(err.to_string().contains("loading"));
    }
}
