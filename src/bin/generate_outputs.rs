//! CLI tool to generate puzzle cases and the verification report.
//!
//! Produces:
//! - `<output_dir>/test_cases.json` — curated and seeded random cases
//! - `<output_dir>/verification_report.json` — every case checked against
//!   its known answer and the reference implementation
//!
//! Settings come from `PUZZLE_*` environment variables (see `data::config`).

use std::process::ExitCode;

use puzzle_solutions::data::config::DatasetConfig;
use puzzle_solutions::data::generate_cases;
use puzzle_solutions::models::problem::Problem;
use puzzle_solutions::report::generate_report;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Generate, verify, and write everything; `Ok(false)` means some case failed.
fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let config = DatasetConfig::from_env()?;
    tracing::info!(seed = config.seed, output_dir = %config.output_dir.display(), "generating cases");

    let cases = generate_cases(&config);
    std::fs::create_dir_all(&config.output_dir)?;
    let cases_path = config.output_dir.join("test_cases.json");
    std::fs::write(&cases_path, serde_json::to_string_pretty(&cases)?)?;
    println!("Wrote {} ({} cases)", cases_path.display(), cases.len());

    let report = generate_report(&cases);
    let report_path = config.output_dir.join("verification_report.json");
    std::fs::write(&report_path, serde_json::to_string_pretty(&report)?)?;
    println!("Wrote {}", report_path.display());

    // Print summary
    println!();
    println!("=== VERIFICATION SUMMARY ===");
    println!("Total Cases: {}", report.total_cases);
    println!("Passed:      {}", report.passed);
    println!("Failed:      {}", report.failed);
    println!();
    println!("--- By Problem ---");
    for (problem, summary) in &report.by_problem {
        println!(
            "  #{} {}: {}/{} passed ({} vs expected, {} vs reference)",
            problem.number(),
            problem.title(),
            summary.passed,
            summary.cases,
            summary.expected_checked,
            summary.reference_checked
        );
    }
    for problem in Problem::ALL {
        if !report.by_problem.contains_key(&problem) {
            println!("  #{} {}: no cases", problem.number(), problem.title());
        }
    }

    if !report.failures.is_empty() {
        println!();
        println!("--- Failures ---");
        for failure in &report.failures {
            println!("  {} ({}): {}", failure.case_id, failure.problem, failure.reason);
        }
    }

    Ok(report.all_passed())
}
