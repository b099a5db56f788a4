//! Command-line inspection of an analyzer CSV export.
//!
//! Usage: `phase-inspect <file.csv> [metric] [phase] [--json]`
//!
//! Loads the file, applies the selection, and prints either the
//! validation diagnosis or a per-series summary. With `--json` the full
//! chart result is emitted for an external renderer.

use std::path::PathBuf;
use std::process::ExitCode;

use phase_plot::{ChartState, Metric, PhaseFilter, ValidationStatus, ViewSelection, load_csv};

fn main() -> ExitCode {
    env_logger::init();

    let mut json = false;
    let mut positional: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            _ => positional.push(arg),
        }
    }

    let Some(path) = positional.first().map(PathBuf::from) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let metric = match positional.get(1).map(|m| m.parse::<Metric>()) {
        Some(Ok(metric)) => metric,
        Some(Err(err)) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
        None => Metric::All,
    };
    let filter = match positional.get(2).map(|p| p.parse::<PhaseFilter>()) {
        Some(Ok(filter)) => filter,
        Some(Err(err)) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
        None => PhaseFilter::All,
    };

    // For the all-columns metric the phase argument acts as the line
    // filter; for per-phase metrics it is the phase restriction.
    let selection = match metric {
        Metric::All => ViewSelection::new(metric, PhaseFilter::All, filter),
        _ => ViewSelection::new(metric, filter, PhaseFilter::All),
    };

    let dataset = match load_csv(&path) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut state = ChartState::new();
    state.load_dataset(dataset);
    state.set_selection(selection);

    match state.validation_status() {
        ValidationStatus::Empty => {
            println!("no data: {} has a header but no records", path.display());
            ExitCode::SUCCESS
        }
        ValidationStatus::Error(err) => {
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
        ValidationStatus::Ok => {
            let chart = state
                .chart_result()
                .expect("ok status always carries a chart");
            if json {
                match serde_json::to_string_pretty(chart) {
                    Ok(text) => println!("{text}"),
                    Err(err) => {
                        eprintln!("error: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{} [{}]", chart.title, chart.y_axis_label);
                println!("columns: {}", state.detected_columns().join(", "));
                for series in &chart.series {
                    println!("  {}", summarize(series));
                }
            }
            ExitCode::SUCCESS
        }
    }
}

fn summarize(series: &phase_plot::Series) -> String {
    let points = series.values.iter().flatten().count();
    let min = series
        .values
        .iter()
        .flatten()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let max = series
        .values
        .iter()
        .flatten()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let first = series.timestamps.iter().flatten().next();
    let last = series.timestamps.iter().flatten().last();
    let span = match (first, last) {
        (Some(first), Some(last)) => format!("{first} .. {last}"),
        _ => "no timestamps".to_string(),
    };
    format!(
        "{}: {points}/{} points, min {min:.3}, max {max:.3}, {span}",
        series.label,
        series.values.len(),
    )
}

fn print_usage() {
    println!("usage: phase-inspect <file.csv> [metric] [phase] [--json]");
    println!("  metric: all | voltage | current | peak-current | power | total-power");
    println!("  phase:  all | l1 | l2 | l3 (line filter when metric is 'all')");
}
