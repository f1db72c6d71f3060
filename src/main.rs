//! Eldlog - HOS daily-log and route stop planning CLI.
//!
//! Library consumers call `plan_trip` / `generate_daily_logs` /
//! `plan_stops` directly; this binary wraps them for manual runs and
//! prints the results as JSON on stdout.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eldlog::cli::{Cli, Command};
use eldlog::services::{hos, stop_planner, trip};
use eldlog::types::{Coordinates, TripContext};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Logs {
            distance_miles,
            start_date,
            cycle_hours_used,
        } => {
            let logs = hos::generate_daily_logs(distance_miles, start_date, cycle_hours_used)?;
            info!(days = logs.len(), "generated daily logs");
            println!("{}", serde_json::to_string_pretty(&logs)?);
        }
        Command::Stops {
            path_file,
            distance_miles,
        } => {
            let path = read_path(&path_file)?;
            let stops = stop_planner::plan_stops(&path, distance_miles)?;
            info!(stops = stops.len(), "planned route stops");
            println!("{}", serde_json::to_string_pretty(&stops)?);
        }
        Command::Plan {
            path_file,
            distance_miles,
            start_date,
            cycle_hours_used,
        } => {
            let path = read_path(&path_file)?;
            let ctx = TripContext {
                total_distance_miles: distance_miles,
                start_date,
                cycle_hours_used,
            };
            let plan = trip::plan_trip(&path, &ctx)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}

fn read_path(file: &Path) -> Result<Vec<Coordinates>> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read path file {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid path JSON in {}", file.display()))
}
