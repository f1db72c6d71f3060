//! CLI argument parsing for the eldlog binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eldlog", about = "HOS daily-log and route stop planning for commercial trips")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate HOS daily logs for a trip
    Logs {
        /// Total trip distance in miles
        #[arg(long)]
        distance_miles: f64,
        /// Calendar date of day 1 (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,
        /// Cycle hours already used before this trip (0..=70)
        #[arg(long, default_value_t = 0.0)]
        cycle_hours_used: f64,
    },
    /// Plan route stops along a path geometry
    Stops {
        /// JSON file with the route path: [{"lat":..,"lng":..}, ...]
        #[arg(long)]
        path_file: PathBuf,
        /// Total trip distance in miles
        #[arg(long)]
        distance_miles: f64,
    },
    /// Full trip plan: stops plus daily logs
    Plan {
        /// JSON file with the route path: [{"lat":..,"lng":..}, ...]
        #[arg(long)]
        path_file: PathBuf,
        /// Total trip distance in miles
        #[arg(long)]
        distance_miles: f64,
        /// Calendar date of day 1 (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,
        /// Cycle hours already used before this trip (0..=70)
        #[arg(long, default_value_t = 0.0)]
        cycle_hours_used: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_command_parses() {
        let cli = Cli::parse_from([
            "eldlog",
            "logs",
            "--distance-miles",
            "1100",
            "--start-date",
            "2025-03-10",
        ]);
        match cli.command {
            Command::Logs {
                distance_miles,
                start_date,
                cycle_hours_used,
            } => {
                assert_eq!(distance_miles, 1100.0);
                assert_eq!(start_date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
                assert_eq!(cycle_hours_used, 0.0);
            }
            _ => panic!("expected logs command"),
        }
    }

    #[test]
    fn test_cycle_hours_flag_overrides_default() {
        let cli = Cli::parse_from([
            "eldlog",
            "logs",
            "--distance-miles",
            "500",
            "--start-date",
            "2025-03-10",
            "--cycle-hours-used",
            "12.5",
        ]);
        match cli.command {
            Command::Logs {
                cycle_hours_used, ..
            } => assert_eq!(cycle_hours_used, 12.5),
            _ => panic!("expected logs command"),
        }
    }

    #[test]
    fn test_stops_command_requires_path_file() {
        let result = Cli::try_parse_from(["eldlog", "stops", "--distance-miles", "500"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_date_rejected() {
        let result = Cli::try_parse_from([
            "eldlog",
            "logs",
            "--distance-miles",
            "500",
            "--start-date",
            "not-a-date",
        ]);
        assert!(result.is_err());
    }
}
