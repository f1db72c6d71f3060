//! Trip-level input and output records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DailyLog, Waypoint};

/// A geographic point (WGS84 degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Input for planning one trip.
///
/// The start instant's time of day is never consulted by the simulator —
/// each simulated day runs on its own 00:00..24:00 clock — so only the
/// calendar date is carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripContext {
    pub total_distance_miles: f64,
    pub start_date: NaiveDate,
    pub cycle_hours_used: f64,
}

/// Combined planning output for one trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub distance_miles: f64,
    pub estimated_days: u32,
    pub stops: Vec<Waypoint>,
    pub logs: Vec<DailyLog>,
}
