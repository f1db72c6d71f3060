//! Waypoint types for planned route stops

use serde::{Deserialize, Serialize};

/// Role of a waypoint within a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointRole {
    Start,
    Pickup,
    FuelStop,
    Dropoff,
    RestBreak,
    Other,
}

impl WaypointRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            WaypointRole::Start => "start",
            WaypointRole::Pickup => "pickup",
            WaypointRole::FuelStop => "fuel_stop",
            WaypointRole::Dropoff => "dropoff",
            WaypointRole::RestBreak => "rest_break",
            WaypointRole::Other => "other",
        }
    }
}

/// A planned stop along the route.
///
/// `sequence` defines presentation order; within one trip the indices are
/// unique, ascending, and contiguous from 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub role: WaypointRole,
    pub sequence: u32,
    pub lat: f64,
    pub lng: f64,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&WaypointRole::FuelStop).unwrap();
        assert_eq!(json, "\"fuel_stop\"");
        assert_eq!(WaypointRole::FuelStop.as_str(), "fuel_stop");
    }

    #[test]
    fn test_waypoint_round_trips() {
        let wp = Waypoint {
            role: WaypointRole::Pickup,
            sequence: 1,
            lat: 29.7604,
            lng: -95.3698,
            label: "Pickup".to_string(),
        };
        let json = serde_json::to_string(&wp).unwrap();
        let back: Waypoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wp);
    }
}
