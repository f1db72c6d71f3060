//! Route stop planning.
//!
//! Distributes trip waypoints (start, pickup, periodic fuel stops, dropoff)
//! along a precomputed route geometry. Pure function of its inputs — the
//! routing provider that produced the path lives upstream.

use tracing::debug;

use crate::defaults::FUEL_EVERY_MILES;
use crate::error::PlanError;
use crate::types::{Coordinates, Waypoint, WaypointRole};

/// Plan the ordered waypoint list for a trip.
///
/// By the caller's convention the path's first point is the current
/// location and its second logical point is the pickup. A fuel stop is
/// emitted each time a whole 1000-mile interval is crossed with distance
/// still remaining beyond it (a trip of exactly 1000 miles gets none),
/// placed at the path position proportional to the miles covered so far.
/// Sequence indices are contiguous from 0 in emission order.
pub fn plan_stops(
    path: &[Coordinates],
    total_distance_miles: f64,
) -> Result<Vec<Waypoint>, PlanError> {
    if path.len() < 2 {
        return Err(PlanError::PathTooShort(path.len()));
    }
    if !total_distance_miles.is_finite() || total_distance_miles <= 0.0 {
        return Err(PlanError::InvalidDistance(total_distance_miles));
    }

    let mut stops = vec![
        Waypoint {
            role: WaypointRole::Start,
            sequence: 0,
            lat: path[0].lat,
            lng: path[0].lng,
            label: "Trip start".to_string(),
        },
        Waypoint {
            role: WaypointRole::Pickup,
            sequence: 1,
            lat: path[1].lat,
            lng: path[1].lng,
            label: "Pickup".to_string(),
        },
    ];
    let mut sequence = 2u32;

    let mut miles = 0.0;
    while miles + FUEL_EVERY_MILES < total_distance_miles {
        miles += FUEL_EVERY_MILES;
        let idx = ((miles / total_distance_miles) * path.len() as f64) as usize;
        // Never index past the geometry; an out-of-range fuel position is
        // dropped rather than clamped.
        if let Some(point) = path.get(idx) {
            stops.push(Waypoint {
                role: WaypointRole::FuelStop,
                sequence,
                lat: point.lat,
                lng: point.lng,
                label: format!("Fuel at mile {miles:.0}"),
            });
            sequence += 1;
        }
    }

    let last = path[path.len() - 1];
    stops.push(Waypoint {
        role: WaypointRole::Dropoff,
        sequence,
        lat: last.lat,
        lng: last.lng,
        label: "Dropoff".to_string(),
    });

    debug!(stops = stops.len(), total_distance_miles, "planned trip stops");
    Ok(stops)
}
