//! Fixed HOS regulatory limits and planning constants.
//!
//! These are the federal property-carrying driver limits the simulator
//! enforces; they are deliberately not configurable at call time.

pub const MAX_DRIVING_HOURS_PER_DAY: f64 = 11.0;
pub const MAX_ON_DUTY_HOURS_PER_DAY: f64 = 14.0;
pub const REQUIRED_OFF_DUTY_HOURS: f64 = 10.0;
pub const REST_BREAK_AFTER_DRIVING_HOURS: f64 = 8.0;
pub const REST_BREAK_DURATION_HOURS: f64 = 0.5;
pub const PICKUP_DROPOFF_DURATION_HOURS: f64 = 1.0;
pub const CYCLE_LIMIT_HOURS: f64 = 70.0;

/// Assumed average driving speed for distance-to-time conversion
pub const AVERAGE_SPEED_MPH: f64 = 60.0;

/// A fuel stop is planned each time this many whole miles are crossed
pub const FUEL_EVERY_MILES: f64 = 1000.0;
