//! Crate error type

use thiserror::Error;

/// Precondition violations for the planning functions.
///
/// The core performs no I/O, so these are its only failure modes. A
/// degenerate result (zero daily logs because the cycle is already
/// exhausted) is a valid outcome, not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("total distance must be a positive finite number of miles, got {0}")]
    InvalidDistance(f64),

    #[error("route path must contain at least 2 points, got {0}")]
    PathTooShort(usize),

    #[error("cycle hours used must be within 0..=70, got {0}")]
    InvalidCycleHours(f64),
}
