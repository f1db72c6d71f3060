//! HOS daily-log simulation and route stop planning core.
//!
//! The planning functions are pure and synchronous: the web layer that
//! accepts trip requests, calls the geocoding/routing provider, and
//! persists results lives elsewhere and only hands data in and out.
//! Invocations are independent, so concurrent trips need no coordination.

pub mod cli;
pub mod defaults;
pub mod error;
pub mod services;
pub mod types;

pub use error::PlanError;
pub use services::hos::generate_daily_logs;
pub use services::stop_planner::plan_stops;
pub use services::trip::plan_trip;
