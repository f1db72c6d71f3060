//! Planning services

pub mod clock;
pub mod hos;
pub mod stop_planner;
pub mod trip;
