//! Type definitions

pub mod log;
pub mod trip;
pub mod waypoint;

pub use log::*;
pub use trip::*;
pub use waypoint::*;
