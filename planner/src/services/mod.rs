//! Services for the pasture planner

pub mod export;
pub mod pasture_planning;

pub use pasture_planning::{Location, PasturePlanningService};
