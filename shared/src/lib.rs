//! Shared types and the pasture planning engine for the livestock dashboard
//!
//! This crate contains the pure forage classification pipeline shared between
//! the planner CLI, the dashboard (via WASM), and other components.

pub mod models;
pub mod planning;
pub mod types;
pub mod validation;

pub use models::*;
pub use planning::*;
pub use types::*;
pub use validation::*;
