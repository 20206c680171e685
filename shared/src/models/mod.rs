//! Domain models for pasture planning

mod climate;
mod forage;
mod weather;

pub use climate::*;
pub use forage::*;
pub use weather::*;
