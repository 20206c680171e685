//! External API integrations

pub mod open_meteo;

pub use open_meteo::{ArchiveClient, ArchiveResponse};
