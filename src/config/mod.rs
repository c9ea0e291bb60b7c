//! Configuration handling for the TJM Engine.
//!
//! Engine configuration is loaded from YAML files at startup and held
//! immutable for the lifetime of the process.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, OutreachConfig, SavingsConfig, ServiceConfig};
