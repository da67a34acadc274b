//! Engine configuration.
//!
//! This module contains the strongly-typed configuration for the
//! reconciliation engine and a YAML file loader for it.

mod loader;
mod types;

pub use types::{DEFAULT_TIMEZONE, DEFAULT_TIME_FORMAT, EngineConfig};
