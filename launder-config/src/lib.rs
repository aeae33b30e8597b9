//! Machine configuration loading
//!
//! Turns a `machine.toml` file into a validated
//! [`launder_core::MachineConfig`]. This crate runs on the host; the
//! controller itself only ever sees the resulting config value.

pub mod loader;
pub mod toml;

pub use loader::{load_config, load_or_default, LoadError};
pub use self::toml::parse_config;

/// Configuration bundled with the crate
pub const SAMPLE_CONFIG: &str = include_str!("../machine.toml");
