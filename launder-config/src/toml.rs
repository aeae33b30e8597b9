//! TOML parser for machine configuration
//!
//! Layout:
//!
//! ```toml
//! [machine]
//! max_load_kg = 8.0
//! drain_on_engine_fault = false
//!
//! [autodetect]
//! long_threshold_percent = 50
//! ```
//!
//! Every key is optional. Unknown sections and keys are rejected so that
//! typos do not silently fall back to defaults.

use serde::Deserialize;

use launder_core::config::{AutoDetectConfig, MachineConfig};
use launder_core::Percentage;

use super::loader::LoadError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    machine: RawMachine,
    autodetect: RawAutoDetect,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawMachine {
    max_load_kg: Option<f32>,
    drain_on_engine_fault: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawAutoDetect {
    long_threshold_percent: Option<u8>,
}

/// Parse TOML configuration into MachineConfig
pub fn parse_config(input: &str) -> Result<MachineConfig, LoadError> {
    let raw: RawConfig = ::toml::from_str(input)?;
    let mut config = MachineConfig::new();

    if let Some(max_load_kg) = raw.machine.max_load_kg {
        config.max_load_kg = max_load_kg;
    }
    if let Some(drain) = raw.machine.drain_on_engine_fault {
        config.drain_on_engine_fault = drain;
    }
    if let Some(percent) = raw.autodetect.long_threshold_percent {
        config.autodetect = AutoDetectConfig {
            long_threshold: Percentage::new(percent)?,
        };
    }

    config.validate()?;
    Ok(config)
}
