//! Configuration type definitions

use core::fmt;

use crate::laundry::Percentage;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default drum capacity in kilograms
pub const DEFAULT_MAX_LOAD_KG: f32 = 8.0;

/// Default soil degree at or above which autodetect picks the long program
pub const DEFAULT_LONG_THRESHOLD: Percentage = Percentage::HALF;

/// [`DEFAULT_LONG_THRESHOLD`] as a raw percent
pub const DEFAULT_LONG_THRESHOLD_PERCENT: u8 = DEFAULT_LONG_THRESHOLD.value();

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Capacity is not a positive finite weight
    InvalidCapacity,
    /// Threshold of 0% would send every autodetected batch to the long program
    InvalidThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapacity => f.write_str("max_load_kg must be a positive number"),
            ConfigError::InvalidThreshold => {
                f.write_str("long_threshold_percent must be at least 1")
            }
        }
    }
}

/// Automatic program detection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAutoDetectConfig"))]
pub struct AutoDetectConfig {
    /// Soil degree at or above which the long program is used
    pub long_threshold: Percentage,
}

impl Default for AutoDetectConfig {
    fn default() -> Self {
        Self {
            long_threshold: DEFAULT_LONG_THRESHOLD,
        }
    }
}

impl AutoDetectConfig {
    /// Check the threshold leaves the medium program reachable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_threshold == Percentage::ZERO {
            return Err(ConfigError::InvalidThreshold);
        }
        Ok(())
    }
}

/// Machine configuration
///
/// Deserialized values go through [`MachineConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMachineConfig"))]
pub struct MachineConfig {
    /// Maximum batch weight accepted (kg, inclusive)
    pub max_load_kg: f32,
    /// Automatic program detection
    pub autodetect: AutoDetectConfig,
    /// Drain the drum when the engine faults mid-wash
    pub drain_on_engine_fault: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineConfig {
    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self {
            max_load_kg: DEFAULT_MAX_LOAD_KG,
            autodetect: AutoDetectConfig::default(),
            drain_on_engine_fault: false,
        }
    }

    /// Check the configuration for values the machine cannot operate with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_load_kg.is_finite() || self.max_load_kg <= 0.0 {
            return Err(ConfigError::InvalidCapacity);
        }
        self.autodetect.validate()
    }

    /// Check if a batch weight fits in the drum
    pub fn fits(&self, weight_kg: f32) -> bool {
        weight_kg <= self.max_load_kg
    }
}

/// Unchecked mirror of [`AutoDetectConfig`] for deserialization
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawAutoDetectConfig {
    long_threshold: Percentage,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAutoDetectConfig> for AutoDetectConfig {
    type Error = ConfigError;

    fn try_from(raw: RawAutoDetectConfig) -> Result<Self, Self::Error> {
        let config = Self {
            long_threshold: raw.long_threshold,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Unchecked mirror of [`MachineConfig`] for deserialization
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMachineConfig {
    max_load_kg: f32,
    autodetect: AutoDetectConfig,
    drain_on_engine_fault: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMachineConfig> for MachineConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMachineConfig) -> Result<Self, Self::Error> {
        let config = Self {
            max_load_kg: raw.max_load_kg,
            autodetect: raw.autodetect,
            drain_on_engine_fault: raw.drain_on_engine_fault,
        };
        config.validate()?;
        Ok(config)
    }
}
