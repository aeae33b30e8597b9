//! Bounded percentage used for the detected soil degree

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound of a percentage
pub const MAX_PERCENT: u8 = 100;

/// Value outside 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PercentageError(pub u8);

impl fmt::Display for PercentageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "percentage {} is outside 0-{}", self.0, MAX_PERCENT)
    }
}

/// A whole percentage in 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HALF: Self = Self(50);
    pub const FULL: Self = Self(MAX_PERCENT);

    /// Create a percentage, rejecting values above 100
    pub const fn new(value: u8) -> Result<Self, PercentageError> {
        if value > MAX_PERCENT {
            return Err(PercentageError(value));
        }
        Ok(Self(value))
    }

    /// Raw value in 0-100
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percentage {
    type Error = PercentageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}
