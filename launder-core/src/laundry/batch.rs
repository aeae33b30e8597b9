//! Laundry batch: one load to be washed

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fabric class of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    #[default]
    Cotton,
    Synthetic,
    Wool,
    Delicate,
    Jeans,
}

/// Errors rejected when building a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatchError {
    /// Weight is zero or negative
    NonPositiveWeight,
    /// Weight is NaN or infinite
    NonFiniteWeight,
}

/// A single load of laundry
///
/// The weight is guaranteed positive and finite. Whether it fits in the
/// drum is a property of the machine, not of the batch, so an overweight
/// batch is still a valid batch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LaundryBatch {
    material: Material,
    weight_kg: f32,
}

impl LaundryBatch {
    /// Create a batch, rejecting weights that are not positive and finite
    pub fn new(material: Material, weight_kg: f32) -> Result<Self, BatchError> {
        if !weight_kg.is_finite() {
            return Err(BatchError::NonFiniteWeight);
        }
        if weight_kg <= 0.0 {
            return Err(BatchError::NonPositiveWeight);
        }

        Ok(Self {
            material,
            weight_kg,
        })
    }

    /// Fabric class
    pub const fn material(&self) -> Material {
        self.material
    }

    /// Weight in kilograms
    pub const fn weight_kg(&self) -> f32 {
        self.weight_kg
    }
}
