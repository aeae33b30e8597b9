//! Dirt detector trait

use crate::laundry::{LaundryBatch, Percentage};

/// Trait for soil sensors
///
/// Consulted only when the user selects automatic program detection.
pub trait DirtDetector {
    /// Measure how soiled the batch is
    ///
    /// Takes `&mut self` because sensor reads typically require mutable
    /// access. Reading has no other side effects on the machine.
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Percentage;
}
