//! Water pump trait

/// Errors that can occur while filling the drum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpError {
    /// Inlet has no supply pressure
    NoWaterSupply,
    /// Fill level not reached in time
    Timeout,
    /// Level sensor reports water loss
    Leak,
}

/// Trait for the water pump
pub trait WaterPump {
    /// Fill the drum with water for a batch of the given weight
    fn pour(&mut self, weight_kg: f32) -> Result<(), PumpError>;

    /// Drain the drum
    fn release(&mut self);
}
