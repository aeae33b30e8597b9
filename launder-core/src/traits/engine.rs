//! Drum engine trait

/// Errors that can occur while the engine drives a wash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// Drum stall detected
    Stalled,
    /// Motor current over limit
    Overload,
    /// Door interlock open
    DoorOpen,
}

/// Trait for the drum engine
///
/// Implementations block until the requested operation has finished.
pub trait Engine {
    /// Run the wash phase for the given number of minutes
    fn run_washing(&mut self, minutes: u16) -> Result<(), EngineError>;

    /// Run the final spin
    fn spin(&mut self);
}
