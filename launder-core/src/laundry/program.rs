//! Wash programs and the per-cycle program configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A concrete wash program
///
/// Every variant carries a fixed wash duration, so anything typed as
/// `Program` can be handed to the engine as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Program {
    Short,
    Medium,
    Long,
}

impl Program {
    /// Wash duration in minutes
    pub const fn time_in_minutes(self) -> u16 {
        match self {
            Program::Short => 30,
            Program::Medium => 90,
            Program::Long => 120,
        }
    }
}

/// Program selected by the user
///
/// `AutoDetect` has no duration of its own and is resolved to a
/// [`Program`] from the detected soil degree before the wash starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProgramChoice {
    Fixed(Program),
    AutoDetect,
}

impl ProgramChoice {
    /// Check if this choice needs the dirt detector
    pub const fn is_auto(self) -> bool {
        matches!(self, ProgramChoice::AutoDetect)
    }
}

impl From<Program> for ProgramChoice {
    fn from(program: Program) -> Self {
        ProgramChoice::Fixed(program)
    }
}

/// Program selection for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramConfiguration {
    program: ProgramChoice,
    spin: bool,
}

impl ProgramConfiguration {
    /// Create a configuration
    pub fn new(program: impl Into<ProgramChoice>, spin: bool) -> Self {
        Self {
            program: program.into(),
            spin,
        }
    }

    /// Selected program
    pub const fn program(&self) -> ProgramChoice {
        self.program
    }

    /// Whether the final spin runs
    pub const fn spin(&self) -> bool {
        self.spin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_increase() {
        assert!(Program::Short.time_in_minutes() < Program::Medium.time_in_minutes());
        assert!(Program::Medium.time_in_minutes() < Program::Long.time_in_minutes());
    }

    #[test]
    fn test_configuration_from_program() {
        let config = ProgramConfiguration::new(Program::Short, true);
        assert_eq!(config.program(), ProgramChoice::Fixed(Program::Short));
        assert!(config.spin());
        assert!(!config.program().is_auto());
    }

    #[test]
    fn test_configuration_autodetect() {
        let config = ProgramConfiguration::new(ProgramChoice::AutoDetect, false);
        assert!(config.program().is_auto());
        assert!(!config.spin());
    }
}
