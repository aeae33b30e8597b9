//! Cycle outcome

use crate::traits::{EngineError, PumpError};

use super::program::Program;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overall cycle result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CycleResult {
    Success,
    Failure,
}

/// Reason attached to a cycle result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorCode {
    /// Cycle completed
    NoError,
    /// Batch exceeds the machine's load capacity
    TooHeavy,
    /// Water pump faulted during intake
    WaterPumpFailure,
    /// Engine faulted during the wash
    EngineFailure,
}

impl From<PumpError> for ErrorCode {
    fn from(_: PumpError) -> Self {
        ErrorCode::WaterPumpFailure
    }
}

impl From<EngineError> for ErrorCode {
    fn from(_: EngineError) -> Self {
        ErrorCode::EngineFailure
    }
}

/// Final outcome of a cycle
///
/// `program` is the concrete program that was run, or `None` when the
/// cycle was rejected before a program was chosen. Only serialized: a
/// status is produced by a cycle, never read back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LaundryStatus {
    result: CycleResult,
    error_code: ErrorCode,
    program: Option<Program>,
}

impl LaundryStatus {
    /// Completed cycle
    pub const fn success(program: Program) -> Self {
        Self {
            result: CycleResult::Success,
            error_code: ErrorCode::NoError,
            program: Some(program),
        }
    }

    /// Failed cycle
    ///
    /// # Panics
    ///
    /// Panics if `error_code` is `ErrorCode::NoError`.
    pub const fn failure(error_code: ErrorCode, program: Option<Program>) -> Self {
        assert!(
            !matches!(error_code, ErrorCode::NoError),
            "failure status needs an error code"
        );
        Self {
            result: CycleResult::Failure,
            error_code,
            program,
        }
    }

    pub const fn result(&self) -> CycleResult {
        self.result
    }

    pub const fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    /// Program actually run, if any
    pub const fn program(&self) -> Option<Program> {
        self.program
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.result, CycleResult::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        let status = LaundryStatus::success(Program::Long);
        assert!(status.is_success());
        assert_eq!(status.error_code(), ErrorCode::NoError);
        assert_eq!(status.program(), Some(Program::Long));
    }

    #[test]
    fn test_failure_status() {
        let status = LaundryStatus::failure(ErrorCode::TooHeavy, None);
        assert_eq!(status.result(), CycleResult::Failure);
        assert_eq!(status.error_code(), ErrorCode::TooHeavy);
        assert_eq!(status.program(), None);
    }

    #[test]
    #[should_panic(expected = "failure status needs an error code")]
    fn test_failure_without_error_code_panics() {
        let _ = LaundryStatus::failure(ErrorCode::NoError, Some(Program::Short));
    }

    #[test]
    fn test_collaborator_errors_map_to_codes() {
        assert_eq!(ErrorCode::from(PumpError::Leak), ErrorCode::WaterPumpFailure);
        assert_eq!(ErrorCode::from(EngineError::Stalled), ErrorCode::EngineFailure);
    }
}
