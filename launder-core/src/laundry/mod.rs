//! Laundry value types
//!
//! Everything a caller builds before a cycle and everything a cycle
//! reports back. All types are immutable once constructed.

pub mod batch;
pub mod percentage;
pub mod program;
pub mod status;

pub use batch::{BatchError, LaundryBatch, Material};
pub use percentage::{Percentage, PercentageError};
pub use program::{Program, ProgramChoice, ProgramConfiguration};
pub use status::{CycleResult, ErrorCode, LaundryStatus};
