//! Board-agnostic wash cycle logic for the washing machine controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Laundry value types (batch, program, status)
//! - Hardware abstraction traits (dirt detector, engine, water pump)
//! - Machine configuration (load capacity, autodetect threshold)
//! - The wash cycle orchestrator

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod config;
pub mod laundry;
pub mod machine;
pub mod traits;

pub use config::MachineConfig;
pub use laundry::{
    BatchError, CycleResult, ErrorCode, LaundryBatch, LaundryStatus, Material, Percentage,
    PercentageError, Program, ProgramChoice, ProgramConfiguration,
};
pub use machine::WashingMachine;
pub use traits::{DirtDetector, Engine, EngineError, PumpError, WaterPump};
