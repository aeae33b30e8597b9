//! Wash cycle orchestration
//!
//! A cycle is a single linear pass with early exits. There is no
//! resumable state between cycles.

pub mod washer;

#[cfg(test)]
mod fakes;

pub use washer::{program_for_soil, WashingMachine};
