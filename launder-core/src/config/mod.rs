//! Machine configuration
//!
//! Limits and policies that are a property of the machine rather than of
//! a single cycle.

pub mod types;

pub use types::*;
