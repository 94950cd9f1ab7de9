//! Configuration types
//!
//! Chip parameters that the host fixes at initialization.

pub mod types;

pub use types::*;
