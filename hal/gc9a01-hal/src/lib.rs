//! GC9A01 Hardware Abstraction Layer
//!
//! This crate defines the collaborators the controller model talks to. The
//! host simulator (or a test harness) implements them; the model itself
//! never touches real hardware.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  gc9a01-core (controller state machine) │
//! └─────────────────────────────────────────┘
//!          │                     ▲
//!          │ start/stop          │ on_bytes / on_line_change
//!          ▼                     │
//! ┌─────────────────────────────────────────┐
//! │  gc9a01-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          host SPI transport, pin watcher
//! ```
//!
//! # Traits
//!
//! - [`spi::SpiReceiver`] - Arms and disarms byte delivery from the bus
//! - [`gpio::Level`], [`gpio::Line`] - Control-line identifiers and levels

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key types at crate root for convenience
pub use gpio::{Level, Line};
pub use spi::{NullReceiver, SpiReceiver, DEFAULT_RX_CAPACITY, MIN_RX_CAPACITY};
