//! Behavioral model of the GC9A01 round LCD controller
//!
//! This crate contains the controller logic that does not depend on the
//! simulator host:
//!
//! - Controller state (mode, addressing window, cursor, flags)
//! - Command interpreter for the modeled opcode set
//! - Pixel pipeline (RGB565 expansion, inversion, round mask)
//! - Stream parser and control-line monitor
//! - Configuration type definitions
//!
//! The host owns the SPI transport and the pixel surface and hands them to
//! [`Gc9a01`]. Everything then happens inside two entry points,
//! [`Gc9a01::on_bytes`] and [`Gc9a01::on_line_change`].

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod interpreter;
pub mod pipeline;
pub mod state;
pub mod stats;

pub use config::{ChipConfig, ConfigError};
pub use controller::Gc9a01;
pub use state::{AddressWindow, ControllerState, Cursor, Mode, ParserState};
pub use stats::ControllerStats;

pub use gc9a01_display::{Framebuffer, Rgba, Surface};
pub use gc9a01_hal::{Level, Line, SpiReceiver};
pub use gc9a01_protocol::Command;
