//! GC9A01 Command Protocol
//!
//! This crate defines the command set understood by the controller model and
//! the byte-level rules for assembling commands from the SPI stream.
//!
//! # Protocol Overview
//!
//! The host drives the data/command (DC) line low for the opcode byte and
//! its parameters:
//! ```text
//! ┌────────┬─────────────────────┐
//! │ OPCODE │ PARAMETERS          │
//! │ 1B     │ 0, 1 or 4 bytes     │
//! └────────┴─────────────────────┘
//! ```
//!
//! Addresses in CASET/RASET are big-endian `start, end` pairs. Opcodes the
//! model does not know take no parameters, so an unrecognized byte can never
//! push the stream out of step.

#![no_std]
#![deny(unsafe_code)]

pub mod assembler;
pub mod command;
pub mod opcode;

pub use assembler::{AssemblerState, CommandAssembler};
pub use command::{Command, EncodeError, RawCommand};
pub use opcode::{expected_arg_count, Opcode, MAX_ARGS, MAX_COMMAND_LEN};
