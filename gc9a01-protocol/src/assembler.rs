//! Incremental command assembly
//!
//! Bytes arrive in chunks of any size, down to one byte per transfer. The
//! assembler keeps the opcode and the parameters received so far between
//! calls, and hands back a [`RawCommand`] once the last parameter lands.

use heapless::Vec;

use crate::command::RawCommand;
use crate::opcode::{expected_arg_count, MAX_ARGS};

/// State machine for assembling commands from the byte stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAssembler {
    state: AssemblerState,
    opcode: u8,
    expected_args: u8,
    args: Vec<u8, MAX_ARGS>,
}

/// Assembly progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssemblerState {
    /// Next byte is an opcode
    Idle,
    /// Opcode seen, collecting parameters
    Accumulating,
}

impl Default for CommandAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandAssembler {
    /// Create a new assembler
    pub fn new() -> Self {
        Self {
            state: AssemblerState::Idle,
            opcode: 0,
            expected_args: 0,
            args: Vec::new(),
        }
    }

    /// Drop any partially assembled command
    pub fn reset(&mut self) {
        self.state = AssemblerState::Idle;
        self.opcode = 0;
        self.expected_args = 0;
        self.args.clear();
    }

    /// Feed a single byte to the assembler
    ///
    /// Returns `Some(command)` when the byte completes a command,
    /// `None` when more bytes are needed.
    pub fn feed(&mut self, byte: u8) -> Option<RawCommand> {
        match self.state {
            AssemblerState::Idle => {
                let expected = expected_arg_count(byte);
                if expected == 0 {
                    return Some(RawCommand::bare(byte));
                }
                self.opcode = byte;
                self.expected_args = expected;
                self.args.clear();
                self.state = AssemblerState::Accumulating;
                None
            }
            AssemblerState::Accumulating => {
                // Cannot overflow: expected_args never exceeds MAX_ARGS
                let _ = self.args.push(byte);
                if self.args.len() < self.expected_args as usize {
                    return None;
                }

                let command = RawCommand {
                    opcode: self.opcode,
                    args: self.args.clone(),
                };
                self.reset();
                Some(command)
            }
        }
    }

    /// Current assembly state
    pub fn state(&self) -> AssemblerState {
        self.state
    }

    /// Check if a command is partially assembled
    pub fn is_accumulating(&self) -> bool {
        self.state == AssemblerState::Accumulating
    }

    /// Opcode of the command being assembled
    pub fn pending_opcode(&self) -> Option<u8> {
        self.is_accumulating().then_some(self.opcode)
    }

    /// Parameters received so far for the pending command
    pub fn received_args(&self) -> usize {
        self.args.len()
    }

    /// Parameters the pending command needs in total
    pub fn expected_args(&self) -> usize {
        self.expected_args as usize
    }
}
