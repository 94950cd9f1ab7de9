//! Controller state definition
//!
//! How a byte is interpreted depends only on the mode, the command assembler
//! and the memory-write flag. [`ParserState`] names the resulting states.

use gc9a01_protocol::CommandAssembler;

use super::window::{AddressWindow, Cursor};

/// Byte interpretation mode, driven by the DC line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// DC low: bytes are opcodes and parameters
    #[default]
    Command,
    /// DC high: bytes are pixel data
    Data,
}

/// What the next byte will be taken as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParserState {
    /// Command mode, next byte is an opcode
    CommandIdle,
    /// Command mode, collecting parameters
    CommandAccumulating,
    /// Data mode outside a memory write; bytes are dropped
    DataDiscard,
    /// Memory write, next byte is the high byte of a sample
    PixelHighByte,
    /// Memory write, next byte completes a sample
    PixelLowByte,
}

/// Complete mutable state of one controller instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    pub(crate) mode: Mode,
    pub(crate) assembler: CommandAssembler,
    /// High byte of a sample waiting for its low byte
    pub(crate) pending_sample: Option<u8>,
    pub(crate) window: AddressWindow,
    pub(crate) cursor: Cursor,
    pub(crate) ram_write: bool,
    pub(crate) display_on: bool,
    pub(crate) inverted: bool,
    width: u16,
    height: u16,
}

impl ControllerState {
    /// Power-on state for a surface of the given size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            mode: Mode::Command,
            assembler: CommandAssembler::new(),
            pending_sample: None,
            window: AddressWindow::full(width, height),
            cursor: Cursor::default(),
            ram_write: false,
            display_on: false,
            inverted: false,
            width,
            height,
        }
    }

    /// Restore window, cursor and flags to their power-on values
    ///
    /// The mode follows the DC line and is left alone.
    pub(crate) fn reset(&mut self) {
        self.abandon_transfer();
        self.window = AddressWindow::full(self.width, self.height);
        self.cursor = Cursor::default();
        self.ram_write = false;
        self.display_on = false;
        self.inverted = false;
    }

    /// Drop any half-assembled command or sample
    pub(crate) fn abandon_transfer(&mut self) {
        self.assembler.reset();
        self.pending_sample = None;
    }

    /// End the current memory write
    pub(crate) fn end_ram_write(&mut self) {
        self.ram_write = false;
        self.pending_sample = None;
    }

    /// Current byte interpretation mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// What the next byte will be taken as
    pub fn parser_state(&self) -> ParserState {
        match self.mode {
            Mode::Command if self.assembler.is_accumulating() => ParserState::CommandAccumulating,
            Mode::Command => ParserState::CommandIdle,
            Mode::Data if !self.ram_write => ParserState::DataDiscard,
            Mode::Data if self.pending_sample.is_some() => ParserState::PixelLowByte,
            Mode::Data => ParserState::PixelHighByte,
        }
    }

    /// Command assembly progress
    pub fn assembler(&self) -> &CommandAssembler {
        &self.assembler
    }

    /// High byte of an incomplete sample
    pub fn pending_sample(&self) -> Option<u8> {
        self.pending_sample
    }

    /// Current addressing window
    pub fn window(&self) -> AddressWindow {
        self.window
    }

    /// Current write position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Check if a memory write is in progress
    pub fn is_ram_write_active(&self) -> bool {
        self.ram_write
    }

    /// Check if the display has been switched on
    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    /// Check if color inversion is enabled
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Surface size as (width, height)
    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Check if window, cursor and flags match the power-on baseline
    pub fn is_baseline(&self) -> bool {
        self.window == AddressWindow::full(self.width, self.height)
            && self.cursor == Cursor::default()
            && !self.ram_write
            && !self.display_on
            && !self.inverted
            && self.pending_sample.is_none()
    }
}
