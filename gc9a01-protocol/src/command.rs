//! Command decoding and encoding
//!
//! A [`RawCommand`] is an opcode plus exactly the number of parameter bytes
//! the opcode table asks for. [`Command`] is its decoded form.

use heapless::Vec;

use crate::opcode::{expected_arg_count, Opcode, MAX_ARGS, MAX_COMMAND_LEN};

/// Errors that can occur when building a raw command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// More parameters than the buffer holds
    TooManyArgs,
    /// Parameter count does not match the opcode table
    ArgCountMismatch,
}

/// An opcode with its complete parameter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    /// Opcode byte
    pub opcode: u8,
    /// Parameter bytes, in wire order
    pub args: Vec<u8, MAX_ARGS>,
}

impl RawCommand {
    /// Create a raw command, checking the parameter count against the table
    pub fn new(opcode: u8, args: &[u8]) -> Result<Self, EncodeError> {
        if args.len() > MAX_ARGS {
            return Err(EncodeError::TooManyArgs);
        }
        if args.len() != expected_arg_count(opcode) as usize {
            return Err(EncodeError::ArgCountMismatch);
        }

        let mut args_vec = Vec::new();
        args_vec
            .extend_from_slice(args)
            .map_err(|_| EncodeError::TooManyArgs)?;

        Ok(Self {
            opcode,
            args: args_vec,
        })
    }

    /// Create a command that takes no parameters
    pub fn bare(opcode: u8) -> Self {
        Self {
            opcode,
            args: Vec::new(),
        }
    }

    /// Decode into a typed command
    pub fn decode(&self) -> Command {
        Command::decode(self.opcode, &self.args)
    }
}

/// Decoded controller command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Reset all state and blank the panel
    SoftwareReset,
    /// Leave sleep mode (no effect in the model)
    SleepOut,
    /// Stop inverting written pixels
    InversionOff,
    /// Invert subsequently written pixels
    InversionOn,
    /// Display off
    DisplayOff,
    /// Display on
    DisplayOn,
    /// Set column bounds of the addressing window (inclusive)
    ColumnAddressSet { start: u16, end: u16 },
    /// Set row bounds of the addressing window (inclusive)
    RowAddressSet { start: u16, end: u16 },
    /// Begin a memory write; data bytes become pixels
    MemoryWrite,
    /// Memory access control (accepted, no effect)
    MemoryAccessControl(u8),
    /// Pixel format (accepted, no effect)
    PixelFormatSet(u8),
    /// Opcode outside the modeled set
    Unknown(u8),
}

impl Command {
    /// Decode a command from its opcode and parameter bytes
    ///
    /// A parameter list that is too short for the opcode decodes as
    /// [`Command::Unknown`] so it is ignored rather than half-applied.
    pub fn decode(opcode: u8, args: &[u8]) -> Self {
        let Some(op) = Opcode::from_byte(opcode) else {
            return Command::Unknown(opcode);
        };

        match op {
            Opcode::SoftwareReset => Command::SoftwareReset,
            Opcode::SleepOut => Command::SleepOut,
            Opcode::InversionOff => Command::InversionOff,
            Opcode::InversionOn => Command::InversionOn,
            Opcode::DisplayOff => Command::DisplayOff,
            Opcode::DisplayOn => Command::DisplayOn,
            Opcode::MemoryWrite => Command::MemoryWrite,
            Opcode::ColumnAddressSet => match decode_range(args) {
                Some((start, end)) => Command::ColumnAddressSet { start, end },
                None => Command::Unknown(opcode),
            },
            Opcode::RowAddressSet => match decode_range(args) {
                Some((start, end)) => Command::RowAddressSet { start, end },
                None => Command::Unknown(opcode),
            },
            Opcode::MemoryAccessControl => match args.first() {
                Some(&value) => Command::MemoryAccessControl(value),
                None => Command::Unknown(opcode),
            },
            Opcode::PixelFormatSet => match args.first() {
                Some(&value) => Command::PixelFormatSet(value),
                None => Command::Unknown(opcode),
            },
        }
    }

    /// Wire opcode for this command
    pub fn opcode(&self) -> u8 {
        match self {
            Command::SoftwareReset => Opcode::SoftwareReset.to_byte(),
            Command::SleepOut => Opcode::SleepOut.to_byte(),
            Command::InversionOff => Opcode::InversionOff.to_byte(),
            Command::InversionOn => Opcode::InversionOn.to_byte(),
            Command::DisplayOff => Opcode::DisplayOff.to_byte(),
            Command::DisplayOn => Opcode::DisplayOn.to_byte(),
            Command::ColumnAddressSet { .. } => Opcode::ColumnAddressSet.to_byte(),
            Command::RowAddressSet { .. } => Opcode::RowAddressSet.to_byte(),
            Command::MemoryWrite => Opcode::MemoryWrite.to_byte(),
            Command::MemoryAccessControl(_) => Opcode::MemoryAccessControl.to_byte(),
            Command::PixelFormatSet(_) => Opcode::PixelFormatSet.to_byte(),
            Command::Unknown(byte) => *byte,
        }
    }

    /// Encode into an opcode and parameter list
    pub fn encode(&self) -> Result<RawCommand, EncodeError> {
        match *self {
            Command::ColumnAddressSet { start, end } | Command::RowAddressSet { start, end } => {
                let [start_hi, start_lo] = start.to_be_bytes();
                let [end_hi, end_lo] = end.to_be_bytes();
                RawCommand::new(self.opcode(), &[start_hi, start_lo, end_hi, end_lo])
            }
            Command::MemoryAccessControl(value) | Command::PixelFormatSet(value) => {
                RawCommand::new(self.opcode(), &[value])
            }
            _ => RawCommand::new(self.opcode(), &[]),
        }
    }

    /// Encode as a flat byte sequence (opcode followed by parameters)
    pub fn to_bytes(&self) -> Result<Vec<u8, MAX_COMMAND_LEN>, EncodeError> {
        let raw = self.encode()?;
        let mut bytes = Vec::new();
        bytes.push(raw.opcode).map_err(|_| EncodeError::TooManyArgs)?;
        bytes
            .extend_from_slice(&raw.args)
            .map_err(|_| EncodeError::TooManyArgs)?;
        Ok(bytes)
    }
}

/// Parse a big-endian `start, end` pair
fn decode_range(args: &[u8]) -> Option<(u16, u16)> {
    match *args {
        [start_hi, start_lo, end_hi, end_lo, ..] => Some((
            u16::from_be_bytes([start_hi, start_lo]),
            u16::from_be_bytes([end_hi, end_lo]),
        )),
        _ => None,
    }
}
