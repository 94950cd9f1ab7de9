//! Opcode table for the modeled subset of the GC9A01 command set
//!
//! Every opcode maps to a fixed parameter count. Bytes outside the table
//! are treated as parameterless no-ops.

/// Software reset
pub const SWRESET: u8 = 0x01;
/// Sleep out
pub const SLPOUT: u8 = 0x11;
/// Display inversion off
pub const INVOFF: u8 = 0x20;
/// Display inversion on
pub const INVON: u8 = 0x21;
/// Display off
pub const DISPOFF: u8 = 0x28;
/// Display on
pub const DISPON: u8 = 0x29;
/// Column address set - 4 args (startHi, startLo, endHi, endLo)
pub const CASET: u8 = 0x2A;
/// Row address set - 4 args (startHi, startLo, endHi, endLo)
pub const RASET: u8 = 0x2B;
/// Memory write
pub const RAMWR: u8 = 0x2C;
/// Memory access control - 1 arg
pub const MADCTL: u8 = 0x36;
/// Pixel format set - 1 arg
pub const COLMOD: u8 = 0x3A;

/// Capacity of the parameter buffer
pub const MAX_ARGS: usize = 16;

/// Maximum encoded command size (OPCODE + MAX_ARGS)
pub const MAX_COMMAND_LEN: usize = 1 + MAX_ARGS;

/// Opcodes recognized by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Opcode {
    SoftwareReset,
    SleepOut,
    InversionOff,
    InversionOn,
    DisplayOff,
    DisplayOn,
    ColumnAddressSet,
    RowAddressSet,
    MemoryWrite,
    MemoryAccessControl,
    PixelFormatSet,
}

impl Opcode {
    /// All recognized opcodes, in wire-value order
    pub const ALL: [Opcode; 11] = [
        Opcode::SoftwareReset,
        Opcode::SleepOut,
        Opcode::InversionOff,
        Opcode::InversionOn,
        Opcode::DisplayOff,
        Opcode::DisplayOn,
        Opcode::ColumnAddressSet,
        Opcode::RowAddressSet,
        Opcode::MemoryWrite,
        Opcode::MemoryAccessControl,
        Opcode::PixelFormatSet,
    ];

    /// Look up an opcode from its wire byte
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            SWRESET => Some(Opcode::SoftwareReset),
            SLPOUT => Some(Opcode::SleepOut),
            INVOFF => Some(Opcode::InversionOff),
            INVON => Some(Opcode::InversionOn),
            DISPOFF => Some(Opcode::DisplayOff),
            DISPON => Some(Opcode::DisplayOn),
            CASET => Some(Opcode::ColumnAddressSet),
            RASET => Some(Opcode::RowAddressSet),
            RAMWR => Some(Opcode::MemoryWrite),
            MADCTL => Some(Opcode::MemoryAccessControl),
            COLMOD => Some(Opcode::PixelFormatSet),
            _ => None,
        }
    }

    /// Convert to wire byte
    pub const fn to_byte(self) -> u8 {
        match self {
            Opcode::SoftwareReset => SWRESET,
            Opcode::SleepOut => SLPOUT,
            Opcode::InversionOff => INVOFF,
            Opcode::InversionOn => INVON,
            Opcode::DisplayOff => DISPOFF,
            Opcode::DisplayOn => DISPON,
            Opcode::ColumnAddressSet => CASET,
            Opcode::RowAddressSet => RASET,
            Opcode::MemoryWrite => RAMWR,
            Opcode::MemoryAccessControl => MADCTL,
            Opcode::PixelFormatSet => COLMOD,
        }
    }

    /// Number of parameter bytes that follow the opcode
    pub const fn arg_count(self) -> u8 {
        match self {
            Opcode::ColumnAddressSet | Opcode::RowAddressSet => 4,
            Opcode::MemoryAccessControl | Opcode::PixelFormatSet => 1,
            _ => 0,
        }
    }

    /// Mnemonic as it appears in the datasheet
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::SoftwareReset => "SWRESET",
            Opcode::SleepOut => "SLPOUT",
            Opcode::InversionOff => "INVOFF",
            Opcode::InversionOn => "INVON",
            Opcode::DisplayOff => "DISPOFF",
            Opcode::DisplayOn => "DISPON",
            Opcode::ColumnAddressSet => "CASET",
            Opcode::RowAddressSet => "RASET",
            Opcode::MemoryWrite => "RAMWR",
            Opcode::MemoryAccessControl => "MADCTL",
            Opcode::PixelFormatSet => "COLMOD",
        }
    }
}

/// Parameter count for any opcode byte
///
/// Unknown opcodes take no parameters.
pub const fn expected_arg_count(byte: u8) -> u8 {
    match Opcode::from_byte(byte) {
        Some(opcode) => opcode.arg_count(),
        None => 0,
    }
}
