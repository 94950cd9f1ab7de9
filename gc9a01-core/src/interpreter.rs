//! Command interpreter
//!
//! Applies one fully assembled command to the controller state. Commands
//! that do not affect addressing or pixel output are accepted and ignored.

use gc9a01_display::{Rgba, Surface};
use gc9a01_protocol::Command;

use crate::state::ControllerState;

/// Apply a decoded command
pub fn apply_command<S: Surface + ?Sized>(
    state: &mut ControllerState,
    surface: &mut S,
    command: Command,
) {
    match command {
        Command::SoftwareReset => reset(state, surface),
        Command::DisplayOn => state.display_on = true,
        Command::DisplayOff => state.display_on = false,
        Command::InversionOn => state.inverted = true,
        Command::InversionOff => state.inverted = false,
        Command::ColumnAddressSet { start, end } => {
            state.window.col_start = start;
            state.window.col_end = end;
            state.cursor.col = start;
            warn_if_off_surface(state);
        }
        Command::RowAddressSet { start, end } => {
            state.window.row_start = start;
            state.window.row_end = end;
            state.cursor.row = start;
            warn_if_off_surface(state);
        }
        Command::MemoryWrite => {
            state.ram_write = true;
            state.pending_sample = None;
        }
        Command::SleepOut
        | Command::MemoryAccessControl(_)
        | Command::PixelFormatSet(_)
        | Command::Unknown(_) => {}
    }
}

/// Blank the surface and return the state to its power-on baseline
///
/// Shared by the SWRESET opcode and the RST line.
pub fn reset<S: Surface + ?Sized>(state: &mut ControllerState, surface: &mut S) {
    if let Err(_e) = surface.fill(Rgba::BLACK) {
        #[cfg(feature = "defmt")]
        defmt::warn!("Surface clear failed: {:?}", _e);
    }
    state.reset();
}

fn warn_if_off_surface(_state: &ControllerState) {
    #[cfg(feature = "defmt")]
    {
        let (width, height) = _state.dimensions();
        if !_state.window.fits(width, height) {
            defmt::warn!(
                "Window extends past {}x{} surface: {:?}",
                width,
                height,
                _state.window
            );
        }
    }
}
