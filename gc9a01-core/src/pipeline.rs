//! Pixel pipeline
//!
//! Turns one 16-bit sample into a surface write at the cursor and moves the
//! cursor on. Steps, in order: RGB565 expansion, optional inversion, window
//! check, round mask, write, advance.

use gc9a01_display::{CircularMask, Rgba, Surface};

use crate::state::ControllerState;

/// What happened to a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleOutcome {
    /// Written with its own color
    Written,
    /// Written as black because it fell outside the visible disc
    Masked,
    /// Cursor outside the addressing window; dropped, cursor unchanged
    OutsideWindow,
    /// Window extends past the surface; write culled, cursor advanced
    OffSurface,
}

/// Color a sample renders as before masking
pub fn sample_color(sample: u16, inverted: bool) -> Rgba {
    let color = Rgba::from_rgb565(sample);
    if inverted {
        color.inverted()
    } else {
        color
    }
}

/// Write one sample at the cursor and advance it
pub fn write_sample<S: Surface + ?Sized>(
    state: &mut ControllerState,
    surface: &mut S,
    mask: &CircularMask,
    sample: u16,
) -> SampleOutcome {
    let color = sample_color(sample, state.inverted);

    let cursor = state.cursor;
    if !state.window.contains(cursor) {
        return SampleOutcome::OutsideWindow;
    }

    let (width, height) = state.dimensions();
    let outcome = if cursor.col >= width || cursor.row >= height {
        SampleOutcome::OffSurface
    } else {
        let visible = mask.contains(cursor.col, cursor.row);
        let shown = if visible { color } else { Rgba::BLACK };
        match surface.write_pixel(cursor.col, cursor.row, shown) {
            Ok(()) if visible => SampleOutcome::Written,
            Ok(()) => SampleOutcome::Masked,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Surface write failed at {}: {:?}", cursor, _e);
                SampleOutcome::OffSurface
            }
        }
    };

    state.cursor.advance(&state.window);
    outcome
}
