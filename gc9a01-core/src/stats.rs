//! Controller activity counters

use crate::pipeline::SampleOutcome;

/// Running counters for one controller instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerStats {
    /// Bytes delivered by the transport
    pub bytes_received: u32,
    /// Recognized commands applied
    pub commands_applied: u32,
    /// Opcodes outside the modeled set
    pub unknown_opcodes: u32,
    /// Samples written with their own color
    pub samples_written: u32,
    /// Samples written as black outside the visible disc
    pub samples_masked: u32,
    /// Samples dropped because the cursor was outside the window
    pub samples_outside_window: u32,
    /// Samples whose write fell off the surface
    pub samples_off_surface: u32,
    /// Data bytes dropped outside a memory write
    pub bytes_discarded: u32,
    /// Resets from SWRESET or the RST line
    pub resets: u32,
    /// Times reception was armed
    pub rearms: u32,
}

impl ControllerStats {
    /// Count one sample by outcome
    pub(crate) fn record_sample(&mut self, outcome: SampleOutcome) {
        let counter = match outcome {
            SampleOutcome::Written => &mut self.samples_written,
            SampleOutcome::Masked => &mut self.samples_masked,
            SampleOutcome::OutsideWindow => &mut self.samples_outside_window,
            SampleOutcome::OffSurface => &mut self.samples_off_surface,
        };
        *counter = counter.saturating_add(1);
    }

    /// Samples that reached the surface
    pub fn samples_rendered(&self) -> u32 {
        self.samples_written.saturating_add(self.samples_masked)
    }
}
