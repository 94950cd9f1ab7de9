//! GC9A01 controller
//!
//! One state machine with two entry points: [`Gc9a01::on_bytes`] for SPI
//! deliveries and [`Gc9a01::on_line_change`] for CS/DC/RST transitions. Both
//! take `&mut self`, so handlers can never interleave. Hosts that deliver
//! events from several threads must serialize them around the controller.

use gc9a01_display::{CircularMask, Surface};
use gc9a01_hal::{Level, Line, SpiReceiver};
use gc9a01_protocol::Command;

use crate::config::{ChipConfig, ConfigError};
use crate::interpreter;
use crate::pipeline;
use crate::state::{ControllerState, Mode};
use crate::stats::ControllerStats;

/// Last observed level of each control line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineLevels {
    select: Level,
    mode: Level,
    reset: Level,
}

impl Default for LineLevels {
    fn default() -> Self {
        Self {
            select: Line::Select.idle_level(),
            mode: Line::Mode.idle_level(),
            reset: Line::Reset.idle_level(),
        }
    }
}

impl LineLevels {
    fn get(&self, line: Line) -> Level {
        match line {
            Line::Select => self.select,
            Line::Mode => self.mode,
            Line::Reset => self.reset,
        }
    }

    fn get_mut(&mut self, line: Line) -> &mut Level {
        match line {
            Line::Select => &mut self.select,
            Line::Mode => &mut self.mode,
            Line::Reset => &mut self.reset,
        }
    }
}

/// GC9A01 round display controller model
pub struct Gc9a01<R, S> {
    state: ControllerState,
    receiver: R,
    surface: S,
    mask: CircularMask,
    rx_capacity: usize,
    lines: LineLevels,
    stats: ControllerStats,
}

impl<R, S> Gc9a01<R, S>
where
    R: SpiReceiver,
    S: Surface,
{
    /// Bring up a controller on the given transport and surface
    ///
    /// The surface must match the configured panel size; it is filled with
    /// the configured background color. Reception stays disarmed until CS goes low.
    pub fn new(config: &ChipConfig, receiver: R, mut surface: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let (width, height) = (config.width, config.height);
        if surface.dimensions() != (width, height) {
            return Err(ConfigError::DimensionMismatch);
        }

        if let Err(_e) = surface.fill(config.background_color()) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Background fill failed: {:?}", _e);
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "GC9A01 {}x{} rounded display initialized",
            width,
            height
        );

        Ok(Self {
            state: ControllerState::new(width, height),
            receiver,
            surface,
            mask: CircularMask::for_width(width),
            rx_capacity: config.rx_buffer_capacity,
            lines: LineLevels::default(),
            stats: ControllerStats::default(),
        })
    }

    /// Handle one chunk of bytes delivered by the transport
    ///
    /// Chunks may split commands and samples anywhere. An empty chunk is a
    /// no-op. Reception is re-armed afterwards while CS is held low.
    pub fn on_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("SPI: {} bytes", bytes.len());

        self.stats.bytes_received = self
            .stats
            .bytes_received
            .saturating_add(bytes.len() as u32);

        for &byte in bytes {
            self.process_byte(byte);
        }

        if self.is_selected() {
            self.start_receiving();
        }
    }

    /// Handle a transition on one of the control lines
    ///
    /// Reports that repeat the last known level are ignored.
    pub fn on_line_change(&mut self, line: Line, level: Level) {
        let last = core::mem::replace(self.lines.get_mut(line), level);
        if last == level {
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{} -> {}", line.pin_name(), level);

        match line {
            Line::Select => self.on_select(level),
            Line::Mode => self.on_mode(level),
            Line::Reset => {
                if level.is_low() {
                    self.on_reset();
                }
            }
        }
    }

    fn on_select(&mut self, level: Level) {
        // Selection starts a fresh transaction; the window and pixels persist
        self.state.abandon_transfer();
        if level.is_low() {
            self.start_receiving();
        } else {
            self.receiver.stop_receiving();
            self.state.end_ram_write();
        }
    }

    fn on_mode(&mut self, level: Level) {
        self.state.mode = if level.is_high() {
            Mode::Data
        } else {
            Mode::Command
        };
        self.state.abandon_transfer();

        self.receiver.stop_receiving();
        if self.is_selected() {
            self.start_receiving();
        }
    }

    fn on_reset(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Hardware reset");

        self.receiver.stop_receiving();
        self.reset_chip();
    }

    fn process_byte(&mut self, byte: u8) {
        match self.state.mode {
            Mode::Command => {
                if let Some(raw) = self.state.assembler.feed(byte) {
                    self.apply(raw.decode());
                }
            }
            Mode::Data if !self.state.ram_write => {
                self.stats.bytes_discarded = self.stats.bytes_discarded.saturating_add(1);
            }
            Mode::Data => match self.state.pending_sample.take() {
                Some(high) => {
                    let sample = u16::from_be_bytes([high, byte]);
                    let outcome = pipeline::write_sample(
                        &mut self.state,
                        &mut self.surface,
                        &self.mask,
                        sample,
                    );
                    self.stats.record_sample(outcome);
                }
                None => self.state.pending_sample = Some(byte),
            },
        }
    }

    fn apply(&mut self, command: Command) {
        if let Command::Unknown(_byte) = command {
            #[cfg(feature = "defmt")]
            defmt::trace!("Ignoring opcode {=u8:#x}", _byte);

            self.stats.unknown_opcodes = self.stats.unknown_opcodes.saturating_add(1);
            return;
        }

        #[cfg(feature = "defmt")]
        if let Some(opcode) = gc9a01_protocol::Opcode::from_byte(command.opcode()) {
            defmt::trace!("{}: {:?}", opcode.mnemonic(), command);
        }

        self.stats.commands_applied = self.stats.commands_applied.saturating_add(1);
        match command {
            Command::SoftwareReset => self.reset_chip(),
            _ => interpreter::apply_command(&mut self.state, &mut self.surface, command),
        }
    }

    fn reset_chip(&mut self) {
        self.stats.resets = self.stats.resets.saturating_add(1);
        interpreter::reset(&mut self.state, &mut self.surface);
    }

    fn start_receiving(&mut self) {
        self.stats.rearms = self.stats.rearms.saturating_add(1);
        self.receiver.start_receiving(self.rx_capacity);
    }

    /// Check if CS is currently asserted
    pub fn is_selected(&self) -> bool {
        self.lines.select.is_low()
    }

    /// Last reported level of a control line
    pub fn line_level(&self, line: Line) -> Level {
        self.lines.get(line)
    }

    /// Controller state
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Activity counters
    pub fn stats(&self) -> &ControllerStats {
        &self.stats
    }

    /// Render target
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Transport
    pub fn receiver(&self) -> &R {
        &self.receiver
    }

    /// Tear down and hand back the transport and surface
    pub fn into_parts(self) -> (R, S) {
        (self.receiver, self.surface)
    }
}
