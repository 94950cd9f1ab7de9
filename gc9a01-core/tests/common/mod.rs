//! Shared harness for controller integration tests

#![allow(dead_code)]

use gc9a01_core::{ChipConfig, Framebuffer, Gc9a01, Level, Line, SpiReceiver};
use gc9a01_protocol::Command;

/// Transport that records every arm/disarm request
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingReceiver {
    pub armed: bool,
    pub starts: Vec<usize>,
    pub stops: usize,
}

impl SpiReceiver for RecordingReceiver {
    fn start_receiving(&mut self, capacity: usize) {
        self.armed = true;
        self.starts.push(capacity);
    }

    fn stop_receiving(&mut self) {
        self.armed = false;
        self.stops += 1;
    }
}

pub type Chip = Gc9a01<RecordingReceiver, Framebuffer>;

/// 240x240 controller with a white background, so writes are visible
pub fn new_chip() -> Chip {
    let config = ChipConfig {
        background: 0xFFFF_FFFF,
        ..ChipConfig::default()
    };
    let fb = config.framebuffer().unwrap();
    Gc9a01::new(&config, RecordingReceiver::default(), fb).unwrap()
}

/// Controller with CS asserted
pub fn selected_chip() -> Chip {
    let mut chip = new_chip();
    chip.on_line_change(Line::Select, Level::Low);
    chip
}

/// Send opcode + parameters with DC low
pub fn send_command(chip: &mut Chip, cmd: Command) {
    chip.on_line_change(Line::Mode, Level::Low);
    chip.on_bytes(&cmd.to_bytes().unwrap());
}

/// Send raw bytes with DC high
pub fn send_data(chip: &mut Chip, bytes: &[u8]) {
    chip.on_line_change(Line::Mode, Level::High);
    chip.on_bytes(bytes);
}

/// Encode samples big-endian
pub fn samples_to_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_be_bytes()).collect()
}

/// Set window, start a memory write and stream samples into it
pub fn fill_window(chip: &mut Chip, cols: (u16, u16), rows: (u16, u16), samples: &[u16]) {
    send_command(
        chip,
        Command::ColumnAddressSet {
            start: cols.0,
            end: cols.1,
        },
    );
    send_command(
        chip,
        Command::RowAddressSet {
            start: rows.0,
            end: rows.1,
        },
    );
    send_command(chip, Command::MemoryWrite);
    send_data(chip, &samples_to_bytes(samples));
}
