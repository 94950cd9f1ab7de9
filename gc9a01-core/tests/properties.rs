//! Stream properties: chunk boundaries and the sample round trip

mod common;

use common::RecordingReceiver;
use gc9a01_core::{ChipConfig, ControllerStats, Framebuffer, Gc9a01, Level, Line, Rgba};
use gc9a01_protocol::Command;
use proptest::prelude::*;

type Chip = Gc9a01<RecordingReceiver, Framebuffer>;

fn small_chip() -> Chip {
    let config = ChipConfig {
        width: 32,
        height: 32,
        ..ChipConfig::default()
    };
    let fb = config.framebuffer().unwrap();
    let mut chip = Gc9a01::new(&config, RecordingReceiver::default(), fb).unwrap();
    chip.on_line_change(Line::Select, Level::Low);
    chip
}

/// Split `bytes` at the given (unsorted, possibly repeated) offsets
fn split_at_cuts(bytes: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    let mut cuts: Vec<usize> = cuts.iter().map(|c| c % (bytes.len() + 1)).collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut chunks = Vec::new();
    let mut start = 0;
    for cut in cuts {
        chunks.push(bytes[start..cut].to_vec());
        start = cut;
    }
    chunks.push(bytes[start..].to_vec());
    chunks
}

/// Run command bytes then data bytes, each phase delivered as `chunks`
fn run(command_chunks: &[Vec<u8>], data_chunks: &[Vec<u8>]) -> Chip {
    let mut chip = small_chip();
    for chunk in command_chunks {
        chip.on_bytes(chunk);
    }
    chip.on_line_change(Line::Mode, Level::High);
    for chunk in data_chunks {
        chip.on_bytes(chunk);
    }
    chip
}

/// Stats with the per-delivery counters zeroed
fn chunk_independent(stats: &ControllerStats) -> ControllerStats {
    ControllerStats {
        rearms: 0,
        ..*stats
    }
}

fn window_setup() -> Vec<u8> {
    let mut bytes = Vec::new();
    for cmd in [
        Command::ColumnAddressSet { start: 4, end: 27 },
        Command::RowAddressSet { start: 4, end: 27 },
        Command::MemoryWrite,
    ] {
        bytes.extend_from_slice(&cmd.to_bytes().unwrap());
    }
    bytes
}

/// Full session: window setup, pixels, a reset and a second frame
fn session_streams() -> (Vec<u8>, Vec<u8>) {
    let mut commands = window_setup();
    commands.extend_from_slice(&Command::InversionOn.to_bytes().unwrap());
    commands.extend_from_slice(&Command::SoftwareReset.to_bytes().unwrap());
    commands.extend_from_slice(&window_setup());
    commands.extend_from_slice(&[0xEF, 0x36, 0x48, 0x3A, 0x55]);

    let data: Vec<u8> = (0..=255u8).cycle().take(2 * 24 * 24 + 3).collect();
    (commands, data)
}

fn one_byte_chunks(bytes: &[u8]) -> Vec<Vec<u8>> {
    bytes.iter().map(|&b| vec![b]).collect()
}

#[test]
fn test_single_byte_delivery_matches_single_chunk() {
    let (commands, data) = session_streams();

    let whole = run(&[commands.clone()], &[data.clone()]);
    let bytewise = run(&one_byte_chunks(&commands), &one_byte_chunks(&data));

    assert_eq!(whole.state(), bytewise.state());
    assert_eq!(whole.surface(), bytewise.surface());
    assert_eq!(
        chunk_independent(whole.stats()),
        chunk_independent(bytewise.stats())
    );
    assert_eq!(whole.stats().samples_rendered(), 24 * 24 + 1);
    assert_eq!(whole.state().pending_sample(), data.last().copied());
    assert!(bytewise.stats().rearms > whole.stats().rearms);
}

proptest! {
    #[test]
    fn command_stream_chunking_is_invisible(
        tail in proptest::collection::vec(any::<u8>(), 0..64),
        cuts in proptest::collection::vec(any::<usize>(), 0..16),
    ) {
        let mut stream = window_setup();
        stream.extend_from_slice(&tail);

        let whole = run(&[stream.clone()], &[]);
        let split = run(&split_at_cuts(&stream, &cuts), &[]);

        prop_assert_eq!(whole.state(), split.state());
        prop_assert_eq!(whole.surface(), split.surface());
        prop_assert_eq!(
            chunk_independent(whole.stats()),
            chunk_independent(split.stats())
        );
    }

    #[test]
    fn pixel_stream_chunking_is_invisible(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        cuts in proptest::collection::vec(any::<usize>(), 0..32),
    ) {
        let setup = window_setup();

        let whole = run(&[setup.clone()], &[data.clone()]);
        let split = run(&[setup], &split_at_cuts(&data, &cuts));

        prop_assert_eq!(whole.state(), split.state());
        prop_assert_eq!(whole.surface(), split.surface());
        prop_assert_eq!(
            chunk_independent(whole.stats()),
            chunk_independent(split.stats())
        );
    }

    #[test]
    fn odd_byte_count_leaves_half_sample_pending(
        data in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let chip = run(&[window_setup()], &[data.clone()]);
        let expected = if data.len() % 2 == 1 { data.last().copied() } else { None };
        prop_assert_eq!(chip.state().pending_sample(), expected);
        prop_assert_eq!(chip.stats().samples_rendered() as usize, data.len() / 2);
    }

    #[test]
    fn sample_round_trips_at_center(sample in any::<u16>()) {
        let mut bytes = Vec::new();
        for cmd in [
            Command::ColumnAddressSet { start: 16, end: 16 },
            Command::RowAddressSet { start: 16, end: 16 },
            Command::MemoryWrite,
        ] {
            bytes.extend_from_slice(&cmd.to_bytes().unwrap());
        }
        let chip = run(&[bytes], &[sample.to_be_bytes().to_vec()]);

        let v = u32::from(sample);
        let expected = 0xFF00_0000 | ((v & 0x1F) << 19) | ((v & 0x7E0) << 5) | ((v & 0xF800) >> 8);
        prop_assert_eq!(chip.surface().pixel(16, 16), Some(Rgba(expected)));
    }
}
