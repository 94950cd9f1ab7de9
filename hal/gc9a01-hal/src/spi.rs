//! SPI receive abstractions
//!
//! The model is a bus peripheral: it never pushes data, it only asks the host
//! transport to deliver the next chunk of bytes. Delivery is pull-based, so
//! the controller re-arms the receiver after every chunk.

/// Smallest receive buffer that can hold any single command plus arguments
///
/// The longest command (CASET/RASET) is one opcode and four parameters.
pub const MIN_RX_CAPACITY: usize = 5;

/// Default receive buffer size shared by every transfer
pub const DEFAULT_RX_CAPACITY: usize = 256;

/// SPI peripheral-side receiver
///
/// Implementations wrap the host's SPI transport. Once armed, the transport
/// delivers up to `capacity` bytes and then waits to be armed again.
pub trait SpiReceiver {
    /// Arm reception of the next chunk of up to `capacity` bytes
    fn start_receiving(&mut self, capacity: usize);

    /// Disarm reception, abandoning any partially filled chunk
    fn stop_receiving(&mut self);
}

impl<T: SpiReceiver + ?Sized> SpiReceiver for &mut T {
    fn start_receiving(&mut self, capacity: usize) {
        (**self).start_receiving(capacity);
    }

    fn stop_receiving(&mut self) {
        (**self).stop_receiving();
    }
}

/// Receiver that ignores arm/disarm requests
///
/// Useful when bytes are pushed into the controller directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReceiver;

impl SpiReceiver for NullReceiver {
    fn start_receiving(&mut self, _capacity: usize) {}

    fn stop_receiving(&mut self) {}
}
