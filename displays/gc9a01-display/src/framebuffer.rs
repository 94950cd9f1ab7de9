//! In-memory framebuffer
//!
//! A `Surface` backed by a heap buffer, with read-back for tests and for
//! hosts that copy the finished image somewhere else.

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Rgba;
use crate::surface::{Surface, SurfaceError};

/// Bytes per stored pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major 32-bit framebuffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgba>,
    /// Number of individual pixel writes (fills excluded)
    writes: u64,
}

impl Framebuffer {
    /// Create a framebuffer filled with `background`
    pub fn new(width: u16, height: u16, background: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
            writes: 0,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Read back a pixel
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Number of pixel writes since creation
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    /// Check if every pixel holds `color`
    pub fn is_filled_with(&self, color: Rgba) -> bool {
        self.pixels.iter().all(|&p| p == color)
    }

    /// Pack the image as little-endian 32-bit words, row-major
    ///
    /// This is the byte layout of the host framebuffer.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * BYTES_PER_PIXEL);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_u32().to_le_bytes());
        }
        bytes
    }
}

impl Surface for Framebuffer {
    fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn write_pixel(&mut self, x: u16, y: u16, color: Rgba) -> Result<(), SurfaceError> {
        let index = self.index(x, y).ok_or(SurfaceError::OutOfBounds)?;
        self.pixels[index] = color;
        self.writes += 1;
        Ok(())
    }

    fn fill(&mut self, color: Rgba) -> Result<(), SurfaceError> {
        self.pixels.fill(color);
        Ok(())
    }
}
