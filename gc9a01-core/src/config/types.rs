//! Configuration type definitions
//!
//! The defaults describe the 1.28" 240x240 GC9A01 module. Hosts may load a
//! different configuration from TOML when the `toml` feature is enabled.

use gc9a01_display::{Framebuffer, Rgba};
use gc9a01_hal::spi::{DEFAULT_RX_CAPACITY, MIN_RX_CAPACITY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default panel width in pixels
pub const DEFAULT_WIDTH: u16 = 240;

/// Default panel height in pixels
pub const DEFAULT_HEIGHT: u16 = 240;

/// Largest accepted panel dimension
pub const MAX_DIMENSION: u16 = 4096;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Width or height is zero
    ZeroDimension,
    /// Width or height exceeds [`MAX_DIMENSION`]
    DimensionTooLarge,
    /// Receive buffer cannot hold one complete command
    BufferTooSmall,
    /// Surface size differs from the configured width and height
    DimensionMismatch,
    /// Configuration text could not be parsed
    Parse,
}

/// Chip configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChipConfig {
    /// Surface width in pixels
    pub width: u16,
    /// Surface height in pixels
    pub height: u16,
    /// Bytes requested from the transport per transfer
    pub rx_buffer_capacity: usize,
    /// Packed color the surface is filled with at power-on
    pub background: u32,
}

impl Default for ChipConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rx_buffer_capacity: DEFAULT_RX_CAPACITY,
            background: Rgba::BLACK.to_u32(),
        }
    }
}

impl ChipConfig {
    /// Create a config for a panel of the given size
    pub const fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            rx_buffer_capacity: DEFAULT_RX_CAPACITY,
            background: Rgba::BLACK.to_u32(),
        }
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::DimensionTooLarge);
        }
        if self.rx_buffer_capacity < MIN_RX_CAPACITY {
            return Err(ConfigError::BufferTooSmall);
        }
        Ok(())
    }

    /// Background color
    pub fn background_color(&self) -> Rgba {
        Rgba(self.background)
    }

    /// Allocate a framebuffer matching this configuration
    pub fn framebuffer(&self) -> Result<Framebuffer, ConfigError> {
        self.validate()?;
        Ok(Framebuffer::new(
            self.width,
            self.height,
            self.background_color(),
        ))
    }

    /// Parse and validate a TOML configuration
    ///
    /// Missing keys keep their defaults:
    /// ```toml
    /// width = 240
    /// height = 240
    /// rx_buffer_capacity = 256
    /// background = 0xFF000000
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: ChipConfig = toml::from_str(input).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
