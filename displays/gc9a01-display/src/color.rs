//! Packed 32-bit color
//!
//! Layout matches the host framebuffer word: alpha in bits 24-31, then the
//! red, green and blue channels in bits 16-23, 8-15 and 0-7.

/// Opaque alpha bits
pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

/// Packed 32-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgba(pub u32);

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    /// Opaque black
    pub const BLACK: Rgba = Rgba(OPAQUE_ALPHA);

    /// Opaque white
    pub const WHITE: Rgba = Rgba(0xFFFF_FFFF);

    /// Expand a 5-6-5 packed sample to an opaque color
    ///
    /// Bits 0-4 land at bit 19, bits 5-10 at bit 10 and bits 11-15 at bit 3,
    /// so each field sits at the top of its channel byte.
    pub const fn from_rgb565(value: u16) -> Self {
        let v = value as u32;
        Rgba(OPAQUE_ALPHA | ((v & 0x001F) << 19) | ((v & 0x07E0) << 5) | ((v & 0xF800) >> 8))
    }

    /// Build an opaque color from channel bytes
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Rgba(OPAQUE_ALPHA | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Channel in bits 16-23
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Channel in bits 8-15
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Channel in bits 0-7
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Alpha in bits 24-31
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Replace each color channel with `255 - channel`; alpha is kept
    pub const fn inverted(self) -> Self {
        Rgba((self.0 & 0xFF00_0000) | (!self.0 & 0x00FF_FFFF))
    }

    /// Raw packed value
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for Rgba {
    fn from(value: u32) -> Self {
        Rgba(value)
    }
}

impl From<Rgba> for u32 {
    fn from(color: Rgba) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_field_placement() {
        assert_eq!(Rgba::from_rgb565(0x0000), Rgba::BLACK);
        assert_eq!(Rgba::from_rgb565(0x001F), Rgba(0xFFF8_0000));
        assert_eq!(Rgba::from_rgb565(0x07E0), Rgba(0xFF00_FC00));
        assert_eq!(Rgba::from_rgb565(0xF800), Rgba(0xFF00_00F8));
        assert_eq!(Rgba::from_rgb565(0xFFFF), Rgba(0xFFF8_FCF8));
    }

    #[test]
    fn test_rgb565_matches_formula() {
        for value in [0x1234u16, 0xA5A5, 0x0841, 0xF81F, 0x7BEF] {
            let v = value as u32;
            let expected = 0xFF00_0000 | ((v & 0x1F) << 19) | ((v & 0x7E0) << 5) | ((v & 0xF800) >> 8);
            assert_eq!(Rgba::from_rgb565(value).to_u32(), expected);
        }
    }

    #[test]
    fn test_inversion() {
        let color = Rgba::from_channels(0x10, 0x80, 0xF0);
        let inv = color.inverted();
        assert_eq!(inv.red(), 0xEF);
        assert_eq!(inv.green(), 0x7F);
        assert_eq!(inv.blue(), 0x0F);
        assert_eq!(inv.alpha(), 0xFF);
        assert_eq!(inv.inverted(), color);
    }

    #[test]
    fn test_black_inverts_to_white() {
        assert_eq!(Rgba::BLACK.inverted(), Rgba::WHITE);
    }
}
