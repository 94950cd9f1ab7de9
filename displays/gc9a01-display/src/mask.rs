//! Round visible area of the panel
//!
//! The panel stores a square image but only a centered disc is visible.
//! Pixels outside the disc are forced to black when written.

use crate::color::Rgba;

/// Centered circular mask over a square surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CircularMask {
    center: i32,
    radius_sq: i64,
}

impl CircularMask {
    /// Mask for a surface of the given width
    ///
    /// Center and radius are both `width / 2` (integer division). The same
    /// center is used for rows and columns.
    pub const fn for_width(width: u16) -> Self {
        let center = (width / 2) as i32;
        Self {
            center,
            radius_sq: center as i64 * center as i64,
        }
    }

    /// Center coordinate on both axes
    pub const fn center(&self) -> i32 {
        self.center
    }

    /// Check if a coordinate lies in the visible disc (boundary included)
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        let dx = x as i64 - self.center as i64;
        let dy = y as i64 - self.center as i64;
        dx * dx + dy * dy <= self.radius_sq
    }

    /// Color actually shown at a coordinate
    pub const fn apply(&self, x: u16, y: u16, color: Rgba) -> Rgba {
        if self.contains(x, y) {
            color
        } else {
            Rgba::BLACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_masked() {
        let mask = CircularMask::for_width(240);
        assert!(!mask.contains(0, 0));
        assert!(!mask.contains(239, 0));
        assert!(!mask.contains(0, 239));
        assert!(!mask.contains(239, 239));
    }

    #[test]
    fn test_center_and_edges_visible() {
        let mask = CircularMask::for_width(240);
        assert!(mask.contains(120, 120));
        // Exactly on the radius
        assert!(mask.contains(0, 120));
        assert!(mask.contains(120, 0));
        assert!(mask.contains(120, 240));
    }

    #[test]
    fn test_apply_forces_black() {
        let mask = CircularMask::for_width(240);
        let color = Rgba(0xFF12_3456);
        assert_eq!(mask.apply(1, 1, color), Rgba::BLACK);
        assert_eq!(mask.apply(120, 120, color), color);
    }

    #[test]
    fn test_far_coordinates_do_not_overflow() {
        let mask = CircularMask::for_width(240);
        assert!(!mask.contains(u16::MAX, u16::MAX));
    }
}
