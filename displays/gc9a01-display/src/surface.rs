//! Surface trait
//!
//! Defines the interface to the pixel storage the controller renders into.

use crate::color::Rgba;

/// Surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Coordinate outside the surface
    OutOfBounds,
}

/// Pixel surface trait
///
/// The controller only writes; it never reads pixels back.
pub trait Surface {
    /// Get the surface dimensions as (width, height) in pixels
    fn dimensions(&self) -> (u16, u16);

    /// Write one pixel
    fn write_pixel(&mut self, x: u16, y: u16, color: Rgba) -> Result<(), SurfaceError>;

    /// Fill the whole surface with one color
    fn fill(&mut self, color: Rgba) -> Result<(), SurfaceError> {
        let (width, height) = self.dimensions();
        for y in 0..height {
            for x in 0..width {
                self.write_pixel(x, y, color)?;
            }
        }
        Ok(())
    }

    /// Check if a coordinate lies on the surface
    fn contains(&self, x: u16, y: u16) -> bool {
        let (width, height) = self.dimensions();
        x < width && y < height
    }
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn dimensions(&self) -> (u16, u16) {
        (**self).dimensions()
    }

    fn write_pixel(&mut self, x: u16, y: u16, color: Rgba) -> Result<(), SurfaceError> {
        (**self).write_pixel(x, y, color)
    }

    fn fill(&mut self, color: Rgba) -> Result<(), SurfaceError> {
        (**self).fill(color)
    }
}
