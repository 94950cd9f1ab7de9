//! Addressing window and write cursor
//!
//! CASET/RASET define an inclusive rectangle. Pixel data fills it left to
//! right, top to bottom, and wraps back to the top-left corner.

/// Inclusive rectangular write region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    pub col_start: u16,
    pub col_end: u16,
    pub row_start: u16,
    pub row_end: u16,
}

impl AddressWindow {
    /// Window covering a whole surface
    pub const fn full(width: u16, height: u16) -> Self {
        Self {
            col_start: 0,
            col_end: width.saturating_sub(1),
            row_start: 0,
            row_end: height.saturating_sub(1),
        }
    }

    /// Check if a cursor position lies inside the window
    pub const fn contains(&self, cursor: Cursor) -> bool {
        cursor.col >= self.col_start
            && cursor.col <= self.col_end
            && cursor.row >= self.row_start
            && cursor.row <= self.row_end
    }

    /// Top-left corner, where the cursor starts
    pub const fn origin(&self) -> Cursor {
        Cursor {
            col: self.col_start,
            row: self.row_start,
        }
    }

    /// Number of pixels in the window (0 if start > end on either axis)
    pub const fn area(&self) -> u32 {
        if self.col_start > self.col_end || self.row_start > self.row_end {
            return 0;
        }
        let cols = (self.col_end - self.col_start) as u32 + 1;
        let rows = (self.row_end - self.row_start) as u32 + 1;
        cols * rows
    }

    /// Check if the window lies entirely on a surface of the given size
    pub const fn fits(&self, width: u16, height: u16) -> bool {
        self.col_end < width && self.row_end < height
    }
}

/// Current write position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub col: u16,
    pub row: u16,
}

impl Cursor {
    /// Create a cursor at a position
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Step to the next pixel in raster order, wrapping inside `window`
    ///
    /// Past `col_end` the cursor returns to `col_start` on the next row; past
    /// `row_end` it returns to `row_start`.
    pub fn advance(&mut self, window: &AddressWindow) {
        match self.col.checked_add(1) {
            Some(col) if col <= window.col_end => self.col = col,
            _ => {
                self.col = window.col_start;
                self.row = match self.row.checked_add(1) {
                    Some(row) if row <= window.row_end => row,
                    _ => window.row_start,
                };
            }
        }
    }
}
