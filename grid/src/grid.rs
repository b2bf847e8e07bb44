//! Bounds-checked byte grid addressed by (x, y).

use crate::error::{GridError, GridResult};

/// A rectangular grid of byte cells with a row-major linear layout.
///
/// Cell `(x, y)` lives at linear index `x + y * width`. Every access is
/// bounds-checked and returns an error on failure; the grid never panics
/// on bad coordinates and never wraps an out-of-range index onto a
/// neighbouring cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl ByteGrid {
    /// Creates a zero-filled grid of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![0; len],
        }
    }

    /// Creates a grid from an existing cell buffer.
    ///
    /// Fails with [`GridError::DimensionMismatch`] unless
    /// `cells.len() == width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<u8>) -> GridResult<Self> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Returns the grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the raw cell buffer.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Consumes the grid and returns its cell buffer.
    #[must_use]
    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }

    /// Maps `(x, y)` to its linear index.
    ///
    /// Negative coordinates and coordinates at or past the declared extent
    /// fail with [`GridError::OutOfBounds`]. The computed index is also
    /// checked against the actual buffer length, so a buffer that somehow
    /// fell out of sync with the dimensions fails loudly instead of
    /// corrupting a neighbouring cell.
    pub fn index(&self, x: i64, y: i64) -> GridResult<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return Err(self.out_of_bounds(x, y));
        }
        let idx = x as usize + y as usize * self.width as usize;
        if idx >= self.cells.len() {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(idx)
    }

    /// Reads the cell at `(x, y)`.
    pub fn get(&self, x: i64, y: i64) -> GridResult<u8> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Writes the cell at `(x, y)`.
    pub fn set(&mut self, x: i64, y: i64, value: u8) -> GridResult<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Increments the cell at `(x, y)`, clamping at 255.
    pub fn saturating_increment(&mut self, x: i64, y: i64) -> GridResult<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = self.cells[idx].saturating_add(1);
        Ok(())
    }

    /// Decrements the cell at `(x, y)`, clamping at 0.
    pub fn saturating_decrement(&mut self, x: i64, y: i64) -> GridResult<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = self.cells[idx].saturating_sub(1);
        Ok(())
    }

    /// Validates that the half-open rectangle `[x, x+w) x [y, y+h)` lies
    /// entirely inside the grid.
    ///
    /// Rectangle mutations call this before touching any cell, so a
    /// partially out-of-range rectangle fails without partial writes.
    pub fn check_rect(&self, x: i64, y: i64, w: u32, h: u32) -> GridResult<()> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.index(x, y)?;
        self.index(x + i64::from(w) - 1, y + i64::from(h) - 1)?;
        Ok(())
    }

    /// Sets every cell in the rectangle to `value`, row-major.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, value: u8) -> GridResult<()> {
        self.apply_rect(x, y, w, h, |cell| *cell = value)
    }

    /// Increments every cell in the rectangle, clamping at 255.
    pub fn increment_rect(&mut self, x: i64, y: i64, w: u32, h: u32) -> GridResult<()> {
        self.apply_rect(x, y, w, h, |cell| *cell = cell.saturating_add(1))
    }

    /// Decrements every cell in the rectangle, clamping at 0.
    pub fn decrement_rect(&mut self, x: i64, y: i64, w: u32, h: u32) -> GridResult<()> {
        self.apply_rect(x, y, w, h, |cell| *cell = cell.saturating_sub(1))
    }

    fn apply_rect(
        &mut self,
        x: i64,
        y: i64,
        w: u32,
        h: u32,
        mut op: impl FnMut(&mut u8),
    ) -> GridResult<()> {
        self.check_rect(x, y, w, h)?;
        for row in 0..i64::from(h) {
            for col in 0..i64::from(w) {
                let idx = self.index(x + col, y + row)?;
                op(&mut self.cells[idx]);
            }
        }
        Ok(())
    }

    const fn out_of_bounds(&self, x: i64, y: i64) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}
