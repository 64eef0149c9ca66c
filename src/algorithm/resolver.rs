//! Two-pass resolution of ambiguous masks into concrete bitmaps
//!
//! Pass one draws a bit for every ambiguous cell in row-major order over the
//! stored grid. Pass two outlines the solid cells. Both passes touch only the
//! stored quadrant; mirroring is applied when the bitmap is read.

use ndarray::Array2;
use std::fmt;

use crate::entropy::BitSource;
use crate::io::error::Result;
use crate::spatial::{CellGrid, Mask, Pixel};

/// Resolved sprite shape containing only `Empty`, `Body` and `Border` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    grid: CellGrid,
}

impl Bitmap {
    /// Addressable image width
    pub fn image_width(&self) -> usize {
        self.grid.image_width()
    }

    /// Addressable image height
    pub fn image_height(&self) -> usize {
        self.grid.image_height()
    }

    /// Resolved state shown at image coordinates
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the coordinates lie outside the image
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Pixel> {
        self.grid.pixel_at(x, y)
    }

    /// Underlying cell grid
    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

/// Resolve a copy of the mask, consuming one bit per ambiguous cell
pub fn resolve<S: BitSource + ?Sized>(mask: &Mask, source: &mut S) -> Bitmap {
    let mut grid = mask.grid().clone();
    disambiguate(grid.cells_mut(), source);
    infer_borders(&mut grid);
    Bitmap { grid }
}

/// Replace every ambiguous cell using one draw each, in row-major order
///
/// A `true` draw selects the non-body alternative.
pub fn disambiguate<S: BitSource + ?Sized>(cells: &mut Array2<Pixel>, source: &mut S) {
    for cell in cells.iter_mut() {
        *cell = match *cell {
            Pixel::BodyOrEmpty if source.next_bit() => Pixel::Empty,
            Pixel::BodyOrBorder if source.next_bit() => Pixel::Border,
            Pixel::BodyOrEmpty | Pixel::BodyOrBorder => Pixel::Body,
            resolved => resolved,
        };
    }
}

/// Turn empty 4-neighbors of solid cells into borders
///
/// Runs in place and in row-major order, so borders written while scanning
/// are themselves outlined when reached. Neighbors across a mirror axis (below
/// when `mirror_y`, right when `mirror_x`) are left alone since the reflection
/// supplies them.
pub fn infer_borders(grid: &mut CellGrid) {
    let (mirror_x, mirror_y) = (grid.mirror_x(), grid.mirror_y());
    let cells = grid.cells_mut();
    let (rows, cols) = cells.dim();

    for row in 0..rows {
        for col in 0..cols {
            if !cells.get([row, col]).is_some_and(|pixel| pixel.is_solid()) {
                continue;
            }

            let above = row.checked_sub(1).map(|above| [above, col]);
            let below = (!mirror_y).then_some([row + 1, col]);
            let left = col.checked_sub(1).map(|left| [row, left]);
            let right = (!mirror_x).then_some([row, col + 1]);

            for neighbor in [above, below, left, right].into_iter().flatten() {
                if let Some(cell) = cells.get_mut(neighbor)
                    && *cell == Pixel::Empty
                {
                    *cell = Pixel::Border;
                }
            }
        }
    }
}
