//! Stored cell grid with mirrored read-time addressing
//!
//! Only the authored quadrant is stored. Coordinates beyond the stored width
//! or height are reflected back into range when the matching mirror flag is
//! set, so the addressable image can be twice as wide and twice as tall as the
//! storage without duplicating any cell.

use ndarray::Array2;
use std::fmt;

use crate::io::error::{Result, SpriteError};
use crate::spatial::pixel::Pixel;

/// Row-major cell storage plus the mirroring that defines the full image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    /// Stored cells indexed by (`row`, `col`)
    cells: Array2<Pixel>,
    mirror_x: bool,
    mirror_y: bool,
}

impl CellGrid {
    /// Wrap stored cells with mirroring flags
    pub const fn new(cells: Array2<Pixel>, mirror_x: bool, mirror_y: bool) -> Self {
        Self {
            cells,
            mirror_x,
            mirror_y,
        }
    }

    /// Stored width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Stored height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether the image is reflected horizontally
    pub const fn mirror_x(&self) -> bool {
        self.mirror_x
    }

    /// Whether the image is reflected vertically
    pub const fn mirror_y(&self) -> bool {
        self.mirror_y
    }

    /// Addressable image width
    pub fn image_width(&self) -> usize {
        mirrored_len(self.width(), self.mirror_x)
    }

    /// Addressable image height
    pub fn image_height(&self) -> usize {
        mirrored_len(self.height(), self.mirror_y)
    }

    /// Map image coordinates to the stored (`row`, `col`) index
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the coordinates lie outside the image
    pub fn stored_index(&self, x: usize, y: usize) -> Result<[usize; 2]> {
        let (image_width, image_height) = (self.image_width(), self.image_height());
        if x >= image_width || y >= image_height {
            return Err(SpriteError::IndexOutOfBounds {
                position: (x, y),
                dimensions: (image_width, image_height),
            });
        }

        Ok([
            reflect(y, self.height(), self.mirror_y),
            reflect(x, self.width(), self.mirror_x),
        ])
    }

    /// Read the cell shown at image coordinates
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the coordinates lie outside the image
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Pixel> {
        let index = self.stored_index(x, y)?;
        self.cells
            .get(index)
            .copied()
            .ok_or(SpriteError::IndexOutOfBounds {
                position: (x, y),
                dimensions: (self.image_width(), self.image_height()),
            })
    }

    /// Stored cells
    pub const fn cells(&self) -> &Array2<Pixel> {
        &self.cells
    }

    /// Mutable stored cells, for resolution buffers
    pub const fn cells_mut(&mut self) -> &mut Array2<Pixel> {
        &mut self.cells
    }

    /// Count stored cells satisfying a predicate
    pub fn count(&self, predicate: impl Fn(Pixel) -> bool) -> usize {
        self.cells.iter().filter(|&&pixel| predicate(pixel)).count()
    }
}

/// Reflect a coordinate past the stored length back into storage
///
/// Identity for coordinates inside the stored range or when not mirrored.
pub const fn reflect(coordinate: usize, stored_len: usize, mirrored: bool) -> usize {
    if mirrored && coordinate >= stored_len {
        stored_len - (coordinate - stored_len) - 1
    } else {
        coordinate
    }
}

const fn mirrored_len(stored_len: usize, mirrored: bool) -> usize {
    if mirrored { stored_len * 2 } else { stored_len }
}

// Full image in template characters, one line per row
impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.image_height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.image_width() {
                let character = self.pixel_at(x, y).map_or('?', Pixel::template_char);
                write!(f, "{character}")?;
            }
        }
        Ok(())
    }
}
