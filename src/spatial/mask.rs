//! Immutable sprite templates authored as a single quadrant

use ndarray::Array2;
use std::fmt;

use crate::io::error::{Result, SpriteError};
use crate::spatial::grid::CellGrid;
use crate::spatial::pixel::Pixel;

/// Unresolved sprite template
///
/// A mask is never modified after construction. Resolution clones its grid,
/// so the same mask can be shared by many generators and resolved any number
/// of times with different bit sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    grid: CellGrid,
}

impl Mask {
    /// Parse a mask from equal-length template rows
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A row differs in length from the first row (`MalformedTemplate`)
    /// - A character lies outside the template alphabet
    pub fn from_template<S: AsRef<str>>(
        rows: &[S],
        mirror_x: bool,
        mirror_y: bool,
    ) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut cells = Vec::with_capacity(width * height);

        for (row_index, row) in rows.iter().enumerate() {
            let row_width = row.as_ref().chars().count();
            if row_width != width {
                return Err(SpriteError::MalformedTemplate {
                    row: row_index,
                    width: row_width,
                    expected: width,
                });
            }

            for (column, character) in row.as_ref().chars().enumerate() {
                let pixel = Pixel::from_template_char(character).ok_or(
                    SpriteError::UnknownTemplateCharacter {
                        row: row_index,
                        column,
                        character,
                    },
                )?;
                cells.push(pixel);
            }
        }

        Self::from_cells(width, height, cells, mirror_x, mirror_y)
    }

    /// Build a mask from row-major cells
    ///
    /// # Errors
    ///
    /// Returns `CellCountMismatch` if `cells.len() != width * height`
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Pixel>,
        mirror_x: bool,
        mirror_y: bool,
    ) -> Result<Self> {
        let count = cells.len();
        let array = Array2::from_shape_vec((height, width), cells).map_err(|_shape_error| {
            SpriteError::CellCountMismatch {
                cells: count,
                width,
                height,
            }
        })?;
        Ok(Self::from_array(array, mirror_x, mirror_y))
    }

    /// Build a mask from a (`row`, `col`) array
    pub const fn from_array(cells: Array2<Pixel>, mirror_x: bool, mirror_y: bool) -> Self {
        Self {
            grid: CellGrid::new(cells, mirror_x, mirror_y),
        }
    }

    /// Stored quadrant width
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Stored quadrant height
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Whether the image is reflected horizontally
    pub const fn mirror_x(&self) -> bool {
        self.grid.mirror_x()
    }

    /// Whether the image is reflected vertically
    pub const fn mirror_y(&self) -> bool {
        self.grid.mirror_y()
    }

    /// Width of the generated sprite
    pub fn image_width(&self) -> usize {
        self.grid.image_width()
    }

    /// Height of the generated sprite
    pub fn image_height(&self) -> usize {
        self.grid.image_height()
    }

    /// Template state shown at image coordinates
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the coordinates lie outside the image
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Pixel> {
        self.grid.pixel_at(x, y)
    }

    /// Number of stored cells resolved by a bit draw
    ///
    /// Equals the number of decisions one resolution consumes.
    pub fn ambiguity_count(&self) -> usize {
        self.grid.count(Pixel::is_ambiguous)
    }

    /// Underlying cell grid
    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
