//! Error types for mask construction, pixel addressing and seed derivation

use std::fmt;

/// Main error type for all sprite generation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteError {
    /// Template rows do not all share the same length
    MalformedTemplate {
        /// Index of the first offending row
        row: usize,
        /// Length of the offending row in characters
        width: usize,
        /// Length established by the first row
        expected: usize,
    },

    /// Raw cell buffer does not cover `width × height` cells
    CellCountMismatch {
        /// Number of cells supplied
        cells: usize,
        /// Declared stored width
        width: usize,
        /// Declared stored height
        height: usize,
    },

    /// Template contains a character outside the mask alphabet
    UnknownTemplateCharacter {
        /// Row of the character
        row: usize,
        /// Column of the character
        column: usize,
        /// The unrecognised character
        character: char,
    },

    /// Pixel access outside the addressable (mirrored) image
    IndexOutOfBounds {
        /// Requested coordinates (x, y)
        position: (usize, usize),
        /// Addressable image dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// Byte-backed source holds too few bytes to derive a 64-bit seed
    InsufficientSeedMaterial {
        /// Bytes held by the source
        available: usize,
        /// Bytes needed for the derived seed
        required: usize,
    },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTemplate {
                row,
                width,
                expected,
            } => {
                write!(
                    f,
                    "Malformed template: row {row} has {width} columns, expected {expected}"
                )
            }
            Self::CellCountMismatch {
                cells,
                width,
                height,
            } => {
                write!(
                    f,
                    "Malformed template: {cells} cells cannot fill a {width}x{height} mask"
                )
            }
            Self::UnknownTemplateCharacter {
                row,
                column,
                character,
            } => {
                write!(
                    f,
                    "Unknown template character {character:?} at row {row}, column {column}"
                )
            }
            Self::IndexOutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Pixel ({}, {}) is out of bounds for a {}x{} image",
                    position.0, position.1, dimensions.0, dimensions.1
                )
            }
            Self::InsufficientSeedMaterial {
                available,
                required,
            } => {
                write!(
                    f,
                    "Insufficient seed material: {available} bytes available, {required} required"
                )
            }
        }
    }
}

impl std::error::Error for SpriteError {}

/// Convenience type alias for sprite generation results
pub type Result<T> = std::result::Result<T, SpriteError>;
