//! Spatial data structures for sprite templates
//!
//! This module contains spatial-related functionality including:
//! - Cell states and the template alphabet
//! - Stored grids with mirrored addressing
//! - Masks and built-in templates

/// Stored cell grid and mirrored coordinate mapping
pub mod grid;
/// Immutable sprite templates
pub mod mask;
/// Cell states before and after resolution
pub mod pixel;
/// Built-in templates
pub mod presets;

pub use grid::CellGrid;
pub use mask::Mask;
pub use pixel::Pixel;
