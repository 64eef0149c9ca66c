//! Procedural generation of symmetric pixel-art sprites from quadrant masks
//!
//! A mask describes one quadrant of a sprite using an ambiguity alphabet. A
//! deterministic bit source decides every ambiguous cell, borders are inferred
//! around the result, and the renderer paints the mirrored image with banded
//! hue gradients. The same mask, options and seed material always produce the
//! same pixels.

#![forbid(unsafe_code)]

/// Mask resolution, rendering and the generator facade
pub mod algorithm;
/// Deterministic sources of random decisions
pub mod entropy;
/// Configuration and error handling
pub mod io;
/// Color conversion and band statistics
pub mod math;
/// Cell states, mirrored grids and masks
pub mod spatial;

pub use algorithm::generator::Generator;
pub use algorithm::resolver::Bitmap;
pub use entropy::{BitSource, ByteSource, ReseedingSource, SeededSource};
pub use io::configuration::GenerationOptions;
pub use io::error::{Result, SpriteError};
pub use spatial::{Mask, Pixel};
