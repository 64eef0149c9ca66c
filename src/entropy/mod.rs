//! Deterministic bit sources driving every random decision
//!
//! A source yields a stream of boolean decisions for mask resolution and one
//! derived integer that seeds the continuous-valued generator used by the
//! renderer. Replaying a source from the same seed material replays the sprite.

use crate::io::error::Result;
use std::fmt;

/// Byte-buffer source wrapping at the end of its bits
pub mod bytes;
/// Byte-buffer source refilling itself from operating system entropy
pub mod reseeding;
/// PRNG-backed source seeded with an integer
pub mod seeded;

pub use bytes::ByteSource;
pub use reseeding::ReseedingSource;
pub use seeded::SeededSource;

/// Capability shared by all sources of randomness
pub trait BitSource: fmt::Debug {
    /// Produce the next decision, advancing the source exactly once
    fn next_bit(&mut self) -> bool;

    /// Derive an integer suitable for seeding a secondary generator
    ///
    /// # Errors
    ///
    /// Returns an error if the source holds too little material to derive a value
    fn seed_value(&mut self) -> Result<i64>;
}

impl<S: BitSource + ?Sized> BitSource for Box<S> {
    fn next_bit(&mut self) -> bool {
        (**self).next_bit()
    }

    fn seed_value(&mut self) -> Result<i64> {
        (**self).seed_value()
    }
}
