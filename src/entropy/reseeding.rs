use rand::RngCore;
use tracing::trace;

use crate::entropy::{BitSource, ByteSource};
use crate::io::configuration::RESEED_BYTES;
use crate::io::error::Result;

/// Byte-backed source that draws fresh operating system entropy instead of wrapping
///
/// This is the default source for fully random sprites. Output is not
/// reproducible once the initial material runs out.
#[derive(Debug, Clone)]
pub struct ReseedingSource {
    inner: ByteSource,
    refills: usize,
}

impl ReseedingSource {
    /// Create a source seeded with cryptographically secure random bytes
    pub fn new() -> Self {
        Self::from_bytes(&fresh_material())
    }

    /// Create a source whose first decisions come from the given material
    pub fn from_bytes(material: &[u8]) -> Self {
        Self {
            inner: ByteSource::new(material),
            refills: 0,
        }
    }

    /// Number of times fresh material has replaced exhausted bits
    pub const fn refills(&self) -> usize {
        self.refills
    }
}

impl Default for ReseedingSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BitSource for ReseedingSource {
    fn next_bit(&mut self) -> bool {
        if self.inner.is_exhausted() {
            self.inner.refill(&fresh_material());
            self.refills += 1;
            trace!(refills = self.refills, "Bit source reseeded");
        }
        self.inner.next_bit()
    }

    fn seed_value(&mut self) -> Result<i64> {
        self.inner.seed_value()
    }
}

fn fresh_material() -> [u8; RESEED_BYTES] {
    let mut material = [0; RESEED_BYTES];
    rand::rng().fill_bytes(&mut material);
    material
}
