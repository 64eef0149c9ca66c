use bitvec::{order::Lsb0, vec::BitVec};

use crate::entropy::BitSource;
use crate::io::configuration::SEED_VALUE_BYTES;
use crate::io::error::{Result, SpriteError};

/// Bit source reading the bits of a big-endian integer built from a byte buffer
///
/// Bits are consumed least-significant first. The stream ends at the integer's
/// highest set bit and then wraps back to bit 0, so leading zero bytes never
/// contribute decisions.
#[derive(Debug, Clone)]
pub struct ByteSource {
    material: Vec<u8>,
    bits: BitVec<u8, Lsb0>,
    position: usize,
}

impl ByteSource {
    /// Create a source over a copy of the given seed material
    pub fn new(material: &[u8]) -> Self {
        Self {
            material: material.to_vec(),
            bits: integer_bits(material),
            position: 0,
        }
    }

    /// Number of bits in the backing integer
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Index of the bit the next decision will read, before wrapping
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether every bit has been consumed since the last wrap or refill
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.bits.len()
    }

    /// Swap in fresh seed material and restart from bit 0
    pub fn refill(&mut self, material: &[u8]) {
        self.material = material.to_vec();
        self.bits = integer_bits(material);
        self.position = 0;
    }
}

impl BitSource for ByteSource {
    fn next_bit(&mut self) -> bool {
        if self.is_exhausted() {
            self.position = 0;
        }
        let bit = self.bits.get(self.position).as_deref() == Some(&true);
        self.position += 1;
        bit
    }

    fn seed_value(&mut self) -> Result<i64> {
        let head: [u8; SEED_VALUE_BYTES] = self
            .material
            .get(..SEED_VALUE_BYTES)
            .and_then(|head| head.try_into().ok())
            .ok_or(SpriteError::InsufficientSeedMaterial {
                available: self.material.len(),
                required: SEED_VALUE_BYTES,
            })?;
        Ok(i64::from_be_bytes(head))
    }
}

// Little-endian byte order lets bit `i` of the integer sit at index `i`
fn integer_bits(material: &[u8]) -> BitVec<u8, Lsb0> {
    let mut bits = BitVec::<u8, Lsb0>::from_vec(material.iter().rev().copied().collect());
    let bit_len = bits.last_one().map_or(0, |index| index + 1);
    bits.truncate(bit_len);
    bits
}
