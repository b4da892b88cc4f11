//! Most-significant-first iteration over exponent bits.

use crate::{Limb, Word};
use core::{iter::FusedIterator, slice};

/// Iterator over the bits of a little-endian limb slice, from the top bit of the most significant
/// limb down to bit 0 of the least significant limb.
///
/// Every bit of every limb is yielded, including leading zeros of the top limb.
#[derive(Clone, Debug)]
pub struct ExponentBits<'a> {
    limbs: slice::Iter<'a, Limb>,
    buf: Word,
    remaining: u32,
}

impl<'a> ExponentBits<'a> {
    /// Iterate over the bits of `limbs`.
    pub fn new(limbs: &'a [Limb]) -> Self {
        Self {
            limbs: limbs.iter(),
            buf: 0,
            remaining: 0,
        }
    }
}

impl Iterator for ExponentBits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            self.buf = self.limbs.next_back()?.0;
            self.remaining = Limb::BITS;
        }

        let bit = (self.buf >> Limb::HI_BIT) & 1 == 1;
        self.buf <<= 1;
        self.remaining -= 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize + self.limbs.len() * Limb::BITS as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for ExponentBits<'_> {}
impl FusedIterator for ExponentBits<'_> {}
