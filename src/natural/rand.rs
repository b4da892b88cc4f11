//! Random number generator support.

use crate::{Limb, Natural, NonZero, Word, limb::nlimbs};
use alloc::vec;
use rand_core::RngCore;

impl Natural {
    /// Generate a random [`Natural`] of at most `bit_length` bits.
    pub fn random_bits<R: RngCore + ?Sized>(rng: &mut R, bit_length: u32) -> Self {
        let mut limbs = vec![Limb::ZERO; nlimbs(bit_length)];
        let mut buffer = [0u8; Limb::BYTES];

        for limb in limbs.iter_mut() {
            rng.fill_bytes(&mut buffer);
            *limb = Limb(Word::from_le_bytes(buffer));
        }

        let partial_limb = bit_length % Limb::BITS;
        if let Some(top) = limbs.last_mut() {
            if partial_limb > 0 {
                top.0 &= Word::MAX >> (Limb::BITS - partial_limb);
            }
        }

        Self::from_limb_vec(limbs)
    }

    /// Generate a random [`Natural`] whose bit length is exactly `bit_length`.
    ///
    /// A `bit_length` of `0` yields zero.
    pub fn random_bits_exact<R: RngCore + ?Sized>(rng: &mut R, bit_length: u32) -> Self {
        if bit_length == 0 {
            return Self::zero();
        }

        let n = Self::random_bits(rng, bit_length - 1);
        &n + &Self::power_of_two(bit_length - 1)
    }

    /// Generate a random [`Natural`] which is less than a given `modulus`.
    ///
    /// This function uses rejection sampling and runs in variable-time.
    pub fn random_below<R: RngCore + ?Sized>(rng: &mut R, modulus: &NonZero<Self>) -> Self {
        let bits = modulus.bits();
        loop {
            let n = Self::random_bits(rng, bits);
            if n < *modulus.as_ref() {
                return n;
            }
        }
    }
}
