//! Bit manipulation functions.

use crate::{Limb, Natural, limb::bit_length};

impl Natural {
    /// Calculate the number of bits needed to represent this number, i.e. the index of the highest
    /// set bit plus one. Zero has a bit length of `0`. Saturates at [`u32::MAX`].
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.limbs
            .last()
            .map_or(0, |&top| bit_length(self.limbs.len(), top))
    }

    /// Returns `true` if the bit at position `index` is set, `false` for an unset bit
    /// or for indices out of range.
    #[must_use]
    pub fn bit_vartime(&self, index: u32) -> bool {
        self.limbs
            .get((index / Limb::BITS) as usize)
            .is_some_and(|limb| limb.bit_vartime(index % Limb::BITS))
    }

    /// Calculate the number of trailing zeros in the binary representation of this number.
    ///
    /// Returns `0` for zero.
    #[must_use]
    pub fn trailing_zeros(&self) -> u32 {
        self.limbs
            .iter()
            .position(|limb| !limb.is_zero())
            .map_or(0, |i| {
                u32::try_from(i)
                    .map_or(u32::MAX, |i| i.saturating_mul(Limb::BITS))
                    .saturating_add(self.limbs[i].0.trailing_zeros())
            })
    }

    /// Get the value `2^exponent`.
    #[must_use]
    pub fn power_of_two(exponent: u32) -> Self {
        let mut limbs = alloc::vec![Limb::ZERO; (exponent / Limb::BITS) as usize + 1];
        if let Some(top) = limbs.last_mut() {
            *top = Limb(1 << (exponent % Limb::BITS));
        }
        Self { limbs }
    }
}
