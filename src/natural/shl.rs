//! [`Natural`] bitwise left shift operations.

use crate::{Limb, Natural, Result};
use alloc::vec;
use core::ops::Shl;

impl Natural {
    /// Computes `self << shift` in variable-time.
    ///
    /// The result grows as needed, so no bits are ever shifted out.
    pub fn shl_vartime(&self, shift: u32) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut limbs = vec![Limb::ZERO; shl_len(self.nlimbs(), shift)];
        shl_into(&self.limbs, shift, &mut limbs);
        Self::from_limb_vec(limbs)
    }

    /// Computes `self << shift`, reporting allocation exhaustion as an error.
    pub fn try_shl_vartime(&self, shift: u32) -> Result<Self> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let mut limbs = Self::try_zeroed(shl_len(self.nlimbs(), shift))?;
        shl_into(&self.limbs, shift, &mut limbs);
        Ok(Self::from_limb_vec(limbs))
    }

    /// Computes `self * β^n` where `β = 2^Limb::BITS`.
    pub fn shl_limbs(&self, n: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut limbs = vec![Limb::ZERO; n];
        limbs.extend_from_slice(&self.limbs);
        Self { limbs }
    }
}

fn shl_len(nlimbs: usize, shift: u32) -> usize {
    nlimbs + (shift / Limb::BITS) as usize + 1
}

/// Write `limbs << shift` into the zeroed `out`, which is [`shl_len`] limbs long.
fn shl_into(limbs: &[Limb], shift: u32, out: &mut [Limb]) {
    let limb_shift = (shift / Limb::BITS) as usize;
    let bit_shift = shift % Limb::BITS;

    if bit_shift == 0 {
        out[limb_shift..limb_shift + limbs.len()].copy_from_slice(limbs);
        return;
    }

    let mut carry = Limb::ZERO;
    for (i, limb) in limbs.iter().enumerate() {
        out[limb_shift + i] = Limb((limb.0 << bit_shift) | carry.0);
        carry = Limb(limb.0 >> (Limb::BITS - bit_shift));
    }
    out[limb_shift + limbs.len()] = carry;
}

impl Shl<u32> for &Natural {
    type Output = Natural;

    fn shl(self, shift: u32) -> Natural {
        self.shl_vartime(shift)
    }
}

impl Shl<u32> for Natural {
    type Output = Natural;

    fn shl(self, shift: u32) -> Natural {
        self.shl_vartime(shift)
    }
}
