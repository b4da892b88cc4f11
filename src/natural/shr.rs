//! [`Natural`] bitwise right shift operations.

use crate::{Limb, Natural, Result};
use alloc::vec;
use core::ops::Shr;

impl Natural {
    /// Computes `self >> shift` in variable-time.
    pub fn shr_vartime(&self, shift: u32) -> Self {
        let src = match self.limbs.get((shift / Limb::BITS) as usize..) {
            Some(src) if !src.is_empty() => src,
            _ => return Self::zero(),
        };

        let mut limbs = vec![Limb::ZERO; src.len()];
        shr_into(src, shift % Limb::BITS, &mut limbs);
        Self::from_limb_vec(limbs)
    }

    /// Computes `self >> shift`, reporting allocation exhaustion as an error.
    pub fn try_shr_vartime(&self, shift: u32) -> Result<Self> {
        let src = match self.limbs.get((shift / Limb::BITS) as usize..) {
            Some(src) if !src.is_empty() => src,
            _ => return Ok(Self::zero()),
        };

        let mut limbs = Self::try_zeroed(src.len())?;
        shr_into(src, shift % Limb::BITS, &mut limbs);
        Ok(Self::from_limb_vec(limbs))
    }

    /// Computes `floor(self / β^n)` where `β = 2^Limb::BITS`.
    pub fn try_shr_limbs(&self, n: usize) -> Result<Self> {
        match self.limbs.get(n..) {
            Some(upper) => Self::try_from_limbs(upper),
            None => Ok(Self::zero()),
        }
    }
}

/// Write `src >> bit_shift` into `out`, which is as long as `src`. `bit_shift < Limb::BITS`.
fn shr_into(src: &[Limb], bit_shift: u32, out: &mut [Limb]) {
    if bit_shift == 0 {
        out.copy_from_slice(src);
        return;
    }

    for (i, limb) in src.iter().enumerate() {
        let hi = src.get(i + 1).map_or(0, |next| next.0 << (Limb::BITS - bit_shift));
        out[i] = Limb((limb.0 >> bit_shift) | hi);
    }
}

impl Shr<u32> for &Natural {
    type Output = Natural;

    fn shr(self, shift: u32) -> Natural {
        self.shr_vartime(shift)
    }
}

impl Shr<u32> for Natural {
    type Output = Natural;

    fn shr(self, shift: u32) -> Natural {
        self.shr_vartime(shift)
    }
}
