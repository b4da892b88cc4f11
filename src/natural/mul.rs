//! [`Natural`] multiplication operations.

use crate::{Limb, Natural, Result};
use alloc::vec;
use core::ops::{Mul, MulAssign};

impl Natural {
    /// Multiply `self` by `rhs`, reporting allocation exhaustion as an error.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }

        let mut limbs = Self::try_zeroed(self.nlimbs() + rhs.nlimbs())?;
        mul_into(&self.limbs, &rhs.limbs, &mut limbs);
        Ok(Self::from_limb_vec(limbs))
    }

    /// Multiply `self` by itself, reporting allocation exhaustion as an error.
    pub fn try_square(&self) -> Result<Self> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let mut limbs = Self::try_zeroed(self.nlimbs() * 2)?;
        square_into(&self.limbs, &mut limbs);
        Ok(Self::from_limb_vec(limbs))
    }

    /// Multiply `self` by itself.
    pub fn square(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut limbs = vec![Limb::ZERO; self.nlimbs() * 2];
        square_into(&self.limbs, &mut limbs);
        Self::from_limb_vec(limbs)
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let mut limbs = vec![Limb::ZERO; self.nlimbs() + rhs.nlimbs()];
        mul_into(&self.limbs, &rhs.limbs, &mut limbs);
        Self::from_limb_vec(limbs)
    }
}

/// Schoolbook multiplication a.k.a. long multiplication, i.e. the traditional method taught in
/// schools.
///
/// `out` must be zeroed and exactly `lhs.len() + rhs.len()` limbs long.
#[inline]
pub(crate) fn mul_into(lhs: &[Limb], rhs: &[Limb], out: &mut [Limb]) {
    assert_eq!(
        out.len(),
        lhs.len() + rhs.len(),
        "schoolbook multiplication length mismatch"
    );

    for (i, &xi) in lhs.iter().enumerate() {
        let mut carry = Limb::ZERO;

        for (j, &yj) in rhs.iter().enumerate() {
            (out[i + j], carry) = xi.carrying_mul_add(yj, out[i + j], carry);
        }

        out[i + rhs.len()] = carry;
    }
}

/// Schoolbook method of squaring.
///
/// Like schoolbook multiplication, but only considering half of the multiplication grid.
/// `out` must be zeroed and exactly `2 * limbs.len()` limbs long.
#[inline]
pub(crate) fn square_into(limbs: &[Limb], out: &mut [Limb]) {
    assert_eq!(out.len(), limbs.len() * 2, "schoolbook squaring length mismatch");

    for i in 1..limbs.len() {
        let xi = limbs[i];
        let mut carry = Limb::ZERO;

        for j in 0..i {
            (out[i + j], carry) = xi.carrying_mul_add(limbs[j], out[i + j], carry);
        }

        out[2 * i] = carry;
    }

    // Double the current result, this accounts for the other half of the multiplication grid.
    // The top word is empty, so no bits are shifted out.
    let mut carry = Limb::ZERO;
    for limb in out.iter_mut() {
        let next = Limb(limb.0 >> Limb::HI_BIT);
        *limb = Limb((limb.0 << 1) | carry.0);
        carry = next;
    }
    debug_assert_eq!(carry, Limb::ZERO);

    // Add the diagonal terms.
    let mut carry = Limb::ZERO;
    for (i, &xi) in limbs.iter().enumerate() {
        let (lo, hi) = xi.widening_mul(xi);
        (out[2 * i], carry) = out[2 * i].carrying_add(lo, carry);
        (out[2 * i + 1], carry) = out[2 * i + 1].carrying_add(hi, carry);
    }
    debug_assert_eq!(carry, Limb::ZERO);
}

impl Mul<&Natural> for &Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        self.mul_ref(rhs)
    }
}

impl Mul<&Natural> for Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        self.mul_ref(rhs)
    }
}

impl Mul<Natural> for Natural {
    type Output = Natural;

    fn mul(self, rhs: Natural) -> Natural {
        self.mul_ref(&rhs)
    }
}

impl MulAssign<&Natural> for Natural {
    fn mul_assign(&mut self, rhs: &Natural) {
        *self = self.mul_ref(rhs);
    }
}
