//! [`Natural`] addition operations.

use crate::{Limb, Natural};
use alloc::vec::Vec;
use core::ops::{Add, AddAssign};

impl Natural {
    /// Computes `self + rhs`.
    fn add_ref(&self, rhs: &Self) -> Self {
        let (long, short) = if self.nlimbs() >= rhs.nlimbs() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let mut limbs = Vec::with_capacity(long.nlimbs() + 1);
        limbs.extend_from_slice(&long.limbs);
        let carry = add_assign_slice(&mut limbs, &short.limbs);
        if carry != Limb::ZERO {
            limbs.push(carry);
        }

        Self::from_limb_vec(limbs)
    }
}

/// Add `rhs` into `lhs` in place, propagating the carry through all of `lhs`.
///
/// `lhs` must be at least as long as `rhs`. Returns the final carry.
pub(crate) fn add_assign_slice(lhs: &mut [Limb], rhs: &[Limb]) -> Limb {
    debug_assert!(lhs.len() >= rhs.len());
    let mut carry = Limb::ZERO;

    for (i, l) in lhs.iter_mut().enumerate() {
        let r = rhs.get(i).copied().unwrap_or(Limb::ZERO);
        if i >= rhs.len() && carry == Limb::ZERO {
            break;
        }
        (*l, carry) = l.carrying_add(r, carry);
    }

    carry
}

impl Add<&Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        self.add_ref(rhs)
    }
}

impl Add<&Natural> for Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        self.add_ref(rhs)
    }
}

impl Add<Natural> for Natural {
    type Output = Natural;

    fn add(self, rhs: Natural) -> Natural {
        self.add_ref(&rhs)
    }
}

impl AddAssign<&Natural> for Natural {
    fn add_assign(&mut self, rhs: &Natural) {
        *self = self.add_ref(rhs);
    }
}
