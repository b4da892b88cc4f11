//! [`Natural`] subtraction operations.

use crate::{Limb, Natural};
use core::{
    cmp::Ordering,
    ops::{Sub, SubAssign},
};

impl Natural {
    /// Computes `self - rhs`, returning [`None`] if the result would be negative.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self.cmp(rhs) == Ordering::Less {
            return None;
        }

        let mut limbs = self.limbs.clone();
        let borrow = sub_assign_slice(&mut limbs, &rhs.limbs);
        debug_assert_eq!(borrow, Limb::ZERO);
        Some(Self::from_limb_vec(limbs))
    }

    /// Computes `self - rhs` in place. The caller guarantees `self >= rhs`.
    pub(crate) fn sub_assign_unchecked(&mut self, rhs: &Self) {
        let borrow = sub_assign_slice(&mut self.limbs, &rhs.limbs);
        debug_assert_eq!(borrow, Limb::ZERO);
        self.normalize();
    }
}

/// Subtract `rhs` from `lhs` in place, propagating the borrow through all of `lhs`.
///
/// `lhs` must be at least as long as `rhs`. Returns the final borrow (`0` or `1`).
pub(crate) fn sub_assign_slice(lhs: &mut [Limb], rhs: &[Limb]) -> Limb {
    debug_assert!(lhs.len() >= rhs.len());
    let mut borrow = Limb::ZERO;

    for (i, l) in lhs.iter_mut().enumerate() {
        let r = rhs.get(i).copied().unwrap_or(Limb::ZERO);
        if i >= rhs.len() && borrow == Limb::ZERO {
            break;
        }
        (*l, borrow) = l.borrowing_sub(r, borrow);
    }

    borrow
}

impl Sub<&Natural> for &Natural {
    type Output = Natural;

    fn sub(self, rhs: &Natural) -> Natural {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<&Natural> for Natural {
    type Output = Natural;

    fn sub(self, rhs: &Natural) -> Natural {
        &self - rhs
    }
}

impl Sub<Natural> for Natural {
    type Output = Natural;

    fn sub(self, rhs: Natural) -> Natural {
        &self - &rhs
    }
}

impl SubAssign<&Natural> for Natural {
    fn sub_assign(&mut self, rhs: &Natural) {
        assert!(*self >= *rhs, "attempted to subtract with underflow");
        self.sub_assign_unchecked(rhs);
    }
}
