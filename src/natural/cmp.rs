//! [`Natural`] comparisons.
//!
//! Normalization makes the limb count a proxy for magnitude, so comparisons are variable-time.

use crate::{Limb, Natural};
use core::cmp::Ordering;

impl Natural {
    /// Returns the [`Ordering`] between `self` and `rhs` in variable time.
    #[inline]
    pub fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        cmp_slice(&self.limbs, &rhs.limbs)
    }
}

/// Compare two little-endian limb slices as numbers, ignoring leading zero limbs.
pub(crate) fn cmp_slice(lhs: &[Limb], rhs: &[Limb]) -> Ordering {
    let lhs = trim(lhs);
    let rhs = trim(rhs);

    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

fn trim(limbs: &[Limb]) -> &[Limb] {
    let len = limbs
        .iter()
        .rposition(|limb| !limb.is_zero())
        .map_or(0, |pos| pos + 1);
    &limbs[..len]
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
