//! Diminished radix moduli: `P = β^k - d` with every limb above the lowest set to all ones.

use crate::Limb;

/// Classification of a modulus by the reductions its shape admits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModulusKind {
    /// No exploitable structure.
    #[default]
    Generic,

    /// Diminished radix form: at least two limbs, all limbs above the lowest equal to
    /// [`Limb::MAX`].
    DiminishedRadix,
}

impl ModulusKind {
    /// Classify the modulus given by its normalized little-endian limbs.
    pub fn detect(limbs: &[Limb]) -> Self {
        if is_diminished_radix(limbs) {
            Self::DiminishedRadix
        } else {
            Self::Generic
        }
    }

    /// Is this the diminished radix form?
    pub const fn is_diminished_radix(self) -> bool {
        matches!(self, Self::DiminishedRadix)
    }
}

/// Does the modulus given by its normalized little-endian limbs have diminished radix form?
pub fn is_diminished_radix(limbs: &[Limb]) -> bool {
    limbs.len() >= 2 && limbs[1..].iter().all(|&limb| limb == Limb::MAX)
}

/// Reduction constant `d = β - P[0]` for a diminished radix modulus `P = β^k - d`.
///
/// Returns [`Limb::ZERO`] for an empty limb slice.
pub const fn dr_setup(limbs: &[Limb]) -> Limb {
    match limbs.first() {
        Some(low) => Limb::ZERO.wrapping_sub(*low),
        None => Limb::ZERO,
    }
}
