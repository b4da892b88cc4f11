//! Big integers are represented as an array/vector of smaller CPU word-size integers called
//! "limbs".

mod add;
mod bits;
mod mul;
mod sub;

use crate::{WideWord, Word};
use core::fmt;
use subtle::{Choice, ConstantTimeEq};

/// Calculate the number of limbs required to represent the given number of bits.
#[inline(always)]
#[must_use]
pub const fn nlimbs(bits: u32) -> usize {
    bits.div_ceil(Limb::BITS) as usize
}

/// Bit length of a normalized little-endian limb sequence of `nlimbs` limbs whose most
/// significant limb is `top`, saturating at [`u32::MAX`].
pub(crate) fn bit_length(nlimbs: usize, top: Limb) -> u32 {
    match nlimbs.checked_sub(1) {
        None => 0,
        Some(lower) => u32::try_from(lower)
            .ok()
            .and_then(|lower| lower.checked_mul(Limb::BITS))
            .and_then(|bits| bits.checked_add(top.bits()))
            .unwrap_or(u32::MAX),
    }
}

/// Big integers are represented as an array/vector of smaller CPU word-size integers called
/// "limbs".
///
/// The [`Limb`] type uses a 32-bit or 64-bit saturated representation, depending on the target.
/// All bits of an inner [`Word`] are used to represent larger big integer types.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(Word::MAX);

    /// Highest bit in a [`Limb`].
    pub(crate) const HI_BIT: u32 = Limb::BITS - 1;

    /// Size of the inner integer in bits.
    pub const BITS: u32 = Word::BITS;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = (Word::BITS / 8) as usize;

    /// Is this limb equal to [`Limb::ZERO`]?
    #[inline(always)]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Is this limb an odd number?
    #[inline(always)]
    #[must_use]
    pub const fn is_odd(self) -> bool {
        self.0 & 1 == 1
    }

    /// Widen this limb into a [`WideWord`].
    #[inline(always)]
    pub(crate) const fn wide(self) -> WideWord {
        self.0 as WideWord
    }
}

impl From<Word> for Limb {
    #[inline]
    fn from(w: Word) -> Self {
        Limb(w)
    }
}

impl From<Limb> for Word {
    #[inline]
    fn from(limb: Limb) -> Word {
        limb.0
    }
}

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl num_traits::Zero for Limb {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.ct_eq(&Self::ZERO).into()
    }
}

impl num_traits::One for Limb {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.ct_eq(&Self::ONE).into()
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::Display for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$x}", &self.0, width = Self::BYTES * 2)
    }
}

impl fmt::UpperHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Limb {}

#[cfg(test)]
mod tests {
    use super::Limb;
    use alloc::format;

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn nlimbs_for_bits() {
        assert_eq!(super::nlimbs(0), 0);
        assert_eq!(super::nlimbs(64), 2);
        assert_eq!(super::nlimbs(65), 3);
        assert_eq!(super::nlimbs(112), 4);
        assert_eq!(super::nlimbs(3584), 112);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn nlimbs_for_bits() {
        assert_eq!(super::nlimbs(0), 0);
        assert_eq!(super::nlimbs(64), 1);
        assert_eq!(super::nlimbs(65), 2);
        assert_eq!(super::nlimbs(112), 2);
        assert_eq!(super::nlimbs(3584), 56);
    }

    #[test]
    fn bit_length_saturates() {
        assert_eq!(super::bit_length(0, Limb::ZERO), 0);
        assert_eq!(super::bit_length(1, Limb(0b101)), 3);
        assert_eq!(super::bit_length(3, Limb::ONE), 2 * Limb::BITS + 1);
        assert_eq!(super::bit_length(usize::MAX, Limb::MAX), u32::MAX);
        assert_eq!(
            super::bit_length((u32::MAX / Limb::BITS) as usize + 2, Limb::ONE),
            u32::MAX
        );
    }

    #[test]
    fn debug() {
        #[cfg(target_pointer_width = "32")]
        assert_eq!(format!("{:?}", Limb(42)), "Limb(0x0000002A)");

        #[cfg(target_pointer_width = "64")]
        assert_eq!(format!("{:?}", Limb(42)), "Limb(0x000000000000002A)");
    }

    #[test]
    fn parity() {
        assert!(Limb::ONE.is_odd());
        assert!(!Limb::ZERO.is_odd());
        assert!(Limb::MAX.is_odd());
        assert!(Limb::ZERO.is_zero());
    }
}
