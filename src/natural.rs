//! Heap-allocated arbitrary-precision natural numbers.

mod add;
mod bits;
mod cmp;
mod div;
mod encoding;
mod from;
mod kernel;
mod mul;
mod pow_mod;
mod shl;
mod shr;
mod sub;

#[cfg(feature = "rand_core")]
mod rand;

pub use self::kernel::NaturalKernel;
pub(crate) use self::sub::sub_assign_slice;

use crate::{Error, Limb, Result, Word};
use alloc::vec::Vec;
use core::fmt;
use subtle::{Choice, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Arbitrary-precision heap-allocated natural number.
///
/// Unlike [`BoxedUint`]-style fixed-precision integers, a [`Natural`] grows and shrinks with its
/// value. The limb vector is always normalized: the most significant limb is never zero, and the
/// value `0` is represented by an empty vector.
///
/// All arithmetic is variable-time.
///
/// [`BoxedUint`]: https://docs.rs/crypto-bigint/latest/crypto_bigint/struct.BoxedUint.html
#[derive(Clone, Default, Hash)]
pub struct Natural {
    /// Limbs stored from least significant to most significant.
    pub(crate) limbs: Vec<Limb>,
}

impl Natural {
    /// Get the value `0`.
    #[must_use]
    pub const fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Get the value `1`.
    #[must_use]
    pub fn one() -> Self {
        Self {
            limbs: alloc::vec![Limb::ONE],
        }
    }

    /// Create a [`Natural`] from little-endian [`Word`]s, trimming leading zeros.
    #[inline]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self::from_limb_vec(words.into_iter().map(Limb).collect())
    }

    /// Create a [`Natural`] from little-endian [`Limb`]s, trimming leading zeros.
    #[inline]
    pub fn from_limbs(limbs: &[Limb]) -> Self {
        Self::from_limb_vec(limbs.to_vec())
    }

    /// Like [`Natural::from_limbs`], reporting allocation exhaustion as an error.
    pub fn try_from_limbs(limbs: &[Limb]) -> Result<Self> {
        let mut vec = Vec::new();
        vec.try_reserve_exact(limbs.len())?;
        vec.extend_from_slice(limbs);
        Ok(Self::from_limb_vec(vec))
    }

    /// Computes `β^n` where `β = 2^Limb::BITS`.
    pub(crate) fn try_radix_power(n: usize) -> Result<Self> {
        let len = n.checked_add(1).ok_or(Error::Allocation)?;
        let mut limbs = Self::try_zeroed(len)?;
        limbs[n] = Limb::ONE;
        Ok(Self { limbs })
    }

    /// Take ownership of a limb vector and normalize it.
    #[inline]
    pub(crate) fn from_limb_vec(limbs: Vec<Limb>) -> Self {
        let mut ret = Self { limbs };
        ret.normalize();
        ret
    }

    /// Copy the little-endian [`Word`]s of this [`Natural`] into a vector.
    #[inline]
    pub fn to_words(&self) -> Vec<Word> {
        self.limbs.iter().map(|limb| limb.0).collect()
    }

    /// Borrow the limbs of this [`Natural`], least significant first.
    #[inline]
    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Get the number of limbs in this [`Natural`]. Zero has no limbs.
    #[inline]
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Is this [`Natural`] equal to zero?
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Is this [`Natural`] equal to one?
    #[inline]
    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == Limb::ONE
    }

    /// Is this integer value an odd number?
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.limbs.first().is_some_and(|limb| limb.is_odd())
    }

    /// Is this integer value an even number?
    #[inline]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Strip the most significant zero limbs.
    #[inline]
    pub(crate) fn normalize(&mut self) {
        while self.limbs.last() == Some(&Limb::ZERO) {
            self.limbs.pop();
        }
    }

    /// Allocate `len` zeroed limbs, reporting exhaustion instead of aborting.
    pub(crate) fn try_zeroed(len: usize) -> Result<Vec<Limb>> {
        let mut limbs = Vec::new();
        limbs.try_reserve_exact(len)?;
        limbs.resize(len, Limb::ZERO);
        Ok(limbs)
    }

    /// Allocate an empty [`Natural`] with room for `nlimbs` limbs.
    pub fn try_with_capacity(nlimbs: usize) -> Result<Self> {
        let mut limbs = Vec::new();
        limbs.try_reserve_exact(nlimbs)?;
        Ok(Self { limbs })
    }

    /// Clone this [`Natural`], reporting allocation exhaustion as an error.
    pub fn try_clone(&self) -> Result<Self> {
        let mut limbs = Vec::new();
        limbs.try_reserve_exact(self.limbs.len())?;
        limbs.extend_from_slice(&self.limbs);
        Ok(Self { limbs })
    }
}

impl AsRef<[Limb]> for Natural {
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs()
    }
}

impl ConstantTimeEq for Natural {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        // Normalized values of different lengths are never equal.
        if self.limbs.len() != other.limbs.len() {
            return Choice::from(0);
        }

        self.limbs
            .iter()
            .zip(other.limbs.iter())
            .fold(Choice::from(1), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl Eq for Natural {}

impl PartialEq for Natural {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl num_traits::Zero for Natural {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl num_traits::One for Natural {
    fn one() -> Self {
        Self::one()
    }

    fn is_one(&self) -> bool {
        self.is_one()
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural(0x{self:X})")
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Natural {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
        self.limbs.clear();
    }
}
