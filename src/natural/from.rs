//! `From`-like conversions for [`Natural`].

use crate::{Limb, Natural, Word};

impl Natural {
    /// Create a [`Natural`] from a `u64`.
    #[inline]
    pub fn from_u64(n: u64) -> Self {
        Self::from_u128(n.into())
    }

    /// Create a [`Natural`] from a `u128`.
    #[inline]
    pub fn from_u128(n: u128) -> Self {
        // Split into words; on 64-bit targets that is two words, on 32-bit four.
        let words = (0..(u128::BITS / Word::BITS)).map(|i| (n >> (i * Word::BITS)) as Word);
        Self::from_words(words)
    }
}

impl From<u8> for Natural {
    fn from(n: u8) -> Self {
        Self::from_u64(n.into())
    }
}

impl From<u16> for Natural {
    fn from(n: u16) -> Self {
        Self::from_u64(n.into())
    }
}

impl From<u32> for Natural {
    fn from(n: u32) -> Self {
        Self::from_u64(n.into())
    }
}

impl From<u64> for Natural {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl From<u128> for Natural {
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}

impl From<Limb> for Natural {
    fn from(limb: Limb) -> Self {
        Self::from_limbs(&[limb])
    }
}
