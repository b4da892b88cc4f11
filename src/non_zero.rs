//! Wrapper type for non-zero integers.

use crate::{Limb, Natural};
use core::{fmt, ops::Deref};
use subtle::{Choice, ConstantTimeEq};

/// Wrapper type for non-zero integers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NonZero<T>(pub(crate) T);

impl<T> NonZero<T> {
    /// Provides access to the contents of `NonZero` in a `const` context.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl NonZero<Limb> {
    /// Create a [`NonZero<Limb>`], returning [`None`] if `n` is zero.
    pub const fn new(n: Limb) -> Option<Self> {
        if n.is_zero() { None } else { Some(Self(n)) }
    }
}

impl NonZero<Natural> {
    /// Create a [`NonZero<Natural>`], returning [`None`] if `n` is zero.
    pub fn new(n: Natural) -> Option<Self> {
        if n.is_zero() { None } else { Some(Self(n)) }
    }
}

impl<T> AsRef<T> for NonZero<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> ConstantTimeEq for NonZero<T>
where
    T: ConstantTimeEq,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<T> Deref for NonZero<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Display for NonZero<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
