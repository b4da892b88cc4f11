//! Error types.

use alloc::collections::TryReserveError;
use core::fmt;

/// Result type with the `bigint-exptmod` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the exponentiation engines and the arithmetic kernel.
///
/// Every error is final: the component that observes it releases whatever it acquired and hands
/// the same variant back to its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// A table slot, accumulator, reduction context or temporary could not be allocated.
    Allocation,

    /// A kernel operation (multiply, square, reduce, modulo) reported an internal fault.
    Arithmetic,

    /// The modulus is zero.
    InvalidModulus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Allocation => write!(f, "allocation failure"),
            Error::Arithmetic => write!(f, "arithmetic failure"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
        }
    }
}

impl core::error::Error for Error {}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Error {
        Error::Allocation
    }
}

/// Possible errors when decoding a [`Natural`][`crate::Natural`] from a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The input value was empty.
    Empty,

    /// The input was not consistent with the format restrictions.
    InvalidDigit,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty value provided"),
            Self::InvalidDigit => write!(f, "invalid digit character"),
        }
    }
}

impl core::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::{DecodeError, Error};
    use alloc::{string::ToString, vec::Vec};

    #[test]
    fn display() {
        assert_eq!(Error::Allocation.to_string(), "allocation failure");
        assert_eq!(Error::Arithmetic.to_string(), "arithmetic failure");
        assert_eq!(Error::InvalidModulus.to_string(), "invalid modulus");
        assert_eq!(DecodeError::InvalidDigit.to_string(), "invalid digit character");
    }

    #[test]
    fn try_reserve_maps_to_allocation() {
        let mut v = Vec::<u64>::new();
        let err = v.try_reserve_exact(usize::MAX).unwrap_err();
        assert_eq!(Error::from(err), Error::Allocation);
    }
}
