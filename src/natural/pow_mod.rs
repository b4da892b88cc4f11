//! [`Natural`] modular exponentiation operations.

use crate::{Natural, Result};

impl Natural {
    /// Computes `self ^ exponent mod modulus`.
    ///
    /// Uses the windowed Barrett engine through the default [`Exptmod`][`crate::Exptmod`]
    /// dispatcher. Returns [`Error::InvalidModulus`][`crate::Error::InvalidModulus`] if the
    /// modulus is zero.
    pub fn pow_mod(&self, exponent: &Natural, modulus: &Natural) -> Result<Natural> {
        crate::exptmod(self, exponent, modulus)
    }
}

// NOTE: tested via proptests in `tests/exptmod_proptests.rs`
