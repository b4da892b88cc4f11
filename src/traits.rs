//! Traits provided by this crate.

use crate::{Limb, Result, limb::bit_length, modular::ModulusKind};

/// Arbitrary-precision arithmetic consumed by the exponentiation engines.
///
/// The engines never touch an integer's representation directly: every value they hold is
/// created, combined and reduced through a [`Kernel`]. Each fallible operation either returns a
/// fresh value or leaves its inputs untouched, so a caller that propagates the error with `?`
/// releases whatever it owns by dropping it.
///
/// [`NaturalKernel`][`crate::NaturalKernel`] implements this trait for [`Natural`][`crate::Natural`].
pub trait Kernel {
    /// Big integer type operated on by this kernel.
    type Int;

    /// Precomputed Barrett reduction context for one modulus.
    type Barrett;

    /// Create an empty (zero-valued) integer with room for at least one limb.
    fn alloc(&self) -> Result<Self::Int>;

    /// Create the value `1`.
    fn one(&self) -> Result<Self::Int>;

    /// Duplicate `src`.
    fn copy(&self, src: &Self::Int) -> Result<Self::Int>;

    /// Swap the representations of `a` and `b`.
    fn exchange(&self, a: &mut Self::Int, b: &mut Self::Int) {
        core::mem::swap(a, b);
    }

    /// Borrow the normalized little-endian limbs of `x`.
    fn limbs<'a>(&self, x: &'a Self::Int) -> &'a [Limb];

    /// Number of bits needed to represent `x`, saturating at [`u32::MAX`].
    fn bits(&self, x: &Self::Int) -> u32 {
        let limbs = self.limbs(x);
        limbs
            .last()
            .map_or(0, |&top| bit_length(limbs.len(), top))
    }

    /// Is `x` odd?
    fn is_odd(&self, x: &Self::Int) -> bool {
        self.limbs(x).first().is_some_and(|limb| limb.is_odd())
    }

    /// Compute `a mod m`.
    ///
    /// Returns [`Error::InvalidModulus`][`crate::Error::InvalidModulus`] if `m` is zero.
    fn modulo(&self, a: &Self::Int, m: &Self::Int) -> Result<Self::Int>;

    /// Compute `a * a`.
    fn square(&self, a: &Self::Int) -> Result<Self::Int>;

    /// Compute `a * b`.
    fn multiply(&self, a: &Self::Int, b: &Self::Int) -> Result<Self::Int>;

    /// Precompute the Barrett reduction context for `m`.
    ///
    /// Returns [`Error::InvalidModulus`][`crate::Error::InvalidModulus`] if `m` is zero.
    fn barrett_setup(&self, m: &Self::Int) -> Result<Self::Barrett>;

    /// Reduce `x` modulo `m` in place using a context built from the same `m`.
    fn barrett_reduce(&self, x: &mut Self::Int, m: &Self::Int, ctx: &Self::Barrett) -> Result<()>;

    /// Classify `m` by the reductions its structure admits.
    fn modulus_kind(&self, m: &Self::Int) -> ModulusKind {
        ModulusKind::detect(self.limbs(m))
    }
}
