//! Modular multiplication through a [`Kernel`]'s Barrett reduction.

use crate::{Kernel, Result};
use core::fmt;

/// Barrett context for one modulus, bound to the kernel that performs the arithmetic.
///
/// Every product formed through a reducer is fully reduced before it is returned.
pub struct BarrettReducer<'a, K: Kernel> {
    kernel: &'a K,
    modulus: &'a K::Int,
    ctx: K::Barrett,
}

impl<'a, K: Kernel> BarrettReducer<'a, K> {
    /// Precompute the Barrett context for `modulus`.
    pub fn new(kernel: &'a K, modulus: &'a K::Int) -> Result<Self> {
        let ctx = kernel.barrett_setup(modulus)?;
        Ok(Self {
            kernel,
            modulus,
            ctx,
        })
    }

    /// The kernel performing the arithmetic.
    pub const fn kernel(&self) -> &'a K {
        self.kernel
    }

    /// The modulus.
    pub const fn modulus(&self) -> &'a K::Int {
        self.modulus
    }

    /// Reduce `x` in place.
    pub fn reduce(&self, x: &mut K::Int) -> Result<()> {
        self.kernel.barrett_reduce(x, self.modulus, &self.ctx)
    }

    /// Compute `a * b mod m`.
    pub fn mul(&self, a: &K::Int, b: &K::Int) -> Result<K::Int> {
        let mut product = self.kernel.multiply(a, b)?;
        self.reduce(&mut product)?;
        Ok(product)
    }

    /// Compute `a^2 mod m`.
    pub fn square(&self, a: &K::Int) -> Result<K::Int> {
        let mut product = self.kernel.square(a)?;
        self.reduce(&mut product)?;
        Ok(product)
    }

    /// Replace `a` with `a * b mod m`. On error `a` is unchanged.
    pub fn mul_assign(&self, a: &mut K::Int, b: &K::Int) -> Result<()> {
        *a = self.mul(a, b)?;
        Ok(())
    }

    /// Replace `a` with `a^2 mod m`. On error `a` is unchanged.
    pub fn square_assign(&self, a: &mut K::Int) -> Result<()> {
        *a = self.square(a)?;
        Ok(())
    }
}

impl<K: Kernel> fmt::Debug for BarrettReducer<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarrettReducer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::BarrettReducer;
    use crate::{Natural, NaturalKernel};

    #[test]
    fn mul_and_square() {
        let kernel = NaturalKernel;
        let m = Natural::from(1_000_003u32);
        let reducer = BarrettReducer::new(&kernel, &m).unwrap();

        let a = Natural::from(999_999u32);
        let b = Natural::from(123_456u32);
        assert_eq!(
            reducer.mul(&a, &b).unwrap(),
            Natural::from(999_999u64 * 123_456 % 1_000_003)
        );

        let mut c = a.clone();
        reducer.square_assign(&mut c).unwrap();
        assert_eq!(c, Natural::from(999_999u64 * 999_999 % 1_000_003));

        reducer.mul_assign(&mut c, &b).unwrap();
        assert_eq!(
            c,
            Natural::from((999_999u64 * 999_999 % 1_000_003) * 123_456 % 1_000_003)
        );
    }
}
