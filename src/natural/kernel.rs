//! [`Kernel`] implementation backed by [`Natural`].

use crate::{Kernel, Limb, Natural, Result, modular::BarrettParams};

/// Reference arithmetic kernel over [`Natural`] values.
///
/// Every buffer on the exponentiation path is allocated with `try_reserve`, so memory exhaustion
/// surfaces as [`Error::Allocation`](crate::Error::Allocation) rather than an abort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalKernel;

impl Kernel for NaturalKernel {
    type Int = Natural;
    type Barrett = BarrettParams;

    fn alloc(&self) -> Result<Natural> {
        Natural::try_with_capacity(1)
    }

    fn one(&self) -> Result<Natural> {
        let mut one = Natural::try_with_capacity(1)?;
        one.limbs.push(Limb::ONE);
        Ok(one)
    }

    fn copy(&self, src: &Natural) -> Result<Natural> {
        src.try_clone()
    }

    fn limbs<'a>(&self, x: &'a Natural) -> &'a [Limb] {
        x.as_limbs()
    }

    fn bits(&self, x: &Natural) -> u32 {
        x.bits()
    }

    fn is_odd(&self, x: &Natural) -> bool {
        x.is_odd()
    }

    fn modulo(&self, a: &Natural, m: &Natural) -> Result<Natural> {
        a.try_rem_vartime(m)
    }

    fn square(&self, a: &Natural) -> Result<Natural> {
        a.try_square()
    }

    fn multiply(&self, a: &Natural, b: &Natural) -> Result<Natural> {
        a.try_mul(b)
    }

    fn barrett_setup(&self, m: &Natural) -> Result<BarrettParams> {
        BarrettParams::new(m)
    }

    fn barrett_reduce(&self, x: &mut Natural, m: &Natural, ctx: &BarrettParams) -> Result<()> {
        debug_assert!(ctx.modulus().as_ref() == m, "Barrett context built for another modulus");
        *x = ctx.reduce(x)?;
        Ok(())
    }
}
