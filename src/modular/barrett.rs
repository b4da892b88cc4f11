//! Barrett reduction for [`Natural`] moduli (HAC 14.42).

use crate::{Error, Natural, NonZero, Result, natural::sub_assign_slice};

/// Precomputed parameters for Barrett reduction modulo a fixed `m`.
///
/// With `k` the limb count of `m` and `β = 2^Limb::BITS`, `mu = ⌊β^(2k) / m⌋`. Reduction of any
/// `x < β^(2k)` then costs two truncated multiplications and at most two subtractions of `m`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarrettParams {
    /// The modulus.
    modulus: NonZero<Natural>,

    /// `⌊β^(2k) / m⌋`.
    mu: Natural,
}

impl BarrettParams {
    /// Precompute reduction parameters for `modulus`.
    ///
    /// Returns [`Error::InvalidModulus`] if `modulus` is zero.
    pub fn new(modulus: &Natural) -> Result<Self> {
        let modulus = NonZero::<Natural>::new(modulus.try_clone()?).ok_or(Error::InvalidModulus)?;
        let k = modulus.nlimbs();
        let mu = Natural::try_radix_power(2 * k)?.try_div_rem_vartime(&modulus)?.0;
        Ok(Self { modulus, mu })
    }

    /// The modulus these parameters reduce by.
    pub const fn modulus(&self) -> &NonZero<Natural> {
        &self.modulus
    }

    /// The precomputed reciprocal `⌊β^(2k) / m⌋`.
    pub const fn mu(&self) -> &Natural {
        &self.mu
    }

    /// Compute `x mod m`.
    ///
    /// Inputs wider than `2k` limbs fall back to long division. Every intermediate is allocated
    /// fallibly.
    pub fn reduce(&self, x: &Natural) -> Result<Natural> {
        let m = self.modulus.as_ref();
        let k = m.nlimbs();

        if x < m {
            return x.try_clone();
        }

        if x.nlimbs() > 2 * k {
            return x.try_rem_vartime(m);
        }

        // q3 = ⌊⌊x / β^(k-1)⌋ · mu / β^(k+1)⌋ underestimates ⌊x / m⌋ by at most 2
        let q1 = x.try_shr_limbs(k - 1)?;
        let q3 = q1.try_mul(&self.mu)?.try_shr_limbs(k + 1)?;
        let q3m = q3.try_mul(m)?;

        // r = (x - q3·m) mod β^(k+1); the borrow out of the top limb is the wraparound
        let width = k + 1;
        let mut r = Natural::try_zeroed(width)?;
        let low = x.as_limbs().get(..width).unwrap_or(x.as_limbs());
        r[..low.len()].copy_from_slice(low);
        let q3m_low = q3m.as_limbs().get(..width).unwrap_or(q3m.as_limbs());
        sub_assign_slice(&mut r, q3m_low);
        let mut r = Natural::from_limb_vec(r);

        while r >= *m {
            r.sub_assign_unchecked(m);
        }

        Ok(r)
    }
}
