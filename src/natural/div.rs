//! [`Natural`] division operations.

use super::add::add_assign_slice;
use crate::{Error, Limb, Natural, NonZero, Result, WideWord, Word, primitives::div_wide};
use core::{
    cmp::Ordering,
    ops::{Div, Rem},
};

impl Natural {
    /// Computes `self / rhs`, returning the quotient and remainder.
    ///
    /// Variable-time with respect to both `self` and `rhs`.
    pub fn div_rem_vartime(&self, rhs: &NonZero<Self>) -> (Self, Self) {
        self.try_div_rem_vartime(rhs).expect("allocation failure")
    }

    /// Computes `self / rhs`, reporting allocation exhaustion as an error.
    ///
    /// Variable-time with respect to both `self` and `rhs`.
    pub fn try_div_rem_vartime(&self, rhs: &NonZero<Self>) -> Result<(Self, Self)> {
        self.try_div_rem(rhs.as_ref())
    }

    /// Computes `self % rhs`.
    ///
    /// Variable-time with respect to both `self` and `rhs`.
    pub fn rem_vartime(&self, rhs: &NonZero<Self>) -> Self {
        self.div_rem_vartime(rhs).1
    }

    /// Computes `self % rhs`, returning `None` if `rhs` is zero.
    ///
    /// Variable-time with respect to both `self` and `rhs`.
    pub fn checked_rem_vartime(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        Some(self.try_rem_vartime(rhs).expect("allocation failure"))
    }

    /// Computes `self % rhs` with every allocation fallible.
    ///
    /// Returns [`Error::InvalidModulus`] if `rhs` is zero and [`Error::Allocation`] if a buffer
    /// cannot be reserved. Variable-time with respect to both `self` and `rhs`.
    pub fn try_rem_vartime(&self, rhs: &Self) -> Result<Self> {
        match rhs.as_limbs() {
            [] => Err(Error::InvalidModulus),
            [d] => Ok(self.try_div_rem_limb(NonZero(*d))?.1.into()),
            _ if self < rhs => self.try_clone(),
            _ => Ok(self.try_div_rem(rhs)?.1),
        }
    }

    /// Knuth's algorithm D. `rhs` must be non-zero.
    fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        match self.cmp(rhs) {
            Ordering::Less => return Ok((Self::zero(), self.try_clone()?)),
            Ordering::Equal => return Ok((Self::try_from_limbs(&[Limb::ONE])?, Self::zero())),
            Ordering::Greater => {}
        }

        // rhs is just a single word
        if let [d] = rhs.as_limbs() {
            let (q, r) = self.try_div_rem_limb(NonZero(*d))?;
            return Ok((q, r.into()));
        }

        // This algorithm is from Knuth, TAOCP vol 2 section 4.3, algorithm D.
        //
        // First, normalize the arguments so the highest bit in the highest digit of the divisor is
        // set: the main loop uses the highest digit of the divisor for generating guesses.
        let shift = rhs.limbs[rhs.nlimbs() - 1].leading_zeros();
        let b = rhs.try_shl_vartime(shift)?;
        let n = b.nlimbs();
        let m = self.nlimbs() - n;

        let mut a = self.try_shl_vartime(shift)?.limbs;
        let len = self.nlimbs() + 1;
        a.try_reserve_exact(len.saturating_sub(a.len()))?;
        a.resize(len, Limb::ZERO);
        let mut q = Self::try_zeroed(m + 1)?;

        let b_top = b.limbs[n - 1].wide();
        let b_next = b.limbs[n - 2].wide();
        let base = WideWord::from(Word::MAX) + 1;

        for j in (0..=m).rev() {
            // Estimate the next quotient digit from the top two digits of the remainder. The
            // estimate is at most two too large once the divisor is normalized.
            let num = (a[j + n].wide() << Limb::BITS) | a[j + n - 1].wide();
            let mut q_hat = num / b_top;
            let mut r_hat = num % b_top;

            while q_hat >= base || q_hat * b_next > ((r_hat << Limb::BITS) | a[j + n - 2].wide()) {
                q_hat -= 1;
                r_hat += b_top;
                if r_hat >= base {
                    break;
                }
            }

            // Multiply and subtract `q_hat * b` from the current window of `a`.
            let q_limb = Limb(q_hat as Word);
            let mut carry = Limb::ZERO;
            let mut borrow = Limb::ZERO;
            for (i, &bi) in b.limbs.iter().enumerate() {
                let (prod, hi) = q_limb.carrying_mul_add(bi, Limb::ZERO, carry);
                carry = hi;
                (a[i + j], borrow) = a[i + j].borrowing_sub(prod, borrow);
            }
            (a[j + n], borrow) = a[j + n].borrowing_sub(carry, borrow);

            // The estimate was one too large: add the divisor back.
            if borrow != Limb::ZERO {
                q_hat -= 1;
                add_assign_slice(&mut a[j..=j + n], &b.limbs);
            }

            q[j] = Limb(q_hat as Word);
        }

        a.truncate(n);
        let rem = Self::from_limb_vec(a).try_shr_vartime(shift)?;
        debug_assert!(rem < *rhs);

        Ok((Self::from_limb_vec(q), rem))
    }

    /// Division by a single limb, returning the quotient and remainder.
    ///
    /// Variable-time.
    pub fn div_rem_limb(&self, rhs: NonZero<Limb>) -> (Self, Limb) {
        self.try_div_rem_limb(rhs).expect("allocation failure")
    }

    /// Like [`Natural::div_rem_limb`], reporting allocation exhaustion as an error.
    pub fn try_div_rem_limb(&self, rhs: NonZero<Limb>) -> Result<(Self, Limb)> {
        let d = rhs.get().0;
        let mut limbs = self.try_clone()?.limbs;
        let mut rem: Word = 0;

        for limb in limbs.iter_mut().rev() {
            let (q, r) = div_wide(rem, limb.0, d);
            *limb = Limb(q);
            rem = r;
        }

        Ok((Self::from_limb_vec(limbs), Limb(rem)))
    }
}

impl Div<&NonZero<Natural>> for &Natural {
    type Output = Natural;

    fn div(self, rhs: &NonZero<Natural>) -> Natural {
        self.div_rem_vartime(rhs).0
    }
}

impl Div<&NonZero<Natural>> for Natural {
    type Output = Natural;

    fn div(self, rhs: &NonZero<Natural>) -> Natural {
        self.div_rem_vartime(rhs).0
    }
}

impl Rem<&NonZero<Natural>> for &Natural {
    type Output = Natural;

    #[inline]
    fn rem(self, rhs: &NonZero<Natural>) -> Natural {
        self.rem_vartime(rhs)
    }
}

impl Rem<&NonZero<Natural>> for Natural {
    type Output = Natural;

    #[inline]
    fn rem(self, rhs: &NonZero<Natural>) -> Natural {
        self.rem_vartime(rhs)
    }
}
