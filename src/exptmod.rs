//! Modular exponentiation entry points and engine selection.

use crate::{
    Kernel, Natural, NaturalKernel, Result, nlimbs,
    modular::{ModulusKind, pow_barrett},
};
use tracing::debug;

/// Tuning knobs for engine selection.
///
/// Limb counts are measured on the modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    /// Odd moduli with fewer limbs than this are eligible for the fast path.
    pub montgomery_cutoff: usize,

    /// Only moduli with more limbs than this are eligible for the fast path.
    pub fast_path_min_limbs: usize,
}

impl Config {
    /// Default odd-modulus cutoff for the fast path, in bits.
    pub const MONTGOMERY_CUTOFF_BITS: u32 = 3584;

    /// Default size a modulus must exceed to use the fast path, in bits.
    pub const FAST_PATH_MIN_BITS: u32 = 112;

    /// Default configuration.
    pub const fn new() -> Self {
        Self {
            montgomery_cutoff: nlimbs(Self::MONTGOMERY_CUTOFF_BITS),
            fast_path_min_limbs: nlimbs(Self::FAST_PATH_MIN_BITS),
        }
    }

    /// Set [`Config::montgomery_cutoff`].
    #[must_use]
    pub const fn with_montgomery_cutoff(mut self, limbs: usize) -> Self {
        self.montgomery_cutoff = limbs;
        self
    }

    /// Set [`Config::fast_path_min_limbs`].
    #[must_use]
    pub const fn with_fast_path_min_limbs(mut self, limbs: usize) -> Self {
        self.fast_path_min_limbs = limbs;
        self
    }

    /// Pick an engine for a modulus of `nlimbs` limbs with the given parity and shape.
    pub const fn select(&self, is_odd: bool, nlimbs: usize, kind: ModulusKind) -> Strategy {
        let eligible = (is_odd && nlimbs < self.montgomery_cutoff) || kind.is_diminished_radix();

        if eligible && nlimbs > self.fast_path_min_limbs {
            Strategy::FastPath(kind)
        } else {
            Strategy::Barrett
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine chosen for a given modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The specialized fast path, told how the modulus is shaped.
    FastPath(ModulusKind),

    /// The windowed engine with Barrett reduction.
    Barrett,
}

/// Specialized exponentiation engine for odd or diminished radix moduli.
pub trait FastPath<K: Kernel> {
    /// Compute `base^exponent mod modulus`, where `modulus` has the given `kind`.
    fn exptmod(
        &self,
        kernel: &K,
        base: &K::Int,
        exponent: &K::Int,
        modulus: &K::Int,
        kind: ModulusKind,
    ) -> Result<K::Int>;
}

/// No fast path: every modulus goes through the windowed Barrett engine.
///
/// Uninhabited, so `Option<NoFastPath>` is always `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoFastPath {}

impl<K: Kernel> FastPath<K> for NoFastPath {
    fn exptmod(&self, _: &K, _: &K::Int, _: &K::Int, _: &K::Int, _: ModulusKind) -> Result<K::Int> {
        match *self {}
    }
}

/// Modular exponentiation `Y = G^X mod P` over the integers of a [`Kernel`].
///
/// Routes each call either to a configured [`FastPath`] or to the windowed engine with Barrett
/// reduction ([`pow_barrett`]), according to [`Config::select`]. When the fast path is selected
/// but none is configured, the Barrett engine handles the call.
///
/// ```
/// use bigint_exptmod::{Exptmod, Natural, NaturalKernel};
///
/// let engine = Exptmod::new(NaturalKernel);
/// let y = engine
///     .exptmod(&Natural::from(4u8), &Natural::from(13u8), &Natural::from(497u16))
///     .unwrap();
/// assert_eq!(y, Natural::from(445u16));
/// ```
#[derive(Clone, Debug)]
pub struct Exptmod<K, F = NoFastPath> {
    kernel: K,
    fast_path: Option<F>,
    config: Config,
}

impl<K: Kernel> Exptmod<K> {
    /// Create an exponentiator without a fast path.
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            fast_path: None,
            config: Config::new(),
        }
    }
}

impl<K: Kernel + Default, F> Default for Exptmod<K, F> {
    fn default() -> Self {
        Self {
            kernel: K::default(),
            fast_path: None,
            config: Config::new(),
        }
    }
}

impl<K: Kernel, F: FastPath<K>> Exptmod<K, F> {
    /// Route eligible moduli to `fast_path`.
    pub fn with_fast_path<G: FastPath<K>>(self, fast_path: G) -> Exptmod<K, G> {
        Exptmod {
            kernel: self.kernel,
            fast_path: Some(fast_path),
            config: self.config,
        }
    }

    /// Replace the engine selection thresholds.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The arithmetic kernel.
    pub const fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The engine selection thresholds.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Which engine [`Exptmod::exptmod`] would pick for `modulus`.
    ///
    /// Inspects the modulus only. [`Strategy::FastPath`] is reported even if no fast path is
    /// configured.
    pub fn strategy(&self, modulus: &K::Int) -> Strategy {
        self.config.select(
            self.kernel.is_odd(modulus),
            self.kernel.limbs(modulus).len(),
            self.kernel.modulus_kind(modulus),
        )
    }

    /// Compute `base^exponent mod modulus`.
    ///
    /// Returns [`Error::InvalidModulus`][`crate::Error::InvalidModulus`] if `modulus` is zero,
    /// or whatever error the selected engine reports.
    pub fn exptmod(&self, base: &K::Int, exponent: &K::Int, modulus: &K::Int) -> Result<K::Int> {
        match (self.strategy(modulus), &self.fast_path) {
            (Strategy::FastPath(kind), Some(fast_path)) => {
                debug!(?kind, "delegating to fast path");
                fast_path.exptmod(&self.kernel, base, exponent, modulus, kind)
            }
            (strategy, _) => {
                debug!(?strategy, "using windowed Barrett engine");
                pow_barrett(&self.kernel, base, exponent, modulus)
            }
        }
    }

    /// Compute `base^exponent mod modulus` and exchange it into `out`.
    ///
    /// On error `out` is left untouched.
    pub fn exptmod_into(
        &self,
        base: &K::Int,
        exponent: &K::Int,
        modulus: &K::Int,
        out: &mut K::Int,
    ) -> Result<()> {
        let mut res = self.exptmod(base, exponent, modulus)?;
        self.kernel.exchange(&mut res, out);
        Ok(())
    }
}

/// Compute `base^exponent mod modulus` with [`NaturalKernel`] and no fast path.
pub fn exptmod(base: &Natural, exponent: &Natural, modulus: &Natural) -> Result<Natural> {
    Exptmod::new(NaturalKernel).exptmod(base, exponent, modulus)
}
