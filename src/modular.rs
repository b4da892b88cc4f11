//! Modular arithmetic support: Barrett reduction, modulus classification, and the windowed
//! exponentiation engine built on top of them.
//!
//! The engine is generic over a [`Kernel`][`crate::Kernel`], so it can drive any big integer
//! representation that provides the handful of primitive operations it needs.

mod barrett;
mod bits;
mod diminished_radix;
mod pow;
mod reducer;
mod scan;
mod window;

pub use self::{
    barrett::BarrettParams,
    bits::ExponentBits,
    diminished_radix::{ModulusKind, dr_setup, is_diminished_radix},
    pow::pow_barrett,
    reducer::BarrettReducer,
    scan::{Flush, ScanState, Step},
    window::{PowerTable, TableSlots, WindowSize},
};
