//! Pure Rust modular exponentiation `Y = G^X mod P` for arbitrary-precision natural numbers.
//!
//! # About
//! The centerpiece is a sliding window exponentiation engine with Barrett reduction
//! ([`modular::pow_barrett`]) which works for any non-zero modulus. An [`Exptmod`] dispatcher
//! inspects the modulus and routes odd or diminished radix moduli of suitable size to a
//! pluggable [`FastPath`] engine when one is configured, falling back to the Barrett engine
//! otherwise.
//!
//! The engines are generic over an arithmetic [`Kernel`]. The crate ships a variable-time
//! reference kernel, [`NaturalKernel`], over its own heap-allocated [`Natural`] type.
//!
//! # Usage
//! ```
//! use bigint_exptmod::{Natural, exptmod};
//!
//! let g = Natural::from(4u8);
//! let x = Natural::from(13u8);
//! let p = Natural::from(497u16);
//!
//! assert_eq!(exptmod(&g, &x, &p).unwrap(), Natural::from(445u16));
//! assert_eq!(g.pow_mod(&x, &p).unwrap(), Natural::from(445u16));
//! ```
//!
//! # Security
//! Nothing in this crate is constant-time. Do not use it with secret exponents.
//!
//! # Minimum Supported Rust Version
//! **Rust 1.85** at a minimum.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

pub mod modular;

mod error;
mod exptmod;
mod limb;
mod natural;
mod non_zero;
mod primitives;
mod traits;
mod word;

pub use crate::{
    error::{DecodeError, Error, Result},
    exptmod::{Config, Exptmod, FastPath, NoFastPath, Strategy, exptmod},
    limb::{Limb, nlimbs},
    modular::ModulusKind,
    natural::{Natural, NaturalKernel},
    non_zero::NonZero,
    traits::Kernel,
    word::{WideWord, Word},
};
pub use subtle;
