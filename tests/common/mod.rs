//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use bigint_exptmod::{Error, Kernel, Limb, Natural, NaturalKernel, Result, modular::BarrettParams};
use num_bigint::BigUint;
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

/// `Natural` to `num_bigint::BigUint`
pub fn to_biguint(n: &Natural) -> BigUint {
    let mut bytes = Vec::with_capacity(n.as_ref().len() * Limb::BYTES);

    for limb in n.as_ref() {
        bytes.extend_from_slice(&limb.0.to_le_bytes());
    }

    BigUint::from_bytes_le(&bytes)
}

/// `num_bigint::BigUint` to `Natural`
pub fn to_natural(n: &BigUint) -> Natural {
    Natural::from_be_slice(&n.to_bytes_be())
}

/// Right-to-left square-and-multiply over `BigUint`, independent of the engine under test.
pub fn naive_exptmod(g: &BigUint, x: &BigUint, p: &BigUint) -> BigUint {
    let mut base = g % p;
    let mut acc = BigUint::from(1u8) % p;

    for i in 0..x.bits() {
        if x.bit(i) {
            acc = (&acc * &base) % p;
        }
        base = (&base * &base) % p;
    }

    acc
}

/// Kernel operations that [`CountingKernel`] can be told to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Alloc,
    One,
    Copy,
    Modulo,
    Square,
    Multiply,
    BarrettSetup,
    BarrettReduce,
}

/// Value produced by [`CountingKernel`], tracked until it is dropped.
#[derive(Debug)]
pub struct Tracked<T> {
    pub value: T,
    live: Rc<Cell<usize>>,
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

/// [`NaturalKernel`] wrapper which counts live values and fails the `n`th call of a chosen
/// operation with a chosen error.
#[derive(Debug, Default)]
pub struct CountingKernel {
    live: Rc<Cell<usize>>,
    calls: RefCell<HashMap<Op, usize>>,
    fail: Option<(Op, usize, Error)>,
}

impl CountingKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `nth` (1-based) call of `op` with `err`.
    pub fn failing(op: Op, nth: usize, err: Error) -> Self {
        Self {
            fail: Some((op, nth, err)),
            ..Self::default()
        }
    }

    /// Number of values created by this kernel which are still alive.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Number of times `op` has been called.
    pub fn calls(&self, op: Op) -> usize {
        self.calls.borrow().get(&op).copied().unwrap_or(0)
    }

    /// Wrap an input value so it is tracked too.
    pub fn int(&self, value: impl Into<Natural>) -> Tracked<Natural> {
        self.track(value.into())
    }

    fn track<T>(&self, value: T) -> Tracked<T> {
        self.live.set(self.live.get() + 1);
        Tracked {
            value,
            live: Rc::clone(&self.live),
        }
    }

    fn enter(&self, op: Op) -> Result<()> {
        let mut calls = self.calls.borrow_mut();
        let count = calls.entry(op).or_default();
        *count += 1;

        match self.fail {
            Some((fail_op, nth, err)) if fail_op == op && nth == *count => Err(err),
            _ => Ok(()),
        }
    }
}

impl Kernel for CountingKernel {
    type Int = Tracked<Natural>;
    type Barrett = Tracked<BarrettParams>;

    fn alloc(&self) -> Result<Self::Int> {
        self.enter(Op::Alloc)?;
        Ok(self.track(NaturalKernel.alloc()?))
    }

    fn one(&self) -> Result<Self::Int> {
        self.enter(Op::One)?;
        Ok(self.track(NaturalKernel.one()?))
    }

    fn copy(&self, src: &Self::Int) -> Result<Self::Int> {
        self.enter(Op::Copy)?;
        Ok(self.track(NaturalKernel.copy(&src.value)?))
    }

    fn limbs<'a>(&self, x: &'a Self::Int) -> &'a [Limb] {
        x.value.as_limbs()
    }

    fn modulo(&self, a: &Self::Int, m: &Self::Int) -> Result<Self::Int> {
        self.enter(Op::Modulo)?;
        Ok(self.track(NaturalKernel.modulo(&a.value, &m.value)?))
    }

    fn square(&self, a: &Self::Int) -> Result<Self::Int> {
        self.enter(Op::Square)?;
        Ok(self.track(NaturalKernel.square(&a.value)?))
    }

    fn multiply(&self, a: &Self::Int, b: &Self::Int) -> Result<Self::Int> {
        self.enter(Op::Multiply)?;
        Ok(self.track(NaturalKernel.multiply(&a.value, &b.value)?))
    }

    fn barrett_setup(&self, m: &Self::Int) -> Result<Self::Barrett> {
        self.enter(Op::BarrettSetup)?;
        Ok(self.track(NaturalKernel.barrett_setup(&m.value)?))
    }

    fn barrett_reduce(
        &self,
        x: &mut Self::Int,
        m: &Self::Int,
        ctx: &Self::Barrett,
    ) -> Result<()> {
        self.enter(Op::BarrettReduce)?;
        NaturalKernel.barrett_reduce(&mut x.value, &m.value, &ctx.value)
    }
}
