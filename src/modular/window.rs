//! Window sizing and the precomputed power table.

use super::BarrettReducer;
use crate::{Kernel, Result};
use alloc::vec::Vec;

/// Exponent bit lengths up to which each window size is used, smallest window first.
const WINDOW_THRESHOLDS: [(u32, u32); 6] = [(7, 2), (36, 3), (140, 4), (450, 5), (1303, 6), (3529, 7)];

/// Width in bits of a sliding window over the exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowSize(u32);

impl WindowSize {
    /// Smallest supported window.
    pub const MIN: Self = Self(2);

    /// Largest supported window.
    pub const MAX: Self = Self(8);

    /// Create a window of `bits` bits, if it lies within [`WindowSize::MIN`]..=[`WindowSize::MAX`].
    pub const fn new(bits: u32) -> Option<Self> {
        if bits >= Self::MIN.0 && bits <= Self::MAX.0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Window size for an exponent of `bits` bits.
    pub const fn for_exponent_bits(bits: u32) -> Self {
        let mut i = 0;
        while i < WINDOW_THRESHOLDS.len() {
            let (max_bits, window) = WINDOW_THRESHOLDS[i];
            if bits <= max_bits {
                return Self(window);
            }
            i += 1;
        }
        Self::MAX
    }

    /// Width in bits.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// `2^w`: one past the largest table index.
    pub const fn table_len(self) -> usize {
        1 << self.0
    }

    /// `2^(w-1)`: the smallest index a full window can produce.
    pub const fn midpoint(self) -> usize {
        1 << (self.0 - 1)
    }
}

/// Storage for a [`PowerTable`] that has been allocated but not yet computed.
///
/// Holds `M[1]` and `M[2^(w-1)]..M[2^w - 1]`. Entries `2..2^(w-1)` are never read by the scan and
/// have no slot.
#[derive(Debug)]
pub struct TableSlots<I> {
    window: WindowSize,
    slots: Vec<I>,
}

impl<I> TableSlots<I> {
    /// Allocate every slot through `kernel`. On failure the slots allocated so far are released.
    pub fn allocate<K: Kernel<Int = I>>(kernel: &K, window: WindowSize) -> Result<Self> {
        let count = window.midpoint() + 1;
        let mut slots = Vec::new();
        slots.try_reserve_exact(count)?;

        for _ in 0..count {
            slots.push(kernel.alloc()?);
        }

        Ok(Self { window, slots })
    }

    /// Window size the slots were allocated for.
    pub const fn window(&self) -> WindowSize {
        self.window
    }

    /// Compute the table entries for `base`:
    ///
    /// 1. `M[1] = base mod m`
    /// 2. `M[2^(w-1)] = M[1]^(2^(w-1))` by `w - 1` squarings
    /// 3. `M[i] = M[i - 1] * M[1]` for the rest of the upper half
    pub fn populate<K: Kernel<Int = I>>(
        self,
        reducer: &BarrettReducer<'_, K>,
        base: &I,
    ) -> Result<PowerTable<I>> {
        let Self { window, mut slots } = self;
        let kernel = reducer.kernel();

        slots[0] = kernel.modulo(base, reducer.modulus())?;

        slots[1] = kernel.copy(&slots[0])?;
        for _ in 1..window.get() {
            reducer.square_assign(&mut slots[1])?;
        }

        for i in 2..slots.len() {
            let (done, rest) = slots.split_at_mut(i);
            rest[0] = reducer.mul(&done[i - 1], &done[0])?;
        }

        Ok(PowerTable { window, slots })
    }
}

/// Precomputed powers `M[i] = base^i mod m` of the exponentiation base.
#[derive(Debug)]
pub struct PowerTable<I> {
    window: WindowSize,
    slots: Vec<I>,
}

impl<I> PowerTable<I> {
    /// Window size the table serves.
    pub const fn window(&self) -> WindowSize {
        self.window
    }

    /// `M[1] = base mod m`.
    pub fn base(&self) -> &I {
        &self.slots[0]
    }

    /// `M[index]`, if the table holds it: index `1` or `2^(w-1)..2^w`.
    pub fn get(&self, index: usize) -> Option<&I> {
        let midpoint = self.window.midpoint();
        match index {
            1 => Some(&self.slots[0]),
            _ if index >= midpoint => self.slots.get(index - midpoint + 1),
            _ => None,
        }
    }

    /// Indices of the populated entries, in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        core::iter::once(1).chain(self.window.midpoint()..self.window.table_len())
    }

    /// Upper-half entry selected by a completed window.
    pub(crate) fn window_entry(&self, index: usize) -> &I {
        debug_assert!(index >= self.window.midpoint() && index < self.window.table_len());
        &self.slots[index - self.window.midpoint() + 1]
    }
}
