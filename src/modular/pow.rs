//! Sliding window modular exponentiation with Barrett reduction.

use super::{BarrettReducer, ExponentBits, Flush, ScanState, Step, TableSlots, WindowSize};
use crate::{Kernel, Result};
use tracing::{debug, instrument, trace};

/// Computes `base^exponent mod modulus` with a left-to-right sliding window over the exponent
/// and Barrett reduction after every product.
///
/// Works for any non-zero modulus, odd or even. Returns
/// [`Error::InvalidModulus`][`crate::Error::InvalidModulus`] if `modulus` is zero. Any error
/// reported by the kernel is returned unchanged once every intermediate value has been dropped.
///
/// NOTE: variable-time with respect to all inputs.
#[instrument(level = "debug", skip_all)]
pub fn pow_barrett<K: Kernel>(
    kernel: &K,
    base: &K::Int,
    exponent: &K::Int,
    modulus: &K::Int,
) -> Result<K::Int> {
    let exponent_bits = kernel.bits(exponent);
    let window = WindowSize::for_exponent_bits(exponent_bits);
    debug!(exponent_bits, window = window.get(), "selected window size");

    let slots = TableSlots::allocate(kernel, window)?;
    let reducer = BarrettReducer::new(kernel, modulus)?;
    let table = slots.populate(&reducer, base)?;
    trace!(entries = window.midpoint() + 1, "power table built");

    let mut res = kernel.one()?;
    let mut state = ScanState::default();
    let (mut squarings, mut windows) = (0usize, 0usize);

    for bit in ExponentBits::new(kernel.limbs(exponent)) {
        let (next, step) = state.advance(bit, window);

        match step {
            Step::Skip | Step::Buffer => (),
            Step::Square => {
                reducer.square_assign(&mut res)?;
                squarings += 1;
            }
            Step::Window { index } => {
                for _ in 0..window.get() {
                    reducer.square_assign(&mut res)?;
                }
                reducer.mul_assign(&mut res, table.window_entry(index))?;
                windows += 1;
            }
        }

        state = next;
    }

    match state.finish() {
        Flush::ZeroExponent => reducer.reduce(&mut res)?,
        Flush::Done => (),
        Flush::Partial { bits, window: buffered } => {
            for i in (0..bits).rev() {
                reducer.square_assign(&mut res)?;
                if (buffered >> i) & 1 == 1 {
                    reducer.mul_assign(&mut res, table.base())?;
                }
            }
        }
    }

    trace!(squarings, windows, "exponent scan complete");
    Ok(res)
}
