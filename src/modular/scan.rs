//! Left-to-right sliding window scan over exponent bits.

use super::WindowSize;

/// Scan state while consuming exponent bits most significant first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanState {
    /// No set bit seen yet. The accumulator is still `1`, so squaring it would be wasted work.
    #[default]
    SkipLeadingZeros,

    /// Between windows: every zero bit squares the accumulator.
    Squaring,

    /// Collecting a window which started at a set bit.
    Accumulating {
        /// Number of bits buffered so far, `1..window_size`.
        bits: u32,

        /// The buffered bits; its top bit (at position `bits - 1`) is always set.
        window: usize,
    },
}

/// Work requested by a single [`ScanState::advance`] transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Leading zero: nothing to do.
    Skip,

    /// Square the accumulator once.
    Square,

    /// The bit was buffered into the current window.
    Buffer,

    /// A full window completed: square the accumulator `window_size` times, then multiply by
    /// table entry `index`.
    Window {
        /// Table index in `2^(w-1)..2^w`.
        index: usize,
    },
}

/// Work left over once every exponent bit has been consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flush {
    /// The exponent had no set bits: the accumulator still holds an unreduced `1`.
    ZeroExponent,

    /// The scan ended on a window boundary.
    Done,

    /// A partial window of `bits` bits remains buffered in `window`, most significant first.
    /// Each buffered bit squares the accumulator, then multiplies by the base if the bit is set.
    Partial {
        /// Number of buffered bits, `1..window_size`.
        bits: u32,

        /// The buffered bits.
        window: usize,
    },
}

impl ScanState {
    /// Consume the next exponent bit.
    pub const fn advance(self, bit: bool, size: WindowSize) -> (Self, Step) {
        match self {
            Self::SkipLeadingZeros if !bit => (self, Step::Skip),
            Self::Squaring if !bit => (self, Step::Square),
            Self::SkipLeadingZeros | Self::Squaring => Self::buffer(0, 0, bit, size),
            Self::Accumulating { bits, window } => Self::buffer(bits, window, bit, size),
        }
    }

    /// Bits left over after the last [`ScanState::advance`].
    pub const fn finish(self) -> Flush {
        match self {
            Self::SkipLeadingZeros => Flush::ZeroExponent,
            Self::Squaring => Flush::Done,
            Self::Accumulating { bits, window } => Flush::Partial { bits, window },
        }
    }

    const fn buffer(bits: u32, window: usize, bit: bool, size: WindowSize) -> (Self, Step) {
        let bits = bits + 1;
        let window = (window << 1) | bit as usize;

        if bits == size.get() {
            (Self::Squaring, Step::Window { index: window })
        } else {
            (Self::Accumulating { bits, window }, Step::Buffer)
        }
    }
}
