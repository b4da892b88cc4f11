//! Decoding and encoding operations for [`Natural`].

use crate::{DecodeError, Limb, Natural, Word};
use alloc::vec::Vec;
use core::fmt;

impl Natural {
    /// Create a new [`Natural`] from the provided big endian bytes.
    ///
    /// Leading zero bytes are accepted and trimmed.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        let limbs = bytes
            .rchunks(Limb::BYTES)
            .map(|chunk| {
                let mut buf = [0u8; Limb::BYTES];
                buf[Limb::BYTES - chunk.len()..].copy_from_slice(chunk);
                Limb(Word::from_be_bytes(buf))
            })
            .collect();

        Self::from_limb_vec(limbs)
    }

    /// Serialize this [`Natural`] as big-endian bytes without leading zeros.
    ///
    /// Zero serializes as an empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self
            .limbs
            .iter()
            .rev()
            .flat_map(|limb| limb.0.to_be_bytes())
            .collect();

        let leading = bytes.iter().take_while(|&&b| b == 0).count();
        bytes.drain(..leading);
        bytes
    }

    /// Create a new [`Natural`] from a big-endian hexadecimal string.
    ///
    /// Accepts an optional `0x` prefix and any number of digits.
    pub fn from_be_hex(hex: &str) -> Result<Self, DecodeError> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex).as_bytes();
        if digits.is_empty() {
            return Err(DecodeError::Empty);
        }

        let nibbles_per_limb = Limb::BYTES * 2;
        let mut limbs = Vec::with_capacity(digits.len().div_ceil(nibbles_per_limb));

        for chunk in digits.rchunks(nibbles_per_limb) {
            let mut word: Word = 0;
            for &c in chunk {
                word = (word << 4) | Word::from(decode_nibble(c)?);
            }
            limbs.push(Limb(word));
        }

        Ok(Self::from_limb_vec(limbs))
    }
}

fn decode_nibble(c: u8) -> Result<u8, DecodeError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(DecodeError::InvalidDigit),
    }
}

impl fmt::LowerHex for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }

        let mut iter = self.limbs.iter().rev();
        match iter.next() {
            Some(top) => write!(f, "{:x}", top.0)?,
            None => return write!(f, "0"),
        }
        for limb in iter {
            write!(f, "{:0width$x}", limb.0, width = Limb::BYTES * 2)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }

        let mut iter = self.limbs.iter().rev();
        match iter.next() {
            Some(top) => write!(f, "{:X}", top.0)?,
            None => return write!(f, "0"),
        }
        for limb in iter {
            write!(f, "{:0width$X}", limb.0, width = Limb::BYTES * 2)?;
        }
        Ok(())
    }
}
