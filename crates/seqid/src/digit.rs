//! The 52-symbol alphabet.
//!
//! Lowercase letters carry digit values `0..=25` and uppercase letters carry
//! `26..=51`. This is *not* ASCII order (`'Z' < 'a'` as bytes), so ordering
//! must always go through [`decode_digit`].

use crate::{Error, Result};

/// Number of symbols in the alphabet.
pub const RADIX: u8 = 52;

/// Symbol with digit value 0.
pub const MIN_SYMBOL: u8 = b'a';

/// Symbol with digit value 51.
pub const MAX_SYMBOL: u8 = b'Z';

const ALPHABET: &[u8; RADIX as usize] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NO_VALUE: u8 = 255;

/// Lookup table for symbol decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < RADIX {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Returns the digit value of `symbol`, or `None` if it is not a letter.
#[inline]
#[must_use]
pub const fn decode_digit(symbol: u8) -> Option<u8> {
    match LOOKUP[symbol as usize] {
        NO_VALUE => None,
        digit => Some(digit),
    }
}

/// Returns the symbol for `digit`.
///
/// Callers reduce modulo [`RADIX`] first; the value is masked into range here
/// regardless so this never panics.
#[inline]
#[must_use]
pub const fn encode_digit(digit: u8) -> u8 {
    ALPHABET[(digit % RADIX) as usize]
}

/// Ordering rank of `symbol`: its digit value, or 255 for non-letters so
/// malformed input sorts after every valid digit instead of panicking.
#[inline]
pub(crate) const fn rank(symbol: u8) -> u8 {
    LOOKUP[symbol as usize]
}

/// Checks that every byte of `symbols` is in the alphabet.
///
/// # Errors
///
/// Returns [`Error::InvalidSymbol`] for the first byte that is not.
pub fn validate(symbols: &[u8]) -> Result<()> {
    match symbols.iter().position(|&b| decode_digit(b).is_none()) {
        Some(index) => Err(Error::InvalidSymbol {
            byte: symbols[index],
            index,
        }),
        None => Ok(()),
    }
}
