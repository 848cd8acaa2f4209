use alloc::{string::String, vec::Vec};
use core::{cmp::Ordering, fmt, str::FromStr};

use crate::{Error, Result, compare, digit};

/// An identifier: a sequence of letters stored least-significant first.
///
/// Equality is byte equality; ordering is [`compare`]. The printable form is
/// the stored byte order, so `"ba"` is the identifier that follows `"aa"`.
///
/// `SeqId` deliberately does not implement `Borrow<[u8]>`: its ordering
/// differs from that of byte slices.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SeqId(Vec<u8>);

impl SeqId {
    /// The first identifier of the alphabet, `"a"`.
    #[must_use]
    pub fn first() -> Self {
        Self(alloc::vec![digit::MIN_SYMBOL])
    }

    /// Builds an identifier from raw symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSymbol`] if any byte is outside `a-z`/`A-Z`.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        digit::validate(&bytes)?;
        Ok(Self(bytes))
    }

    /// The raw symbols, least significant first.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The printable form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: every byte was checked against the ASCII letter alphabet on
        // the way in, so the buffer is valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(&self.0) }
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the (valid but degenerate) empty identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the identifier and returns its symbols.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub(crate) fn symbols_mut(&mut self) -> &mut Vec<u8> {
        &mut self.0
    }
}

impl Default for SeqId {
    fn default() -> Self {
        Self::first()
    }
}

impl Ord for SeqId {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

impl PartialOrd for SeqId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SeqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for SeqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<[u8]> for SeqId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for SeqId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for SeqId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&str> for SeqId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<Vec<u8>> for SeqId {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<String> for SeqId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::from_bytes(s.into_bytes())
    }
}

impl From<SeqId> for String {
    fn from(id: SeqId) -> Self {
        // SAFETY: see `SeqId::as_str`.
        unsafe { String::from_utf8_unchecked(id.0) }
    }
}

impl PartialEq<str> for SeqId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for SeqId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}
