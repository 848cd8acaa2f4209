use core::fmt;

use crate::SeqId;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `seqid` can emit.
///
/// Every failure is a deterministic function of the input and the current
/// generator state, so retrying with the same arguments never changes the
/// outcome.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A byte outside `a-z`/`A-Z` was found in a seed or snapshot.
    InvalidSymbol {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },

    /// The identifier cannot be freed.
    ///
    /// Either it is not strictly below the generator's next fresh value, or it
    /// is already on the free list. The generator state is left unchanged.
    NotFreeable {
        /// The rejected identifier.
        id: SeqId,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { byte, index } => {
                write!(f, "invalid symbol {byte:#04x} at index {index}")
            }
            Self::NotFreeable { id } => write!(f, "can't free id {id:?}"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_offending_input() {
        let err = Error::InvalidSymbol {
            byte: b'1',
            index: 1,
        };
        assert_eq!(err.to_string(), "invalid symbol 0x31 at index 1");

        let err = Error::NotFreeable {
            id: SeqId::try_from("ab").unwrap(),
        };
        assert_eq!(err.to_string(), "can't free id \"ab\"");
    }
}
