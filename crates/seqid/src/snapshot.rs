use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::SeqId;

/// Portable form of a generator's state.
///
/// With the `serde` feature this serializes as
/// `{"current":"c","free":["a","b"]}`, omitting `free` when it is empty.
/// `curr` is accepted as an alias for `current` on input.
///
/// Restoring a snapshot and taking a new one reproduces `current` exactly and
/// `free` in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct Snapshot {
    /// The next fresh identifier.
    #[cfg_attr(feature = "serde", serde(alias = "curr"))]
    pub current: String,

    /// Pending free-list entries, oldest first.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub free: Vec<String>,
}

impl Snapshot {
    pub fn new<'a>(current: &SeqId, free: impl IntoIterator<Item = &'a SeqId>) -> Self {
        Self {
            current: current.to_string(),
            free: free.into_iter().map(ToString::to_string).collect(),
        }
    }
}
