use alloc::vec::Vec;

use crate::{Result, SeqId, Snapshot};

/// A minimal interface for generating recyclable letter IDs.
pub trait SeqGenerator: Sized {
    /// Creates a generator counting from `"a"`.
    fn new() -> Self;

    /// Creates a generator counting from `start`.
    fn from_id(start: SeqId) -> Self;

    /// Creates a generator from persisted state.
    ///
    /// # Errors
    ///
    /// See [`SeqState::from_snapshot`](crate::SeqState::from_snapshot).
    fn from_snapshot(snapshot: &Snapshot) -> Result<Self>;

    /// Returns the next available ID, reusing freed IDs first.
    fn next_id(&self) -> SeqId;

    /// Appends the next available ID to `buf`, returning the appended
    /// symbols.
    fn next_id_into<'a>(&self, buf: &'a mut Vec<u8>) -> &'a [u8];

    /// Releases `id` so a later [`Self::next_id`] can return it again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFreeable`](crate::Error::NotFreeable) if `id` is
    /// not below the next fresh value or is already free.
    fn free_id(&self, id: &SeqId) -> Result<()>;

    /// Captures the generator's state.
    fn snapshot(&self) -> Snapshot;

    /// Replaces the generator's state, including its whole free list.
    ///
    /// # Errors
    ///
    /// On error the previous state is kept. See
    /// [`SeqState::from_snapshot`](crate::SeqState::from_snapshot).
    fn restore(&self, snapshot: &Snapshot) -> Result<()>;
}
