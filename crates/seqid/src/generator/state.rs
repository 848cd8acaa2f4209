use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{Error, FreeList, Odometer, Result, SeqId, Snapshot};

/// The allocator record: the odometer and the pending free list.
///
/// `SeqState` is not synchronized. Generators wrap it to decide how it is
/// shared (see [`BasicSeqGenerator`] and `LockSeqGenerator`).
///
/// [`BasicSeqGenerator`]: crate::BasicSeqGenerator
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeqState {
    current: Odometer,
    pending: FreeList,
}

impl SeqState {
    /// A fresh record counting from `"a"` with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::from_id(SeqId::first())
    }

    /// A fresh record counting from `start` with nothing pending.
    #[must_use]
    pub fn from_id(start: SeqId) -> Self {
        Self {
            current: Odometer::from_id(start),
            pending: FreeList::new(),
        }
    }

    /// Rebuilds a record from a snapshot.
    ///
    /// `current` and every `free` entry must be valid identifiers, and each
    /// free entry must pass the same checks as [`Self::free_id`] when
    /// replayed in order.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSymbol`] if a string holds a non-letter byte
    /// - [`Error::NotFreeable`] if a free entry is a duplicate or not below
    ///   `current`
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let restored = Self::replay(snapshot);
        #[cfg(feature = "tracing")]
        if let Err(e) = &restored {
            tracing::debug!(error = %e, current = %snapshot.current, "rejecting snapshot");
        }
        restored
    }

    fn replay(snapshot: &Snapshot) -> Result<Self> {
        let mut state = Self::from_id(snapshot.current.parse::<SeqId>()?);
        for entry in &snapshot.free {
            state.free_id(&entry.parse::<SeqId>()?)?;
        }
        Ok(state)
    }

    /// The next fresh (never counted out) identifier.
    #[must_use]
    pub const fn current(&self) -> &SeqId {
        self.current.peek()
    }

    /// Identifiers waiting to be reissued.
    #[must_use]
    pub const fn pending(&self) -> &FreeList {
        &self.pending
    }

    /// Returns the most recently freed identifier, or counts out a fresh one.
    pub fn next_id(&mut self) -> SeqId {
        match self.pending.take_most_recent() {
            Some(id) => id,
            None => self.current.take_and_advance(),
        }
    }

    /// Appends the next identifier to `buf` and returns the appended symbols.
    pub fn next_id_into<'a>(&mut self, buf: &'a mut Vec<u8>) -> &'a [u8] {
        let start = buf.len();
        match self.pending.take_most_recent() {
            Some(id) => buf.extend_from_slice(id.as_bytes()),
            None => {
                buf.extend_from_slice(self.current.peek().as_bytes());
                self.current.advance();
            }
        }
        &buf[start..]
    }

    /// Releases `id` for reuse.
    ///
    /// `id` must compare strictly below [`Self::current`] and must not already
    /// be pending. This does not prove `id` was ever handed out; callers are
    /// trusted to free only identifiers they received.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFreeable`] and leaves the state unchanged if either
    /// check fails.
    pub fn free_id(&mut self, id: &SeqId) -> Result<()> {
        if id.cmp(self.current()) != Ordering::Less || self.pending.contains(id) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%id, current = %self.current(), "rejecting free");
            return Err(Error::NotFreeable { id: id.clone() });
        }
        self.pending.insert(id.clone());
        Ok(())
    }

    /// Captures the record in its portable form.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.current(), self.pending.iter())
    }
}
