use alloc::vec::Vec;
use core::cell::RefCell;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Result, SeqGenerator, SeqId, SeqState, Snapshot};

/// A non-concurrent letter ID generator suitable for single-threaded use.
///
/// This generator is lightweight, but **not thread-safe** (`!Sync`).
///
/// ## Features
/// - ❌ Not thread-safe
/// - ✅ No locking overhead
///
/// ## Recommended When
/// - The generator is owned by a single thread or task
///
/// ## See Also
/// - [`LockSeqGenerator`]
///
/// [`LockSeqGenerator`]: crate::generator::LockSeqGenerator
#[derive(Debug, Default)]
pub struct BasicSeqGenerator {
    state: RefCell<SeqState>,
}

impl BasicSeqGenerator {
    /// Creates a generator counting from `"a"`.
    ///
    /// # Example
    /// ```
    /// use seqid::BasicSeqGenerator;
    ///
    /// let generator = BasicSeqGenerator::new();
    /// assert_eq!(generator.next_id(), "a");
    /// assert_eq!(generator.next_id(), "b");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_id(SeqId::first())
    }

    /// Creates a generator counting from `seed`.
    ///
    /// An empty seed is accepted; the first ID handed out is then the empty
    /// identifier, followed by `"a"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSymbol`] if `seed` holds a non-letter byte.
    ///
    /// [`Error::InvalidSymbol`]: crate::Error::InvalidSymbol
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        Ok(Self::from_id(SeqId::from_bytes(seed)?))
    }

    /// Creates a generator counting from `start`.
    #[must_use]
    pub fn from_id(start: SeqId) -> Self {
        Self {
            state: RefCell::new(SeqState::from_id(start)),
        }
    }

    /// Creates a generator from persisted state.
    ///
    /// # Errors
    ///
    /// See [`SeqState::from_snapshot`].
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        Ok(Self {
            state: RefCell::new(SeqState::from_snapshot(snapshot)?),
        })
    }

    /// Returns the most recently freed ID, or the next fresh one.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> SeqId {
        self.state.borrow_mut().next_id()
    }

    /// Appends the next ID to `buf` and returns the appended symbols.
    pub fn next_id_into<'a>(&self, buf: &'a mut Vec<u8>) -> &'a [u8] {
        self.state.borrow_mut().next_id_into(buf)
    }

    /// Releases `id` for reuse.
    ///
    /// # Errors
    ///
    /// See [`SeqState::free_id`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn free_id(&self, id: &SeqId) -> Result<()> {
        self.state.borrow_mut().free_id(id)
    }

    /// Captures the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().snapshot()
    }

    /// Replaces the current state, keeping the old one on error.
    ///
    /// # Errors
    ///
    /// See [`SeqState::from_snapshot`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn restore(&self, snapshot: &Snapshot) -> Result<()> {
        let restored = SeqState::from_snapshot(snapshot)?;
        *self.state.borrow_mut() = restored;
        Ok(())
    }

    /// Consumes the generator, returning its state.
    #[must_use]
    pub fn into_state(self) -> SeqState {
        self.state.into_inner()
    }
}

impl From<SeqState> for BasicSeqGenerator {
    fn from(state: SeqState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }
}

impl SeqGenerator for BasicSeqGenerator {
    fn new() -> Self {
        Self::new()
    }

    fn from_id(start: SeqId) -> Self {
        Self::from_id(start)
    }

    fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        Self::from_snapshot(snapshot)
    }

    fn next_id(&self) -> SeqId {
        self.next_id()
    }

    fn next_id_into<'a>(&self, buf: &'a mut Vec<u8>) -> &'a [u8] {
        self.next_id_into(buf)
    }

    fn free_id(&self, id: &SeqId) -> Result<()> {
        self.free_id(id)
    }

    fn snapshot(&self) -> Snapshot {
        self.snapshot()
    }

    fn restore(&self, snapshot: &Snapshot) -> Result<()> {
        self.restore(snapshot)
    }
}
