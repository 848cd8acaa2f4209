use alloc::{sync::Arc, vec::Vec};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Result, SeqGenerator, SeqId, SeqState, Snapshot,
    mutex::{self, Mutex, MutexGuard},
};

/// A lock-based letter ID generator suitable for multi-threaded environments.
///
/// The odometer and free list live in one record behind a single
/// [`Arc<Mutex<_>>`]. Every operation holds the lock for its whole
/// read-modify-write sequence. Cloning the generator shares the same state;
/// separate generators never coordinate and may hand out equal IDs.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ `next_id` never fails (a poisoned std mutex is recovered)
///
/// ## Recommended When
/// - Several threads allocate from and free into the same ID space
///
/// ## See Also
/// - [`BasicSeqGenerator`]
///
/// [`BasicSeqGenerator`]: crate::generator::BasicSeqGenerator
#[derive(Clone, Debug, Default)]
pub struct LockSeqGenerator {
    #[cfg(feature = "cache-padded")]
    pub(crate) state: Arc<crossbeam_utils::CachePadded<Mutex<SeqState>>>,
    #[cfg(not(feature = "cache-padded"))]
    pub(crate) state: Arc<Mutex<SeqState>>,
}

impl LockSeqGenerator {
    /// Creates a generator counting from `"a"`.
    ///
    /// # Example
    /// ```
    /// use seqid::LockSeqGenerator;
    ///
    /// let generator = LockSeqGenerator::new();
    /// let worker = generator.clone();
    ///
    /// let id = std::thread::spawn(move || worker.next_id()).join().unwrap();
    /// assert_eq!(id, "a");
    /// assert_eq!(generator.next_id(), "b");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_id(SeqId::first())
    }

    /// Creates a generator counting from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSymbol`] if `seed` holds a non-letter byte.
    ///
    /// # Example
    /// ```
    /// use seqid::{Error, LockSeqGenerator};
    ///
    /// let generator = LockSeqGenerator::from_seed(b"Z").unwrap();
    /// assert_eq!(generator.next_id(), "Z");
    /// assert_eq!(generator.next_id(), "aa");
    ///
    /// assert!(matches!(
    ///     LockSeqGenerator::from_seed(b"a1"),
    ///     Err(Error::InvalidSymbol { byte: b'1', index: 1 })
    /// ));
    /// ```
    ///
    /// [`Error::InvalidSymbol`]: crate::Error::InvalidSymbol
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        Ok(Self::from_id(SeqId::from_bytes(seed)?))
    }

    /// Creates a generator counting from `start`.
    #[must_use]
    pub fn from_id(start: SeqId) -> Self {
        Self::from_state(SeqState::from_id(start))
    }

    /// Creates a generator from persisted state.
    ///
    /// # Errors
    ///
    /// See [`SeqState::from_snapshot`].
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        SeqState::from_snapshot(snapshot).map(Self::from_state)
    }

    fn from_state(state: SeqState) -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            state: Arc::new(crossbeam_utils::CachePadded::new(Mutex::new(state))),
            #[cfg(not(feature = "cache-padded"))]
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SeqState> {
        mutex::lock::<SeqState>(&self.state)
    }

    /// Returns the most recently freed ID, or the next fresh one.
    ///
    /// Every returned ID differs from every other ID this generator has
    /// returned and not since freed.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> SeqId {
        self.lock().next_id()
    }

    /// Appends the next ID to `buf` and returns the appended symbols.
    pub fn next_id_into<'a>(&self, buf: &'a mut Vec<u8>) -> &'a [u8] {
        self.lock().next_id_into(buf)
    }

    /// Releases `id` for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFreeable`] if `id` is not below the next fresh
    /// value or is already free. The state is left unchanged.
    ///
    /// # Example
    /// ```
    /// use seqid::{Error, LockSeqGenerator};
    ///
    /// let generator = LockSeqGenerator::new();
    /// let id = generator.next_id();
    ///
    /// generator.free_id(&id).unwrap();
    /// assert!(matches!(generator.free_id(&id), Err(Error::NotFreeable { .. })));
    /// assert_eq!(generator.next_id(), id);
    /// ```
    ///
    /// [`Error::NotFreeable`]: crate::Error::NotFreeable
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn free_id(&self, id: &SeqId) -> Result<()> {
        self.lock().free_id(id)
    }

    /// Captures the current state.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// Replaces the current state, keeping the old one on error.
    ///
    /// The whole free list is replaced, never appended to.
    ///
    /// # Errors
    ///
    /// See [`SeqState::from_snapshot`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn restore(&self, snapshot: &Snapshot) -> Result<()> {
        let mut state = self.lock();
        *state = SeqState::from_snapshot(snapshot)?;
        Ok(())
    }
}

impl From<SeqState> for LockSeqGenerator {
    fn from(state: SeqState) -> Self {
        Self::from_state(state)
    }
}

impl SeqGenerator for LockSeqGenerator {
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
