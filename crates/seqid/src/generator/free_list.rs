use alloc::vec::Vec;

use crate::SeqId;

/// Spare capacity kept once the list drains.
const RETAINED_CAPACITY: usize = 16;

/// Released identifiers waiting to be reissued, most recent last.
///
/// The list does not deduplicate; [`SeqState::free_id`] checks
/// [`Self::contains`] before inserting.
///
/// [`SeqState::free_id`]: crate::SeqState::free_id
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FreeList {
    ids: Vec<SeqId>,
}

impl FreeList {
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    pub fn insert(&mut self, id: SeqId) {
        self.ids.push(id);
    }

    /// Removes the most recently inserted identifier.
    pub fn take_most_recent(&mut self) -> Option<SeqId> {
        let id = self.ids.pop();
        if self.ids.is_empty() && self.ids.capacity() > RETAINED_CAPACITY {
            // don't hold on to a large buffer after a burst of frees
            self.ids.shrink_to(RETAINED_CAPACITY);
        }
        id
    }

    /// Linear scan; free lists are expected to stay small.
    #[must_use]
    pub fn contains(&self, id: &SeqId) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SeqId> {
        self.ids.iter()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SeqId {
        s.parse().unwrap()
    }

    #[test]
    fn takes_most_recent_first() {
        let mut list = FreeList::new();
        list.insert(id("a"));
        list.insert(id("c"));
        list.insert(id("b"));
        assert_eq!(list.len(), 3);
        assert_eq!(list.take_most_recent(), Some(id("b")));
        assert_eq!(list.take_most_recent(), Some(id("c")));
        assert_eq!(list.take_most_recent(), Some(id("a")));
        assert_eq!(list.take_most_recent(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn contains_tracks_membership() {
        let mut list = FreeList::new();
        assert!(!list.contains(&id("a")));
        list.insert(id("a"));
        assert!(list.contains(&id("a")));
        assert!(!list.contains(&id("aa")));
        list.clear();
        assert!(!list.contains(&id("a")));
    }

    #[test]
    fn churn_reuses_the_buffer() {
        let mut list = FreeList::new();
        list.insert(id("a"));
        let capacity = list.ids.capacity();
        assert_eq!(list.take_most_recent(), Some(id("a")));
        for _ in 0..100 {
            list.insert(id("a"));
            assert_eq!(list.take_most_recent(), Some(id("a")));
            assert_eq!(list.ids.capacity(), capacity);
        }
    }

    #[test]
    fn drained_burst_releases_spare_capacity() {
        let mut list = FreeList::new();
        let burst = SeqId::first();
        for _ in 0..1000 {
            list.insert(burst.clone());
        }
        while list.take_most_recent().is_some() {}
        assert!(list.ids.capacity() <= RETAINED_CAPACITY);
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let mut list = FreeList::new();
        for s in ["d", "a", "c"] {
            list.insert(id(s));
        }
        let order: Vec<&str> = list.iter().map(SeqId::as_str).collect();
        assert_eq!(order, ["d", "a", "c"]);
    }
}
