//! Strongly-typed identifiers and the [`SlotList`] type alias.

use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ItemId`] allocation.
static ITEM_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifies a logical item tracked by a synchronization adapter.
///
/// Items are external application objects (a mesh, a GUI element, a
/// particle cluster); the arena only ever sees their IDs. Allocate
/// fresh IDs via [`ItemId::next`], or construct them directly when the
/// application already has a stable numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Allocate a fresh, unique item ID.
    ///
    /// Each call returns an ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(ITEM_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A position in the packed region of the backing store.
///
/// Slot `n` holds one atom's records at record offset
/// `n * records_per_atom`. Only slots below the arena's live count are
/// meaningful; the table hands out and reclaims them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub u32);

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Ordered list of slots owned by one item binding.
///
/// Uses `SmallVec<[SlotIndex; 4]>` to avoid heap allocation for items
/// contributing up to 4 atoms, which covers typical GUI/sprite usage.
/// Larger items spill to the heap transparently.
pub type SlotList = SmallVec<[SlotIndex; 4]>;
