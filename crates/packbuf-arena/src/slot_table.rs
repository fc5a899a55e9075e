//! The packed slot table and its swap-compaction algorithm.
//!
//! A [`SlotTable`] maintains the "no holes" invariant under arbitrary
//! interleavings of assignment and release, doing O(1) slot work per
//! operation. Assignment always appends at `live_count`; release fills
//! the freed slot with the current last live slot's entry and reports
//! the move as a [`Compaction`] so the caller can update the moved
//! binding's bookkeeping and copy the records.
//!
//! The table references bindings by [`ItemId`] only — never by pointer —
//! so it stays oblivious to binding identity and lifetime.

use packbuf_core::{ArenaError, ItemId, SlotIndex};

/// One occupied slot: which item owns it and which of that item's
/// local atoms it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotEntry {
    /// The owning item.
    pub item: ItemId,
    /// Local atom index within the owning item's binding.
    pub local_atom: u32,
}

/// A swap-with-last move performed by [`SlotTable::release`].
///
/// The entry that previously lived at `from` (the last live slot) now
/// lives at `to` (the freed slot). The caller must relocate the moved
/// binding's local-atom bookkeeping and copy the atom's records from
/// `from` to `to` in the backing store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Compaction {
    /// The entry that was moved.
    pub moved: SlotEntry,
    /// Slot the entry moved from (the previous last live slot).
    pub from: SlotIndex,
    /// Slot the entry moved to (the slot that was released).
    pub to: SlotIndex,
}

/// Packed mapping from dense slot indices to owning items.
///
/// Slots `[0, live_count)` are occupied; `[live_count, capacity)` are
/// free. Capacity is fixed at construction — there is no resize.
pub struct SlotTable {
    /// Occupied entries; `entries.len()` is the live count.
    entries: Vec<SlotEntry>,
    /// Fixed atom capacity.
    capacity: u32,
}

impl SlotTable {
    /// Create an empty table with the given fixed capacity.
    pub fn new(capacity: u32) -> Self {
        Self {
            entries: Vec::with_capacity(capacity as usize),
            capacity,
        }
    }

    /// Assign the next free slot to `(item, local_atom)`.
    ///
    /// Returns the new slot (always the previous `live_count`), or
    /// [`ArenaError::CapacityExceeded`] if the table is full. The table
    /// is left unchanged on failure.
    pub fn assign(&mut self, item: ItemId, local_atom: u32) -> Result<SlotIndex, ArenaError> {
        if self.entries.len() as u32 == self.capacity {
            return Err(ArenaError::CapacityExceeded {
                requested_atoms: self.capacity + 1,
                capacity_atoms: self.capacity,
            });
        }
        let slot = SlotIndex(self.entries.len() as u32);
        self.entries.push(SlotEntry { item, local_atom });
        Ok(slot)
    }

    /// Release an occupied slot, compacting by swap-with-last.
    ///
    /// If the released slot was not the last live slot, the last entry
    /// is moved into it and the move is returned as a [`Compaction`].
    /// Releasing the last slot performs no move and returns `Ok(None)`.
    ///
    /// Releasing from an empty table or a slot at or above `live_count`
    /// is a programming error ([`ArenaError::InvariantViolation`]).
    pub fn release(&mut self, slot: SlotIndex) -> Result<Option<Compaction>, ArenaError> {
        if self.entries.is_empty() {
            return Err(ArenaError::InvariantViolation {
                reason: "release from an empty slot table",
            });
        }
        let last = SlotIndex(self.entries.len() as u32 - 1);
        if slot > last {
            return Err(ArenaError::InvariantViolation {
                reason: "release of a slot outside the live region",
            });
        }
        if slot == last {
            self.entries.pop();
            return Ok(None);
        }
        let moved = self
            .entries
            .pop()
            .expect("table is non-empty, checked above");
        self.entries[slot.0 as usize] = moved;
        Ok(Some(Compaction {
            moved,
            from: last,
            to: slot,
        }))
    }

    /// The entry occupying `slot`, or `None` outside the live region.
    pub fn entry(&self, slot: SlotIndex) -> Option<&SlotEntry> {
        self.entries.get(slot.0 as usize)
    }

    /// Number of occupied slots.
    pub fn live_count(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Fixed atom capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of free slots remaining.
    pub fn free_count(&self) -> u32 {
        self.capacity - self.live_count()
    }

    /// Iterate over the occupied slots in packed order.
    pub fn entries(&self) -> impl Iterator<Item = (SlotIndex, &SlotEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (SlotIndex(i as u32), e))
    }
}
