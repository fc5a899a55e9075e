//! Per-item binding state.
//!
//! An [`ItemBinding`] owns the ordered list of slots currently holding
//! its item's atoms, indexed by local atom index `0..n-1`. Growth
//! appends slots at the end; shrink releases from the highest local
//! index first, so the list only ever pops from the end. Compaction
//! relocations rewrite a single list entry in place.
//!
//! The grow/shrink reconciliation itself lives on
//! [`PackedArena`](crate::arena::PackedArena), which owns the slot
//! table and write queue the reconciliation drives.

use packbuf_core::{ItemId, SlotIndex, SlotList};

/// The association between one logical item and the slots currently
/// holding its atoms.
#[derive(Clone, Debug)]
pub struct ItemBinding {
    item: ItemId,
    slots: SlotList,
}

impl ItemBinding {
    /// Create an empty binding for `item`.
    pub fn new(item: ItemId) -> Self {
        Self {
            item,
            slots: SlotList::new(),
        }
    }

    /// The bound item.
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Number of atoms currently bound.
    pub fn atom_count(&self) -> u32 {
        self.slots.len() as u32
    }

    /// The slot holding the given local atom, or `None` out of range.
    pub fn slot(&self, local_atom: u32) -> Option<SlotIndex> {
        self.slots.get(local_atom as usize).copied()
    }

    /// Append a slot for the next local atom (growth).
    pub fn push_slot(&mut self, slot: SlotIndex) {
        self.slots.push(slot);
    }

    /// Remove and return the highest local atom's slot (shrink).
    pub fn pop_slot(&mut self) -> Option<SlotIndex> {
        self.slots.pop()
    }

    /// Point the given local atom at a new slot (compaction move).
    ///
    /// # Panics
    ///
    /// Panics if `local_atom` is out of range — the slot table only
    /// reports moves for atoms it was told about, so an out-of-range
    /// relocation is unreachable from arena code.
    pub fn relocate(&mut self, local_atom: u32, new_slot: SlotIndex) {
        self.slots[local_atom as usize] = new_slot;
    }

    /// Iterate the owned slots in local atom order.
    pub fn slots(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.slots.iter().copied()
    }
}
