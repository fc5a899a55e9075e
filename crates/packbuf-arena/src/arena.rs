//! The packed arena orchestrator.
//!
//! [`PackedArena`] ties the slot table, the item bindings, the
//! deferred-write queue, and the backing store together behind the
//! three primitives `bind` / `rebind` / `unbind`. All three (and
//! [`flush`](PackedArena::flush)) take `&mut self`: the core is
//! single-owner with no internal locking, and only the write queue's
//! [`WriteSender`] side crosses threads.
//!
//! # Ordering contract
//!
//! Swap-compaction trades slot-order stability for O(1) removal. The
//! packed region always covers exactly the live atoms, but which slot
//! an item's atom occupies changes when other items are removed.
//! Consumers must not assume item-to-slot stability.
//!
//! Writes superseded before a flush are simply overwritten in queue
//! order — the last write to a record position before a flush wins.

use indexmap::IndexMap;

use packbuf_core::{ArenaError, AtomLayout, ItemId, RecordStore, SlotIndex};

use crate::binding::ItemBinding;
use crate::queue::{WriteOp, WriteQueue, WriteSender};
use crate::slot_table::{SlotEntry, SlotTable};

/// A packed, reactively-synchronized buffer arena over a backing store.
///
/// Constructed with a sealed [`AtomLayout`], a fixed atom capacity, and
/// exclusive ownership of the store. Torn down by dropping, or by
/// [`into_store`](PackedArena::into_store) to recover the store after a
/// final flush.
pub struct PackedArena<R, S> {
    layout: AtomLayout,
    table: SlotTable,
    bindings: IndexMap<ItemId, ItemBinding>,
    queue: WriteQueue<R>,
    store: S,
}

impl<R: Copy, S: RecordStore<R>> PackedArena<R, S> {
    /// Create an arena over `store` with room for `atom_capacity` atoms.
    ///
    /// Fails with [`ArenaError::CapacityExceeded`] if the store's
    /// record or index capacity cannot hold `atom_capacity` atoms
    /// under `layout`.
    pub fn new(layout: AtomLayout, atom_capacity: u32, store: S) -> Result<Self, ArenaError> {
        let record_atoms = store.record_capacity() / layout.records_per_atom();
        let index_atoms = store.index_capacity() / layout.records_per_indexed_atom();
        let store_atoms = record_atoms.min(index_atoms);
        if store_atoms < atom_capacity {
            return Err(ArenaError::CapacityExceeded {
                requested_atoms: atom_capacity,
                capacity_atoms: store_atoms,
            });
        }
        Ok(Self {
            layout,
            table: SlotTable::new(atom_capacity),
            bindings: IndexMap::new(),
            queue: WriteQueue::new(),
            store,
        })
    }

    /// Create an empty binding for `item`.
    ///
    /// Fails with [`ArenaError::InvariantViolation`] if the item is
    /// already bound.
    pub fn bind(&mut self, item: ItemId) -> Result<(), ArenaError> {
        if self.bindings.contains_key(&item) {
            return Err(ArenaError::InvariantViolation {
                reason: "item is already bound",
            });
        }
        self.bindings.insert(item, ItemBinding::new(item));
        Ok(())
    }

    /// Reconcile `item`'s atoms with a freshly computed record list.
    ///
    /// `records.len()` must be a multiple of the layout's records per
    /// atom ([`ArenaError::MalformedRecordSet`] otherwise). Retained
    /// atoms are rewritten in place; growth assigns new slots at the
    /// end of the packed region; shrink releases from the highest local
    /// index down, compacting by swap-with-last.
    ///
    /// The call is all-or-nothing with respect to slot assignment: a
    /// growth that would exceed capacity fails with
    /// [`ArenaError::CapacityExceeded`] before any slot changes hands.
    pub fn rebind(&mut self, item: ItemId, records: &[R]) -> Result<(), ArenaError> {
        let new_count = self.layout.atom_count_for(records.len())?;
        let current = self
            .bindings
            .get(&item)
            .ok_or(ArenaError::UnknownItem { item })?
            .atom_count();

        if new_count > current {
            let needed = new_count - current;
            if self.table.free_count() < needed {
                return Err(ArenaError::CapacityExceeded {
                    requested_atoms: self.table.live_count() + needed,
                    capacity_atoms: self.table.capacity(),
                });
            }
        }

        let rpa = self.layout.records_per_atom();

        // Retained atoms: overwrite record data in place, no slot change.
        for local in 0..current.min(new_count) {
            let slot = self.slot_of(item, local)?;
            self.enqueue_atom_records(slot, atom_chunk(records, local, rpa));
        }

        // Growth: assign, write records, write the slot's index pattern.
        for local in current..new_count {
            let slot = self.table.assign(item, local)?;
            self.bindings
                .get_mut(&item)
                .expect("binding presence checked at entry")
                .push_slot(slot);
            self.enqueue_atom_records(slot, atom_chunk(records, local, rpa));
            self.queue.enqueue(WriteOp::Indices {
                first_index: self.layout.index_base(slot),
                data: self.layout.indices_for_slot(slot).into_boxed_slice(),
            });
        }

        // Shrink: highest local index first, so the binding's slot list
        // only ever pops from the end.
        for _ in new_count..current {
            self.release_trailing_atom(item)?;
        }

        Ok(())
    }

    /// Release all of `item`'s slots and drop its binding.
    ///
    /// Fails with [`ArenaError::UnknownItem`] if the item has no active
    /// binding.
    pub fn unbind(&mut self, item: ItemId) -> Result<(), ArenaError> {
        let current = self
            .bindings
            .get(&item)
            .ok_or(ArenaError::UnknownItem { item })?
            .atom_count();
        for _ in 0..current {
            self.release_trailing_atom(item)?;
        }
        self.bindings.shift_remove(&item);
        Ok(())
    }

    /// Unbind every item (collection reset).
    pub fn clear(&mut self) -> Result<(), ArenaError> {
        let items: Vec<ItemId> = self.bindings.keys().copied().collect();
        for item in items {
            self.unbind(item)?;
        }
        Ok(())
    }

    /// Whether `item` currently has a binding.
    pub fn contains(&self, item: ItemId) -> bool {
        self.bindings.contains_key(&item)
    }

    /// Number of atoms currently bound for `item`, or `None` if unbound.
    pub fn atom_count(&self, item: ItemId) -> Option<u32> {
        self.bindings.get(&item).map(ItemBinding::atom_count)
    }

    /// Number of items with an active binding.
    pub fn item_count(&self) -> usize {
        self.bindings.len()
    }

    /// Number of live atoms in the packed region.
    pub fn live_atom_count(&self) -> u32 {
        self.table.live_count()
    }

    /// Number of meaningful record positions (`live atoms × records per atom`).
    pub fn live_record_count(&self) -> u32 {
        self.table.live_count() * self.layout.records_per_atom()
    }

    /// Number of meaningful index positions, i.e. how much of the
    /// store's index range the consume/draw call should cover.
    pub fn live_index_count(&self) -> u32 {
        self.table.live_count() * self.layout.records_per_indexed_atom()
    }

    /// Number of atoms that can still be bound.
    pub fn free_atom_count(&self) -> u32 {
        self.table.free_count()
    }

    /// Number of writes queued but not yet flushed.
    pub fn queued_op_count(&self) -> usize {
        self.queue.len()
    }

    /// The arena's sealed layout.
    pub fn layout(&self) -> &AtomLayout {
        &self.layout
    }

    /// Iterate the packed region in slot order.
    pub fn slot_entries(&self) -> impl Iterator<Item = (SlotIndex, &SlotEntry)> {
        self.table.entries()
    }

    /// A cloneable handle for enqueueing writes from any thread.
    pub fn writer(&self) -> WriteSender<R> {
        self.queue.sender()
    }

    /// Apply the snapshot of queued writes to the store and flush it.
    ///
    /// Must be called on the consuming thread, immediately before the
    /// packed region is used. Returns the number of operations applied.
    pub fn flush(&mut self) -> usize {
        self.queue.flush_into(&mut self.store)
    }

    /// Read-only access to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear the arena down, handing the store back after a final flush.
    pub fn into_store(mut self) -> S {
        self.flush();
        self.store
    }

    fn slot_of(&self, item: ItemId, local_atom: u32) -> Result<SlotIndex, ArenaError> {
        self.bindings
            .get(&item)
            .and_then(|b| b.slot(local_atom))
            .ok_or(ArenaError::InvariantViolation {
                reason: "binding has no slot for a retained local atom",
            })
    }

    fn enqueue_atom_records(&self, slot: SlotIndex, chunk: &[R]) {
        self.queue.enqueue(WriteOp::Records {
            first_record: self.layout.record_base(slot),
            data: chunk.into(),
        });
    }

    /// Release the binding's highest local atom and compact the table.
    ///
    /// A compaction move copies the relocated atom's records in the
    /// store and repoints the moved binding's bookkeeping. Indices are
    /// a pure function of slot position, so a move never rewrites them.
    fn release_trailing_atom(&mut self, item: ItemId) -> Result<(), ArenaError> {
        let slot = self
            .bindings
            .get_mut(&item)
            .ok_or(ArenaError::UnknownItem { item })?
            .pop_slot()
            .ok_or(ArenaError::InvariantViolation {
                reason: "release of an atom from an empty binding",
            })?;

        if let Some(compaction) = self.table.release(slot)? {
            let rpa = self.layout.records_per_atom();
            self.queue.enqueue(WriteOp::CopyRange {
                src_record: self.layout.record_base(compaction.from),
                dst_record: self.layout.record_base(compaction.to),
                len: rpa,
            });
            self.bindings
                .get_mut(&compaction.moved.item)
                .ok_or(ArenaError::InvariantViolation {
                    reason: "slot table references an unbound item",
                })?
                .relocate(compaction.moved.local_atom, compaction.to);
        }
        Ok(())
    }
}

/// The records of one local atom within a flat record list.
fn atom_chunk<R>(records: &[R], local_atom: u32, records_per_atom: u32) -> &[R] {
    let start = (local_atom * records_per_atom) as usize;
    &records[start..start + records_per_atom as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use packbuf_test_utils::MockStore;

    const A: ItemId = ItemId(1);
    const B: ItemId = ItemId(2);
    const C: ItemId = ItemId(3);

    /// Arena of pairs: 2 records per atom, identity index pattern.
    fn pair_arena(atom_capacity: u32) -> PackedArena<f32, MockStore> {
        let layout = AtomLayout::points(2).unwrap();
        let store = MockStore::new(atom_capacity * 2, atom_capacity * 2);
        PackedArena::new(layout, atom_capacity, store).unwrap()
    }

    fn bind_with(arena: &mut PackedArena<f32, MockStore>, item: ItemId, records: &[f32]) {
        arena.bind(item).unwrap();
        arena.rebind(item, records).unwrap();
    }

    // ── construction ───────────────────────────────────────────

    #[test]
    fn store_too_small_for_records_rejected() {
        let layout = AtomLayout::points(2).unwrap();
        let store = MockStore::<f32>::new(10, 100);
        let result = PackedArena::new(layout, 6, store);
        assert_eq!(
            result.err(),
            Some(ArenaError::CapacityExceeded {
                requested_atoms: 6,
                capacity_atoms: 5,
            })
        );
    }

    #[test]
    fn store_too_small_for_indices_rejected() {
        let layout = AtomLayout::quad();
        // 10 atoms of records, but only 4 atoms of indices (24 / 6).
        let store = MockStore::<f32>::new(40, 24);
        let result = PackedArena::new(layout, 10, store);
        assert!(matches!(result, Err(ArenaError::CapacityExceeded { .. })));
    }

    // ── bind / rebind / unbind basics ──────────────────────────

    #[test]
    fn bind_creates_empty_binding() {
        let mut arena = pair_arena(4);
        arena.bind(A).unwrap();
        assert!(arena.contains(A));
        assert_eq!(arena.atom_count(A), Some(0));
        assert_eq!(arena.live_atom_count(), 0);
    }

    #[test]
    fn double_bind_is_invariant_violation() {
        let mut arena = pair_arena(4);
        arena.bind(A).unwrap();
        let result = arena.bind(A);
        assert!(matches!(
            result,
            Err(ArenaError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn rebind_unknown_item_fails() {
        let mut arena = pair_arena(4);
        let result = arena.rebind(A, &[1.0, 2.0]);
        assert_eq!(result, Err(ArenaError::UnknownItem { item: A }));
    }

    #[test]
    fn unbind_unknown_item_fails() {
        let mut arena = pair_arena(4);
        assert_eq!(arena.unbind(A), Err(ArenaError::UnknownItem { item: A }));
    }

    #[test]
    fn malformed_record_set_leaves_state_unchanged() {
        let mut arena = pair_arena(4);
        bind_with(&mut arena, A, &[1.0, 1.0]);
        let result = arena.rebind(A, &[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(ArenaError::MalformedRecordSet { .. })
        ));
        assert_eq!(arena.atom_count(A), Some(1));
        assert_eq!(arena.live_atom_count(), 1);
    }

    #[test]
    fn counters_track_live_atoms() {
        let mut arena = pair_arena(8);
        bind_with(&mut arena, A, &[1.0; 4]); // 2 atoms
        bind_with(&mut arena, B, &[2.0; 2]); // 1 atom
        assert_eq!(arena.live_atom_count(), 3);
        assert_eq!(arena.live_record_count(), 6);
        assert_eq!(arena.live_index_count(), 6);
        assert_eq!(arena.free_atom_count(), 5);
        assert_eq!(arena.item_count(), 2);
    }

    // ── spec scenarios ─────────────────────────────────────────

    #[test]
    fn scenario_const_size_unbind_swaps_survivor_forward() {
        let mut arena = pair_arena(10);
        bind_with(&mut arena, A, &[1.0, 1.0]);
        bind_with(&mut arena, B, &[2.0, 2.0]);
        arena.flush();
        assert_eq!(&arena.store().published_records()[..4], &[1.0, 1.0, 2.0, 2.0]);

        arena.unbind(A).unwrap();
        arena.flush();
        // B's atom moved from slot 1 to slot 0 via swap-copy.
        assert_eq!(arena.live_atom_count(), 1);
        assert_eq!(&arena.store().published_records()[..2], &[2.0, 2.0]);
        let entry = *arena.slot_entries().next().unwrap().1;
        assert_eq!(entry.item, B);
    }

    #[test]
    fn scenario_varying_size_shrink_compacts_last_atom_in() {
        let mut arena = pair_arena(10);
        bind_with(&mut arena, A, &[1.0, 1.0, 2.0, 2.0]); // 2 atoms
        bind_with(&mut arena, B, &[3.0, 3.0]); // 1 atom, last slot

        arena.rebind(A, &[1.0, 1.0]).unwrap();
        arena.flush();

        // A's second atom's slot was released and B's atom (was last)
        // swapped into it: packed order [A(1 atom), B(1 atom)].
        assert_eq!(arena.live_atom_count(), 2);
        let order: Vec<ItemId> = arena.slot_entries().map(|(_, e)| e.item).collect();
        assert_eq!(order, vec![A, B]);
        assert_eq!(&arena.store().published_records()[..4], &[1.0, 1.0, 3.0, 3.0]);
    }

    #[test]
    fn scenario_capacity_exhaustion() {
        let mut arena = pair_arena(1);
        bind_with(&mut arena, A, &[1.0, 1.0]);
        arena.bind(B).unwrap();
        let result = arena.rebind(B, &[2.0, 2.0]);
        assert_eq!(
            result,
            Err(ArenaError::CapacityExceeded {
                requested_atoms: 2,
                capacity_atoms: 1,
            })
        );
        assert_eq!(arena.live_atom_count(), 1);
    }

    #[test]
    fn binding_to_exact_capacity_succeeds() {
        let mut arena = pair_arena(3);
        bind_with(&mut arena, A, &[1.0; 6]); // exactly 3 atoms
        assert_eq!(arena.live_atom_count(), 3);
        assert_eq!(arena.free_atom_count(), 0);
    }

    #[test]
    fn failed_growth_is_all_or_nothing() {
        let mut arena = pair_arena(3);
        bind_with(&mut arena, A, &[1.0; 4]); // 2 atoms
        // Growing to 4 atoms needs 2 free slots; only 1 remains.
        let result = arena.rebind(A, &[1.0; 8]);
        assert!(matches!(result, Err(ArenaError::CapacityExceeded { .. })));
        assert_eq!(arena.atom_count(A), Some(2));
        assert_eq!(arena.live_atom_count(), 2);
    }

    #[test]
    fn shrink_to_zero_is_idempotent() {
        let mut arena = pair_arena(4);
        bind_with(&mut arena, A, &[1.0; 4]);
        arena.rebind(A, &[]).unwrap();
        assert_eq!(arena.atom_count(A), Some(0));
        assert_eq!(arena.live_atom_count(), 0);
        // Second shrink-to-zero is a no-op on the slot table, still valid.
        arena.rebind(A, &[]).unwrap();
        assert_eq!(arena.live_atom_count(), 0);
    }

    // ── compaction bookkeeping ─────────────────────────────────

    #[test]
    fn unbind_moves_last_item_forward() {
        // Order instability is the documented contract: after removing
        // A from [A, B, C], C occupies A's old slot.
        let mut arena = pair_arena(4);
        bind_with(&mut arena, A, &[1.0, 1.0]);
        bind_with(&mut arena, B, &[2.0, 2.0]);
        bind_with(&mut arena, C, &[3.0, 3.0]);
        arena.unbind(A).unwrap();
        let order: Vec<ItemId> = arena.slot_entries().map(|(_, e)| e.item).collect();
        assert_eq!(order, vec![C, B]);
    }

    #[test]
    fn compaction_repoints_moved_binding() {
        let mut arena = pair_arena(4);
        bind_with(&mut arena, A, &[1.0, 1.0]);
        bind_with(&mut arena, B, &[2.0, 2.0, 3.0, 3.0]); // atoms at slots 1, 2
        arena.unbind(A).unwrap();
        arena.flush();
        // B's local atom 1 (was slot 2, the last) now lives in slot 0.
        let order: Vec<(ItemId, u32)> = arena
            .slot_entries()
            .map(|(_, e)| (e.item, e.local_atom))
            .collect();
        assert_eq!(order, vec![(B, 1), (B, 0)]);
        // Shrinking B still releases local atom 1 first — from slot 0.
        arena.rebind(B, &[2.0, 2.0]).unwrap();
        arena.flush();
        let order: Vec<(ItemId, u32)> = arena
            .slot_entries()
            .map(|(_, e)| (e.item, e.local_atom))
            .collect();
        assert_eq!(order, vec![(B, 0)]);
        assert_eq!(&arena.store().published_records()[..2], &[2.0, 2.0]);
    }

    #[test]
    fn same_item_compaction_during_unbind() {
        // A's own last atom can be the one swapped into a freed slot.
        let mut arena = pair_arena(4);
        bind_with(&mut arena, A, &[1.0, 1.0]);
        bind_with(&mut arena, B, &[2.0, 2.0, 3.0, 3.0]);
        arena.unbind(A).unwrap(); // B now at slots [1→0 moved], [1]
        arena.unbind(B).unwrap();
        assert_eq!(arena.live_atom_count(), 0);
        assert_eq!(arena.item_count(), 0);
    }

    // ── deferred writes & flush ────────────────────────────────

    #[test]
    fn writes_are_deferred_until_flush() {
        let mut arena = pair_arena(4);
        bind_with(&mut arena, A, &[1.0, 1.0]);
        assert_eq!(arena.queued_op_count(), 2); // records + indices
        assert_eq!(arena.store().published_records()[0], 0.0);
        arena.flush();
        assert_eq!(arena.queued_op_count(), 0);
        assert_eq!(arena.store().published_records()[0], 1.0);
    }

    #[test]
    fn last_write_to_a_slot_before_flush_wins() {
        // Unbind A, then bind C into the freed slot before flushing:
        // C's records supersede the compaction copy targeting slot 0.
        let mut arena = pair_arena(2);
        bind_with(&mut arena, A, &[1.0, 1.0]);
        bind_with(&mut arena, B, &[2.0, 2.0]);
        arena.unbind(A).unwrap(); // copy slot1 → slot0 queued
        bind_with(&mut arena, C, &[9.0, 9.0]); // assigned slot 1
        arena.flush();
        assert_eq!(&arena.store().published_records()[..4], &[2.0, 2.0, 9.0, 9.0]);
    }

    #[test]
    fn index_pattern_written_per_assigned_slot() {
        let layout = AtomLayout::quad();
        let store = MockStore::new(16, 24);
        let mut arena = PackedArena::new(layout, 4, store).unwrap();
        arena.bind(A).unwrap();
        arena.rebind(A, &[0.5; 8]).unwrap(); // 2 quad atoms
        arena.flush();
        assert_eq!(
            &arena.store().published_indices()[..12],
            &[0, 1, 2, 2, 1, 3, 4, 5, 6, 6, 5, 7]
        );
        assert_eq!(arena.live_index_count(), 12);
    }

    #[test]
    fn writer_enqueues_from_another_thread() {
        let mut arena = pair_arena(4);
        bind_with(&mut arena, A, &[0.0, 0.0]);
        arena.flush();

        let writer = arena.writer();
        std::thread::spawn(move || {
            writer.enqueue(WriteOp::Records {
                first_record: 0,
                data: vec![4.0, 5.0].into_boxed_slice(),
            });
        })
        .join()
        .unwrap();

        arena.flush();
        assert_eq!(&arena.store().published_records()[..2], &[4.0, 5.0]);
    }

    #[test]
    fn into_store_performs_final_flush() {
        let mut arena = pair_arena(4);
        bind_with(&mut arena, A, &[7.0, 7.0]);
        let store = arena.into_store();
        assert_eq!(&store.published_records()[..2], &[7.0, 7.0]);
    }

    #[test]
    fn clear_unbinds_everything() {
        let mut arena = pair_arena(8);
        bind_with(&mut arena, A, &[1.0; 4]);
        bind_with(&mut arena, B, &[2.0; 2]);
        arena.clear().unwrap();
        assert_eq!(arena.live_atom_count(), 0);
        assert_eq!(arena.item_count(), 0);
        assert!(!arena.contains(A));
    }

    // ── proptest ───────────────────────────────────────────────

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// Record value for an atom, derived from its identity so the
        /// store contents can be verified after arbitrary churn.
        fn atom_value(item: ItemId, local_atom: u32) -> f32 {
            (item.0 * 64 + u64::from(local_atom)) as f32
        }

        fn records_for(item: ItemId, atoms: u32) -> Vec<f32> {
            (0..atoms)
                .flat_map(|local| [atom_value(item, local); 2])
                .collect()
        }

        #[derive(Clone, Debug)]
        enum Op {
            Bind { atoms: u32 },
            Rebind { pick: usize, atoms: u32 },
            Unbind { pick: usize },
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u32..4).prop_map(|atoms| Op::Bind { atoms }),
                (any::<usize>(), 0u32..4).prop_map(|(pick, atoms)| Op::Rebind { pick, atoms }),
                any::<usize>().prop_map(|pick| Op::Unbind { pick }),
            ]
        }

        proptest! {
            /// After any churn sequence, the packed region is gap-free
            /// and every live slot's flushed records match the owning
            /// atom's identity-derived value.
            #[test]
            fn packed_region_matches_bindings(
                ops in proptest::collection::vec(arb_op(), 1..48),
            ) {
                let mut arena = pair_arena(12);
                let mut live: Vec<ItemId> = Vec::new();
                let mut next_item = 0u64;

                for op in ops {
                    match op {
                        Op::Bind { atoms } => {
                            next_item += 1;
                            let item = ItemId(next_item);
                            arena.bind(item).unwrap();
                            if arena.rebind(item, &records_for(item, atoms)).is_ok() {
                                live.push(item);
                            } else {
                                arena.unbind(item).unwrap();
                            }
                        }
                        Op::Rebind { pick, atoms } if !live.is_empty() => {
                            let item = live[pick % live.len()];
                            // Capacity failures leave state untouched.
                            let _ = arena.rebind(item, &records_for(item, atoms));
                        }
                        Op::Unbind { pick } if !live.is_empty() => {
                            let item = live.remove(pick % live.len());
                            arena.unbind(item).unwrap();
                        }
                        _ => {}
                    }

                    arena.flush();

                    // Packed region covers exactly the live atoms.
                    let total: u32 = live
                        .iter()
                        .map(|&i| arena.atom_count(i).unwrap())
                        .sum();
                    prop_assert_eq!(arena.live_atom_count(), total);

                    // Every slot's records carry the owner's identity.
                    let store = arena.store();
                    for (slot, entry) in arena.slot_entries() {
                        let base = arena.layout().record_base(slot) as usize;
                        let expected = atom_value(entry.item, entry.local_atom);
                        prop_assert_eq!(store.published_records()[base], expected);
                        prop_assert_eq!(store.published_records()[base + 1], expected);
                    }
                }
            }
        }
    }
}
