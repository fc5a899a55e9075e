//! Collection-event adapter.
//!
//! Translates classic collection change notifications into the arena's
//! bind/rebind/unbind primitives. The record extractor supplied at
//! construction is the record-producing collaborator's seam: given an
//! item's value, it derives the flat record list the arena stores.
//!
//! Items are keyed by [`ItemId`]; the original system keyed bindings by
//! object identity, which has no ambient Rust equivalent, so events
//! carry explicit IDs (mint them via [`ItemId::next`]).

use packbuf_core::{ArenaError, ItemId, RecordStore};

use packbuf_arena::PackedArena;

/// A change notification from the tracked collection.
#[derive(Clone, Debug)]
pub enum CollectionEvent<T> {
    /// An item entered the collection.
    Added {
        /// Identity of the new item.
        item: ItemId,
        /// Its current value.
        value: T,
    },
    /// A tracked item's value changed.
    Changed {
        /// The changed item.
        item: ItemId,
        /// Its new value.
        value: T,
    },
    /// A tracked item left the collection.
    Removed {
        /// The removed item.
        item: ItemId,
    },
    /// One item was replaced by another in place.
    Replaced {
        /// The item being replaced.
        old: ItemId,
        /// Identity of the replacement.
        new: ItemId,
        /// The replacement's value.
        value: T,
    },
    /// The collection was reset; all tracked items are gone.
    Reset,
}

/// Bridges collection events onto a [`PackedArena`].
///
/// Owns the arena; the consuming collaborator reaches the packed
/// region through [`flush`](CollectionAdapter::flush) and the counter
/// passthroughs, or takes the arena back via
/// [`into_arena`](CollectionAdapter::into_arena).
pub struct CollectionAdapter<T, R, S, F>
where
    F: FnMut(&T) -> Vec<R>,
{
    arena: PackedArena<R, S>,
    extract: F,
    _marker: std::marker::PhantomData<fn(&T)>,
}

impl<T, R, S, F> CollectionAdapter<T, R, S, F>
where
    R: Copy,
    S: RecordStore<R>,
    F: FnMut(&T) -> Vec<R>,
{
    /// Create an adapter over `arena` with the given record extractor.
    pub fn new(arena: PackedArena<R, S>, extract: F) -> Self {
        Self {
            arena,
            extract,
            _marker: std::marker::PhantomData,
        }
    }

    /// Apply one collection event to the arena.
    ///
    /// Capacity failures are surfaced, not retried; a failed `Added`
    /// rolls its `bind` back so the arena is left exactly as before
    /// the event. `Changed`/`Removed` for an untracked item fail with
    /// [`ArenaError::UnknownItem`].
    pub fn apply(&mut self, event: CollectionEvent<T>) -> Result<(), ArenaError> {
        match event {
            CollectionEvent::Added { item, value } => self.add(item, &value),
            CollectionEvent::Changed { item, value } => {
                let records = (self.extract)(&value);
                self.arena.rebind(item, &records)
            }
            CollectionEvent::Removed { item } => self.arena.unbind(item),
            CollectionEvent::Replaced { old, new, value } => {
                self.arena.unbind(old)?;
                self.add(new, &value)
            }
            CollectionEvent::Reset => self.arena.clear(),
        }
    }

    /// Whether `item` is currently tracked.
    pub fn contains(&self, item: ItemId) -> bool {
        self.arena.contains(item)
    }

    /// Number of tracked items.
    pub fn item_count(&self) -> usize {
        self.arena.item_count()
    }

    /// Number of live atoms in the packed region.
    pub fn live_atom_count(&self) -> u32 {
        self.arena.live_atom_count()
    }

    /// Number of meaningful index positions for the next consume call.
    pub fn live_index_count(&self) -> u32 {
        self.arena.live_index_count()
    }

    /// Apply queued writes to the store before consumption.
    pub fn flush(&mut self) -> usize {
        self.arena.flush()
    }

    /// The underlying arena.
    pub fn arena(&self) -> &PackedArena<R, S> {
        &self.arena
    }

    /// Mutable access to the underlying arena.
    pub fn arena_mut(&mut self) -> &mut PackedArena<R, S> {
        &mut self.arena
    }

    /// Detach the adapter, handing the arena back.
    pub fn into_arena(self) -> PackedArena<R, S> {
        self.arena
    }

    fn add(&mut self, item: ItemId, value: &T) -> Result<(), ArenaError> {
        let records = (self.extract)(value);
        self.arena.bind(item)?;
        if let Err(err) = self.arena.rebind(item, &records) {
            // Leave no trace of the failed add.
            self.arena.unbind(item)?;
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packbuf_core::AtomLayout;
    use packbuf_test_utils::MockStore;

    const A: ItemId = ItemId(1);
    const B: ItemId = ItemId(2);

    /// Item values are `(value, atom_count)`; the extractor expands
    /// them into `atom_count` pair-atoms filled with `value`.
    type Value = (f32, u32);

    fn adapter(
        capacity: u32,
    ) -> CollectionAdapter<Value, f32, MockStore, impl FnMut(&Value) -> Vec<f32>> {
        let layout = AtomLayout::points(2).unwrap();
        let store = MockStore::new(capacity * 2, capacity * 2);
        let arena = PackedArena::new(layout, capacity, store).unwrap();
        CollectionAdapter::new(arena, |&(value, atoms): &Value| {
            vec![value; (atoms * 2) as usize]
        })
    }

    // ── event mapping ──────────────────────────────────────────

    #[test]
    fn added_binds_and_fills() {
        let mut adapter = adapter(4);
        adapter
            .apply(CollectionEvent::Added {
                item: A,
                value: (1.5, 2),
            })
            .unwrap();
        assert!(adapter.contains(A));
        assert_eq!(adapter.live_atom_count(), 2);
        adapter.flush();
        assert_eq!(&adapter.arena().store().published_records()[..4], &[1.5; 4]);
    }

    #[test]
    fn changed_rebinds_with_fresh_records() {
        let mut adapter = adapter(4);
        adapter
            .apply(CollectionEvent::Added {
                item: A,
                value: (1.0, 1),
            })
            .unwrap();
        adapter
            .apply(CollectionEvent::Changed {
                item: A,
                value: (2.0, 2),
            })
            .unwrap();
        assert_eq!(adapter.live_atom_count(), 2);
        adapter.flush();
        assert_eq!(&adapter.arena().store().published_records()[..4], &[2.0; 4]);
    }

    #[test]
    fn removed_unbinds() {
        let mut adapter = adapter(4);
        adapter
            .apply(CollectionEvent::Added {
                item: A,
                value: (1.0, 1),
            })
            .unwrap();
        adapter.apply(CollectionEvent::Removed { item: A }).unwrap();
        assert!(!adapter.contains(A));
        assert_eq!(adapter.live_atom_count(), 0);
    }

    #[test]
    fn replaced_swaps_bindings() {
        let mut adapter = adapter(4);
        adapter
            .apply(CollectionEvent::Added {
                item: A,
                value: (1.0, 1),
            })
            .unwrap();
        adapter
            .apply(CollectionEvent::Replaced {
                old: A,
                new: B,
                value: (2.0, 1),
            })
            .unwrap();
        assert!(!adapter.contains(A));
        assert!(adapter.contains(B));
        assert_eq!(adapter.live_atom_count(), 1);
    }

    #[test]
    fn reset_unbinds_all() {
        let mut adapter = adapter(8);
        for (i, atoms) in [(1u64, 1u32), (2, 2), (3, 1)] {
            adapter
                .apply(CollectionEvent::Added {
                    item: ItemId(i),
                    value: (i as f32, atoms),
                })
                .unwrap();
        }
        adapter.apply(CollectionEvent::Reset).unwrap();
        assert_eq!(adapter.item_count(), 0);
        assert_eq!(adapter.live_atom_count(), 0);
    }

    // ── failure semantics ──────────────────────────────────────

    #[test]
    fn changed_on_untracked_item_is_unknown_item() {
        let mut adapter = adapter(4);
        let result = adapter.apply(CollectionEvent::Changed {
            item: A,
            value: (1.0, 1),
        });
        assert_eq!(result, Err(ArenaError::UnknownItem { item: A }));
    }

    #[test]
    fn removed_on_untracked_item_is_unknown_item() {
        let mut adapter = adapter(4);
        let result = adapter.apply(CollectionEvent::Removed { item: A });
        assert_eq!(result, Err(ArenaError::UnknownItem { item: A }));
    }

    #[test]
    fn failed_add_leaves_no_trace() {
        let mut adapter = adapter(1);
        adapter
            .apply(CollectionEvent::Added {
                item: A,
                value: (1.0, 1),
            })
            .unwrap();
        let result = adapter.apply(CollectionEvent::Added {
            item: B,
            value: (2.0, 1),
        });
        assert!(matches!(result, Err(ArenaError::CapacityExceeded { .. })));
        assert!(!adapter.contains(B));
        assert_eq!(adapter.live_atom_count(), 1);
        assert_eq!(adapter.item_count(), 1);
    }

    #[test]
    fn malformed_extractor_output_surfaces() {
        // An extractor producing a non-multiple record count is caught
        // by the arena's validation, not silently padded.
        let layout = AtomLayout::points(2).unwrap();
        let store = MockStore::new(8, 8);
        let arena = PackedArena::new(layout, 4, store).unwrap();
        let mut adapter = CollectionAdapter::new(arena, |&v: &f32| vec![v; 3]);
        let result = adapter.apply(CollectionEvent::Added {
            item: A,
            value: 1.0,
        });
        assert!(matches!(
            result,
            Err(ArenaError::MalformedRecordSet { .. })
        ));
        assert!(!adapter.contains(A));
    }
}
