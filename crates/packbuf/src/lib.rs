//! packbuf: a packed, reactively-synchronized buffer arena.
//!
//! Keeps a contiguous, gap-free prefix of a fixed-capacity backing
//! store (typically a GPU vertex/index buffer pair) in sync with a
//! dynamic collection of items, each contributing a variable number of
//! fixed-size record groups (atoms). Removal compacts by swap-with-last
//! in O(1); writes are deferred through a thread-safe queue and applied
//! in one flush before the packed region is consumed.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the packbuf sub-crates. For most users, adding `packbuf` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use packbuf::prelude::*;
//! use packbuf_test_utils::MockStore;
//!
//! // Two-triangle quads: 4 records per atom, 6 indices.
//! let layout = AtomLayout::quad();
//! let store = MockStore::<f32>::new(64, 96);
//! let arena = PackedArena::new(layout, 16, store).unwrap();
//!
//! // Items are (fill value, quad count); the extractor derives records.
//! let mut sprites = CollectionAdapter::new(arena, |&(v, quads): &(f32, u32)| {
//!     vec![v; (quads * 4) as usize]
//! });
//!
//! let a = ItemId::next();
//! sprites.apply(CollectionEvent::Added { item: a, value: (0.5, 2) }).unwrap();
//! sprites.apply(CollectionEvent::Changed { item: a, value: (0.9, 1) }).unwrap();
//!
//! // Apply the queued writes, then draw live_index_count() indices.
//! sprites.flush();
//! assert_eq!(sprites.live_index_count(), 6);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `packbuf-arena` | `PackedArena`, slot table, write queue |
//! | [`types`] | `packbuf-core` | IDs, `AtomLayout`, errors, `RecordStore` |
//! | [`sync`] | `packbuf-sync` | Collection and stream adapters |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena storage: `PackedArena`, slot table, deferred-write queue.
pub mod arena {
    pub use packbuf_arena::*;
}

/// Core types: IDs, `AtomLayout`, the error taxonomy, `RecordStore`.
pub mod types {
    pub use packbuf_core::*;
}

/// Synchronization adapters for the two notification shapes.
pub mod sync {
    pub use packbuf_sync::*;
}

/// The most commonly used types, re-exported flat.
pub mod prelude {
    pub use packbuf_arena::{PackedArena, WriteOp, WriteSender};
    pub use packbuf_core::{ArenaError, AtomLayout, ItemId, RecordStore, SlotIndex};
    pub use packbuf_sync::{
        item_stream, CollectionAdapter, CollectionEvent, ItemStream, StreamAdapter,
        StreamEmission,
    };
}
