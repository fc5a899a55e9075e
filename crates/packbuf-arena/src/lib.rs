//! Packed, reactively-synchronized buffer arena.
//!
//! Keeps a contiguous, gap-free prefix of a fixed-capacity backing
//! store in sync with a dynamic set of items, each contributing a
//! variable number of fixed-size record groups (atoms).
//!
//! # Architecture
//!
//! ```text
//! PackedArena (orchestrator)
//! ├── SlotTable            packed slot → (item, local atom) mapping,
//! │                        swap-with-last compaction on release
//! ├── ItemBinding × n      per-item ordered slot list (IndexMap keyed)
//! ├── WriteQueue           deferred set/copy ops, any-thread producers,
//! │                        snapshot drain on the consuming thread
//! └── RecordStore          external backing store (e.g. GPU buffer pair)
//! ```
//!
//! # Packing invariant
//!
//! After every operation, slots `[0, live_count)` are each occupied by
//! exactly one `(item, local_atom)` pair and slots
//! `[live_count, capacity)` are free. Removal fills the freed slot with
//! the last live slot's atom, so the packed region can always be
//! consumed with a single bulk operation over `live_count` atoms.
//!
//! Swap-compaction means item-to-slot order is **not** stable across
//! removals; consumers that need a stable visual order must impose it
//! themselves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod binding;
pub mod queue;
pub mod slot_table;

pub use arena::PackedArena;
pub use binding::ItemBinding;
pub use queue::{WriteOp, WriteQueue, WriteSender};
pub use slot_table::{Compaction, SlotEntry, SlotTable};
