//! Synchronization adapters for the packbuf arena.
//!
//! The arena understands exactly three primitives: `bind`, `rebind`,
//! `unbind`. This crate bridges the two change-notification shapes the
//! surrounding system produces onto that single core state machine:
//!
//! - [`CollectionAdapter`] consumes discrete collection events
//!   (add / change / remove / replace / reset).
//! - [`StreamAdapter`] consumes a push-style stream of per-item
//!   streams, each emitting successive record snapshots until
//!   completion.
//!
//! Per item, both adapters drive the same lifecycle:
//! `Unbound → Bound(k) → Bound(k')* → Unbound`. No state permits a
//! partially applied rebind; each is all-or-nothing with respect to
//! that item's slots.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collection;
pub mod stream;

pub use collection::{CollectionAdapter, CollectionEvent};
pub use stream::{item_stream, ItemStream, StreamAdapter, StreamEmission};
