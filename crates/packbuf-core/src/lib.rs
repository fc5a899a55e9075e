//! Core types and traits for the packbuf packed buffer arena.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared across the packbuf workspace:
//! typed IDs, the [`AtomLayout`] configuration, the [`ArenaError`]
//! taxonomy, and the [`RecordStore`] backing-store seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod layout;
pub mod traits;

pub use error::ArenaError;
pub use id::{ItemId, SlotIndex, SlotList};
pub use layout::AtomLayout;
pub use traits::RecordStore;
