//! The arena error taxonomy.
//!
//! All errors are raised synchronously at the point of violation. The
//! arena performs no internal retries and swallows nothing. Callers are
//! expected to treat [`CapacityExceeded`](ArenaError::CapacityExceeded)
//! and [`MalformedRecordSet`](ArenaError::MalformedRecordSet) as
//! recoverable (validate input, pre-size capacity) and
//! [`UnknownItem`](ArenaError::UnknownItem) /
//! [`InvariantViolation`](ArenaError::InvariantViolation) as defects.

use std::error::Error;
use std::fmt;

use crate::id::ItemId;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Atom capacity reached. There is no implicit growth; the
    /// application must pre-size the arena.
    CapacityExceeded {
        /// Number of atoms the operation needed in total.
        requested_atoms: u32,
        /// Fixed atom capacity of the arena.
        capacity_atoms: u32,
    },
    /// An item's record count is not a multiple of `records_per_atom`.
    /// Fatal to that rebind only; prior state is unchanged.
    MalformedRecordSet {
        /// Length of the offending record set.
        record_count: usize,
        /// Records per atom declared by the layout.
        records_per_atom: u32,
    },
    /// A notification referenced an item with no active binding.
    /// Indicates adapter or collaborator misuse.
    UnknownItem {
        /// The unrecognised item.
        item: ItemId,
    },
    /// Internal consistency check failure (e.g. releasing from an
    /// empty table). A programming error, not a recoverable condition.
    InvariantViolation {
        /// Which invariant was violated.
        reason: &'static str,
    },
    /// Construction-time configuration error in the atom layout or
    /// backing-store sizing.
    InvalidLayout {
        /// What was wrong with the configuration.
        detail: &'static str,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested_atoms,
                capacity_atoms,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested_atoms} atoms, capacity {capacity_atoms} atoms"
                )
            }
            Self::MalformedRecordSet {
                record_count,
                records_per_atom,
            } => {
                write!(
                    f,
                    "malformed record set: {record_count} records is not a multiple of {records_per_atom} records per atom"
                )
            }
            Self::UnknownItem { item } => {
                write!(f, "unknown item: {item}")
            }
            Self::InvariantViolation { reason } => {
                write!(f, "invariant violation: {reason}")
            }
            Self::InvalidLayout { detail } => {
                write!(f, "invalid layout: {detail}")
            }
        }
    }
}

impl Error for ArenaError {}
