//! Static atom layout configuration.
//!
//! An [`AtomLayout`] describes how many fixed-size records compose one
//! atom and the fixed index pattern used to consume one atom (which
//! local record positions are referenced, in what order). Validated at
//! construction; all values are immutable after creation.
//!
//! The layout replaces the original system's reflection-driven record
//! introspection with an explicit, statically-declared shape supplied
//! by the caller.

use crate::error::ArenaError;
use crate::id::SlotIndex;

/// Describes the record and index shape of one atom.
///
/// Invariant (enforced at construction): `records_per_atom` equals
/// `max(index_pattern) + 1` — every record in the atom is referenced
/// by the pattern and no pattern entry reaches outside the atom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtomLayout {
    /// Count of fixed-size records forming one atom.
    records_per_atom: u32,
    /// Local record positions referenced when consuming one atom.
    index_pattern: Vec<u32>,
}

impl AtomLayout {
    /// Create a validated layout.
    ///
    /// Returns [`ArenaError::InvalidLayout`] if `records_per_atom` is
    /// zero, the pattern is empty, a pattern entry is out of range, or
    /// the pattern does not reference the last record of the atom.
    pub fn new(records_per_atom: u32, index_pattern: Vec<u32>) -> Result<Self, ArenaError> {
        if records_per_atom == 0 {
            return Err(ArenaError::InvalidLayout {
                detail: "records_per_atom must be positive",
            });
        }
        if index_pattern.is_empty() {
            return Err(ArenaError::InvalidLayout {
                detail: "index_pattern must not be empty",
            });
        }
        let max = *index_pattern
            .iter()
            .max()
            .expect("pattern is non-empty, checked above");
        if max >= records_per_atom {
            return Err(ArenaError::InvalidLayout {
                detail: "index_pattern references a record outside the atom",
            });
        }
        if max + 1 != records_per_atom {
            return Err(ArenaError::InvalidLayout {
                detail: "records_per_atom must equal max(index_pattern) + 1",
            });
        }
        Ok(Self {
            records_per_atom,
            index_pattern,
        })
    }

    /// A point-list layout: `n` records per atom, identity pattern.
    pub fn points(records_per_atom: u32) -> Result<Self, ArenaError> {
        let pattern = (0..records_per_atom).collect();
        Self::new(records_per_atom, pattern)
    }

    /// The classic two-triangle quad: 4 records, 6 indices.
    pub fn quad() -> Self {
        Self::new(4, vec![0, 1, 2, 2, 1, 3]).expect("quad layout is statically valid")
    }

    /// Count of records forming one atom.
    pub fn records_per_atom(&self) -> u32 {
        self.records_per_atom
    }

    /// The fixed per-atom index pattern (local record positions).
    pub fn index_pattern(&self) -> &[u32] {
        &self.index_pattern
    }

    /// Number of indices consumed per atom (the pattern length).
    pub fn records_per_indexed_atom(&self) -> u32 {
        self.index_pattern.len() as u32
    }

    /// First record position of the given slot in the backing store.
    pub fn record_base(&self, slot: SlotIndex) -> u32 {
        slot.0 * self.records_per_atom
    }

    /// First index position of the given slot in the backing store.
    pub fn index_base(&self, slot: SlotIndex) -> u32 {
        slot.0 * self.records_per_indexed_atom()
    }

    /// The index values for one slot: the pattern shifted to the
    /// slot's record base.
    pub fn indices_for_slot(&self, slot: SlotIndex) -> Vec<u32> {
        let base = self.record_base(slot);
        self.index_pattern.iter().map(|&p| base + p).collect()
    }

    /// Number of whole atoms described by `record_count` records.
    ///
    /// Returns [`ArenaError::MalformedRecordSet`] if `record_count` is
    /// not a multiple of `records_per_atom`.
    pub fn atom_count_for(&self, record_count: usize) -> Result<u32, ArenaError> {
        if record_count % self.records_per_atom as usize != 0 {
            return Err(ArenaError::MalformedRecordSet {
                record_count,
                records_per_atom: self.records_per_atom,
            });
        }
        Ok((record_count / self.records_per_atom as usize) as u32)
    }
}
