//! The backing-store seam.
//!
//! The arena talks to its storage collaborator (typically a GPU vertex
//! and index buffer pair) through [`RecordStore`] only. Records are
//! opaque to the arena: it moves and writes them but never interprets
//! their contents.

/// A fixed-capacity, randomly-indexable record and index store.
///
/// Implementations may buffer writes internally; [`flush`](RecordStore::flush)
/// must apply any buffered writes before the packed region is consumed.
/// The arena validates store capacities at construction and never
/// issues out-of-range writes afterwards.
///
/// # Panics
///
/// Implementations are expected to panic on out-of-range positions
/// rather than silently truncate — such a write is a defect in the
/// caller, not a recoverable condition.
pub trait RecordStore<R> {
    /// Total number of record positions the store can hold.
    fn record_capacity(&self) -> u32;

    /// Total number of index positions the store can hold.
    fn index_capacity(&self) -> u32;

    /// Write `data` starting at record position `first_record`.
    fn write_records(&mut self, first_record: u32, data: &[R]);

    /// Copy `len` records from position `src_record` to `dst_record`
    /// within the store. Ranges produced by the arena never overlap
    /// (a compaction copy moves one whole atom between distinct slots).
    fn copy_records(&mut self, src_record: u32, dst_record: u32, len: u32);

    /// Write `data` starting at index position `first_index`.
    fn write_indices(&mut self, first_index: u32, data: &[u32]);

    /// Apply any internally buffered writes so the packed region can
    /// be consumed.
    fn flush(&mut self);
}
