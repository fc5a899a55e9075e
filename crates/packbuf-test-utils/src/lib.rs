//! Test utilities and mock types for packbuf development.
//!
//! Provides [`MockStore`], an in-memory [`RecordStore`] with separate
//! staged and published copies, so tests can assert both the written
//! content and the flush-before-consume discipline.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use packbuf_core::RecordStore;

/// In-memory record/index store with staged vs published state.
///
/// Writes land in the staged arrays immediately; `flush()` copies
/// staged → published and bumps a counter. Tests that read
/// [`published_records`](MockStore::published_records) therefore only
/// observe writes that went through a flush, mirroring how a GPU
/// buffer pair behaves with buffered uploads.
#[derive(Clone, Debug)]
pub struct MockStore<R = f32> {
    staged_records: Vec<R>,
    staged_indices: Vec<u32>,
    published_records: Vec<R>,
    published_indices: Vec<u32>,
    flush_count: usize,
}

impl<R: Copy + Default> MockStore<R> {
    /// Create a zeroed store with the given capacities.
    pub fn new(record_capacity: u32, index_capacity: u32) -> Self {
        Self {
            staged_records: vec![R::default(); record_capacity as usize],
            staged_indices: vec![0; index_capacity as usize],
            published_records: vec![R::default(); record_capacity as usize],
            published_indices: vec![0; index_capacity as usize],
            flush_count: 0,
        }
    }

    /// Records as written, whether or not a flush has happened.
    pub fn staged_records(&self) -> &[R] {
        &self.staged_records
    }

    /// Records as of the last flush.
    pub fn published_records(&self) -> &[R] {
        &self.published_records
    }

    /// Indices as of the last flush.
    pub fn published_indices(&self) -> &[u32] {
        &self.published_indices
    }

    /// How many times `flush()` has been called.
    pub fn flush_count(&self) -> usize {
        self.flush_count
    }
}

impl<R: Copy + Default> RecordStore<R> for MockStore<R> {
    fn record_capacity(&self) -> u32 {
        self.staged_records.len() as u32
    }

    fn index_capacity(&self) -> u32 {
        self.staged_indices.len() as u32
    }

    fn write_records(&mut self, first_record: u32, data: &[R]) {
        let start = first_record as usize;
        self.staged_records[start..start + data.len()].copy_from_slice(data);
    }

    fn copy_records(&mut self, src_record: u32, dst_record: u32, len: u32) {
        let src = src_record as usize;
        let dst = dst_record as usize;
        let len = len as usize;
        self.staged_records.copy_within(src..src + len, dst);
    }

    fn write_indices(&mut self, first_index: u32, data: &[u32]) {
        let start = first_index as usize;
        self.staged_indices[start..start + data.len()].copy_from_slice(data);
    }

    fn flush(&mut self) {
        self.published_records.copy_from_slice(&self.staged_records);
        self.published_indices.copy_from_slice(&self.staged_indices);
        self.flush_count += 1;
    }
}
