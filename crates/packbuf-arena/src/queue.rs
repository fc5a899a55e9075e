//! Deferred-write queue between binding reconciliation and the store.
//!
//! Logical writes produced while reconciling bindings are buffered as
//! [`WriteOp`]s and applied to the backing store in one batch by
//! [`WriteQueue::flush_into`], immediately before the consume/draw
//! call. Producers may enqueue from any thread via a cloned
//! [`WriteSender`]; flushing takes `&mut self`, so exactly one
//! consumer drains at a time.
//!
//! # Snapshot drain
//!
//! `flush_into` drains exactly the operations present when it begins
//! (a snapshot count, not a live drain). Operations enqueued during
//! the drain wait for the next flush. This bounds flush latency even
//! while producers are still active.

use crossbeam_channel::{Receiver, Sender};

use packbuf_core::RecordStore;

/// One primitive write destined for the backing store.
#[derive(Clone, Debug, PartialEq)]
pub enum WriteOp<R> {
    /// Overwrite a run of record positions.
    Records {
        /// First record position to write.
        first_record: u32,
        /// The record payloads.
        data: Box<[R]>,
    },
    /// Copy a run of records within the store (compaction move).
    CopyRange {
        /// First record position of the source run.
        src_record: u32,
        /// First record position of the destination run.
        dst_record: u32,
        /// Run length in records.
        len: u32,
    },
    /// Overwrite a run of index positions.
    Indices {
        /// First index position to write.
        first_index: u32,
        /// The index values.
        data: Box<[u32]>,
    },
}

impl<R: Copy> WriteOp<R> {
    fn apply<S: RecordStore<R>>(self, store: &mut S) {
        match self {
            Self::Records { first_record, data } => store.write_records(first_record, &data),
            Self::CopyRange {
                src_record,
                dst_record,
                len,
            } => store.copy_records(src_record, dst_record, len),
            Self::Indices { first_index, data } => store.write_indices(first_index, &data),
        }
    }
}

/// Cloneable, any-thread producer handle for a [`WriteQueue`].
#[derive(Clone, Debug)]
pub struct WriteSender<R> {
    tx: Sender<WriteOp<R>>,
}

impl<R> WriteSender<R> {
    /// Append one write operation to the queue.
    ///
    /// Never blocks; the queue is unbounded. Safe to call from any
    /// thread.
    pub fn enqueue(&self, op: WriteOp<R>) {
        // The receiver lives as long as the queue; a send can only fail
        // after the arena is torn down, at which point the write is
        // moot anyway.
        let _ = self.tx.send(op);
    }
}

/// Thread-safe FIFO of pending writes with snapshot-drain flushing.
pub struct WriteQueue<R> {
    tx: Sender<WriteOp<R>>,
    rx: Receiver<WriteOp<R>>,
}

impl<R: Copy> WriteQueue<R> {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }

    /// A cloneable producer handle.
    pub fn sender(&self) -> WriteSender<R> {
        WriteSender {
            tx: self.tx.clone(),
        }
    }

    /// Append one write operation from the owning thread.
    pub fn enqueue(&self, op: WriteOp<R>) {
        let _ = self.tx.send(op);
    }

    /// Number of operations currently pending.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether no operations are pending.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Drain the snapshot of pending operations into `store`, in
    /// enqueue order, then flush the store itself.
    ///
    /// Returns the number of operations applied. `&mut self` enforces
    /// the single-flusher discipline at the type level.
    pub fn flush_into<S: RecordStore<R>>(&mut self, store: &mut S) -> usize {
        let snapshot = self.rx.len();
        let mut applied = 0;
        for _ in 0..snapshot {
            match self.rx.try_recv() {
                Ok(op) => {
                    op.apply(store);
                    applied += 1;
                }
                // Only this queue holds the sender, so the channel can
                // neither disconnect nor come up short of the snapshot.
                Err(_) => break,
            }
        }
        store.flush();
        applied
    }
}

impl<R: Copy> Default for WriteQueue<R> {
    fn default() -> Self {
        Self::new()
    }
}
