//! Stream-of-streams adapter.
//!
//! The outer channel emits one [`ItemStream`] per logical item; each
//! inner channel emits successive record snapshots and, eventually, a
//! completion signal. [`StreamAdapter::pump`] drains both layers
//! without blocking and must run on the arena's owner thread; the
//! producing side of every channel may live on any thread.
//!
//! Dropping an inner sender counts as completion — a producer that
//! goes away takes its item with it.

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use packbuf_core::{ArenaError, ItemId, RecordStore};

use packbuf_arena::PackedArena;

/// One notification on an item's inner stream.
#[derive(Clone, Debug)]
pub enum StreamEmission<R> {
    /// A fresh, complete record snapshot for the item.
    Snapshot(Vec<R>),
    /// The item is done; its binding should be released.
    Complete,
}

/// The receiving half of one item's notification stream.
#[derive(Debug)]
pub struct ItemStream<R> {
    /// The item this stream describes.
    pub item: ItemId,
    /// Successive emissions for the item.
    pub emissions: Receiver<StreamEmission<R>>,
}

/// Create a connected (producer, stream) pair for one item.
pub fn item_stream<R>(item: ItemId) -> (Sender<StreamEmission<R>>, ItemStream<R>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (
        tx,
        ItemStream {
            item,
            emissions: rx,
        },
    )
}

/// Bridges a stream of per-item streams onto a [`PackedArena`].
pub struct StreamAdapter<R, S> {
    arena: PackedArena<R, S>,
    outer: Receiver<ItemStream<R>>,
    /// Streams with an active binding, pumped in subscription order.
    active: Vec<ItemStream<R>>,
}

impl<R: Copy, S: RecordStore<R>> StreamAdapter<R, S> {
    /// Subscribe `arena` to the given outer stream.
    pub fn new(arena: PackedArena<R, S>, outer: Receiver<ItemStream<R>>) -> Self {
        Self {
            arena,
            outer,
            active: Vec::new(),
        }
    }

    /// Drain all pending notifications into the arena.
    ///
    /// Non-blocking; call from the owner thread, typically once per
    /// frame before [`flush`](StreamAdapter::flush). New inner streams
    /// are bound, snapshots rebind, completion (explicit or by sender
    /// disconnect) unbinds. Returns the number of notifications
    /// processed. An outer-channel disconnect ends subscription growth
    /// but already-active items keep pumping.
    pub fn pump(&mut self) -> Result<usize, ArenaError> {
        let mut processed = 0;

        while let Ok(stream) = self.outer.try_recv() {
            self.arena.bind(stream.item)?;
            self.active.push(stream);
            processed += 1;
        }

        let mut i = 0;
        while i < self.active.len() {
            let mut completed = false;
            loop {
                match self.active[i].emissions.try_recv() {
                    Ok(StreamEmission::Snapshot(records)) => {
                        let item = self.active[i].item;
                        self.arena.rebind(item, &records)?;
                        processed += 1;
                    }
                    Ok(StreamEmission::Complete) => {
                        processed += 1;
                        completed = true;
                        break;
                    }
                    Err(TryRecvError::Disconnected) => {
                        completed = true;
                        break;
                    }
                    Err(TryRecvError::Empty) => break,
                }
            }
            if completed {
                let stream = self.active.swap_remove(i);
                self.arena.unbind(stream.item)?;
            } else {
                i += 1;
            }
        }

        Ok(processed)
    }

    /// Number of items with an active inner stream.
    pub fn active_count(&self) -> usize {
        self.active.len()
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

    /// Detach the adapter, handing the arena back.
    pub fn into_arena(self) -> PackedArena<R, S> {
        self.arena
    }
}
