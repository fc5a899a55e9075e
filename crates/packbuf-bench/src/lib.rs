//! Shared fixtures for packbuf benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use packbuf_arena::PackedArena;
use packbuf_core::AtomLayout;
use packbuf_test_utils::MockStore;

/// A quad arena over a mock store sized for `atom_capacity` atoms.
pub fn quad_arena(atom_capacity: u32) -> PackedArena<f32, MockStore> {
    let layout = AtomLayout::quad();
    let store = MockStore::new(atom_capacity * 4, atom_capacity * 6);
    PackedArena::new(layout, atom_capacity, store).expect("store sized to capacity")
}

/// Flat record data for `atoms` quad atoms.
pub fn quad_records(atoms: u32) -> Vec<f32> {
    vec![1.0; (atoms * 4) as usize]
}
