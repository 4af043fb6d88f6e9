//! Test utilities for Paver development.
//!
//! Provides field fixtures, a [`RecordingGrid`] that logs every write the
//! engine makes, and assertions over search output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{field_from_ascii, lake_field, open_field};

use indexmap::IndexMap;
use paver_core::{OccupantId, OffsetCoord, Tile, TileGrid, TileGridMut, TileIndex, TileKind};
use paver_space::{slot_between, Slot};

/// Wraps a grid and records every `set_tile_kind` call.
///
/// The log keeps the last kind written per tile, in first-write order, so
/// tests can assert exactly which tiles a commit or deletion touched.
pub struct RecordingGrid<G> {
    inner: G,
    writes: IndexMap<TileIndex, TileKind>,
    write_count: usize,
}

impl<G> RecordingGrid<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            writes: IndexMap::new(),
            write_count: 0,
        }
    }

    /// Last kind written per tile, in first-write order.
    pub fn writes(&self) -> &IndexMap<TileIndex, TileKind> {
        &self.writes
    }

    /// Total number of writes, including repeats to the same tile.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.write_count = 0;
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: TileGrid> TileGrid for RecordingGrid<G> {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn tile(&self, index: TileIndex) -> Tile {
        self.inner.tile(index)
    }

    fn tile_index(&self, coord: OffsetCoord) -> TileIndex {
        self.inner.tile_index(coord)
    }

    fn are_coords_valid(&self, coord: OffsetCoord, margin: i32) -> bool {
        self.inner.are_coords_valid(coord, margin)
    }
}

impl<G: TileGridMut> TileGridMut for RecordingGrid<G> {
    fn set_tile_kind(&mut self, index: TileIndex, kind: TileKind, occupant: Option<OccupantId>) {
        self.writes.insert(index, kind);
        self.write_count += 1;
        self.inner.set_tile_kind(index, kind, occupant);
    }
}

/// Assert that `path` (goal first, as the search emits it) is a valid
/// walk from `from` to `to` over traversable tiles of `grid`.
///
/// Checks the endpoints, bounds, walkability, edge adjacency of every
/// consecutive pair and that no tile repeats.
pub fn assert_valid_path<G: TileGrid + ?Sized>(
    grid: &G,
    path: &[OffsetCoord],
    from: OffsetCoord,
    to: OffsetCoord,
) {
    assert!(!path.is_empty(), "path is empty");
    assert_eq!(path.first(), Some(&to), "path must start at the goal");
    assert_eq!(path.last(), Some(&from), "path must end at the start");
    for (i, &coord) in path.iter().enumerate() {
        assert!(grid.are_coords_valid(coord, 0), "step {i} at {coord} is out of bounds");
        let kind = grid.tile(grid.tile_index(coord)).kind;
        assert!(kind.is_traversable(), "step {i} at {coord} is {kind}");
        assert!(
            !path[..i].contains(&coord),
            "step {i} revisits {coord}"
        );
    }
    for pair in path.windows(2) {
        assert!(
            slot_between(pair[0], pair[1]).is_some(),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

/// Slots taken when walking `path` from its last element to its first.
pub fn walk_slots(path: &[OffsetCoord]) -> Vec<Slot> {
    path.windows(2)
        .rev()
        .filter_map(|pair| slot_between(pair[1], pair[0]))
        .collect()
}

/// Number of direction changes along `path`.
pub fn count_turns(path: &[OffsetCoord]) -> usize {
    walk_slots(path)
        .windows(2)
        .filter(|pair| pair[0] != pair[1])
        .count()
}
