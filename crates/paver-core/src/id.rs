//! Strongly-typed tile and occupant identifiers.

use std::fmt;

/// Canonical identity of a tile: `row * field_width + col`.
///
/// Produced by [`TileGrid::tile_index`](crate::TileGrid::tile_index). Only
/// meaningful for coordinates the grid considers valid; the engine never
/// derives an index from an out-of-bounds coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex(pub u32);

impl TileIndex {
    /// The index as a `usize`, for slicing into flat tile storage.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TileIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies whatever entity the caller has placed on a tile (a farm, a
/// building, ...).
///
/// The engine never interprets occupants; it only carries the id through
/// [`TileGridMut::set_tile_kind`](crate::TileGridMut::set_tile_kind).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccupantId(pub u32);

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for OccupantId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
