//! The grid contract between the engine and the caller's tile storage.

use crate::coord::OffsetCoord;
use crate::id::{OccupantId, TileIndex};
use crate::tile::{Tile, TileKind};

/// Read access to the caller's tile grid.
///
/// The engine never owns tile storage. It addresses tiles by
/// [`TileIndex`], obtained from [`tile_index`](TileGrid::tile_index), and
/// only for coordinates that passed
/// [`are_coords_valid`](TileGrid::are_coords_valid).
pub trait TileGrid {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Read a tile by index.
    fn tile(&self, index: TileIndex) -> Tile;

    /// Canonical index `row * width + col`.
    ///
    /// The result is unspecified for coordinates outside the grid.
    fn tile_index(&self, coord: OffsetCoord) -> TileIndex {
        TileIndex((coord.row as u32).wrapping_mul(self.width()).wrapping_add(coord.col as u32))
    }

    /// Whether `coord` lies within `[margin, dimension - margin)` on both
    /// axes.
    fn are_coords_valid(&self, coord: OffsetCoord, margin: i32) -> bool {
        coord.row >= margin
            && coord.col >= margin
            && (coord.row as i64) < self.height() as i64 - margin as i64
            && (coord.col as i64) < self.width() as i64 - margin as i64
    }
}

/// Write access to the caller's tile grid.
pub trait TileGridMut: TileGrid {
    /// Replace a tile's kind and occupant.
    fn set_tile_kind(&mut self, index: TileIndex, kind: TileKind, occupant: Option<OccupantId>);
}
