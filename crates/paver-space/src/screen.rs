//! Screen-space picking for diamond tiles.
//!
//! Tile `(row, col)` is drawn with its centre at
//! `(col * 2hw + (row & 1) * hw, row * hh)`, where `hw`/`hh` are the
//! half-width and half-height of the diamond. Picking splits the screen
//! into `hw x hh` cells; each cell is cut by one diagonal into a part of
//! the tile above and a part of the tile below.

use paver_core::OffsetCoord;

/// A point in field-relative screen pixels (origin at tile (0, 0)'s centre).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    /// Horizontal pixel offset, growing right.
    pub x: i32,
    /// Vertical pixel offset, growing down.
    pub y: i32,
}

impl ScreenPoint {
    /// Construct a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of one diamond.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileMetrics {
    /// Half the diamond's width.
    pub half_width: i32,
    /// Half the diamond's height.
    pub half_height: i32,
}

impl TileMetrics {
    /// Default tile height in pixels.
    pub const DEFAULT_TILE_HEIGHT: i32 = 40;

    /// Metrics for explicit half extents.
    ///
    /// # Panics
    ///
    /// Panics if either half extent is not positive.
    pub fn new(half_width: i32, half_height: i32) -> Self {
        assert!(
            half_width > 0 && half_height > 0,
            "tile half extents must be positive, got {half_width}x{half_height}"
        );
        Self {
            half_width,
            half_height,
        }
    }

    /// Metrics for an isometric diamond of the given height: the width is
    /// `height * sqrt(3)`, both halves floored.
    pub fn from_tile_height(height: i32) -> Self {
        let half_width = (f64::from(height) * 3f64.sqrt() / 2.0).floor() as i32;
        Self::new(half_width, height / 2)
    }
}

impl Default for TileMetrics {
    fn default() -> Self {
        Self::from_tile_height(Self::DEFAULT_TILE_HEIGHT)
    }
}

/// Screen position of the centre of `coord`.
pub fn tile_center(metrics: TileMetrics, coord: OffsetCoord) -> ScreenPoint {
    let TileMetrics {
        half_width: hw,
        half_height: hh,
    } = metrics;
    ScreenPoint::new(
        coord.col * 2 * hw + coord.row.rem_euclid(2) * hw,
        coord.row * hh,
    )
}

/// The tile under `point`.
///
/// Points strictly inside a diamond always pick that diamond. Points on
/// an edge go to one of the two tiles sharing it. The result may lie
/// outside any particular grid; check it with
/// [`TileGrid::are_coords_valid`](paver_core::TileGrid::are_coords_valid).
pub fn pick_tile(metrics: TileMetrics, point: ScreenPoint) -> OffsetCoord {
    let TileMetrics {
        half_width: hw,
        half_height: hh,
    } = metrics;
    let cell_row = point.y.div_euclid(hh);
    let cell_col = point.x.div_euclid(hw);
    let local_x = i64::from(point.x.rem_euclid(hw));
    let local_y = i64::from(point.y.rem_euclid(hh));
    let (hw64, hh64) = (i64::from(hw), i64::from(hh));
    let row_even = cell_row.rem_euclid(2) == 0;

    // The even and odd cells are split by opposite diagonals.
    let (upper, col) = if (cell_row + cell_col).rem_euclid(2) == 0 {
        // Diagonal from bottom-left to top-right.
        let upper = cross(hw64, -hh64, local_x, local_y - hh64) < 0;
        let col = match (upper, row_even) {
            (true, true) | (false, true) => cell_col.div_euclid(2),
            (true, false) => (cell_col - 1).div_euclid(2),
            (false, false) => (cell_col - 1).div_euclid(2) + 1,
        };
        (upper, col)
    } else {
        // Diagonal from top-left to bottom-right.
        let upper = cross(hw64, hh64, local_x, local_y) < 0;
        let col = match (upper, row_even) {
            (true, true) => (cell_col - 1).div_euclid(2) + 1,
            (false, true) => (cell_col - 1).div_euclid(2),
            (true, false) | (false, false) => cell_col.div_euclid(2),
        };
        (upper, col)
    };
    let row = if upper { cell_row } else { cell_row + 1 };
    OffsetCoord::new(row, col)
}

#[inline]
fn cross(ax: i64, ay: i64, bx: i64, by: i64) -> i64 {
    ax * by - ay * bx
}
