//! Offset and world coordinates, and the projection between them.
//!
//! Tiles are addressed by [`OffsetCoord`] on a staggered (brick) layout:
//! odd rows are shifted half a tile to the right. Seen as diamonds, the four
//! edge-adjacent neighbours of a tile lie diagonally in offset space. The
//! world projection rotates that lattice so each of the four neighbours is
//! exactly one unit away along a single world axis:
//!
//! ```text
//! wrow = floor((row + 1) / 2) + col
//! wcol = -floor(row / 2) + col
//! ```
//!
//! and back:
//!
//! ```text
//! row = wrow - wcol
//! col = floor((wrow + wcol) / 2)
//! ```
//!
//! Both maps use floor division, so negative coordinates project cleanly.

use std::fmt;

/// Row/column address of a tile on the staggered grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OffsetCoord {
    /// Row, top to bottom.
    pub row: i32,
    /// Column, left to right.
    pub col: i32,
}

impl OffsetCoord {
    /// Create an offset coordinate.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Project into world space.
    ///
    /// # Examples
    ///
    /// ```
    /// use paver_core::{OffsetCoord, WorldCoord};
    ///
    /// assert_eq!(OffsetCoord::new(9, 9).project(), WorldCoord::new(14, 5));
    /// assert_eq!(OffsetCoord::new(-1, 0).project(), WorldCoord::new(0, 1));
    /// ```
    pub fn project(self) -> WorldCoord {
        WorldCoord {
            row: (self.row + 1).div_euclid(2) + self.col,
            col: -self.row.div_euclid(2) + self.col,
        }
    }
}

impl fmt::Display for OffsetCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A coordinate in the rotated world space used for heuristics and
/// rectangular selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldCoord {
    /// World row.
    pub row: i32,
    /// World column.
    pub col: i32,
}

impl WorldCoord {
    /// Create a world coordinate.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Map back to the offset coordinate of the tile at this world position.
    pub fn unproject(self) -> OffsetCoord {
        OffsetCoord {
            row: self.row - self.col,
            col: (self.row + self.col).div_euclid(2),
        }
    }

    /// Manhattan distance in world space. Equals the number of neighbour
    /// steps between the two tiles on an unobstructed, unbounded grid.
    pub fn manhattan(self, other: WorldCoord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for WorldCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// Inclusive axis-aligned rectangle in world space.
///
/// This is the shape of a marquee selection: dragging from one tile to
/// another selects every tile whose projection falls between the two
/// projected corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldRect {
    /// Minimum corner (inclusive on both axes).
    pub min: WorldCoord,
    /// Maximum corner (inclusive on both axes).
    pub max: WorldCoord,
}

impl WorldRect {
    /// Bounding box of two world coordinates, in any order.
    pub fn new(a: WorldCoord, b: WorldCoord) -> Self {
        Self {
            min: WorldCoord::new(a.row.min(b.row), a.col.min(b.col)),
            max: WorldCoord::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Bounding box of the projections of two offset corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use paver_core::{OffsetCoord, WorldCoord, WorldRect};
    ///
    /// let rect = WorldRect::from_corners(OffsetCoord::new(9, 9), OffsetCoord::new(0, 0));
    /// assert_eq!(rect.min, WorldCoord::new(0, 0));
    /// assert_eq!(rect.max, WorldCoord::new(14, 5));
    /// ```
    pub fn from_corners(a: OffsetCoord, b: OffsetCoord) -> Self {
        Self::new(a.project(), b.project())
    }

    /// Whether `coord` lies inside the rectangle.
    pub fn contains(&self, coord: WorldCoord) -> bool {
        coord.row >= self.min.row
            && coord.row <= self.max.row
            && coord.col >= self.min.col
            && coord.col <= self.max.col
    }

    /// Number of world cells covered.
    pub fn area(&self) -> u64 {
        let rows = (self.max.row - self.min.row) as u64 + 1;
        let cols = (self.max.col - self.min.col) as u64 + 1;
        rows * cols
    }

    /// Every world coordinate in the rectangle, row-major.
    pub fn iter(&self) -> impl Iterator<Item = WorldCoord> + '_ {
        let cols = self.min.col..=self.max.col;
        (self.min.row..=self.max.row)
            .flat_map(move |row| cols.clone().map(move |col| WorldCoord::new(row, col)))
    }
}
