//! Neighbour slots of the staggered diamond grid.

use paver_core::{OffsetCoord, TileGrid};
use smallvec::SmallVec;

/// Offsets `(drow, dcol)` per slot for even rows.
const EVEN_ROW_OFFSETS: [(i32, i32); 4] = [
    (-1, 0),  // NE
    (1, 0),   // SE
    (1, -1),  // SW
    (-1, -1), // NW
];

/// Offsets `(drow, dcol)` per slot for odd rows (shifted half a tile right).
const ODD_ROW_OFFSETS: [(i32, i32); 4] = [
    (-1, 1), // NE
    (1, 1),  // SE
    (1, 0),  // SW
    (-1, 0), // NW
];

/// One of the four edge-adjacent neighbours of a tile.
///
/// Slots are numbered clockwise in screen space starting north-east. In
/// world space they are `+wcol`, `+wrow`, `-wcol`, `-wrow` respectively, so
/// `slot.opposite()` is always two steps round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Up and to the right.
    NorthEast = 0,
    /// Down and to the right.
    SouthEast = 1,
    /// Down and to the left.
    SouthWest = 2,
    /// Up and to the left.
    NorthWest = 3,
}

impl Slot {
    /// All slots in index order.
    pub const ALL: [Slot; 4] = [
        Slot::NorthEast,
        Slot::SouthEast,
        Slot::SouthWest,
        Slot::NorthWest,
    ];

    /// Slot index in `0..4`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Slot for an index, if in range.
    pub const fn from_index(index: usize) -> Option<Slot> {
        match index {
            0 => Some(Slot::NorthEast),
            1 => Some(Slot::SouthEast),
            2 => Some(Slot::SouthWest),
            3 => Some(Slot::NorthWest),
            _ => None,
        }
    }

    /// The slot pointing back the way this one came.
    pub const fn opposite(self) -> Slot {
        Self::ALL[(self as usize + 2) % 4]
    }

    /// World-space displacement `(dwrow, dwcol)` of a step through this slot.
    pub const fn world_step(self) -> (i32, i32) {
        match self {
            Slot::NorthEast => (0, 1),
            Slot::SouthEast => (1, 0),
            Slot::SouthWest => (0, -1),
            Slot::NorthWest => (-1, 0),
        }
    }
}

/// The neighbour of `coord` through `slot`.
#[inline]
pub fn neighbour(coord: OffsetCoord, slot: Slot) -> OffsetCoord {
    let offsets = if coord.row.rem_euclid(2) == 0 {
        &EVEN_ROW_OFFSETS
    } else {
        &ODD_ROW_OFFSETS
    };
    let (dr, dc) = offsets[slot.index()];
    OffsetCoord::new(coord.row + dr, coord.col + dc)
}

/// All four neighbours of `coord`, indexed by slot. May lie outside any
/// particular grid.
#[inline]
pub fn neighbours(coord: OffsetCoord) -> [OffsetCoord; 4] {
    Slot::ALL.map(|slot| neighbour(coord, slot))
}

/// Neighbours of `coord` that `grid` considers valid under `margin`.
pub fn in_bounds_neighbours<G: TileGrid + ?Sized>(
    grid: &G,
    coord: OffsetCoord,
    margin: i32,
) -> SmallVec<[(Slot, OffsetCoord); 4]> {
    let mut result = SmallVec::new();
    for slot in Slot::ALL {
        let n = neighbour(coord, slot);
        if grid.are_coords_valid(n, margin) {
            result.push((slot, n));
        }
    }
    result
}

/// The slot leading from `from` to `to`, if they are adjacent.
pub fn slot_between(from: OffsetCoord, to: OffsetCoord) -> Option<Slot> {
    Slot::ALL.into_iter().find(|&slot| neighbour(from, slot) == to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paver_core::{Tile, TileIndex, WorldCoord};
    use proptest::prelude::*;

    fn o(row: i32, col: i32) -> OffsetCoord {
        OffsetCoord::new(row, col)
    }

    struct Bounds(u32, u32);

    impl TileGrid for Bounds {
        fn width(&self) -> u32 {
            self.0
        }
        fn height(&self) -> u32 {
            self.1
        }
        fn tile(&self, _: TileIndex) -> Tile {
            Tile::default()
        }
    }

    #[test]
    fn even_row_neighbours() {
        assert_eq!(neighbours(o(4, 3)), [o(3, 3), o(5, 3), o(5, 2), o(3, 2)]);
    }

    #[test]
    fn odd_row_neighbours() {
        assert_eq!(neighbours(o(5, 3)), [o(4, 4), o(6, 4), o(6, 3), o(4, 3)]);
    }

    #[test]
    fn negative_rows_use_parity_not_sign() {
        // -1 is odd: same offsets as row 1.
        assert_eq!(neighbour(o(-1, 0), Slot::NorthEast), o(-2, 1));
    }

    #[test]
    fn opposite_is_two_round() {
        assert_eq!(Slot::NorthEast.opposite(), Slot::SouthWest);
        assert_eq!(Slot::SouthEast.opposite(), Slot::NorthWest);
        for slot in Slot::ALL {
            assert_eq!(slot.opposite().opposite(), slot);
            assert_eq!(Slot::from_index(slot.index()), Some(slot));
        }
        assert_eq!(Slot::from_index(4), None);
    }

    #[test]
    fn corner_has_one_in_bounds_neighbour() {
        let g = Bounds(10, 10);
        let n = in_bounds_neighbours(&g, o(0, 0), 0);
        assert_eq!(n.as_slice(), &[(Slot::SouthEast, o(1, 0))]);
        let interior = in_bounds_neighbours(&g, o(4, 4), 0);
        assert_eq!(interior.len(), 4);
    }

    #[test]
    fn slot_between_adjacent_and_not() {
        assert_eq!(slot_between(o(4, 3), o(5, 2)), Some(Slot::SouthWest));
        assert_eq!(slot_between(o(4, 3), o(6, 3)), None);
        assert_eq!(slot_between(o(4, 3), o(4, 3)), None);
    }

    proptest! {
        #[test]
        fn slots_are_unit_world_steps(row in -200i32..200, col in -200i32..200) {
            let c = o(row, col);
            let w = c.project();
            for slot in Slot::ALL {
                let (dr, dc) = slot.world_step();
                prop_assert_eq!(neighbour(c, slot).project(), WorldCoord::new(w.row + dr, w.col + dc));
            }
        }

        #[test]
        fn opposite_slot_returns_home(row in -200i32..200, col in -200i32..200) {
            let c = o(row, col);
            for slot in Slot::ALL {
                prop_assert_eq!(neighbour(neighbour(c, slot), slot.opposite()), c);
                prop_assert_eq!(slot_between(c, neighbour(c, slot)), Some(slot));
            }
        }
    }
}
