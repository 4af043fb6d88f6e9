//! Tile kinds, road shapes and the road adjacency mask tables.
//!
//! A road tile's shape is fully described by a 4-bit [`RoadMask`]: bit
//! `3 - slot` is set when the neighbour in that slot is connected. Slots
//! are the four edge-adjacent neighbours of a diamond tile, in screen terms
//! north-east (0), south-east (1), south-west (2) and north-west (3).
//! [`RoadShape`] and [`RoadMask`] are in bijection through two `const`
//! tables, so classifying a tile and reading its connectivity back are both
//! plain lookups.

use std::fmt;

use crate::id::OccupantId;

/// Connectivity bits of a road tile.
///
/// `0b1000` is slot 0 (north-east) and `0b0001` slot 3 (north-west).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RoadMask(pub u8);

impl RoadMask {
    /// No connections.
    pub const EMPTY: RoadMask = RoadMask(0);
    /// All four connections.
    pub const FULL: RoadMask = RoadMask(0b1111);

    /// The single bit for neighbour `slot` (0..4).
    ///
    /// # Panics
    ///
    /// Panics if `slot >= 4`.
    pub const fn slot(slot: usize) -> RoadMask {
        assert!(slot < 4, "road mask slot out of range");
        RoadMask(1 << (3 - slot))
    }

    /// Build a mask from per-slot connection flags.
    pub fn from_slots(connected: [bool; 4]) -> RoadMask {
        let mut bits = 0u8;
        for (slot, &on) in connected.iter().enumerate() {
            if on {
                bits |= 1 << (3 - slot);
            }
        }
        RoadMask(bits)
    }

    /// Whether the neighbour in `slot` is connected.
    pub fn has_slot(self, slot: usize) -> bool {
        slot < 4 && self.0 & (1 << (3 - slot)) != 0
    }

    /// Number of connected neighbours.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Keep only the bits also present in `filter`.
    pub fn filtered(self, filter: RoadMask) -> RoadMask {
        RoadMask(self.0 & filter.0 & 0b1111)
    }

    /// Union of two masks.
    pub fn union(self, other: RoadMask) -> RoadMask {
        RoadMask((self.0 | other.0) & 0b1111)
    }
}

impl fmt::Display for RoadMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

/// Renderable shape of a road tile.
///
/// Dead ends are named after their single open arm, turns after the corner
/// they point to, tees after their closed side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoadShape {
    /// Isolated road tile with no connections.
    #[default]
    Patch,
    /// Dead end opening to the north-west.
    EndNorthWest,
    /// Dead end opening to the south-west.
    EndSouthWest,
    /// Dead end opening to the south-east.
    EndSouthEast,
    /// Dead end opening to the north-east.
    EndNorthEast,
    /// Straight segment running north-west to south-east.
    StraightNwSe,
    /// Straight segment running north-east to south-west.
    StraightNeSw,
    /// Turn joining south-west and north-west.
    TurnWest,
    /// Turn joining north-east and south-east.
    TurnEast,
    /// Turn joining north-east and north-west.
    TurnNorth,
    /// Turn joining south-east and south-west.
    TurnSouth,
    /// Junction open everywhere but south-east.
    TeeClosedSouthEast,
    /// Junction open everywhere but south-west.
    TeeClosedSouthWest,
    /// Junction open everywhere but north-east.
    TeeClosedNorthEast,
    /// Junction open everywhere but north-west.
    TeeClosedNorthWest,
    /// Four-way crossing.
    Cross,
}

/// Shape for every mask value, indexed by the mask.
const SHAPES_BY_MASK: [RoadShape; 16] = [
    RoadShape::Patch,              // 0000
    RoadShape::EndNorthWest,       // 0001
    RoadShape::EndSouthWest,       // 0010
    RoadShape::TurnWest,           // 0011
    RoadShape::EndSouthEast,       // 0100
    RoadShape::StraightNwSe,       // 0101
    RoadShape::TurnSouth,          // 0110
    RoadShape::TeeClosedNorthEast, // 0111
    RoadShape::EndNorthEast,       // 1000
    RoadShape::TurnNorth,          // 1001
    RoadShape::StraightNeSw,       // 1010
    RoadShape::TeeClosedSouthEast, // 1011
    RoadShape::TurnEast,           // 1100
    RoadShape::TeeClosedSouthWest, // 1101
    RoadShape::TeeClosedNorthWest, // 1110
    RoadShape::Cross,              // 1111
];

impl RoadShape {
    /// Every shape, in mask order.
    pub const ALL: [RoadShape; 16] = SHAPES_BY_MASK;

    /// Shape for a connectivity mask. Bits above the low four are ignored.
    pub const fn from_mask(mask: RoadMask) -> RoadShape {
        SHAPES_BY_MASK[(mask.0 & 0b1111) as usize]
    }

    /// Connectivity mask of this shape.
    pub const fn mask(self) -> RoadMask {
        RoadMask(match self {
            Self::Patch => 0b0000,
            Self::EndNorthWest => 0b0001,
            Self::EndSouthWest => 0b0010,
            Self::TurnWest => 0b0011,
            Self::EndSouthEast => 0b0100,
            Self::StraightNwSe => 0b0101,
            Self::TurnSouth => 0b0110,
            Self::TeeClosedNorthEast => 0b0111,
            Self::EndNorthEast => 0b1000,
            Self::TurnNorth => 0b1001,
            Self::StraightNeSw => 0b1010,
            Self::TeeClosedSouthEast => 0b1011,
            Self::TurnEast => 0b1100,
            Self::TeeClosedSouthWest => 0b1101,
            Self::TeeClosedNorthWest => 0b1110,
            Self::Cross => 0b1111,
        })
    }

    /// Stable sprite tag for renderers.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Patch => "road_patch",
            Self::EndNorthWest => "road_end_nw",
            Self::EndSouthWest => "road_end_sw",
            Self::EndSouthEast => "road_end_se",
            Self::EndNorthEast => "road_end_ne",
            Self::StraightNwSe => "road_straight_nw_se",
            Self::StraightNeSw => "road_straight_ne_sw",
            Self::TurnWest => "road_turn_w",
            Self::TurnEast => "road_turn_e",
            Self::TurnNorth => "road_turn_n",
            Self::TurnSouth => "road_turn_s",
            Self::TeeClosedSouthEast => "road_tee_closed_se",
            Self::TeeClosedSouthWest => "road_tee_closed_sw",
            Self::TeeClosedNorthEast => "road_tee_closed_ne",
            Self::TeeClosedNorthWest => "road_tee_closed_nw",
            Self::Cross => "road_cross",
        }
    }

    /// Whether this is a dead end.
    pub fn is_end(self) -> bool {
        self.mask().count() == 1
    }

    /// Whether this is a straight segment.
    pub fn is_straight(self) -> bool {
        matches!(self, Self::StraightNwSe | Self::StraightNeSw)
    }
}

impl fmt::Display for RoadShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What occupies a tile, as far as the engine is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Base terrain.
    #[default]
    Grass,
    /// Never traversable.
    Water,
    /// A road of the given shape.
    Road(RoadShape),
    /// Caller-defined content (farms, buildings, ...). Traversable unless
    /// the caller's walkability predicate says otherwise.
    Custom(u16),
}

impl TileKind {
    /// Default walkability: everything but water.
    pub fn is_traversable(self) -> bool {
        !matches!(self, Self::Water)
    }

    /// The road shape, if this tile is a road.
    pub fn road_shape(self) -> Option<RoadShape> {
        match self {
            Self::Road(shape) => Some(shape),
            _ => None,
        }
    }

    /// The stored road mask, if this tile is a road.
    pub fn road_mask(self) -> Option<RoadMask> {
        self.road_shape().map(RoadShape::mask)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grass => f.write_str("grass"),
            Self::Water => f.write_str("water"),
            Self::Road(shape) => write!(f, "{shape}"),
            Self::Custom(tag) => write!(f, "custom:{tag}"),
        }
    }
}

/// The engine's view of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    /// What the tile is.
    pub kind: TileKind,
    /// The caller's occupant, if any.
    pub occupant: Option<OccupantId>,
}

impl Tile {
    /// A tile of the given kind with no occupant.
    pub const fn of(kind: TileKind) -> Self {
        Self {
            kind,
            occupant: None,
        }
    }
}
