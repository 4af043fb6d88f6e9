//! Staging a path as road tiles.
//!
//! A path becomes a run of road tiles whose shapes follow from which of
//! each tile's four neighbours are its predecessor or successor on the
//! path. A tile that already holds a road keeps its existing arms, so
//! crossing or touching a road forms tees and crosses.

use paver_collections::{OpenMap, RingQueue};
use paver_core::{OffsetCoord, RoadMask, RoadShape, TileGrid, TileGridMut, TileIndex, TileKind};
use paver_space::neighbours;

use crate::config::RoadConfig;

/// One staged road tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoadTile {
    /// Where the tile goes.
    pub coords: OffsetCoord,
    /// The shape it will be given.
    pub shape: RoadShape,
}

/// Stages, previews and commits road tiles along a path.
///
/// Staging never touches the grid; [`commit`](Self::commit) writes
/// everything staged in one pass and [`rollback`](Self::rollback) drops
/// it.
#[derive(Clone, Debug)]
pub struct RoadBuilder {
    tiles: RingQueue<RoadTile>,
    by_index: OpenMap<TileIndex, RoadShape>,
}

impl RoadBuilder {
    /// A builder sized by `config.staging_capacity`.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero.
    pub fn new(config: &RoadConfig) -> Self {
        Self::with_capacity(config.staging_capacity)
    }

    /// A builder holding at most `capacity` staged tiles.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "RoadBuilder capacity must be positive");
        Self {
            tiles: RingQueue::new(capacity + 1),
            by_index: OpenMap::new(capacity),
        }
    }

    /// Maximum number of staged tiles.
    pub fn capacity(&self) -> usize {
        self.tiles.capacity()
    }

    /// Number of staged tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Staged tiles in path order.
    pub fn staged(&self) -> impl Iterator<Item = &RoadTile> + '_ {
        self.tiles.iter()
    }

    /// The staged shape for `index`, if that tile is staged.
    pub fn preview(&self, index: TileIndex) -> Option<RoadShape> {
        self.by_index.get(&index).copied()
    }

    /// Replace the staged tiles with road along `path`.
    ///
    /// Each tile's mask has a bit for the neighbour slots holding the
    /// previous and next path coordinates, merged with the mask of any
    /// road already on the tile. Coordinates outside `grid` are skipped.
    /// A path of one tile stages a [`RoadShape::Patch`] unless the tile
    /// already holds a road.
    ///
    /// # Panics
    ///
    /// Panics if `path` has more tiles than the builder's capacity.
    pub fn stage_path<G, P>(&mut self, grid: &G, path: P)
    where
        G: TileGrid + ?Sized,
        P: IntoIterator<Item = OffsetCoord>,
    {
        self.rollback();
        let mut path = path.into_iter().peekable();
        let mut prev: Option<OffsetCoord> = None;
        while let Some(coords) = path.next() {
            let next = path.peek().copied();
            if !grid.are_coords_valid(coords, 0) {
                log::debug!("staging skipped {coords}: outside the field");
                prev = Some(coords);
                continue;
            }
            let linked = neighbours(coords).map(|n| Some(n) == prev || Some(n) == next);
            let index = grid.tile_index(coords);
            let existing = grid.tile(index).kind.road_mask().unwrap_or(RoadMask::EMPTY);
            let shape = RoadShape::from_mask(RoadMask::from_slots(linked).union(existing));

            *self.tiles.push_back() = RoadTile { coords, shape };
            self.by_index.insert(index, shape);
            prev = Some(coords);
        }
    }

    /// Write every staged tile into `grid`, keeping each tile's occupant,
    /// and clear the staging. Returns the number of tiles written.
    pub fn commit<G: TileGridMut + ?Sized>(&mut self, grid: &mut G) -> usize {
        let written = self.tiles.len();
        for tile in self.tiles.iter() {
            let index = grid.tile_index(tile.coords);
            let occupant = grid.tile(index).occupant;
            grid.set_tile_kind(index, TileKind::Road(tile.shape), occupant);
        }
        log::debug!("committed {written} road tiles");
        self.rollback();
        written
    }

    /// Drop everything staged.
    pub fn rollback(&mut self) {
        self.tiles.clear();
        self.by_index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paver_core::OccupantId;
    use paver_test_utils::open_field;

    fn o(row: i32, col: i32) -> OffsetCoord {
        OffsetCoord::new(row, col)
    }

    // (0,0) -> (4,2) along +wrow, goal first as the search emits it.
    fn straight() -> Vec<OffsetCoord> {
        vec![o(4, 2), o(3, 1), o(2, 1), o(1, 0), o(0, 0)]
    }

    fn shapes(builder: &RoadBuilder) -> Vec<RoadShape> {
        builder.staged().map(|t| t.shape).collect()
    }

    #[test]
    fn straight_path_has_two_ends() {
        let field = open_field(10, 10);
        let mut b = RoadBuilder::new(&RoadConfig::default());
        b.stage_path(&field, straight());
        assert_eq!(
            shapes(&b),
            vec![
                RoadShape::EndNorthWest,
                RoadShape::StraightNwSe,
                RoadShape::StraightNwSe,
                RoadShape::StraightNwSe,
                RoadShape::EndSouthEast,
            ]
        );
    }

    #[test]
    fn bend_becomes_a_turn() {
        // (4,4) SE -> (5,4) NE -> (4,5)
        let field = open_field(10, 10);
        let mut b = RoadBuilder::with_capacity(8);
        b.stage_path(&field, [o(4, 5), o(5, 4), o(4, 4)]);
        assert_eq!(
            shapes(&b),
            vec![RoadShape::EndSouthWest, RoadShape::TurnNorth, RoadShape::EndSouthEast]
        );
    }

    #[test]
    fn single_tile_is_a_patch() {
        let field = open_field(4, 4);
        let mut b = RoadBuilder::with_capacity(4);
        b.stage_path(&field, [o(1, 1)]);
        assert_eq!(shapes(&b), vec![RoadShape::Patch]);
    }

    #[test]
    fn existing_road_arms_are_kept() {
        let mut field = open_field(10, 10);
        field
            .set(o(2, 1), TileKind::Road(RoadShape::StraightNeSw))
            .unwrap();
        let mut b = RoadBuilder::with_capacity(8);
        b.stage_path(&field, straight());
        assert_eq!(b.preview(field.tile_index(o(2, 1))), Some(RoadShape::Cross));
    }

    #[test]
    fn preview_only_covers_staged_tiles() {
        let field = open_field(10, 10);
        let mut b = RoadBuilder::with_capacity(8);
        b.stage_path(&field, straight());
        assert_eq!(
            b.preview(field.tile_index(o(0, 0))),
            Some(RoadShape::EndSouthEast)
        );
        assert_eq!(b.preview(field.tile_index(o(5, 5))), None);
        b.rollback();
        assert!(b.is_empty());
        assert_eq!(b.preview(field.tile_index(o(0, 0))), None);
    }

    #[test]
    fn restaging_replaces_the_previous_run() {
        let field = open_field(10, 10);
        let mut b = RoadBuilder::with_capacity(8);
        b.stage_path(&field, straight());
        b.stage_path(&field, [o(1, 0), o(0, 0)]);
        assert_eq!(b.len(), 2);
        assert_eq!(b.preview(field.tile_index(o(4, 2))), None);
    }

    #[test]
    fn out_of_field_neighbours_do_not_alias() {
        // (2,0)'s NW neighbour is (1,-1), which a row-major index would
        // confuse with (0,9).
        let field = open_field(10, 10);
        let mut b = RoadBuilder::with_capacity(8);
        b.stage_path(&field, [o(0, 9), o(2, 0)]);
        assert_eq!(shapes(&b), vec![RoadShape::Patch, RoadShape::Patch]);
    }

    #[test]
    fn commit_writes_and_clears() {
        let mut field = open_field(10, 10);
        let occupied = field.tile_index(o(2, 1));
        field.set_tile_kind(occupied, TileKind::Grass, Some(OccupantId(9)));
        let mut b = RoadBuilder::with_capacity(8);
        b.stage_path(&field, straight());
        assert_eq!(b.commit(&mut field), 5);
        assert!(b.is_empty());
        assert_eq!(
            field.kind_at(o(3, 1)),
            Some(TileKind::Road(RoadShape::StraightNwSe))
        );
        assert_eq!(field.tile(occupied).occupant, Some(OccupantId(9)));
        assert_eq!(field.count_where(|k| k.road_shape().is_some()), 5);
    }

    #[test]
    #[should_panic(expected = "RingQueue capacity exceeded")]
    fn overlong_path_panics() {
        let field = open_field(10, 10);
        let mut b = RoadBuilder::with_capacity(3);
        b.stage_path(&field, straight());
    }
}
