//! Rectangular road deletion.
//!
//! A deletion covers an inclusive world-space rectangle. Roads inside it
//! revert to the base terrain; roads in the four strips just outside keep
//! their shape minus the arm that pointed into the rectangle:
//!
//! ```text
//!            row min-1: drop +wrow (SE)
//!           +-----------+
//! col min-1 |  cleared  | col max+1
//! drop +wcol|           | drop -wcol
//!   (NE)    +-----------+   (SW)
//!            row max+1: drop -wrow (NW)
//! ```
//!
//! Tiles closer to the field border than
//! [`edge_margin`](RoadConfig::edge_margin) are never touched.

use paver_core::{RoadMask, RoadShape, TileGridMut, TileKind, WorldCoord, WorldRect};

use crate::config::RoadConfig;

/// Arms kept by tiles in the strip above the rectangle.
pub const FILTER_ABOVE: RoadMask = RoadMask(0b1011);
/// Arms kept by tiles in the strip below the rectangle.
pub const FILTER_BELOW: RoadMask = RoadMask(0b1110);
/// Arms kept by tiles in the strip left of the rectangle.
pub const FILTER_LEFT: RoadMask = RoadMask(0b0111);
/// Arms kept by tiles in the strip right of the rectangle.
pub const FILTER_RIGHT: RoadMask = RoadMask(0b1101);

/// What a deletion changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeletionReport {
    /// Road tiles inside the rectangle reverted to base terrain.
    pub cleared: usize,
    /// Road tiles outside the rectangle whose shape changed.
    pub reshaped: usize,
}

impl DeletionReport {
    /// Whether the deletion touched no road at all.
    pub fn is_noop(&self) -> bool {
        self.cleared == 0 && self.reshaped == 0
    }
}

/// Clear `region` and then repair the roads around it.
pub fn delete_region<G: TileGridMut + ?Sized>(
    grid: &mut G,
    region: WorldRect,
    config: &RoadConfig,
) -> DeletionReport {
    let report = DeletionReport {
        cleared: clear_region(grid, region, config),
        reshaped: resolve_deletion_edges(grid, region, config),
    };
    log::debug!(
        "deleted world {}..{}: {} cleared, {} reshaped",
        region.min,
        region.max,
        report.cleared,
        report.reshaped
    );
    report
}

/// Revert every road tile inside `region` to the base terrain. Returns
/// the number of tiles reverted.
pub fn clear_region<G: TileGridMut + ?Sized>(
    grid: &mut G,
    region: WorldRect,
    config: &RoadConfig,
) -> usize {
    let mut cleared = 0;
    for world in region.iter() {
        let coord = world.unproject();
        if !grid.are_coords_valid(coord, config.edge_margin) {
            continue;
        }
        let index = grid.tile_index(coord);
        let tile = grid.tile(index);
        if tile.kind.road_shape().is_some() {
            grid.set_tile_kind(index, config.base_terrain, tile.occupant);
            cleared += 1;
        }
    }
    cleared
}

/// Drop the arms pointing into `region` from the roads bordering it.
///
/// A road left with no arms reverts to the base terrain. Returns the
/// number of tiles whose kind changed.
pub fn resolve_deletion_edges<G: TileGridMut + ?Sized>(
    grid: &mut G,
    region: WorldRect,
    config: &RoadConfig,
) -> usize {
    let WorldRect { min, max } = region;
    let mut reshaped = 0;
    for col in min.col..=max.col {
        reshaped += trim_edge(grid, WorldCoord::new(min.row - 1, col), FILTER_ABOVE, config);
        reshaped += trim_edge(grid, WorldCoord::new(max.row + 1, col), FILTER_BELOW, config);
    }
    for row in min.row..=max.row {
        reshaped += trim_edge(grid, WorldCoord::new(row, min.col - 1), FILTER_LEFT, config);
        reshaped += trim_edge(grid, WorldCoord::new(row, max.col + 1), FILTER_RIGHT, config);
    }
    reshaped
}

fn trim_edge<G: TileGridMut + ?Sized>(
    grid: &mut G,
    world: WorldCoord,
    filter: RoadMask,
    config: &RoadConfig,
) -> usize {
    let coord = world.unproject();
    if !grid.are_coords_valid(coord, config.edge_margin) {
        return 0;
    }
    let index = grid.tile_index(coord);
    let tile = grid.tile(index);
    let Some(mask) = tile.kind.road_mask() else {
        return 0;
    };
    let trimmed = mask.filtered(filter);
    let kind = if trimmed == RoadMask::EMPTY {
        config.base_terrain
    } else {
        TileKind::Road(RoadShape::from_mask(trimmed))
    };
    if kind == tile.kind {
        return 0;
    }
    grid.set_tile_kind(index, kind, tile.occupant);
    1
}
