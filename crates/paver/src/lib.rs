//! Paver: deterministic, allocation-free tile pathfinding and road
//! placement for staggered isometric grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Paver sub-crates. For most users, adding `paver` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use paver::prelude::*;
//!
//! // A 10x10 grass field with a lake tile in the way.
//! let mut field = TileField::new(10, 10).unwrap();
//! field.set(OffsetCoord::new(3, 1), TileKind::Water).unwrap();
//!
//! // Drag a road from (0, 0) to (6, 3).
//! let mut roads = RoadTool::new(SearchConfig::default(), &RoadConfig::default()).unwrap();
//! for event in [
//!     ToolEvent::Hover(OffsetCoord::new(0, 0)),
//!     ToolEvent::Press,
//!     ToolEvent::Hover(OffsetCoord::new(6, 3)),
//!     ToolEvent::Release,
//! ] {
//!     roads.handle(&mut field, event);
//! }
//!
//! assert!(roads.last_outcome().is_some_and(|outcome| outcome.is_found()));
//! assert!(field.kind_at(OffsetCoord::new(6, 3)).is_some_and(|k| k.road_shape().is_some()));
//! assert_eq!(field.kind_at(OffsetCoord::new(3, 1)), Some(TileKind::Water));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `paver-core` | Coordinates, tiles, road masks, the grid contract |
//! | [`collections`] | `paver-collections` | Fixed-capacity ring, map, set and heap |
//! | [`space`] | `paver-space` | Slot topology, `TileField`, screen picking |
//! | [`path`] | `paver-path` | Turn-cost A* search |
//! | [`road`] | `paver-road` | Road staging, deletion and input tools |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the grid contract (`paver-core`).
///
/// Contains [`types::OffsetCoord`] and [`types::WorldCoord`] with the
/// projection between them, [`types::TileKind`] and the road-shape tables,
/// and the [`types::TileGrid`] / [`types::TileGridMut`] traits a caller's
/// storage implements.
pub use paver_core as types;

/// Fixed-capacity containers (`paver-collections`).
///
/// [`collections::RingQueue`], [`collections::OpenMap`],
/// [`collections::OpenSet`] and [`collections::MinHeap`] allocate once at
/// construction and clear in O(1).
pub use paver_collections as collections;

/// Tile topology, storage and picking (`paver-space`).
///
/// Provides [`space::Slot`] and the neighbour functions,
/// [`space::TileField`], and [`space::pick_tile`].
pub use paver_space as space;

/// Shortest-path search (`paver-path`).
///
/// [`path::PathFinder`] with the [`path::SearchConfig`] cost model.
pub use paver_path as path;

/// Road staging, deletion and tools (`paver-road`).
///
/// [`road::RoadBuilder`], [`road::delete_region`], and the
/// [`road::RoadTool`] / [`road::Bulldozer`] pair behind [`road::Tool`].
pub use paver_road as road;

/// Common imports for typical Paver usage.
///
/// ```rust
/// use paver::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use paver_core::{
        OffsetCoord, RoadMask, RoadShape, Tile, TileGrid, TileGridMut, TileIndex, TileKind,
        WorldCoord, WorldRect,
    };

    // Space
    pub use paver_space::{pick_tile, tile_center, ScreenPoint, Slot, TileField, TileMetrics};

    // Search
    pub use paver_path::{PathFinder, SearchConfig, SearchOutcome, TurnCosts};

    // Roads
    pub use paver_road::{
        Bulldozer, DeletionReport, EventInbox, RoadBuilder, RoadConfig, RoadTool, Tool, ToolEvent,
    };
}
