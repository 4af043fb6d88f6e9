//! Core types and traits for the Paver tile-path engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: offset and
//! world coordinates, tile identifiers, the closed [`TileKind`] enum with
//! its road-shape mask tables, and the [`TileGrid`] contract through which
//! the engine reads and mutates the caller's tile storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod id;
pub mod tile;
pub mod traits;

pub use coord::{OffsetCoord, WorldCoord, WorldRect};
pub use id::{OccupantId, TileIndex};
pub use tile::{RoadMask, RoadShape, Tile, TileKind};
pub use traits::{TileGrid, TileGridMut};
