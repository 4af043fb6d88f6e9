//! Spatial layer for the Paver tile-path engine.
//!
//! # Topology
//!
//! Tiles are diamonds on a staggered grid. Each tile has four
//! edge-adjacent neighbours, addressed by [`Slot`]. The offset of a slot
//! depends on row parity; in world space every slot is a unit step along
//! one axis (see [`Slot::world_step`]).
//!
//! # Storage
//!
//! [`TileField`] is a dense `Vec<Tile>` implementing the
//! [`TileGrid`](paver_core::TileGrid) contract, for callers that have no
//! grid of their own and for tests.
//!
//! # Picking
//!
//! [`pick_tile`] maps a field-relative screen point to the diamond under
//! it; [`tile_center`] is its inverse for tile centres.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod screen;
pub mod topology;

pub use error::FieldError;
pub use field::TileField;
pub use screen::{pick_tile, tile_center, ScreenPoint, TileMetrics};
pub use topology::{in_bounds_neighbours, neighbour, neighbours, slot_between, Slot};
