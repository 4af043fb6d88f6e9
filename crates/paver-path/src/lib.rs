//! Shortest-path search for the Paver tile-path engine.
//!
//! [`PathFinder`] runs A* over the caller's [`TileGrid`](paver_core::TileGrid)
//! with a cost model that penalises turns, so roads come out straight
//! where they can. All scratch storage is allocated once in
//! [`PathFinder::new`] and reused by every search.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod finder;

pub use config::{ConfigError, SearchConfig, TurnCosts};
pub use finder::{NodeRecord, PathFinder, SearchOutcome};
