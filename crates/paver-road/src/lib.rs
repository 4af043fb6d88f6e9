//! Roads for the Paver tile-path engine.
//!
//! - [`RoadBuilder`] turns a path into staged road tiles, classifying each
//!   by the [`RoadMask`](paver_core::RoadMask) of its path neighbours and
//!   merging with roads already on the grid.
//! - [`delete_region`] clears a world-space rectangle and
//!   [`resolve_deletion_edges`] trims the roads that pointed into it.
//! - [`RoadTool`] and [`Bulldozer`] wrap both behind the [`Tool`] event
//!   interface; [`EventInbox`] buffers events between frames.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod deletion;
pub mod inbox;
pub mod tool;

pub use builder::{RoadBuilder, RoadTile};
pub use config::{RoadConfig, RoadConfigError};
pub use deletion::{clear_region, delete_region, resolve_deletion_edges, DeletionReport};
pub use inbox::EventInbox;
pub use tool::{Bulldozer, RoadTool, Tool, ToolEvent};
