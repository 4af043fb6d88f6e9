//! Pointer-agnostic editing tools.
//!
//! A tool is a small state machine fed [`ToolEvent`]s. The caller maps
//! its own input (mouse, touch, replay) to events, picking tiles with
//! [`pick_tile`](paver_space::pick_tile) first.

use paver_collections::RingQueue;
use paver_core::{OffsetCoord, RoadShape, TileGridMut, TileIndex, WorldRect};
use paver_path::{PathFinder, SearchConfig, SearchOutcome};

use crate::builder::{RoadBuilder, RoadTile};
use crate::config::{RoadConfig, RoadConfigError};
use crate::deletion::{delete_region, DeletionReport};

/// One input to a tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolEvent {
    /// The pointer is over this tile.
    Hover(OffsetCoord),
    /// The primary button went down.
    Press,
    /// The primary button went up. Also fills unused queue slots.
    #[default]
    Release,
}

/// A state machine that edits a grid in response to events.
pub trait Tool {
    /// Feed one event.
    fn handle<G: TileGridMut + ?Sized>(&mut self, grid: &mut G, event: ToolEvent);

    /// Abandon the current gesture without touching the grid.
    fn cancel(&mut self);

    /// Whether a gesture is in progress.
    fn is_active(&self) -> bool;

    /// The tile last hovered.
    fn cursor(&self) -> OffsetCoord;
}

// ── RoadTool ───────────────────────────────────────────────────────

/// Drag to lay a road.
///
/// Press anchors the origin at the cursor. While dragging, every newly
/// hovered tile re-runs the search from the origin and restages the road.
/// Release commits the staged road.
#[derive(Clone, Debug)]
pub struct RoadTool {
    finder: PathFinder,
    builder: RoadBuilder,
    path: RingQueue<OffsetCoord>,
    origin: OffsetCoord,
    cursor: OffsetCoord,
    building: bool,
    last_outcome: Option<SearchOutcome>,
}

impl RoadTool {
    /// Build a tool whose staging can hold every path the search returns.
    pub fn new(search: SearchConfig, road: &RoadConfig) -> Result<Self, RoadConfigError> {
        road.validate()?;
        let finder = PathFinder::new(search)?;
        if road.staging_capacity < search.node_capacity {
            return Err(RoadConfigError::StagingTooSmall {
                staging: road.staging_capacity,
                path: search.node_capacity,
            });
        }
        Ok(Self {
            path: finder.output_queue(),
            builder: RoadBuilder::new(road),
            finder,
            origin: OffsetCoord::default(),
            cursor: OffsetCoord::default(),
            building: false,
            last_outcome: None,
        })
    }

    /// Where the current drag started.
    pub fn origin(&self) -> OffsetCoord {
        self.origin
    }

    /// The staged shape for `index` while dragging.
    pub fn preview(&self, index: TileIndex) -> Option<RoadShape> {
        if self.building {
            self.builder.preview(index)
        } else {
            None
        }
    }

    /// Staged tiles in path order (goal first).
    pub fn staged(&self) -> impl Iterator<Item = &RoadTile> + '_ {
        self.builder.staged()
    }

    /// Outcome of the most recent search, if any ran.
    pub fn last_outcome(&self) -> Option<SearchOutcome> {
        self.last_outcome
    }

    fn restage<G: TileGridMut + ?Sized>(&mut self, grid: &G) {
        let outcome = self
            .finder
            .find_shortest_path(&mut self.path, grid, self.origin, self.cursor);
        self.last_outcome = Some(outcome);
        self.builder.stage_path(grid, self.path.iter().copied());
    }
}

impl Tool for RoadTool {
    fn handle<G: TileGridMut + ?Sized>(&mut self, grid: &mut G, event: ToolEvent) {
        match event {
            ToolEvent::Hover(coord) => {
                if self.building && coord != self.cursor {
                    self.cursor = coord;
                    self.restage(&*grid);
                } else {
                    self.cursor = coord;
                }
            }
            ToolEvent::Press => {
                self.building = true;
                self.origin = self.cursor;
                self.restage(&*grid);
            }
            ToolEvent::Release => {
                if !self.building {
                    return;
                }
                self.building = false;
                self.builder.commit(grid);
            }
        }
    }

    fn cancel(&mut self) {
        self.building = false;
        self.builder.rollback();
    }

    fn is_active(&self) -> bool {
        self.building
    }

    fn cursor(&self) -> OffsetCoord {
        self.cursor
    }
}

// ── Bulldozer ──────────────────────────────────────────────────────

/// Drag a world-space rectangle to delete roads.
///
/// Press anchors a corner at the cursor; hovering moves the opposite
/// corner; release deletes the selection and repairs the roads around it.
#[derive(Clone, Debug)]
pub struct Bulldozer {
    config: RoadConfig,
    anchor: OffsetCoord,
    cursor: OffsetCoord,
    selection: Option<WorldRect>,
    last_report: Option<DeletionReport>,
}

impl Bulldozer {
    /// Build a bulldozer using `config`'s base terrain and margin.
    pub fn new(config: RoadConfig) -> Result<Self, RoadConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            anchor: OffsetCoord::default(),
            cursor: OffsetCoord::default(),
            selection: None,
            last_report: None,
        })
    }

    /// The rectangle that release would delete, while dragging.
    pub fn selection(&self) -> Option<WorldRect> {
        self.selection
    }

    /// What the most recent deletion changed.
    pub fn last_report(&self) -> Option<DeletionReport> {
        self.last_report
    }
}

impl Tool for Bulldozer {
    fn handle<G: TileGridMut + ?Sized>(&mut self, grid: &mut G, event: ToolEvent) {
        match event {
            ToolEvent::Hover(coord) => {
                self.cursor = coord;
                if self.selection.is_some() {
                    self.selection = Some(WorldRect::from_corners(self.anchor, coord));
                }
            }
            ToolEvent::Press => {
                self.anchor = self.cursor;
                self.selection = Some(WorldRect::from_corners(self.anchor, self.anchor));
            }
            ToolEvent::Release => {
                if let Some(region) = self.selection.take() {
                    self.last_report = Some(delete_region(grid, region, &self.config));
                }
            }
        }
    }

    fn cancel(&mut self) {
        self.selection = None;
    }

    fn is_active(&self) -> bool {
        self.selection.is_some()
    }

    fn cursor(&self) -> OffsetCoord {
        self.cursor
    }
}
