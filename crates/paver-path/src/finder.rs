//! Turn-cost A* over a staggered tile grid.
//!
//! # Cost model
//!
//! A search node is a tile together with the slot it was entered through,
//! so two arrivals at one tile with different headings are kept apart and
//! the cheaper finish is never hidden behind the cheaper arrival. A step
//! through slot `i` from a tile entered through `d` makes turn
//! `(4 + d - i) mod 4`; the step cost comes from [`TurnCosts`](crate::TurnCosts) and
//! reversals are never expanded. The heuristic is the world-space
//! Manhattan distance scaled by
//! [`heuristic_scale`](SearchConfig::heuristic_scale).
//!
//! # Bounded work
//!
//! The node map has `node_capacity` slots and the open heap
//! `4 * node_capacity`. A search that would need more stops with
//! [`SearchOutcome::Exhausted`] and an empty output.
//!
//! # Open set
//!
//! Heap entries are never updated in place. A node whose score improves
//! is pushed again with its new key; membership in the pending set tells
//! live entries from superseded ones when they surface.

use paver_collections::{MinHeap, OpenMap, OpenSet, RingQueue};
use paver_core::{OffsetCoord, TileGrid, TileIndex, TileKind};
use paver_space::{neighbour, Slot};

use crate::config::{ConfigError, SearchConfig};

/// What the search knows about one tile entered through one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeRecord {
    /// Tile this one was reached from. The start is its own predecessor.
    pub predecessor: OffsetCoord,
    /// Slot the predecessor was itself entered through.
    pub predecessor_direction: Option<Slot>,
    /// Cost of the best known route from the start.
    pub score: f32,
    /// Slot of the step that entered this tile; `None` at the start.
    pub direction: Option<Slot>,
}

/// Headings a tile can be recorded under; `None` is the start.
const HEADINGS: [Option<Slot>; 5] = [
    Some(Slot::NorthEast),
    Some(Slot::SouthEast),
    Some(Slot::SouthWest),
    Some(Slot::NorthWest),
    None,
];

/// An open-list entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SearchNode {
    coord: OffsetCoord,
    direction: Option<Slot>,
}

/// Node-map key: five per tile, the last one for the start.
fn node_key(index: TileIndex, direction: Option<Slot>) -> u64 {
    u64::from(index.0) * 5 + direction.map_or(4, |slot| slot.index() as u64)
}

/// Result of one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A path was written to the output, goal first.
    Found {
        /// Number of coordinates in the path.
        len: usize,
    },
    /// The start tile is out of bounds or not walkable.
    StartBlocked,
    /// Every reachable tile was explored without meeting the goal, or the
    /// goal itself is out of bounds or not walkable.
    Unreachable,
    /// The search needed to record a new node while the node map was
    /// full, or to queue one while the open heap was full. A full node map
    /// alone does not stop the search: nodes already recorded keep being
    /// expanded and improved until a new one is needed.
    Exhausted,
}

impl SearchOutcome {
    /// Whether a path was found.
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Reusable A* engine.
///
/// Owns its scratch structures; each call to
/// [`find_shortest_path`](Self::find_shortest_path) clears them in O(1)
/// and never allocates.
///
/// # Examples
///
/// ```
/// use paver_core::OffsetCoord;
/// use paver_path::{PathFinder, SearchConfig};
/// use paver_space::TileField;
///
/// let field = TileField::new(10, 10).unwrap();
/// let mut finder = PathFinder::new(SearchConfig::default()).unwrap();
/// let mut path = finder.output_queue();
/// let outcome = finder.find_shortest_path(
///     &mut path,
///     &field,
///     OffsetCoord::new(0, 0),
///     OffsetCoord::new(4, 2),
/// );
/// assert!(outcome.is_found());
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.front(), Some(&OffsetCoord::new(4, 2)));
/// ```
#[derive(Clone, Debug)]
pub struct PathFinder {
    config: SearchConfig,
    nodes: OpenMap<u64, NodeRecord>,
    open: MinHeap<SearchNode>,
    pending: OpenSet<u64>,
}

impl PathFinder {
    /// Validate `config` and allocate scratch storage for it.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            nodes: OpenMap::new(config.node_capacity),
            open: MinHeap::new(config.open_capacity()),
            pending: OpenSet::new(config.node_capacity),
            config,
        })
    }

    /// The configuration this finder was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// An empty queue large enough for any path this finder returns.
    pub fn output_queue(&self) -> RingQueue<OffsetCoord> {
        RingQueue::new(self.config.path_capacity())
    }

    /// Cheapest record for `index` left by the last search, over every
    /// slot the tile was entered through, if it was reached.
    pub fn record(&self, index: TileIndex) -> Option<&NodeRecord> {
        HEADINGS
            .iter()
            .filter_map(|&direction| self.nodes.get(&node_key(index, direction)))
            .min_by(|a, b| a.score.total_cmp(&b.score))
    }

    /// Record for `index` entered through `direction` (`None` for the
    /// start), if the last search reached it that way.
    pub fn record_via(&self, index: TileIndex, direction: Option<Slot>) -> Option<&NodeRecord> {
        self.nodes.get(&node_key(index, direction))
    }

    /// Number of nodes the last search recorded.
    pub fn recorded(&self) -> usize {
        self.nodes.len()
    }

    /// Search from `from` to `to` over tiles that are
    /// [traversable](TileKind::is_traversable).
    ///
    /// See [`find_shortest_path_by`](Self::find_shortest_path_by).
    pub fn find_shortest_path<G: TileGrid + ?Sized>(
        &mut self,
        output: &mut RingQueue<OffsetCoord>,
        grid: &G,
        from: OffsetCoord,
        to: OffsetCoord,
    ) -> SearchOutcome {
        self.find_shortest_path_by(output, grid, from, to, TileKind::is_traversable)
    }

    /// Search from `from` to `to` over tiles whose kind satisfies `walkable`.
    ///
    /// `output` is cleared first. On success it holds the path goal first,
    /// start last; otherwise it stays empty.
    ///
    /// # Panics
    ///
    /// Panics if `output` holds fewer than `node_capacity` values.
    pub fn find_shortest_path_by<G, F>(
        &mut self,
        output: &mut RingQueue<OffsetCoord>,
        grid: &G,
        from: OffsetCoord,
        to: OffsetCoord,
        walkable: F,
    ) -> SearchOutcome
    where
        G: TileGrid + ?Sized,
        F: Fn(TileKind) -> bool,
    {
        assert!(
            output.capacity() >= self.config.node_capacity,
            "path output holds {} values, need {}",
            output.capacity(),
            self.config.node_capacity
        );
        output.clear();
        self.nodes.clear();
        self.open.clear();
        self.pending.clear();

        let passable = |coord: OffsetCoord| {
            grid.are_coords_valid(coord, 0) && walkable(grid.tile(grid.tile_index(coord)).kind)
        };
        if !passable(from) {
            log::trace!("search start {from} is not walkable");
            return SearchOutcome::StartBlocked;
        }
        if !passable(to) {
            log::trace!("search goal {to} is not walkable");
            return SearchOutcome::Unreachable;
        }

        let goal = to.project();
        let scale = self.config.heuristic_scale;
        let heuristic = |coord: OffsetCoord| scale * coord.project().manhattan(goal) as f32;

        let start = node_key(grid.tile_index(from), None);
        self.nodes.insert(
            start,
            NodeRecord {
                predecessor: from,
                predecessor_direction: None,
                score: 0.0,
                direction: None,
            },
        );
        *self.open.push(heuristic(from)) = SearchNode {
            coord: from,
            direction: None,
        };
        self.pending.insert(start);

        while let Some((_, current)) = self.open.take() {
            let current_key = node_key(grid.tile_index(current.coord), current.direction);
            if !self.pending.remove(&current_key) {
                continue;
            }
            if current.coord == to {
                return self.reconstruct(output, grid, from, current);
            }
            let Some(&record) = self.nodes.get(&current_key) else {
                continue;
            };

            for slot in Slot::ALL {
                let turn = current
                    .direction
                    .map_or(0, |d| (4 + d.index() - slot.index()) % 4);
                let Some(step) = self.config.costs.for_turn(turn) else {
                    continue;
                };
                let next = neighbour(current.coord, slot);
                if !passable(next) {
                    continue;
                }
                let next_key = node_key(grid.tile_index(next), Some(slot));
                let score = record.score + step;
                let candidate = NodeRecord {
                    predecessor: current.coord,
                    predecessor_direction: current.direction,
                    score,
                    direction: Some(slot),
                };
                if let Some(existing) = self.nodes.get_mut(&next_key) {
                    if score >= existing.score {
                        continue;
                    }
                    *existing = candidate;
                } else if self.nodes.is_full() {
                    log::debug!(
                        "search {from} -> {to} stopped: node map full ({} nodes)",
                        self.nodes.capacity()
                    );
                    return SearchOutcome::Exhausted;
                } else {
                    self.nodes.insert(next_key, candidate);
                }
                if self.open.is_full() {
                    log::debug!(
                        "search {from} -> {to} stopped: open heap full ({} entries)",
                        self.open.capacity()
                    );
                    return SearchOutcome::Exhausted;
                }
                *self.open.push(score + heuristic(next)) = SearchNode {
                    coord: next,
                    direction: Some(slot),
                };
                self.pending.insert(next_key);
            }
        }

        log::trace!(
            "search {from} -> {to} found no path after {} nodes",
            self.nodes.len()
        );
        SearchOutcome::Unreachable
    }

    fn reconstruct<G: TileGrid + ?Sized>(
        &self,
        output: &mut RingQueue<OffsetCoord>,
        grid: &G,
        from: OffsetCoord,
        goal: SearchNode,
    ) -> SearchOutcome {
        let to = goal.coord;
        let mut at = goal;
        loop {
            output.push_back_value(at.coord);
            if at.direction.is_none() {
                break;
            }
            match self.nodes.get(&node_key(grid.tile_index(at.coord), at.direction)) {
                Some(record) => {
                    at = SearchNode {
                        coord: record.predecessor,
                        direction: record.predecessor_direction,
                    }
                }
                None => {
                    output.clear();
                    return SearchOutcome::Unreachable;
                }
            }
        }
        log::trace!(
            "search {from} -> {to} found {} tiles, recorded {} nodes",
            output.len(),
            self.nodes.len()
        );
        SearchOutcome::Found { len: output.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paver_core::WorldCoord;
    use paver_test_utils::{
        assert_valid_path, count_turns, field_from_ascii, open_field, walk_slots,
    };

    fn o(row: i32, col: i32) -> OffsetCoord {
        OffsetCoord::new(row, col)
    }

    fn finder() -> PathFinder {
        PathFinder::new(SearchConfig::default()).unwrap()
    }

    fn search<G: TileGrid>(
        grid: &G,
        from: OffsetCoord,
        to: OffsetCoord,
    ) -> (SearchOutcome, Vec<OffsetCoord>) {
        let mut f = finder();
        let mut out = f.output_queue();
        let outcome = f.find_shortest_path(&mut out, grid, from, to);
        (outcome, out.iter().copied().collect())
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SearchConfig {
            node_capacity: 0,
            ..SearchConfig::default()
        };
        assert_eq!(PathFinder::new(cfg).unwrap_err(), ConfigError::ZeroCapacity);
    }

    #[test]
    fn start_equals_goal_is_one_tile() {
        let field = open_field(5, 5);
        let (outcome, path) = search(&field, o(2, 2), o(2, 2));
        assert_eq!(outcome, SearchOutcome::Found { len: 1 });
        assert_eq!(path, vec![o(2, 2)]);
    }

    #[test]
    fn straight_world_line_has_no_turns() {
        let field = open_field(10, 10);
        let (outcome, path) = search(&field, o(0, 0), o(4, 2));
        assert!(outcome.is_found());
        assert_eq!(path, vec![o(4, 2), o(3, 1), o(2, 1), o(1, 0), o(0, 0)]);
        assert_eq!(count_turns(&path), 0);
    }

    #[test]
    fn water_start_is_blocked() {
        let field = field_from_ascii(&["~....", ".....", "....."]);
        let (outcome, path) = search(&field, o(0, 0), o(2, 4));
        assert_eq!(outcome, SearchOutcome::StartBlocked);
        assert!(path.is_empty());
    }

    #[test]
    fn water_goal_is_unreachable() {
        let field = field_from_ascii(&[".....", ".....", "....~"]);
        let (outcome, path) = search(&field, o(0, 0), o(2, 4));
        assert_eq!(outcome, SearchOutcome::Unreachable);
        assert!(path.is_empty());
    }

    #[test]
    fn out_of_bounds_goal_is_unreachable() {
        let field = open_field(4, 4);
        assert_eq!(search(&field, o(0, 0), o(4, 0)).0, SearchOutcome::Unreachable);
        assert_eq!(search(&field, o(-1, 0), o(1, 0)).0, SearchOutcome::StartBlocked);
    }

    #[test]
    fn walled_off_goal_is_unreachable() {
        // Row 2 of water cuts the field in two.
        let field = field_from_ascii(&["....", "....", "~~~~", "....", "...."]);
        let (outcome, path) = search(&field, o(0, 0), o(4, 0));
        assert_eq!(outcome, SearchOutcome::Unreachable);
        assert!(path.is_empty());
    }

    #[test]
    fn custom_walkability() {
        // Going straight through the custom tile is shortest; forbidding
        // it forces a detour.
        let field = field_from_ascii(&["....", "....", ".#..", "....", "....", "...."]);
        let (_, direct) = search(&field, o(0, 0), o(4, 2));
        assert!(direct.contains(&o(2, 1)));

        let mut f = finder();
        let mut out = f.output_queue();
        let outcome = f.find_shortest_path_by(&mut out, &field, o(0, 0), o(4, 2), |k| {
            k.is_traversable() && k != TileKind::Custom(1)
        });
        assert!(outcome.is_found());
        let path: Vec<_> = out.iter().copied().collect();
        assert!(!path.contains(&o(2, 1)));
        assert_valid_path(&field, &path, o(0, 0), o(4, 2));
    }

    #[test]
    fn cheap_turn_is_preferred() {
        // World delta (+3, +2). Turning SE into NE is a turn of value 1,
        // NE into SE a turn of value 3.
        let field = open_field(10, 10);
        let from = o(4, 4);
        assert_eq!(from.project(), WorldCoord::new(6, 2));
        let to = WorldCoord::new(9, 4).unproject();
        let (outcome, path) = search(&field, from, to);
        assert!(outcome.is_found());
        assert_valid_path(&field, &path, from, to);
        assert_eq!(
            walk_slots(&path),
            vec![
                Slot::SouthEast,
                Slot::SouthEast,
                Slot::SouthEast,
                Slot::NorthEast,
                Slot::NorthEast
            ]
        );
    }

    #[test]
    fn dearer_arrival_with_better_heading_wins() {
        // World delta (+1, -3). Going south-west first runs off the left
        // edge, so the best route is SE then three SW steps (4.1). Reaching
        // (2,0) straight down the first column is cheaper than reaching
        // (2,1), but every finish from there costs two turns (4.15).
        let field = open_field(10, 10);
        let (from, to) = (o(0, 1), o(4, 0));
        let (outcome, path) = search(&field, from, to);
        assert_eq!(outcome, SearchOutcome::Found { len: 5 });
        assert_eq!(path, vec![o(4, 0), o(3, 0), o(2, 1), o(1, 1), o(0, 1)]);
        assert_eq!(
            walk_slots(&path),
            vec![Slot::SouthEast, Slot::SouthWest, Slot::SouthWest, Slot::SouthWest]
        );
        assert_eq!(count_turns(&path), 1);
    }

    #[test]
    fn headings_are_recorded_separately() {
        // Records are looked up per heading; `record` picks the cheapest.
        let field = open_field(10, 10);
        let mut f = finder();
        let mut out = f.output_queue();
        assert!(f.find_shortest_path(&mut out, &field, o(0, 1), o(4, 0)).is_found());
        let index = field.tile_index(o(1, 1));
        let straight = f.record_via(index, Some(Slot::SouthEast)).unwrap();
        assert_eq!(straight.score, 1.0);
        assert_eq!(straight.predecessor, o(0, 1));
        assert_eq!(straight.predecessor_direction, None);
        assert_eq!(f.record(index), Some(straight));
        assert_eq!(f.record_via(index, None), None);
        let start = field.tile_index(o(0, 1));
        assert_eq!(f.record_via(start, None).map(|r| r.score), Some(0.0));
    }

    #[test]
    fn node_capacity_bounds_the_search() {
        let field = open_field(20, 20);
        let cfg = SearchConfig {
            node_capacity: 8,
            ..SearchConfig::default()
        };
        let mut f = PathFinder::new(cfg).unwrap();
        let mut out = f.output_queue();
        let outcome = f.find_shortest_path(&mut out, &field, o(0, 0), o(19, 19));
        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert!(out.is_empty());
        assert!(f.recorded() <= 8);
    }

    #[test]
    fn records_describe_the_route() {
        let field = open_field(10, 10);
        let mut f = finder();
        let mut out = f.output_queue();
        f.find_shortest_path(&mut out, &field, o(0, 0), o(4, 2));
        let start = f.record(field.tile_index(o(0, 0))).unwrap();
        assert_eq!(start.score, 0.0);
        assert_eq!(start.direction, None);
        let goal = f.record(field.tile_index(o(4, 2))).unwrap();
        assert_eq!(goal.score, 4.0);
        assert_eq!(goal.direction, Some(Slot::SouthEast));
        assert_eq!(goal.predecessor, o(3, 1));
        assert_eq!(goal.predecessor_direction, Some(Slot::SouthEast));
    }

    #[test]
    fn finder_is_reusable() {
        let field = open_field(10, 10);
        let mut f = finder();
        let mut out = f.output_queue();
        assert!(f.find_shortest_path(&mut out, &field, o(0, 0), o(9, 9)).is_found());
        let first: Vec<_> = out.iter().copied().collect();
        assert!(f.find_shortest_path(&mut out, &field, o(0, 0), o(4, 2)).is_found());
        assert_eq!(out.len(), 5);
        assert!(f.find_shortest_path(&mut out, &field, o(0, 0), o(9, 9)).is_found());
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), first);
    }

    #[test]
    #[should_panic(expected = "path output holds")]
    fn small_output_panics() {
        let field = open_field(4, 4);
        let mut f = finder();
        let mut out = RingQueue::new(4);
        f.find_shortest_path(&mut out, &field, o(0, 0), o(1, 0));
    }
}
