//! Search configuration, validation, and error types.

use std::error::Error;
use std::fmt;

// ── TurnCosts ──────────────────────────────────────────────────────

/// Step costs keyed by the turn a step makes relative to the previous one.
///
/// A turn value is `(4 + incoming - outgoing) mod 4` over neighbour slots:
/// 0 is straight on, 1 and 3 are the two quarter turns. Value 2 is a
/// reversal and is never allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnCosts {
    /// Cost of continuing in the same direction. Default: 1.0.
    pub straight: f32,
    /// Cost of a turn of value 1. Default: 1.05.
    pub turn_one: f32,
    /// Cost of a turn of value 3. Default: 1.1.
    pub turn_three: f32,
}

impl TurnCosts {
    /// Default straight step cost.
    pub const DEFAULT_STRAIGHT: f32 = 1.0;
    /// Default cost of a turn of value 1.
    pub const DEFAULT_TURN_ONE: f32 = 1.05;
    /// Default cost of a turn of value 3.
    pub const DEFAULT_TURN_THREE: f32 = 1.1;

    /// Cost of a step making `turn`, or `None` for a reversal.
    #[inline]
    pub fn for_turn(&self, turn: usize) -> Option<f32> {
        match turn {
            0 => Some(self.straight),
            1 => Some(self.turn_one),
            3 => Some(self.turn_three),
            _ => None,
        }
    }

    /// The cheapest step.
    pub fn min(&self) -> f32 {
        self.straight.min(self.turn_one).min(self.turn_three)
    }
}

impl Default for TurnCosts {
    fn default() -> Self {
        Self {
            straight: Self::DEFAULT_STRAIGHT,
            turn_one: Self::DEFAULT_TURN_ONE,
            turn_three: Self::DEFAULT_TURN_THREE,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`SearchConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `node_capacity` is zero.
    ZeroCapacity,
    /// A step cost is NaN, infinite, zero or negative.
    NonFiniteCost {
        /// Which cost.
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// The heuristic could overestimate the remaining cost.
    InadmissibleHeuristic {
        /// Configured scale.
        scale: f32,
        /// Cheapest step cost, the largest admissible scale.
        min_cost: f32,
    },
    /// A turn is cheaper than going straight.
    StraightNotCheapest {
        /// Configured straight cost.
        straight: f32,
        /// The cheaper turn cost.
        turn: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "node_capacity must be at least 1"),
            Self::NonFiniteCost { name, value } => {
                write!(f, "{name} cost must be finite and positive, got {value}")
            }
            Self::InadmissibleHeuristic { scale, min_cost } => {
                write!(
                    f,
                    "heuristic_scale must be in [0, {min_cost}] to stay admissible, got {scale}"
                )
            }
            Self::StraightNotCheapest { straight, turn } => {
                write!(f, "straight cost {straight} exceeds turn cost {turn}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SearchConfig ───────────────────────────────────────────────────

/// Configuration for a [`PathFinder`](crate::PathFinder).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of search nodes one search may record. A node is a
    /// tile together with the slot it was entered through, so a tile costs
    /// up to four nodes (five at the start). Bounds work and memory per
    /// call. Default: 2048.
    pub node_capacity: usize,
    /// Step costs.
    pub costs: TurnCosts,
    /// Multiplier on the world-space Manhattan heuristic. Default: 1.0.
    pub heuristic_scale: f32,
}

impl SearchConfig {
    /// Default node capacity.
    pub const DEFAULT_NODE_CAPACITY: usize = 2048;
    /// Default heuristic scale.
    pub const DEFAULT_HEURISTIC_SCALE: f32 = 1.0;
    /// Heap entries allowed per recorded node.
    pub const OPEN_ENTRIES_PER_NODE: usize = 4;

    /// Ring size of an output queue that can hold any path this
    /// configuration produces.
    pub fn path_capacity(&self) -> usize {
        self.node_capacity + 1
    }

    /// Capacity of the open heap.
    pub fn open_capacity(&self) -> usize {
        self.node_capacity.saturating_mul(Self::OPEN_ENTRIES_PER_NODE)
    }

    /// Check capacities and the cost model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let c = &self.costs;
        for (name, value) in [
            ("straight", c.straight),
            ("turn_one", c.turn_one),
            ("turn_three", c.turn_three),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonFiniteCost { name, value });
            }
        }
        for turn in [c.turn_one, c.turn_three] {
            if turn < c.straight {
                return Err(ConfigError::StraightNotCheapest {
                    straight: c.straight,
                    turn,
                });
            }
        }
        let scale = self.heuristic_scale;
        if !scale.is_finite() || scale < 0.0 || scale > c.min() {
            return Err(ConfigError::InadmissibleHeuristic {
                scale,
                min_cost: c.min(),
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_capacity: Self::DEFAULT_NODE_CAPACITY,
            costs: TurnCosts::default(),
            heuristic_scale: Self::DEFAULT_HEURISTIC_SCALE,
        }
    }
}
