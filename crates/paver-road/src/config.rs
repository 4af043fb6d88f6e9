//! Road configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use paver_core::TileKind;
use paver_path::ConfigError;

/// Errors detected while validating road configuration or building tools.
#[derive(Debug, Clone, PartialEq)]
pub enum RoadConfigError {
    /// `staging_capacity` is zero.
    ZeroCapacity,
    /// The base terrain is itself a road.
    RoadBaseTerrain,
    /// `edge_margin` is negative.
    NegativeMargin {
        /// The configured margin.
        margin: i32,
    },
    /// Staging cannot hold every path the search may return.
    StagingTooSmall {
        /// Configured staging capacity.
        staging: usize,
        /// Longest path the search can produce.
        path: usize,
    },
    /// The search configuration is invalid.
    Search(ConfigError),
}

impl fmt::Display for RoadConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "staging_capacity must be at least 1"),
            Self::RoadBaseTerrain => write!(f, "base_terrain must not be a road"),
            Self::NegativeMargin { margin } => {
                write!(f, "edge_margin must not be negative, got {margin}")
            }
            Self::StagingTooSmall { staging, path } => {
                write!(
                    f,
                    "staging_capacity {staging} is below the longest search path {path}"
                )
            }
            Self::Search(e) => write!(f, "search: {e}"),
        }
    }
}

impl Error for RoadConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for RoadConfigError {
    fn from(e: ConfigError) -> Self {
        Self::Search(e)
    }
}

/// Configuration for road staging and deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoadConfig {
    /// Maximum tiles one staged path may hold. Default: 2048.
    pub staging_capacity: usize,
    /// What deleted roads revert to. Default: grass.
    pub base_terrain: TileKind,
    /// Deletion leaves tiles closer than this to the field border alone.
    /// Default: 1.
    pub edge_margin: i32,
}

impl RoadConfig {
    /// Default staging capacity.
    pub const DEFAULT_STAGING_CAPACITY: usize = 2048;
    /// Default deletion margin.
    pub const DEFAULT_EDGE_MARGIN: i32 = 1;

    /// Check capacity, terrain and margin.
    pub fn validate(&self) -> Result<(), RoadConfigError> {
        if self.staging_capacity == 0 {
            return Err(RoadConfigError::ZeroCapacity);
        }
        if self.base_terrain.road_shape().is_some() {
            return Err(RoadConfigError::RoadBaseTerrain);
        }
        if self.edge_margin < 0 {
            return Err(RoadConfigError::NegativeMargin {
                margin: self.edge_margin,
            });
        }
        Ok(())
    }
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            staging_capacity: Self::DEFAULT_STAGING_CAPACITY,
            base_terrain: TileKind::Grass,
            edge_margin: Self::DEFAULT_EDGE_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paver_core::RoadShape;

    #[test]
    fn defaults_validate() {
        let cfg = RoadConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.staging_capacity, 2048);
        assert_eq!(cfg.base_terrain, TileKind::Grass);
    }

    #[test]
    fn invalid_fields_rejected() {
        let zero = RoadConfig {
            staging_capacity: 0,
            ..RoadConfig::default()
        };
        assert_eq!(zero.validate(), Err(RoadConfigError::ZeroCapacity));

        let road = RoadConfig {
            base_terrain: TileKind::Road(RoadShape::Cross),
            ..RoadConfig::default()
        };
        assert_eq!(road.validate(), Err(RoadConfigError::RoadBaseTerrain));

        let margin = RoadConfig {
            edge_margin: -1,
            ..RoadConfig::default()
        };
        assert_eq!(
            margin.validate(),
            Err(RoadConfigError::NegativeMargin { margin: -1 })
        );
    }

    #[test]
    fn search_error_is_the_source() {
        let err = RoadConfigError::from(ConfigError::ZeroCapacity);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "search: node_capacity must be at least 1");
    }
}
