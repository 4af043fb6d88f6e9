//! Error types for tile field construction and access.

use paver_core::OffsetCoord;
use std::fmt;

/// Errors arising from field construction or coordinate-addressed writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A coordinate is outside the field.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: OffsetCoord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a field with zero tiles.
    EmptyField,
    /// A dimension exceeds the representable range.
    DimensionTooLarge {
        /// Which dimension ("width" or "height").
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// `width * height` does not fit a [`TileIndex`](paver_core::TileIndex).
    TooManyTiles {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::EmptyField => write!(f, "field must have at least one tile"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::TooManyTiles { width, height } => {
                write!(f, "{width}x{height} tiles do not fit a 32-bit tile index")
            }
        }
    }
}

impl std::error::Error for FieldError {}
