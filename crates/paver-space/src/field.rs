//! Dense row-major tile storage.

use std::ops::RangeInclusive;

use paver_core::{OccupantId, OffsetCoord, Tile, TileGrid, TileGridMut, TileIndex, TileKind};

use crate::error::FieldError;

/// A `width x height` field of tiles stored row-major.
///
/// Implements [`TileGrid`] and [`TileGridMut`] with the canonical
/// `row * width + col` indexing, so engine code can run against it
/// directly.
///
/// # Examples
///
/// ```
/// use paver_core::{OffsetCoord, TileKind};
/// use paver_space::TileField;
///
/// let mut field = TileField::new(29, 39).unwrap();
/// field.fill_row(8, 15..=16, TileKind::Water).unwrap();
/// assert_eq!(field.kind_at(OffsetCoord::new(8, 15)), Some(TileKind::Water));
/// assert_eq!(field.kind_at(OffsetCoord::new(8, 17)), Some(TileKind::Grass));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileField {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl TileField {
    /// Maximum width or height.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a field of grass.
    ///
    /// Returns `Err(FieldError::EmptyField)` if either dimension is 0,
    /// `Err(FieldError::DimensionTooLarge)` if either exceeds `i32::MAX`, or
    /// `Err(FieldError::TooManyTiles)` if the tile count overflows `u32`.
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        Self::filled(width, height, TileKind::Grass)
    }

    /// Create a field with every tile set to `kind`.
    pub fn filled(width: u32, height: u32, kind: TileKind) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyField);
        }
        if width > Self::MAX_DIM {
            return Err(FieldError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(FieldError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let count = width
            .checked_mul(height)
            .ok_or(FieldError::TooManyTiles { width, height })?;
        Ok(Self {
            width,
            height,
            tiles: vec![Tile::of(kind); count as usize],
        })
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always returns `false`; construction rejects empty fields.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The tile at `coord`, or `None` outside the field.
    pub fn get(&self, coord: OffsetCoord) -> Option<Tile> {
        self.checked_index(coord).map(|i| self.tiles[i.as_usize()])
    }

    /// The kind of the tile at `coord`, or `None` outside the field.
    pub fn kind_at(&self, coord: OffsetCoord) -> Option<TileKind> {
        self.get(coord).map(|t| t.kind)
    }

    /// Set the tile at `coord` to `kind`, clearing its occupant.
    pub fn set(&mut self, coord: OffsetCoord, kind: TileKind) -> Result<(), FieldError> {
        let index = self.checked_index(coord).ok_or_else(|| self.out_of_bounds(coord))?;
        self.tiles[index.as_usize()] = Tile::of(kind);
        Ok(())
    }

    /// Set columns `cols` (inclusive) of `row` to `kind`.
    ///
    /// Validates both ends before writing anything.
    pub fn fill_row(
        &mut self,
        row: i32,
        cols: RangeInclusive<i32>,
        kind: TileKind,
    ) -> Result<(), FieldError> {
        let (from, to) = (*cols.start(), *cols.end());
        for col in [from, to] {
            let coord = OffsetCoord::new(row, col);
            if !self.are_coords_valid(coord, 0) {
                return Err(self.out_of_bounds(coord));
            }
        }
        for col in from..=to {
            self.set(OffsetCoord::new(row, col), kind)?;
        }
        Ok(())
    }

    /// Number of tiles whose kind satisfies `pred`.
    pub fn count_where(&self, pred: impl Fn(TileKind) -> bool) -> usize {
        self.tiles.iter().filter(|t| pred(t.kind)).count()
    }

    fn checked_index(&self, coord: OffsetCoord) -> Option<TileIndex> {
        self.are_coords_valid(coord, 0)
            .then(|| self.tile_index(coord))
    }

    fn out_of_bounds(&self, coord: OffsetCoord) -> FieldError {
        FieldError::CoordOutOfBounds {
            coord,
            bounds: format!("rows 0..{}, cols 0..{}", self.height, self.width),
        }
    }
}

impl TileGrid for TileField {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn tile(&self, index: TileIndex) -> Tile {
        self.tiles[index.as_usize()]
    }
}

impl TileGridMut for TileField {
    fn set_tile_kind(&mut self, index: TileIndex, kind: TileKind, occupant: Option<OccupantId>) {
        self.tiles[index.as_usize()] = Tile { kind, occupant };
    }
}
