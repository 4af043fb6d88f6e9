//! Reusable tile fields.
//!
//! - [`open_field`]: all grass.
//! - [`lake_field`]: the 29x39 demo field with a lake in the middle.
//! - [`field_from_ascii`]: small hand-drawn fields for targeted tests.

use paver_core::{OffsetCoord, RoadShape, TileKind};
use paver_space::TileField;

/// Width of the demo field.
pub const LAKE_FIELD_WIDTH: u32 = 29;
/// Height of the demo field.
pub const LAKE_FIELD_HEIGHT: u32 = 39;

/// Lake rows as `(row, first_col, last_col)`, inclusive.
const LAKE_ROWS: [(i32, i32, i32); 15] = [
    (8, 15, 16),
    (9, 14, 17),
    (10, 10, 18),
    (11, 10, 18),
    (12, 10, 18),
    (13, 10, 17),
    (14, 10, 16),
    (15, 9, 15),
    (16, 9, 15),
    (17, 9, 15),
    (18, 9, 16),
    (19, 10, 16),
    (20, 10, 15),
    (21, 10, 13),
    (22, 12, 12),
];

/// An all-grass field.
///
/// # Panics
///
/// Panics if the dimensions are rejected by [`TileField::new`].
pub fn open_field(width: u32, height: u32) -> TileField {
    TileField::new(width, height).expect("fixture dimensions are valid")
}

/// The 29x39 demo field: grass with a lake spanning rows 8 to 22.
pub fn lake_field() -> TileField {
    let mut field = open_field(LAKE_FIELD_WIDTH, LAKE_FIELD_HEIGHT);
    for (row, from, to) in LAKE_ROWS {
        field
            .fill_row(row, from..=to, TileKind::Water)
            .expect("lake rows are inside the field");
    }
    field
}

/// Build a field from rows of characters.
///
/// `.` grass, `~` water, `+` a cross road, `#` a `Custom(1)` tile. Every
/// row must have the same length.
///
/// # Panics
///
/// Panics on ragged rows or unknown characters.
pub fn field_from_ascii(rows: &[&str]) -> TileField {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    let mut field = open_field(width, height);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(
            line.chars().count() as u32,
            width,
            "row {row} has a different width"
        );
        for (col, ch) in line.chars().enumerate() {
            let kind = match ch {
                '.' => TileKind::Grass,
                '~' => TileKind::Water,
                '+' => TileKind::Road(RoadShape::Cross),
                '#' => TileKind::Custom(1),
                other => panic!("unknown tile character {other:?}"),
            };
            field
                .set(OffsetCoord::new(row as i32, col as i32), kind)
                .expect("coordinate inside the field");
        }
    }
    field
}
