//! Benchmark profiles for the Paver tile-path engine.
//!
//! - [`maze_field`]: a large field of staggered walls forcing long detours
//! - [`query_pairs`]: deterministic endpoint pairs inside a field

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use paver_core::{OffsetCoord, TileKind};
use paver_space::{FieldError, TileField};

/// A `size`x`size` grass field crossed by water walls every eighth row.
///
/// Walls alternate between leaving a gap at the left and at the right
/// edge, so a search from top to bottom has to zig-zag.
pub fn maze_field(size: u32) -> Result<TileField, FieldError> {
    let mut field = TileField::new(size, size)?;
    let last = size as i32 - 1;
    for (n, row) in (4..last).step_by(8).enumerate() {
        let cols = if n % 2 == 0 { 0..=last - 3 } else { 3..=last };
        field.fill_row(row, cols, TileKind::Water)?;
    }
    Ok(field)
}

/// `count` deterministic coordinate pairs inside a `width`x`height` field.
pub fn query_pairs(width: u32, height: u32, count: usize) -> Vec<(OffsetCoord, OffsetCoord)> {
    let pick = |i: u64, mul: u64, bound: u32| (i.wrapping_mul(mul) % u64::from(bound)) as i32;
    (0..count as u64)
        .map(|i| {
            let j = i + 500;
            let a = OffsetCoord::new(
                pick(i, 6364136223846793007, height),
                pick(i, 1442695040888963407, width),
            );
            let b = OffsetCoord::new(
                pick(j, 6364136223846793007, height),
                pick(j, 1442695040888963407, width),
            );
            (a, b)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_walls_leave_gaps() {
        let field = maze_field(64).unwrap();
        assert_eq!(field.kind_at(OffsetCoord::new(4, 0)), Some(TileKind::Water));
        assert_eq!(field.kind_at(OffsetCoord::new(4, 63)), Some(TileKind::Grass));
        assert_eq!(field.kind_at(OffsetCoord::new(12, 0)), Some(TileKind::Grass));
        assert_eq!(field.kind_at(OffsetCoord::new(12, 63)), Some(TileKind::Water));
    }

    #[test]
    fn pairs_are_in_bounds_and_deterministic() {
        let pairs = query_pairs(30, 20, 100);
        assert_eq!(pairs, query_pairs(30, 20, 100));
        for (a, b) in pairs {
            for c in [a, b] {
                assert!((0..20).contains(&c.row) && (0..30).contains(&c.col));
            }
        }
    }
}
