//! Row-band generator
//!
//! Grows the continent outward from the equator one row at a time. Each
//! row's edges drift randomly from the row before it, then get pulled back
//! so the spine column (x = 0) stays inside every row.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest generated row
pub const MIN_Y: i32 = -22;
/// Highest generated row
pub const MAX_Y: i32 = 22;
/// Column guaranteed present in every row
pub const SPINE_X: i32 = 0;

/// Possible widths of the equator row
const EQUATOR_WIDTHS: [i32; 3] = [2, 3, 4];
/// Maximum edge drift between consecutive rows
const MAX_DRIFT: i32 = 2;

/// Inclusive x-range of one generated row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRange {
    pub left: i32,
    pub right: i32,
}

impl RowRange {
    pub fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn contains(&self, x: i32) -> bool {
        self.left <= x && x <= self.right
    }
}

/// Equator row, centered so the spine falls inside it
pub fn equator<R: Rng + ?Sized>(rng: &mut R) -> RowRange {
    let width = EQUATOR_WIDTHS[rng.gen_range(0..EQUATOR_WIDTHS.len())];
    let left = SPINE_X - (width - 1) / 2;
    RowRange::new(left, left + width - 1)
}

/// Derive the next row outward from `prev`.
///
/// Edges that drift past the spine are clamped back onto it, and a row that
/// collapses is widened to a single column. Always terminates.
pub fn next_row<R: Rng + ?Sized>(rng: &mut R, prev: RowRange) -> RowRange {
    let mut left = prev.left + rng.gen_range(-MAX_DRIFT..=MAX_DRIFT);
    let mut right = prev.right + rng.gen_range(-MAX_DRIFT..=MAX_DRIFT);

    if left > SPINE_X {
        left = SPINE_X;
    }
    if right < SPINE_X {
        right = SPINE_X;
    }
    if right < left {
        right = left;
    }

    RowRange::new(left, right)
}

/// Generate every row in `MIN_Y..=MAX_Y`.
///
/// The north run (y = 1, 2, ...) is drawn first, then the south run; both
/// start from the equator edges and share nothing else.
pub fn generate_rows<R: Rng + ?Sized>(rng: &mut R) -> BTreeMap<i32, RowRange> {
    let mut rows = BTreeMap::new();

    let eq = equator(rng);
    rows.insert(0, eq);

    let mut prev = eq;
    for y in 1..=MAX_Y {
        prev = next_row(rng, prev);
        rows.insert(y, prev);
    }

    let mut prev = eq;
    for y in (MIN_Y..0).rev() {
        prev = next_row(rng, prev);
        rows.insert(y, prev);
    }

    rows
}
