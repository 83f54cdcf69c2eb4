//! Coordinates
//!
//! Overworld cells and minimap sub-cells.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the minimap sub-grid inside one overworld cell
pub const MINIMAP_GRID: i32 = 20;

/// Position of a cell in the overworld
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by a delta
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance (allows diagonal)
    pub fn chebyshev_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Render id used for overworld tiles ("x,y")
    pub fn tile_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Position inside the minimap grid of the current overworld cell.
///
/// Both axes stay within `0..MINIMAP_GRID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LocalPosition {
    pub x: i32,
    pub y: i32,
}

impl LocalPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Render id used for minimap cells ("mm:x,y")
    pub fn tile_id(&self) -> String {
        format!("mm:{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_ids() {
        assert_eq!(Position::new(-3, 7).tile_id(), "-3,7");
        assert_eq!(LocalPosition::new(0, 19).tile_id(), "mm:0,19");
    }

    #[test]
    fn test_distance() {
        let a = Position::new(0, 0);
        assert_eq!(a.chebyshev_distance(&Position::new(2, -1)), 2);
        assert_eq!(a.offset(1, -1), Position::new(1, -1));
    }
}
