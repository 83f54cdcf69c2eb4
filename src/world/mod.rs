//! World module
//!
//! Contains the overworld map, tiles, coordinates and procedural generation.

pub mod map;
pub mod tile;
pub mod position;
pub mod generation;

pub use map::World;
pub use tile::{Rgb, TemperatureZone, Tile, TileFlag};
pub use position::{LocalPosition, Position, MINIMAP_GRID};
pub use generation::{GenerationError, RowRange};
