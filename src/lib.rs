//! Meridian - a banded overworld and its render translator
//!
//! The world is a column of rows drifting around a central spine, each row
//! tinted by its temperature zone. A translator turns world truth into
//! incremental render updates for the overworld and minimap viewports.

pub mod data;
pub mod entities;
pub mod game;
pub mod render;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use data::GameConfig;
pub use entities::Player;
pub use game::{Scene, Session};
pub use render::{RenderUpdate, Translator, ViewportId};
pub use world::{Position, Tile, World};
