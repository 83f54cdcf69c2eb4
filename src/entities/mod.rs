//! Entity and player state

pub mod entity;
pub mod player;

pub use entity::{Entity, EntityId, EntityKind};
pub use player::{Location, Player};
