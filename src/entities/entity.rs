//! Overworld entities
//!
//! Entities are plain data: they occupy a cell and get drawn, nothing more.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::world::{Position, Rgb};

/// Unique entity identifier within one world
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity:{}", self.0)
    }
}

/// What an entity represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Marker,
    Settlement,
    Wanderer,
}

impl EntityKind {
    pub fn color(&self) -> Rgb {
        match self {
            EntityKind::Marker => Rgb(255, 255, 255),
            EntityKind::Settlement => Rgb(139, 90, 43),
            EntityKind::Wanderer => Rgb(255, 215, 0),
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            EntityKind::Marker => '*',
            EntityKind::Settlement => '⌂',
            EntityKind::Wanderer => '☺',
        }
    }
}

/// An entity placed on the overworld
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
    pub color: Rgb,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            color: kind.color(),
        }
    }
}
