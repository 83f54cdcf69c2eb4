//! Player state
//!
//! The player has no behavior of its own. Its location is only mutated by
//! the translator's movement operations.

use serde::{Deserialize, Serialize};

use crate::world::{LocalPosition, Position};

/// Where the player is, in every coordinate space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Overworld cell
    pub overworld: Position,
    /// Sub-cell within the overworld cell; unset until a scene is entered
    pub minimap: Option<LocalPosition>,
    /// Reserved for an in-game layer
    pub ingame: Option<Position>,
}

/// The single player of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub location: Location,
}

impl Player {
    /// Create a player standing on `spawn`
    pub fn new(spawn: Position) -> Self {
        Self {
            location: Location {
                overworld: spawn,
                minimap: None,
                ingame: None,
            },
        }
    }

    pub fn overworld(&self) -> Position {
        self.location.overworld
    }

    pub fn minimap(&self) -> Option<LocalPosition> {
        self.location.minimap
    }

    /// Initialize the minimap position to the grid corner if unset
    pub fn ensure_minimap(&mut self) -> LocalPosition {
        *self.location.minimap.get_or_insert_with(LocalPosition::default)
    }
}
