//! Input intents
//!
//! Front ends translate raw keys into these before touching the session.

/// A unit movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell delta; y grows downward on screen
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Input action that can be triggered by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Move(Direction),
    /// Switch between overworld and minimap
    ToggleMap,
    /// Show or hide the debug overlay
    ToggleDebug,
    /// Flip the selected debug option
    DebugToggleSelected,
    Quit,
}
