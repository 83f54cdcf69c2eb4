//! Key bindings for the terminal front end

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, InputAction, Scene};

/// Map a key press to an action for the given scene
pub fn map_key(key: KeyEvent, scene: Scene) -> Option<InputAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }

    let action = match key.code {
        KeyCode::Char('w') | KeyCode::Up => InputAction::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Down => InputAction::Move(Direction::Down),
        KeyCode::Char('a') | KeyCode::Left => InputAction::Move(Direction::Left),
        KeyCode::Char('d') | KeyCode::Right => InputAction::Move(Direction::Right),
        KeyCode::Char('e') | KeyCode::Tab => InputAction::ToggleMap,
        KeyCode::F(1) => InputAction::ToggleDebug,
        KeyCode::Enter => InputAction::DebugToggleSelected,
        // Escape backs out of the minimap before it quits
        KeyCode::Esc if scene == Scene::Minimap => InputAction::ToggleMap,
        KeyCode::Esc | KeyCode::Char('q') => InputAction::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('w')), Scene::Overworld),
            Some(InputAction::Move(Direction::Up))
        );
        assert_eq!(
            map_key(key(KeyCode::Right), Scene::Minimap),
            Some(InputAction::Move(Direction::Right))
        );
        assert_eq!(map_key(key(KeyCode::Char('x')), Scene::Overworld), None);
    }

    #[test]
    fn test_escape_depends_on_scene() {
        assert_eq!(
            map_key(key(KeyCode::Esc), Scene::Minimap),
            Some(InputAction::ToggleMap)
        );
        assert_eq!(
            map_key(key(KeyCode::Esc), Scene::Overworld),
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, Scene::Minimap), Some(InputAction::Quit));
    }
}
