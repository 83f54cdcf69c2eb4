//! Debug overlay state
//!
//! A small toggle menu layered over the active scene. While it is open it
//! captures vertical movement for navigation.

/// Options the overlay can toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugSettings {
    /// Detailed HUD with zone and active tile info
    pub show_hud: bool,
    /// Minimap coordinates drawn inside the overworld cursor
    pub show_in_tile_coords: bool,
}

/// Menu entries in display order
pub const DEBUG_ITEMS: [(&str, &str); 2] = [
    ("show_hud", "Detailed HUD"),
    ("show_in_tile_coords", "In-tile coords overlay"),
];

#[derive(Debug, Clone, Default)]
pub struct DebugTools {
    pub open: bool,
    pub selected: usize,
    pub settings: DebugSettings,
}

impl DebugTools {
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
        log::debug!("Debug overlay {}", if self.open { "opened" } else { "closed" });
    }

    /// Move the selection, wrapping at both ends
    pub fn navigate(&mut self, step: i32) {
        let len = DEBUG_ITEMS.len() as i32;
        self.selected = (self.selected as i32 + step).rem_euclid(len) as usize;
    }

    pub fn toggle_selected(&mut self) {
        let flag = match self.selected {
            0 => &mut self.settings.show_hud,
            _ => &mut self.settings.show_in_tile_coords,
        };
        *flag = !*flag;
    }

    /// Current value of the item at `index`
    pub fn value(&self, index: usize) -> bool {
        match index {
            0 => self.settings.show_hud,
            _ => self.settings.show_in_tile_coords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut tools = DebugTools::default();
        tools.navigate(-1);
        assert_eq!(tools.selected, 1);
        tools.navigate(1);
        assert_eq!(tools.selected, 0);
    }

    #[test]
    fn test_toggle_selected() {
        let mut tools = DebugTools::default();
        tools.toggle_selected();
        assert!(tools.settings.show_hud);
        tools.navigate(1);
        tools.toggle_selected();
        assert!(tools.value(1));
        tools.toggle_selected();
        assert!(!tools.settings.show_in_tile_coords);
    }
}
