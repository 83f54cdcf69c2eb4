//! Display-side render cache
//!
//! Scenes never compute truth. They apply the translator's updates here and
//! draw whatever the atlas holds.

use std::collections::BTreeMap;

use super::updates::{CursorSet, EntityUpsert, Hud, RenderUpdate, TileUpsert};

/// Last applied render state of one scene
#[derive(Debug, Clone, Default)]
pub struct RenderAtlas {
    pub tiles: BTreeMap<String, TileUpsert>,
    pub entities: BTreeMap<String, EntityUpsert>,
    pub cursor: Option<CursorSet>,
    pub hud: Option<Hud>,
}

impl RenderAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply updates in emission order
    pub fn apply(&mut self, updates: &[RenderUpdate]) {
        for update in updates {
            match update {
                RenderUpdate::TileUpsert(tile) => {
                    self.tiles.insert(tile.id.clone(), tile.clone());
                }
                RenderUpdate::TileRemove(removal) => {
                    self.tiles.remove(&removal.id);
                }
                RenderUpdate::EntityUpsert(entity) => {
                    self.entities.insert(entity.id.clone(), entity.clone());
                }
                RenderUpdate::EntityRemove(removal) => {
                    self.entities.remove(&removal.id);
                }
                RenderUpdate::CursorSet(cursor) => self.cursor = Some(*cursor),
                RenderUpdate::HudSet(hud) => self.hud = Some(hud.clone()),
            }
        }
    }

    /// Bounding box of all tiles as (min_x, min_y, max_x, max_y) in pixels
    pub fn bounds(&self) -> Option<(f32, f32, f32, f32)> {
        self.tiles.values().fold(None, |acc, t| {
            let half = t.size / 2.0;
            let (x0, y0, x1, y1) = (t.x - half, t.y - half, t.x + half, t.y + half);
            Some(match acc {
                None => (x0, y0, x1, y1),
                Some((a, b, c, d)) => (a.min(x0), b.min(y0), c.max(x1), d.max(y1)),
            })
        })
    }
}
