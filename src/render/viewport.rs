//! Viewports and their render caches

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::updates::{CursorSet, EntityUpsert, Hud, RenderUpdate, TileUpsert};

/// Rendering contexts that keep their own cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportId {
    Overworld,
    Minimap,
}

impl ViewportId {
    pub fn name(&self) -> &'static str {
        match self {
            ViewportId::Overworld => "overworld",
            ViewportId::Minimap => "minimap",
        }
    }
}

/// How world truth is projected into a viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// 5x5 window centered on the player's overworld cell
    Overworld,
    /// Full 20x20 sub-grid of the current overworld cell
    Minimap,
}

/// What a viewport wants drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSpec {
    pub mode: ProjectionMode,
    /// Tile edge length in pixels
    pub tile_size: f32,
}

impl RenderSpec {
    pub fn new(mode: ProjectionMode, tile_size: f32) -> Self {
        Self { mode, tile_size }
    }
}

/// Pixel dimensions of a viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Everything visible in one viewport at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tiles: Vec<TileUpsert>,
    pub entities: Vec<EntityUpsert>,
    pub cursor: Option<CursorSet>,
    pub hud: Hud,
}

/// Last state emitted to a viewport
#[derive(Debug, Clone, Default)]
pub struct ViewportCache {
    tiles: BTreeMap<String, TileUpsert>,
    entities: BTreeMap<String, EntityUpsert>,
    cursor: Option<CursorSet>,
    hud_key: String,
}

impl ViewportCache {
    pub fn tile_ids(&self) -> impl Iterator<Item = &str> {
        self.tiles.keys().map(String::as_str)
    }

    pub fn entity_ids(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn hud_key(&self) -> &str {
        &self.hud_key
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.entities.is_empty()
    }

    /// Diff `frame` against the cached state and adopt it.
    ///
    /// Emission order: tile upserts, entity upserts, cursor, hud, then
    /// removals for ids that left the view.
    pub fn reconcile(&mut self, frame: Frame) -> Vec<RenderUpdate> {
        let mut updates = Vec::new();

        let mut tiles = BTreeMap::new();
        for tile in frame.tiles {
            if self.tiles.get(&tile.id) != Some(&tile) {
                updates.push(RenderUpdate::TileUpsert(tile.clone()));
            }
            tiles.insert(tile.id.clone(), tile);
        }

        let mut entities = BTreeMap::new();
        for entity in frame.entities {
            if self.entities.get(&entity.id) != Some(&entity) {
                updates.push(RenderUpdate::EntityUpsert(entity.clone()));
            }
            entities.insert(entity.id.clone(), entity);
        }

        if let Some(cursor) = frame.cursor {
            if self.cursor != Some(cursor) {
                updates.push(RenderUpdate::CursorSet(cursor));
            }
        }
        self.cursor = frame.cursor;

        let hud_key = frame.hud.key();
        if hud_key != self.hud_key {
            updates.push(RenderUpdate::HudSet(frame.hud));
            self.hud_key = hud_key;
        }

        for id in self.tiles.keys().filter(|id| !tiles.contains_key(*id)) {
            updates.push(RenderUpdate::tile_remove(id.as_str()));
        }
        for id in self.entities.keys().filter(|id| !entities.contains_key(*id)) {
            updates.push(RenderUpdate::entity_remove(id.as_str()));
        }

        self.tiles = tiles;
        self.entities = entities;
        updates
    }

    /// Remove everything tracked and reset the cache
    pub fn clear(&mut self) -> Vec<RenderUpdate> {
        let mut updates: Vec<RenderUpdate> = self
            .tiles
            .keys()
            .map(|id| RenderUpdate::tile_remove(id.as_str()))
            .collect();
        updates.extend(
            self.entities
                .keys()
                .map(|id| RenderUpdate::entity_remove(id.as_str())),
        );

        *self = Self::default();
        updates
    }
}
