//! Truth-to-render translation
//!
//! The translator owns the authoritative world and player. It applies
//! movement intents and turns the current truth into the smallest list of
//! render updates that brings a viewport's last rendered state up to date.

use std::collections::HashMap;

use thiserror::Error;

use super::updates::{CursorSet, EntityUpsert, Hud, HudCell, RenderUpdate, TileUpsert};
use super::viewport::{Frame, ProjectionMode, RenderSpec, ViewportCache, ViewportId, ViewportSize};
use crate::entities::Player;
use crate::world::{LocalPosition, Position, Rgb, World, MINIMAP_GRID};

/// Overworld window radius in cells (5x5 window)
pub const OVERWORLD_RADIUS: i32 = 2;

/// Translator construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslatorError {
    #[error("player at {0} is not on a tile")]
    PlayerOffMap(Position),
}

/// Owns world truth and per-viewport render caches
#[derive(Debug)]
pub struct Translator {
    world: World,
    player: Player,
    caches: HashMap<ViewportId, ViewportCache>,
}

impl Translator {
    /// Create a translator. The world's active cell is synced to the player.
    ///
    /// Fails when the player does not stand on a tile.
    pub fn new(mut world: World, player: Player) -> Result<Self, TranslatorError> {
        let position = player.overworld();
        if !world.set_active(position) {
            return Err(TranslatorError::PlayerOffMap(position));
        }
        Ok(Self {
            world,
            player,
            caches: HashMap::new(),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Cached state of a viewport, if it has been diffed before
    pub fn cache(&self, viewport: ViewportId) -> Option<&ViewportCache> {
        self.caches.get(&viewport)
    }

    /// Move the player one step on the overworld.
    ///
    /// Returns false, changing nothing, when no tile exists at the target.
    pub fn move_overworld(&mut self, dx: i32, dy: i32) -> bool {
        let from = self.player.overworld();
        let to = from.offset(dx, dy);

        if !self.world.set_active(to) {
            log::debug!("Overworld move {} -> {} blocked: no tile", from, to);
            return false;
        }

        self.player.location.overworld = to;
        log::debug!("Overworld move {} -> {}", from, to);
        true
    }

    /// Move the player inside the minimap grid.
    ///
    /// Leaving the grid on an axis steps the overworld cell that way and
    /// wraps to the opposite edge. If that overworld step is blocked the
    /// coordinate stays on the edge instead. Does nothing while the minimap
    /// position is unset. Returns whether anything moved.
    pub fn move_minimap(&mut self, dx: i32, dy: i32) -> bool {
        let Some(start) = self.player.minimap() else {
            log::debug!("Minimap move ignored: minimap position unset");
            return false;
        };
        let overworld_before = self.player.overworld();

        let x = self.cross_edge(start.x + dx, Axis::Horizontal);
        let y = self.cross_edge(start.y + dy, Axis::Vertical);
        let end = LocalPosition::new(x, y);
        self.player.location.minimap = Some(end);

        end != start || self.player.overworld() != overworld_before
    }

    fn cross_edge(&mut self, value: i32, axis: Axis) -> i32 {
        let step = if value < 0 {
            -1
        } else if value >= MINIMAP_GRID {
            1
        } else {
            return value;
        };

        let (dx, dy) = match axis {
            Axis::Horizontal => (step, 0),
            Axis::Vertical => (0, step),
        };
        let crossed = self.move_overworld(dx, dy);

        match (crossed, step < 0) {
            (true, true) => MINIMAP_GRID - 1,
            (true, false) => 0,
            (false, true) => 0,
            (false, false) => MINIMAP_GRID - 1,
        }
    }

    /// Compute the updates that bring `viewport` up to date.
    ///
    /// Without a spec or a viewport size nothing is visible, so everything
    /// previously drawn is removed and the cache is reset.
    pub fn diff(
        &mut self,
        viewport: ViewportId,
        spec: Option<&RenderSpec>,
        size: Option<ViewportSize>,
    ) -> Vec<RenderUpdate> {
        let frame = match (spec, size) {
            (Some(spec), Some(size)) => match spec.mode {
                ProjectionMode::Overworld => self.overworld_frame(spec.tile_size, size),
                ProjectionMode::Minimap => self.minimap_frame(spec.tile_size),
            },
            _ => {
                let updates = self
                    .caches
                    .get_mut(&viewport)
                    .map(ViewportCache::clear)
                    .unwrap_or_default();
                log::debug!(
                    "Viewport {} has nothing to render; removed {} items",
                    viewport.name(),
                    updates.len()
                );
                return updates;
            }
        };

        let updates = self.caches.entry(viewport).or_default().reconcile(frame);
        log::trace!("Viewport {}: {} updates", viewport.name(), updates.len());
        updates
    }

    fn overworld_frame(&self, tile_size: f32, size: ViewportSize) -> Frame {
        let (cx, cy) = size.center();
        let center = self.player.overworld();
        let screen = |pos: Position| {
            (
                cx + (pos.x - center.x) as f32 * tile_size,
                cy + (pos.y - center.y) as f32 * tile_size,
            )
        };

        let mut tiles = Vec::new();
        for dy in -OVERWORLD_RADIUS..=OVERWORLD_RADIUS {
            for dx in -OVERWORLD_RADIUS..=OVERWORLD_RADIUS {
                let pos = center.offset(dx, dy);
                let Some(tile) = self.world.get_tile(pos.x, pos.y) else {
                    continue;
                };
                let (x, y) = screen(pos);
                tiles.push(TileUpsert {
                    id: pos.tile_id(),
                    x,
                    y,
                    size: tile_size,
                    color: tile.color,
                    flags: self.world.flags_at(pos),
                });
            }
        }

        let entities = self
            .world
            .entities()
            .filter(|e| e.position.chebyshev_distance(&center) <= OVERWORLD_RADIUS)
            .map(|e| {
                let (x, y) = screen(e.position);
                EntityUpsert {
                    id: e.id.to_string(),
                    kind: e.kind,
                    x,
                    y,
                    size: tile_size,
                    color: e.color,
                }
            })
            .collect();

        let hud = Hud {
            overworld: center,
            minimap: self.minimap_hud(),
            temperature_zone: self
                .world
                .get_tile(center.x, center.y)
                .map(|t| t.temperature_zone),
        };

        Frame {
            tiles,
            entities,
            cursor: Some(CursorSet {
                x: cx,
                y: cy,
                size: tile_size,
            }),
            hud,
        }
    }

    fn minimap_frame(&self, tile_size: f32) -> Frame {
        let center = self.player.overworld();
        let color = self
            .world
            .get_tile(center.x, center.y)
            .map_or(Rgb::BLACK, |t| t.color);
        let cell_center = |i: i32| i as f32 * tile_size + tile_size / 2.0;

        let mut tiles = Vec::with_capacity((MINIMAP_GRID * MINIMAP_GRID) as usize);
        for y in 0..MINIMAP_GRID {
            for x in 0..MINIMAP_GRID {
                tiles.push(TileUpsert {
                    id: LocalPosition::new(x, y).tile_id(),
                    x: cell_center(x),
                    y: cell_center(y),
                    size: tile_size,
                    color,
                    flags: Vec::new(),
                });
            }
        }

        let cursor = self.player.minimap().map(|local| CursorSet {
            x: cell_center(local.x),
            y: cell_center(local.y),
            size: tile_size,
        });

        Frame {
            tiles,
            entities: Vec::new(),
            cursor,
            hud: Hud {
                overworld: center,
                minimap: self.minimap_hud(),
                temperature_zone: None,
            },
        }
    }

    fn minimap_hud(&self) -> HudCell {
        match self.player.minimap() {
            Some(local) => HudCell {
                x: Some(local.x),
                y: Some(local.y),
            },
            None => HudCell::default(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}
