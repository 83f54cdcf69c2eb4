//! Overworld map
//!
//! Owns the generated tiles, the spawn origin and the active cell.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::generation::{self, GenerationError, RowRange, MAX_Y, MIN_Y};
use super::tile::{Tile, TileFlag};
use super::Position;
use crate::entities::{Entity, EntityId, EntityKind};

/// The generated overworld.
///
/// Tile shape never changes after construction. The only mutable state is
/// the active cell, which follows the player, and the entity list.
#[derive(Debug, Clone)]
pub struct World {
    pub min_y: i32,
    pub max_y: i32,
    tiles: BTreeMap<Position, Tile>,
    rows: BTreeMap<i32, RowRange>,
    /// Spawn tile chosen at generation time
    origin: Position,
    /// Cell carrying the `active` flag
    active: Position,
    entities: BTreeMap<EntityId, Entity>,
    next_entity_id: u64,
}

impl World {
    /// Generate a world from the given random source
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GenerationError> {
        let generated = generation::generate_world(rng)?;
        let world = Self::assemble(generated.rows, generated.tiles, generated.spawn);

        log::info!(
            "Generated overworld: {} tiles across {} rows, spawn at {}",
            world.tiles.len(),
            world.rows.len(),
            world.origin
        );

        Ok(world)
    }

    /// Generate a world from a fixed seed
    pub fn with_seed(seed: u64) -> Result<Self, GenerationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(&mut rng)
    }

    /// Build a world from explicit row ranges.
    ///
    /// Used for hand-made maps; `spawn` must name an existing tile.
    pub fn from_rows(rows: BTreeMap<i32, RowRange>, spawn: Position) -> Option<Self> {
        let tiles = generation::tiles_from_rows(&rows);
        if !tiles.contains_key(&spawn) {
            return None;
        }
        Some(Self::assemble(rows, tiles, spawn))
    }

    fn assemble(
        rows: BTreeMap<i32, RowRange>,
        tiles: BTreeMap<Position, Tile>,
        spawn: Position,
    ) -> Self {
        Self {
            min_y: rows.keys().next().copied().unwrap_or(MIN_Y),
            max_y: rows.keys().last().copied().unwrap_or(MAX_Y),
            tiles,
            rows,
            origin: spawn,
            active: spawn,
            entities: BTreeMap::new(),
            next_entity_id: 1,
        }
    }

    /// Check if a tile exists at the given cell
    pub fn has_tile(&self, x: i32, y: i32) -> bool {
        self.tiles.contains_key(&Position::new(x, y))
    }

    /// Get tile at position
    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.tiles.get(&Position::new(x, y))
    }

    /// All tiles in row-major order (by y, then x)
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Row extents keyed by y
    pub fn rows(&self) -> &BTreeMap<i32, RowRange> {
        &self.rows
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn active(&self) -> Position {
        self.active
    }

    /// The tile under the active cell
    pub fn active_tile(&self) -> Option<&Tile> {
        self.tiles.get(&self.active)
    }

    /// Move the active flag. Rejected if the cell has no tile.
    pub fn set_active(&mut self, pos: Position) -> bool {
        if !self.tiles.contains_key(&pos) {
            return false;
        }
        self.active = pos;
        true
    }

    pub fn is_active(&self, pos: Position) -> bool {
        self.active == pos
    }

    /// Status flags of the tile at `pos`
    pub fn flags_at(&self, pos: Position) -> Vec<TileFlag> {
        if self.is_active(pos) {
            vec![TileFlag::Active]
        } else {
            Vec::new()
        }
    }

    /// Place an inert entity on an existing tile
    pub fn spawn_entity(&mut self, kind: EntityKind, pos: Position) -> Option<EntityId> {
        if !self.tiles.contains_key(&pos) {
            log::debug!("Refusing to spawn {:?} off-map at {}", kind, pos);
            return None;
        }
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(id, Entity::new(id, kind, pos));
        Some(id)
    }

    pub fn despawn_entity(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Entities standing on a cell
    pub fn entities_at(&self, pos: Position) -> impl Iterator<Item = &Entity> {
        self.entities.values().filter(move |e| e.position == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_world() -> World {
        // Three rows; row 0 stops at x = 0 so (1, 0) is off-map
        let mut rows = BTreeMap::new();
        rows.insert(-1, RowRange::new(-2, 2));
        rows.insert(0, RowRange::new(-2, 0));
        rows.insert(1, RowRange::new(-1, 1));
        World::from_rows(rows, Position::new(0, 0)).unwrap()
    }

    #[test]
    fn test_exactly_one_active_after_generation() {
        for seed in 0..50 {
            let world = World::with_seed(seed).unwrap();
            let active: Vec<_> = world
                .tiles()
                .filter(|t| world.flags_at(t.position()).contains(&TileFlag::Active))
                .collect();
            assert_eq!(active.len(), 1);
            assert!(active[0].temperature_zone.is_habitable());
            assert_eq!(active[0].position(), world.origin());
        }
    }

    #[test]
    fn test_bounds() {
        let world = World::with_seed(9).unwrap();
        assert_eq!(world.min_y, -22);
        assert_eq!(world.max_y, 22);
        assert_eq!(world.rows().len(), 45);
    }

    #[test]
    fn test_lookup() {
        let world = strip_world();
        assert!(world.has_tile(-2, 0));
        assert!(!world.has_tile(1, 0));
        assert!(world.get_tile(1, 0).is_none());
        assert_eq!(world.get_tile(1, 1).map(Tile::id), Some("1,1".to_string()));
    }

    #[test]
    fn test_set_active_rejects_missing_tile() {
        let mut world = strip_world();
        assert!(!world.set_active(Position::new(1, 0)));
        assert_eq!(world.active(), Position::new(0, 0));

        assert!(world.set_active(Position::new(-1, 0)));
        assert!(world.is_active(Position::new(-1, 0)));
        assert!(world.flags_at(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_from_rows_requires_spawn_tile() {
        let mut rows = BTreeMap::new();
        rows.insert(0, RowRange::new(0, 0));
        assert!(World::from_rows(rows, Position::new(3, 0)).is_none());
    }

    #[test]
    fn test_spawn_entity_on_map_only() {
        let mut world = strip_world();
        let id = world.spawn_entity(EntityKind::Marker, Position::new(-2, -1));
        assert!(id.is_some());
        assert!(world.spawn_entity(EntityKind::Marker, Position::new(5, 5)).is_none());
        assert_eq!(world.entities_at(Position::new(-2, -1)).count(), 1);

        let removed = world.despawn_entity(id.unwrap());
        assert!(removed.is_some());
        assert_eq!(world.entities().count(), 0);
    }
}
