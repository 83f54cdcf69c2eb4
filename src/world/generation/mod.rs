//! Procedural overworld generation
//!
//! Builds the banded continent and picks a habitable spawn tile. All
//! randomness comes from the caller's generator, so a seeded `StdRng`
//! reproduces the same world.

pub mod bands;

pub use bands::{RowRange, MAX_Y, MIN_Y, SPINE_X};

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::{Position, Tile};

/// Reasons a world cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no valid spawn tiles found")]
    NoSpawnCandidates,
}

/// Output of the generator
#[derive(Debug, Clone)]
pub struct GeneratedWorld {
    pub tiles: BTreeMap<Position, Tile>,
    pub rows: BTreeMap<i32, RowRange>,
    pub spawn: Position,
}

/// Generate a complete overworld
pub fn generate_world<R: Rng + ?Sized>(rng: &mut R) -> Result<GeneratedWorld, GenerationError> {
    let rows = bands::generate_rows(rng);
    let tiles = tiles_from_rows(&rows);
    let spawn = select_spawn(rng, &tiles)?;

    Ok(GeneratedWorld { tiles, rows, spawn })
}

/// Emit one tile per column of every row
pub fn tiles_from_rows(rows: &BTreeMap<i32, RowRange>) -> BTreeMap<Position, Tile> {
    let mut tiles = BTreeMap::new();
    for (&y, range) in rows {
        for x in range.left..=range.right {
            tiles.insert(Position::new(x, y), Tile::new(x, y));
        }
    }
    tiles
}

/// Pick a spawn uniformly among temperate and fresh tiles
pub fn select_spawn<R: Rng + ?Sized>(
    rng: &mut R,
    tiles: &BTreeMap<Position, Tile>,
) -> Result<Position, GenerationError> {
    let candidates: Vec<Position> = tiles
        .values()
        .filter(|tile| tile.temperature_zone.is_habitable())
        .map(Tile::position)
        .collect();

    candidates
        .choose(rng)
        .copied()
        .ok_or(GenerationError::NoSpawnCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::TemperatureZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_row_contains_spine() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let world = generate_world(&mut rng).unwrap();
            for y in MIN_Y..=MAX_Y {
                assert!(
                    world.tiles.contains_key(&Position::new(SPINE_X, y)),
                    "seed {} row {} lost the spine",
                    seed,
                    y
                );
            }
        }
    }

    #[test]
    fn test_rows_are_contiguous() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = generate_world(&mut rng).unwrap();
        for (&y, range) in &world.rows {
            let count = world.tiles.keys().filter(|p| p.y == y).count() as i32;
            assert_eq!(count, range.width());
            assert!(world.tiles.contains_key(&Position::new(range.left, y)));
            assert!(world.tiles.contains_key(&Position::new(range.right, y)));
        }
    }

    #[test]
    fn test_spawn_is_habitable() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let world = generate_world(&mut rng).unwrap();
            let tile = &world.tiles[&world.spawn];
            assert!(matches!(
                tile.temperature_zone,
                TemperatureZone::Temperate | TemperatureZone::Fresh
            ));
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = generate_world(&mut StdRng::seed_from_u64(1234)).unwrap();
        let b = generate_world(&mut StdRng::seed_from_u64(1234)).unwrap();
        assert_eq!(a.rows, b.rows);
        assert_eq!(a.tiles, b.tiles);
        assert_eq!(a.spawn, b.spawn);
    }

    #[test]
    fn test_no_spawn_candidates() {
        let mut rows = BTreeMap::new();
        rows.insert(0, RowRange::new(-1, 1));
        rows.insert(20, RowRange::new(0, 0));
        let tiles = tiles_from_rows(&rows);

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            select_spawn(&mut rng, &tiles),
            Err(GenerationError::NoSpawnCandidates)
        );
    }
}
