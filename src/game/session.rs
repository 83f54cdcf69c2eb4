//! Game session
//!
//! Owns the world, player and translator for one run and routes input from
//! whichever scene is active.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::debug::DebugTools;
use super::input::{Direction, InputAction};
use crate::data::GameConfig;
use crate::entities::{EntityKind, Player};
use crate::render::{RenderUpdate, Translator, TranslatorError, ViewportId};
use crate::world::{GenerationError, Tile, World};

/// Session construction errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("world generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("translator setup failed: {0}")]
    Translator(#[from] TranslatorError),
}

/// Scenes that show the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Overworld,
    Minimap,
}

impl Scene {
    pub fn viewport(&self) -> ViewportId {
        match self {
            Scene::Overworld => ViewportId::Overworld,
            Scene::Minimap => ViewportId::Minimap,
        }
    }

    pub fn other(&self) -> Scene {
        match self {
            Scene::Overworld => Scene::Minimap,
            Scene::Minimap => Scene::Overworld,
        }
    }
}

/// One run of the game
#[derive(Debug)]
pub struct Session {
    translator: Translator,
    scene: Scene,
    config: GameConfig,
    seed: u64,
    pub debug: DebugTools,
}

impl Session {
    /// Generate a world and start in the overworld
    pub fn new(config: GameConfig) -> Result<Self, SessionError> {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        log::info!("Starting session with seed {}", seed);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut world = World::generate(&mut rng)?;
        scatter_settlements(&mut world, &mut rng, config.settlements);

        let player = Player::new(world.origin());
        let mut session = Self {
            translator: Translator::new(world, player)?,
            scene: Scene::Overworld,
            config,
            seed,
            debug: DebugTools::default(),
        };
        session.enter(Scene::Overworld);
        Ok(session)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn world(&self) -> &World {
        self.translator.world()
    }

    pub fn player(&self) -> &Player {
        self.translator.player()
    }

    /// The tile the player stands on
    pub fn current_tile(&self) -> Option<&Tile> {
        self.world().active_tile()
    }

    /// Switch scenes. Entering a world scene sets up the minimap position.
    pub fn enter(&mut self, scene: Scene) {
        self.translator.player_mut().ensure_minimap();
        if self.scene != scene {
            log::info!("Scene change: {:?} -> {:?}", self.scene, scene);
        }
        self.scene = scene;
    }

    pub fn toggle_map(&mut self) {
        self.enter(self.scene.other());
    }

    /// Route a movement intent to the active scene's movement rule
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        match self.scene {
            Scene::Overworld => self.translator.move_overworld(dx, dy),
            Scene::Minimap => self.translator.move_minimap(dx, dy),
        }
    }

    /// Apply an input action. Returns false when the session should end.
    pub fn handle(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Quit => return false,
            InputAction::ToggleDebug => self.debug.toggle_open(),
            InputAction::DebugToggleSelected if self.debug.open => self.debug.toggle_selected(),
            InputAction::DebugToggleSelected => {}
            InputAction::Move(direction) if self.debug.open => match direction {
                Direction::Up => self.debug.navigate(-1),
                Direction::Down => self.debug.navigate(1),
                Direction::Left | Direction::Right => {}
            },
            InputAction::Move(direction) => {
                self.move_player(direction);
            }
            InputAction::ToggleMap => self.toggle_map(),
        }
        true
    }

    /// Render updates for the active scene
    pub fn frame(&mut self) -> Vec<RenderUpdate> {
        self.frame_for(self.scene)
    }

    /// Render updates for a specific scene's viewport
    pub fn frame_for(&mut self, scene: Scene) -> Vec<RenderUpdate> {
        let (spec, size) = match scene {
            Scene::Overworld => (self.config.overworld_spec(), self.config.overworld.size()),
            Scene::Minimap => (self.config.minimap_spec(), self.config.minimap.size()),
        };
        self.translator.diff(scene.viewport(), Some(&spec), Some(size))
    }
}

/// Place settlements on distinct random tiles, never on the spawn
fn scatter_settlements<R: Rng + ?Sized>(world: &mut World, rng: &mut R, count: u32) {
    let spawn = world.origin();
    let sites = world
        .tiles()
        .map(Tile::position)
        .filter(|pos| *pos != spawn)
        .choose_multiple(rng, count as usize);

    for site in sites {
        world.spawn_entity(EntityKind::Settlement, site);
    }
}
