//! RON configuration loader
//!
//! Loads settings from a RON file, with fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{ProjectionMode, RenderSpec, ViewportSize};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "MERIDIAN_CONFIG";
/// Config file name looked up in the working and config directories
pub const CONFIG_FILE: &str = "meridian.ron";

/// Configuration load errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

/// Pixel layout of one viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub width: f32,
    pub height: f32,
    pub tile_size: f32,
}

impl ViewConfig {
    pub fn size(&self) -> ViewportSize {
        ViewportSize::new(self.width, self.height)
    }

    pub fn spec(&self, mode: ProjectionMode) -> RenderSpec {
        RenderSpec::new(mode, self.tile_size)
    }
}

/// All runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// World seed; a random one is drawn when unset
    pub seed: Option<u64>,
    /// env_logger filter used when RUST_LOG is not set
    pub log_filter: String,
    /// Log file written by the terminal front end
    pub log_file: PathBuf,
    pub overworld: ViewConfig,
    pub minimap: ViewConfig,
    /// Settlements scattered over the map at startup
    pub settlements: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: "info".to_string(),
            log_file: PathBuf::from("meridian.log"),
            // 640x640 with 128px tiles fits the 5x5 window
            overworld: ViewConfig {
                width: 640.0,
                height: 640.0,
                tile_size: 128.0,
            },
            minimap: ViewConfig {
                width: 640.0,
                height: 640.0,
                tile_size: 32.0,
            },
            settlements: 6,
        }
    }
}

impl GameConfig {
    /// Load from the first readable config file, or use defaults.
    ///
    /// Nothing is logged here since this runs before the logger exists.
    /// Call [`ConfigLoad::log`] once logging is up.
    pub fn load() -> ConfigLoad {
        Self::load_from(&candidate_paths())
    }

    /// Try `paths` in order; files that exist but fail are recorded
    pub fn load_from(paths: &[PathBuf]) -> ConfigLoad {
        let mut errors = Vec::new();
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::from_path(path) {
                Ok(config) => {
                    return ConfigLoad {
                        config,
                        source: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }
        ConfigLoad {
            config: Self::default(),
            source: None,
            errors,
        }
    }

    /// Load a specific RON file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse RON text; missing fields take their defaults
    pub fn from_ron(content: &str) -> Result<Self, String> {
        ron::from_str(content).map_err(|e| e.to_string())
    }

    /// Pretty-printed RON form
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Write this config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_ron()?).map_err(io_err)
    }

    pub fn overworld_spec(&self) -> RenderSpec {
        self.overworld.spec(ProjectionMode::Overworld)
    }

    pub fn minimap_spec(&self) -> RenderSpec {
        self.minimap.spec(ProjectionMode::Minimap)
    }
}

/// Result of a config lookup
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: GameConfig,
    /// File the config came from; `None` means defaults
    pub source: Option<PathBuf>,
    /// Files that were found but could not be used
    pub errors: Vec<ConfigError>,
}

impl ConfigLoad {
    /// Report how the config was resolved
    pub fn log(&self) {
        for error in &self.errors {
            log::warn!("Ignoring config: {}", error);
        }
        match &self.source {
            Some(path) => log::info!("Loaded config from {}", path.display()),
            None => log::info!("No usable config file found, using defaults"),
        }
    }
}

/// Platform config directory path for the config file
pub fn config_dir_path() -> Option<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "meridian", "Meridian")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Lookup order: $MERIDIAN_CONFIG, ./meridian.ron, platform config dir
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(explicit));
    }
    paths.push(PathBuf::from(CONFIG_FILE));
    if let Some(path) = config_dir_path() {
        paths.push(path);
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = GameConfig::from_ron("(seed: Some(99), settlements: 0)").unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.settlements, 0);
        assert_eq!(config.overworld, GameConfig::default().overworld);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(GameConfig::from_ron("(seed: \"nope\")").is_err());
    }

    #[test]
    fn test_ron_roundtrip() {
        let mut config = GameConfig::default();
        config.seed = Some(7);
        config.minimap.tile_size = 16.0;
        let text = config.to_ron().unwrap();
        assert_eq!(GameConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::from_path(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_records_bad_file_and_falls_through() {
        let dir = std::env::temp_dir().join(format!("meridian-config-{}", std::process::id()));
        let bad = dir.join("bad.ron");
        let good = dir.join("good.ron");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&bad, "(seed: \"nope\")").unwrap();
        fs::write(&good, "(seed: Some(5))").unwrap();

        let paths = vec![dir.join("missing.ron"), bad.clone(), good.clone()];
        let loaded = GameConfig::load_from(&paths);
        assert_eq!(loaded.config.seed, Some(5));
        assert_eq!(loaded.source, Some(good));
        assert_eq!(loaded.errors.len(), 1);
        assert!(matches!(&loaded.errors[0], ConfigError::Parse { path, .. } if *path == bad));

        let fallback = GameConfig::load_from(&[bad]);
        assert_eq!(fallback.config, GameConfig::default());
        assert!(fallback.source.is_none());
        assert_eq!(fallback.errors.len(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_specs() {
        let config = GameConfig::default();
        assert_eq!(config.overworld_spec().mode, ProjectionMode::Overworld);
        assert_eq!(config.minimap_spec().tile_size, 32.0);
        assert_eq!(config.overworld.size().center(), (320.0, 320.0));
    }
}
