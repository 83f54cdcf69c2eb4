//! External configuration
//!
//! Settings are read from a RON file so seeds and viewport layout can be
//! changed without rebuilding.

pub mod config;

pub use config::{ConfigError, ConfigLoad, GameConfig, ViewConfig};
