//! Rendering abstraction layer
//!
//! World truth reaches display code only as a stream of render updates:
//! - `translator`: applies movement and diffs truth against each viewport
//! - `updates`: the event vocabulary
//! - `atlas`: the consumer-side cache those events build up

pub mod atlas;
pub mod translator;
pub mod updates;
pub mod viewport;

pub use atlas::RenderAtlas;
pub use translator::{Translator, TranslatorError, OVERWORLD_RADIUS};
pub use updates::{CursorSet, EntityUpsert, Hud, HudCell, Removal, RenderUpdate, TileUpsert};
pub use viewport::{Frame, ProjectionMode, RenderSpec, ViewportCache, ViewportId, ViewportSize};
