//! Render update vocabulary
//!
//! The translator speaks to display code only through these events. The wire
//! form is `{"kind": "tile:upsert", "payload": {...}}`.

use serde::{Deserialize, Serialize};

use crate::entities::EntityKind;
use crate::world::{Position, Rgb, TemperatureZone, TileFlag};

/// A tile to draw, centered at `(x, y)` in viewport pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileUpsert {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Rgb,
    pub flags: Vec<TileFlag>,
}

impl TileUpsert {
    pub fn is_active(&self) -> bool {
        self.flags.contains(&TileFlag::Active)
    }
}

/// An entity to draw, centered at `(x, y)` in viewport pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityUpsert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Rgb,
}

/// Identifies a tile or entity to drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    pub id: String,
}

/// The player cursor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorSet {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// A HUD coordinate pair; both halves are null when the source is unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HudCell {
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl From<Position> for HudCell {
    fn from(pos: Position) -> Self {
        Self {
            x: Some(pos.x),
            y: Some(pos.y),
        }
    }
}

/// HUD contents for one viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    #[serde(rename = "O")]
    pub overworld: Position,
    #[serde(rename = "M")]
    pub minimap: HudCell,
    /// Only reported by the overworld projection
    #[serde(
        rename = "temperatureZone",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub temperature_zone: Option<TemperatureZone>,
}

impl Hud {
    /// Canonical serialized form used for change detection
    pub fn key(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::warn!("Failed to serialize HUD payload: {}", e);
            format!("{:?}", self)
        })
    }
}

/// One incremental change to a display-side cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload")]
pub enum RenderUpdate {
    #[serde(rename = "tile:upsert")]
    TileUpsert(TileUpsert),
    #[serde(rename = "tile:remove")]
    TileRemove(Removal),
    #[serde(rename = "entity:upsert")]
    EntityUpsert(EntityUpsert),
    #[serde(rename = "entity:remove")]
    EntityRemove(Removal),
    #[serde(rename = "cursor:set")]
    CursorSet(CursorSet),
    #[serde(rename = "hud:set")]
    HudSet(Hud),
}

impl RenderUpdate {
    pub fn tile_remove(id: impl Into<String>) -> Self {
        RenderUpdate::TileRemove(Removal { id: id.into() })
    }

    pub fn entity_remove(id: impl Into<String>) -> Self {
        RenderUpdate::EntityRemove(Removal { id: id.into() })
    }

    /// Wire name of the event kind
    pub fn kind(&self) -> &'static str {
        match self {
            RenderUpdate::TileUpsert(_) => "tile:upsert",
            RenderUpdate::TileRemove(_) => "tile:remove",
            RenderUpdate::EntityUpsert(_) => "entity:upsert",
            RenderUpdate::EntityRemove(_) => "entity:remove",
            RenderUpdate::CursorSet(_) => "cursor:set",
            RenderUpdate::HudSet(_) => "hud:set",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let update = RenderUpdate::tile_remove("3,4");
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"kind":"tile:remove","payload":{"id":"3,4"}}"#);
    }

    #[test]
    fn test_hud_key_nulls_unset_minimap() {
        let hud = Hud {
            overworld: Position::new(1, 14),
            minimap: HudCell::default(),
            temperature_zone: Some(TemperatureZone::Temperate),
        };
        assert_eq!(
            hud.key(),
            r#"{"O":{"x":1,"y":14},"M":{"x":null,"y":null},"temperatureZone":"Temperate"}"#
        );
    }

    #[test]
    fn test_hud_key_omits_zone() {
        let hud = Hud {
            overworld: Position::new(0, 0),
            minimap: HudCell { x: Some(2), y: Some(5) },
            temperature_zone: None,
        };
        assert_eq!(hud.key(), r#"{"O":{"x":0,"y":0},"M":{"x":2,"y":5}}"#);
    }

    #[test]
    fn test_entity_upsert_payload() {
        let update = RenderUpdate::EntityUpsert(EntityUpsert {
            id: "entity:3".to_string(),
            kind: EntityKind::Settlement,
            x: 448.0,
            y: 320.0,
            size: 128.0,
            color: Rgb(139, 90, 43),
        });
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(
            json,
            r##"{"kind":"entity:upsert","payload":{"id":"entity:3","type":"settlement","x":448.0,"y":320.0,"size":128.0,"color":"#8b5a2b"}}"##
        );
    }

    #[test]
    fn test_kind_matches_tag() {
        let update = RenderUpdate::CursorSet(CursorSet { x: 1.0, y: 2.0, size: 3.0 });
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["kind"], update.kind());
    }
}
