//! Tile definitions
//!
//! Overworld tiles, temperature zones and their colors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Position;

/// RGB color, serialized as a `#rrggbb` hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Drawn where no tile exists
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#')?;
        if s.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(s.get(i..i + 2)?, 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::parse_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color '{}'", s)))
    }
}

/// Temperature bands by distance from the equator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureZone {
    #[serde(rename = "Extreme Heat")]
    ExtremeHeat,
    Hot,
    Warm,
    Temperate,
    Fresh,
    Cold,
}

impl TemperatureZone {
    /// Zone for a row; depends only on `|y|`
    pub fn from_y(y: i32) -> Self {
        match y.unsigned_abs() {
            0..=3 => TemperatureZone::ExtremeHeat,
            4..=7 => TemperatureZone::Hot,
            8..=11 => TemperatureZone::Warm,
            12..=15 => TemperatureZone::Temperate,
            16..=19 => TemperatureZone::Fresh,
            _ => TemperatureZone::Cold,
        }
    }

    /// Get the zone name for display
    pub fn name(&self) -> &'static str {
        match self {
            TemperatureZone::ExtremeHeat => "Extreme Heat",
            TemperatureZone::Hot => "Hot",
            TemperatureZone::Warm => "Warm",
            TemperatureZone::Temperate => "Temperate",
            TemperatureZone::Fresh => "Fresh",
            TemperatureZone::Cold => "Cold",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            TemperatureZone::ExtremeHeat => Rgb(0xe7, 0x4c, 0x3c),
            TemperatureZone::Hot => Rgb(0xf3, 0x9c, 0x12),
            TemperatureZone::Warm => Rgb(0xf1, 0xc4, 0x0f),
            TemperatureZone::Temperate => Rgb(0x2e, 0xcc, 0x71),
            TemperatureZone::Fresh => Rgb(0x34, 0x98, 0xdb),
            TemperatureZone::Cold => Rgb(0x9b, 0x59, 0xb6),
        }
    }

    /// Zones the player may spawn in
    pub fn is_habitable(&self) -> bool {
        matches!(self, TemperatureZone::Temperate | TemperatureZone::Fresh)
    }
}

impl fmt::Display for TemperatureZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Status tags carried by rendered tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileFlag {
    /// The player's current overworld cell
    Active,
}

/// A single overworld tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub temperature_zone: TemperatureZone,
    pub color: Rgb,
}

impl Tile {
    pub fn new(x: i32, y: i32) -> Self {
        let temperature_zone = TemperatureZone::from_y(y);
        Self {
            x,
            y,
            temperature_zone,
            color: temperature_zone.color(),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn id(&self) -> String {
        self.position().tile_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_bands() {
        assert_eq!(TemperatureZone::from_y(0), TemperatureZone::ExtremeHeat);
        assert_eq!(TemperatureZone::from_y(-3), TemperatureZone::ExtremeHeat);
        assert_eq!(TemperatureZone::from_y(4), TemperatureZone::Hot);
        assert_eq!(TemperatureZone::from_y(-11), TemperatureZone::Warm);
        assert_eq!(TemperatureZone::from_y(15), TemperatureZone::Temperate);
        assert_eq!(TemperatureZone::from_y(19), TemperatureZone::Fresh);
        assert_eq!(TemperatureZone::from_y(20), TemperatureZone::Cold);
        assert_eq!(TemperatureZone::from_y(-22), TemperatureZone::Cold);
    }

    #[test]
    fn test_zone_symmetry() {
        for y in 0..=22 {
            assert_eq!(TemperatureZone::from_y(y), TemperatureZone::from_y(-y));
        }
    }

    #[test]
    fn test_tile_color_follows_zone() {
        let tile = Tile::new(2, 13);
        assert_eq!(tile.temperature_zone, TemperatureZone::Temperate);
        assert_eq!(tile.color.hex(), "#2ecc71");
        assert_eq!(tile.id(), "2,13");
    }

    #[test]
    fn test_color_hex_roundtrip() {
        assert_eq!(Rgb::parse_hex("#9b59b6"), Some(Rgb(0x9b, 0x59, 0xb6)));
        assert_eq!(Rgb::parse_hex("9b59b6"), None);
        assert_eq!(Rgb::BLACK.hex(), "#000000");
    }

    #[test]
    fn test_serialized_names() {
        let zone = serde_json::to_string(&TemperatureZone::ExtremeHeat).unwrap();
        assert_eq!(zone, "\"Extreme Heat\"");
        let flag = serde_json::to_string(&TileFlag::Active).unwrap();
        assert_eq!(flag, "\"active\"");
    }
}
