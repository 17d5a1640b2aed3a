//! Domain value types for tiles and rooms.
//!
//! These are pure value types: record identity, timestamps, and the
//! room-to-tile reference belong to the persistence layer.

use crate::Dimension;
use serde::{Deserialize, Serialize};

/// A tile product as sold: face dimensions, wastage margin, and packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSpec {
    /// Display name ("Standard 12x12 ceramic")
    pub name: String,
    /// Tile face length
    pub length: Dimension,
    /// Tile face width
    pub width: Dimension,
    /// Extra material margin for cuts and breakage, in percent.
    /// Values above 100 are legal.
    pub wastage_percent: u32,
    /// Tiles per sales box
    pub tiles_per_box: u32,
    /// Price per box; 0 means unpriced
    #[serde(default)]
    pub price_per_box: f64,
}

/// A rectangular room to be tiled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Display name ("Kitchen")
    pub name: String,
    /// Room length
    pub length: Dimension,
    /// Room width
    pub width: Dimension,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinearUnit;

    #[test]
    fn test_tile_spec_serde_defaults_price() {
        let json = r#"{
            "name": "Plain",
            "length": {"value": 12.0, "unit": "inches"},
            "width": {"value": 12.0, "unit": "inches"},
            "wastage_percent": 10,
            "tiles_per_box": 20
        }"#;
        let tile: TileSpec = serde_json::from_str(json).unwrap();
        assert_eq!(tile.price_per_box, 0.0);
        assert_eq!(tile.length.unit, LinearUnit::Inches);
    }
}
