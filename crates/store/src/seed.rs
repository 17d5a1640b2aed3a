//! Stock tiles inserted into an empty catalog.

use tilecalc_core::{Dimension, LinearUnit, TileSpec};

/// The tiles a fresh catalog starts with.
pub fn stock_tiles() -> Vec<TileSpec> {
    vec![
        TileSpec {
            name: "Ceramic 12x12 in".to_string(),
            length: Dimension::new(12.0, LinearUnit::Inches),
            width: Dimension::new(12.0, LinearUnit::Inches),
            wastage_percent: 10,
            tiles_per_box: 20,
            price_per_box: 0.0,
        },
        TileSpec {
            name: "Subway 6x12 in".to_string(),
            length: Dimension::new(6.0, LinearUnit::Inches),
            width: Dimension::new(12.0, LinearUnit::Inches),
            wastage_percent: 15,
            tiles_per_box: 25,
            price_per_box: 0.0,
        },
        TileSpec {
            name: "Porcelain 18x18 in".to_string(),
            length: Dimension::new(18.0, LinearUnit::Inches),
            width: Dimension::new(18.0, LinearUnit::Inches),
            wastage_percent: 8,
            tiles_per_box: 15,
            price_per_box: 0.0,
        },
        TileSpec {
            name: "Plank 2x1 ft".to_string(),
            length: Dimension::new(2.0, LinearUnit::Feet),
            width: Dimension::new(1.0, LinearUnit::Feet),
            wastage_percent: 12,
            tiles_per_box: 30,
            price_per_box: 0.0,
        },
        TileSpec {
            name: "Mosaic 30x60 cm".to_string(),
            length: Dimension::new(0.3, LinearUnit::Meters),
            width: Dimension::new(0.6, LinearUnit::Meters),
            wastage_percent: 5,
            tiles_per_box: 40,
            price_per_box: 0.0,
        },
    ]
}
