//! Estimate command - coverage for a recorded room.

use crate::config::open_catalog;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;
use tilecalc_cli::output::{format_area, format_face, Status};
use tilecalc_core::estimate;

/// JSON output for an estimate
#[derive(Debug, Serialize)]
struct JsonEstimateOutput {
    room_id: u32,
    room: String,
    tile: String,
    tile_count: u64,
    box_count: u64,
    room_area: f64,
    area_unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<f64>,
}

/// Run the estimate for a stored room, marking it calculated on success.
pub fn run(data_file: &Path, room_id: u32, format: &str) -> Result<()> {
    let mut catalog = open_catalog(data_file)?;

    let (output, room_name) = {
        let joined = catalog.room_with_tile(room_id)?;
        let est = estimate(&joined.room.spec, &joined.tile.spec)?;

        let output = JsonEstimateOutput {
            room_id,
            room: joined.room.spec.name.clone(),
            tile: joined.tile.spec.name.clone(),
            tile_count: est.tile_count,
            box_count: est.box_count,
            // the area is shown in the room's own units, as entered
            room_area: est.room_area,
            area_unit: joined.room.spec.length.unit.symbol().to_string(),
            cost: est.cost,
        };
        (output, joined.room.spec.name.clone())
    };

    catalog.mark_calculated(room_id)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let joined = catalog.room_with_tile(room_id)?;
    Status::header(&format!("Estimate for {room_name}"));
    println!(
        "  Room: {} ({})",
        format_face(&joined.room.spec.length, &joined.room.spec.width),
        format_area(output.room_area, &output.area_unit)
    );
    println!(
        "  Tile: {} ({}, wastage {}%, box of {})",
        joined.tile.spec.name,
        format_face(&joined.tile.spec.length, &joined.tile.spec.width),
        joined.tile.spec.wastage_percent,
        joined.tile.spec.tiles_per_box,
    );
    println!();
    println!("  Tiles: {}", output.tile_count.to_string().green().bold());
    println!("  Boxes: {}", output.box_count.to_string().green().bold());
    if let Some(cost) = output.cost {
        println!("  Cost:  {}", format!("{cost:.2}").green());
    }
    Ok(())
}
