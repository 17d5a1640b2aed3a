//! Quote command - one-shot coverage from raw measurements.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tilecalc_cli::output::Status;
use tilecalc_core::{compute_coverage, convert_to_meters, LinearUnit};

/// JSON output for a quote
#[derive(Debug, Serialize)]
struct JsonQuoteOutput {
    tile_count: u64,
    box_count: u64,
    room_area: f64,
    area_unit: String,
}

/// Compute a coverage quote without touching the catalog.
#[allow(clippy::too_many_arguments)]
pub fn run(
    room_length: f64,
    room_width: f64,
    room_unit: LinearUnit,
    tile_length: f64,
    tile_width: f64,
    tile_unit: LinearUnit,
    wastage: u32,
    box_size: u32,
    format: &str,
) -> Result<()> {
    let coverage = compute_coverage(
        convert_to_meters(room_length, room_unit),
        convert_to_meters(room_width, room_unit),
        convert_to_meters(tile_length, tile_unit),
        convert_to_meters(tile_width, tile_unit),
        box_size,
        wastage,
    )?;

    // displayed area is in the entered unit, not meters
    let room_area = room_length * room_width;

    if format == "json" {
        let output = JsonQuoteOutput {
            tile_count: coverage.tile_count,
            box_count: coverage.box_count,
            room_area,
            area_unit: room_unit.symbol().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if tile_length * tile_width <= 0.0 {
        Status::warning("Tile area is zero or negative; nothing to compute");
    }
    println!("Tiles: {}", coverage.tile_count.to_string().green().bold());
    println!("Boxes: {}", coverage.box_count.to_string().green().bold());
    Ok(())
}
