//! Tile catalog commands.

use crate::config::open_catalog;
use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;
use tilecalc_cli::output::{format_face, Status};
use tilecalc_core::{Dimension, LinearUnit, TileSpec};
use tilecalc_store::TileRecord;

/// JSON output for tile listings
#[derive(Debug, Serialize)]
struct JsonTilesOutput<'a> {
    total: usize,
    tiles: Vec<&'a TileRecord>,
}

fn print_tile_line(tile: &TileRecord) {
    let face = format_face(&tile.spec.length, &tile.spec.width);
    let price = if tile.spec.price_per_box > 0.0 {
        format!("  {:.2}/box", tile.spec.price_per_box)
    } else {
        String::new()
    };
    println!(
        "  {:>4}  {:<24} {:<14} wastage {:>3}%  box of {}{}",
        format!("#{}", tile.id).green(),
        tile.spec.name,
        face,
        tile.spec.wastage_percent,
        tile.spec.tiles_per_box,
        price.dimmed(),
    );
}

fn print_tiles(tiles: &[&TileRecord], format: &str) -> Result<()> {
    if format == "json" {
        let output = JsonTilesOutput { total: tiles.len(), tiles: tiles.to_vec() };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Status::header("Tiles");
    if tiles.is_empty() {
        println!("  (none)");
        return Ok(());
    }
    for tile in tiles {
        print_tile_line(tile);
    }
    println!();
    println!("  Total: {} tiles", tiles.len().to_string().green());
    Ok(())
}

/// Add a tile to the catalog.
#[allow(clippy::too_many_arguments)]
pub fn run_add(
    data_file: &Path,
    name: &str,
    length: f64,
    width: f64,
    length_unit: LinearUnit,
    width_unit: LinearUnit,
    wastage: u32,
    box_size: u32,
    price: f64,
    format: &str,
) -> Result<()> {
    let mut catalog = open_catalog(data_file)?;

    let spec = TileSpec {
        name: name.to_string(),
        length: Dimension::new(length, length_unit),
        width: Dimension::new(width, width_unit),
        wastage_percent: wastage,
        tiles_per_box: box_size,
        price_per_box: price,
    };
    let id = catalog.add_tile(spec)?;

    if format == "json" {
        if let Some(record) = catalog.tile(id) {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
    } else {
        Status::success(&format!("Added tile #{id}: {name}"));
    }
    Ok(())
}

/// List all tiles.
pub fn run_list(data_file: &Path, format: &str) -> Result<()> {
    let catalog = open_catalog(data_file)?;
    print_tiles(&catalog.tiles(), format)
}

/// Show one tile and the rooms that use it.
pub fn run_show(data_file: &Path, id: u32, format: &str) -> Result<()> {
    let catalog = open_catalog(data_file)?;

    let Some(tile) = catalog.tile(id) else {
        bail!("Tile not found: #{id}");
    };
    let rooms = catalog.rooms_by_tile(id);

    if format == "json" {
        #[derive(Serialize)]
        struct JsonTileDetail<'a> {
            tile: &'a TileRecord,
            rooms: Vec<&'a tilecalc_store::RoomRecord>,
        }
        println!("{}", serde_json::to_string_pretty(&JsonTileDetail { tile, rooms })?);
        return Ok(());
    }

    Status::header(&format!("Tile #{id}"));
    print_tile_line(tile);

    if rooms.is_empty() {
        println!("\n  Used by no rooms");
    } else {
        println!("\n  Used by {} room(s):", rooms.len());
        for room in rooms {
            println!(
                "    {:>4}  {:<20} {}",
                format!("#{}", room.id).green(),
                room.spec.name,
                format_face(&room.spec.length, &room.spec.width)
            );
        }
    }
    Ok(())
}

/// Search tiles by name.
pub fn run_search(data_file: &Path, query: &str, format: &str) -> Result<()> {
    let catalog = open_catalog(data_file)?;
    let hits = catalog.search_tiles(query);

    if format != "json" && hits.is_empty() {
        Status::info(&format!("No tiles matching \"{query}\""));
        return Ok(());
    }
    print_tiles(&hits, format)
}

/// Remove a tile; rooms referencing it are removed with it.
pub fn run_remove(data_file: &Path, id: u32, format: &str) -> Result<()> {
    let mut catalog = open_catalog(data_file)?;
    let cascaded = catalog.remove_tile(id)?;

    if format == "json" {
        println!(
            "{}",
            serde_json::json!({ "removed": id, "rooms_removed": cascaded })
        );
    } else {
        Status::success(&format!("Removed tile #{id}"));
        if cascaded > 0 {
            Status::warning(&format!("Also removed {cascaded} room(s) using it"));
        }
    }
    Ok(())
}
