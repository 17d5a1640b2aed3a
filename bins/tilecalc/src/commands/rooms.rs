//! Room commands.

use crate::config::open_catalog;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;
use tilecalc_cli::output::{format_face, Status};
use tilecalc_core::{Dimension, LinearUnit, RoomSpec};
use tilecalc_store::{RoomRecord, TileRecord};

/// JSON output for room listings
#[derive(Debug, Serialize)]
struct JsonRoomsOutput<'a> {
    total: usize,
    rooms: Vec<JsonRoomEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonRoomEntry<'a> {
    #[serde(flatten)]
    room: &'a RoomRecord,
    tile: &'a TileRecord,
}

/// Record a room.
#[allow(clippy::too_many_arguments)]
pub fn run_add(
    data_file: &Path,
    name: &str,
    length: f64,
    width: f64,
    length_unit: LinearUnit,
    width_unit: LinearUnit,
    tile_id: u32,
    format: &str,
) -> Result<()> {
    let mut catalog = open_catalog(data_file)?;

    let spec = RoomSpec {
        name: name.to_string(),
        length: Dimension::new(length, length_unit),
        width: Dimension::new(width, width_unit),
    };
    let id = catalog.add_room(spec, tile_id)?;

    if format == "json" {
        if let Some(record) = catalog.room(id) {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
    } else {
        Status::success(&format!("Added room #{id}: {name}"));
    }
    Ok(())
}

/// List rooms with their tiles, optionally filtered by estimate status.
pub fn run_list(data_file: &Path, status: Option<bool>, format: &str) -> Result<()> {
    let catalog = open_catalog(data_file)?;

    let joined: Vec<_> = catalog
        .rooms_with_tiles()
        .into_iter()
        .filter(|rt| status.is_none_or(|s| rt.room.calculated == s))
        .collect();

    if format == "json" {
        let output = JsonRoomsOutput {
            total: joined.len(),
            rooms: joined
                .iter()
                .map(|rt| JsonRoomEntry { room: rt.room, tile: rt.tile })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Status::header("Rooms");
    if joined.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for rt in &joined {
        let mark = if rt.room.calculated { "✓".green().to_string() } else { " ".to_string() };
        println!(
            "  {:>4} {} {:<20} {:<14} tile: {}",
            format!("#{}", rt.room.id).green(),
            mark,
            rt.room.spec.name,
            format_face(&rt.room.spec.length, &rt.room.spec.width),
            rt.tile.spec.name,
        );
    }
    println!();
    println!("  Total: {} rooms", joined.len().to_string().green());
    Ok(())
}

/// Remove a room.
pub fn run_remove(data_file: &Path, id: u32, format: &str) -> Result<()> {
    let mut catalog = open_catalog(data_file)?;
    catalog.remove_room(id)?;

    if format == "json" {
        println!("{}", serde_json::json!({ "removed": id }));
    } else {
        Status::success(&format!("Removed room #{id}"));
    }
    Ok(())
}
