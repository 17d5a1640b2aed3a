//! Tilecalc CLI - Tile and Box Coverage Estimation
//!
//! Records tiles and rooms in a local catalog and computes how many tiles
//! and boxes are needed to cover a room, unit conversions and wastage
//! included.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;

use commands::{estimate, quote, rooms, tiles, units};
use tilecalc_core::LinearUnit;

/// Tile and box coverage estimation CLI
#[derive(Parser)]
#[command(name = "tilecalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Catalog file path (defaults to the platform data directory)
    #[arg(long, global = true, env = "TILECALC_DATA_FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the tile catalog
    Tile {
        #[command(subcommand)]
        action: TileAction,
    },

    /// Manage recorded rooms
    Room {
        #[command(subcommand)]
        action: RoomAction,
    },

    /// Estimate tiles and boxes for a recorded room
    Estimate {
        /// Room id
        id: u32,
    },

    /// One-shot estimate from raw measurements (nothing is saved)
    Quote {
        /// Room length
        #[arg(long)]
        room_length: f64,

        /// Room width
        #[arg(long)]
        room_width: f64,

        /// Unit for the room dimensions
        #[arg(long, default_value = "m")]
        room_unit: LinearUnit,

        /// Tile length
        #[arg(long)]
        tile_length: f64,

        /// Tile width
        #[arg(long)]
        tile_width: f64,

        /// Unit for the tile dimensions
        #[arg(long, default_value = "in")]
        tile_unit: LinearUnit,

        /// Wastage margin in percent
        #[arg(long, default_value = "10")]
        wastage: u32,

        /// Tiles per box
        #[arg(long, default_value = "20")]
        box_size: u32,
    },

    /// List supported measurement units
    Units,
}

#[derive(Subcommand)]
enum TileAction {
    /// Add a tile to the catalog
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Tile face length
        #[arg(long)]
        length: f64,

        /// Tile face width
        #[arg(long)]
        width: f64,

        /// Unit for the length
        #[arg(long, default_value = "in")]
        length_unit: LinearUnit,

        /// Unit for the width (defaults to the length unit)
        #[arg(long)]
        width_unit: Option<LinearUnit>,

        /// Wastage margin in percent
        #[arg(long, default_value = "10")]
        wastage: u32,

        /// Tiles per box
        #[arg(long)]
        box_size: u32,

        /// Price per box
        #[arg(long, default_value = "0")]
        price: f64,
    },

    /// List catalog tiles
    List,

    /// Show one tile and the rooms using it
    Show {
        /// Tile id
        id: u32,
    },

    /// Search tiles by name
    Search {
        /// Substring to match, case-insensitive
        query: String,
    },

    /// Remove a tile (rooms using it are removed too)
    Remove {
        /// Tile id
        id: u32,
    },
}

#[derive(Subcommand)]
enum RoomAction {
    /// Record a room to be tiled
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Room length
        #[arg(long)]
        length: f64,

        /// Room width
        #[arg(long)]
        width: f64,

        /// Unit for the length
        #[arg(long, default_value = "m")]
        length_unit: LinearUnit,

        /// Unit for the width (defaults to the length unit)
        #[arg(long)]
        width_unit: Option<LinearUnit>,

        /// Id of the catalog tile to cover the room with
        #[arg(long)]
        tile: u32,
    },

    /// List recorded rooms with their tiles
    List {
        /// Only rooms already estimated
        #[arg(long, conflicts_with = "pending")]
        estimated: bool,

        /// Only rooms not yet estimated
        #[arg(long)]
        pending: bool,
    },

    /// Remove a room
    Remove {
        /// Room id
        id: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("tilecalc=debug,tilecalc_store=debug")
            .init();
    }

    let data_file = config::data_file(cli.data_file.clone());

    let result = match cli.command {
        Commands::Tile { action } => match action {
            TileAction::Add {
                name,
                length,
                width,
                length_unit,
                width_unit,
                wastage,
                box_size,
                price,
            } => tiles::run_add(
                &data_file,
                &name,
                length,
                width,
                length_unit,
                width_unit.unwrap_or(length_unit),
                wastage,
                box_size,
                price,
                &cli.format,
            ),
            TileAction::List => tiles::run_list(&data_file, &cli.format),
            TileAction::Show { id } => tiles::run_show(&data_file, id, &cli.format),
            TileAction::Search { query } => tiles::run_search(&data_file, &query, &cli.format),
            TileAction::Remove { id } => tiles::run_remove(&data_file, id, &cli.format),
        },

        Commands::Room { action } => match action {
            RoomAction::Add {
                name,
                length,
                width,
                length_unit,
                width_unit,
                tile,
            } => rooms::run_add(
                &data_file,
                &name,
                length,
                width,
                length_unit,
                width_unit.unwrap_or(length_unit),
                tile,
                &cli.format,
            ),
            RoomAction::List { estimated, pending } => {
                let status = if estimated {
                    Some(true)
                } else if pending {
                    Some(false)
                } else {
                    None
                };
                rooms::run_list(&data_file, status, &cli.format)
            }
            RoomAction::Remove { id } => rooms::run_remove(&data_file, id, &cli.format),
        },

        Commands::Estimate { id } => estimate::run(&data_file, id, &cli.format),

        Commands::Quote {
            room_length,
            room_width,
            room_unit,
            tile_length,
            tile_width,
            tile_unit,
            wastage,
            box_size,
        } => quote::run(
            room_length,
            room_width,
            room_unit,
            tile_length,
            tile_width,
            tile_unit,
            wastage,
            box_size,
            &cli.format,
        ),

        Commands::Units => units::run(&cli.format),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
