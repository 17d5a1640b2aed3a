//! The catalog: tiles and rooms persisted as a single JSON document.

use crate::error::{Result, StoreError};
use crate::seed::stock_tiles;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tilecalc_core::validation::{validate_room, validate_tile};
use tilecalc_core::{RoomSpec, TileSpec};
use tracing::{debug, info};

/// A persisted tile with its catalog identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    /// Catalog id, unique among tiles
    pub id: u32,
    /// The tile itself
    pub spec: TileSpec,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// A persisted room with its catalog identity and tile reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Catalog id, unique among rooms
    pub id: u32,
    /// The tile this room is to be covered with (non-owning reference;
    /// deleting that tile deletes this room)
    pub tile_id: u32,
    /// The room itself
    pub spec: RoomSpec,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// Whether an estimate has been produced for this room
    #[serde(default)]
    pub calculated: bool,
}

/// A room joined with the tile it references.
#[derive(Debug, Clone, Copy)]
pub struct RoomWithTile<'a> {
    /// The room record
    pub room: &'a RoomRecord,
    /// The referenced tile record
    pub tile: &'a TileRecord,
}

/// On-disk document shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogData {
    next_tile_id: u32,
    next_room_id: u32,
    tiles: Vec<TileRecord>,
    rooms: Vec<RoomRecord>,
}

/// The tile/room catalog, loaded from and saved to one JSON file.
///
/// Every mutating operation writes the file back before returning, so a
/// `Catalog` on disk is never ahead of or behind the one in memory.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    data: CatalogData,
}

impl Catalog {
    /// Opens the catalog at `path`, starting empty if the file does not
    /// exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let data = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            debug!(path = %path.display(), "no catalog file, starting empty");
            CatalogData::default()
        };

        debug!(
            path = %path.display(),
            tiles = data.tiles.len(),
            rooms = data.rooms.len(),
            "catalog opened"
        );

        Ok(Self { path, data })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the catalog back to disk (temp file + rename).
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&self.data)?)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "catalog saved");
        Ok(())
    }

    /// Inserts the stock tiles when the catalog holds none.
    ///
    /// Returns how many tiles were inserted (0 when the catalog already
    /// has tiles). Idempotent.
    pub fn seed_if_empty(&mut self) -> Result<usize> {
        if !self.data.tiles.is_empty() {
            return Ok(0);
        }

        let stock = stock_tiles();
        let count = stock.len();
        for spec in stock {
            let id = self.next_tile_id();
            self.data.tiles.push(TileRecord { id, spec, created_at: Utc::now() });
        }
        self.save()?;

        info!(count, "seeded catalog with stock tiles");
        Ok(count)
    }

    fn next_tile_id(&mut self) -> u32 {
        self.data.next_tile_id += 1;
        self.data.next_tile_id
    }

    fn next_room_id(&mut self) -> u32 {
        self.data.next_room_id += 1;
        self.data.next_room_id
    }

    // ---- tiles ----

    /// Adds a tile to the catalog, returning its new id.
    ///
    /// # Errors
    /// [`StoreError::Invalid`] when the spec fails validation.
    pub fn add_tile(&mut self, spec: TileSpec) -> Result<u32> {
        let issues = validate_tile(&spec);
        if !issues.is_empty() {
            return Err(StoreError::Invalid(issues));
        }

        let id = self.next_tile_id();
        debug!(id, name = %spec.name, "tile added");
        self.data.tiles.push(TileRecord { id, spec, created_at: Utc::now() });
        self.save()?;
        Ok(id)
    }

    /// Replaces the spec of an existing tile.
    pub fn update_tile(&mut self, id: u32, spec: TileSpec) -> Result<()> {
        let issues = validate_tile(&spec);
        if !issues.is_empty() {
            return Err(StoreError::Invalid(issues));
        }

        let record = self
            .data
            .tiles
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TileNotFound(id))?;
        record.spec = spec;
        self.save()
    }

    /// All tiles, ordered by name.
    pub fn tiles(&self) -> Vec<&TileRecord> {
        let mut tiles: Vec<&TileRecord> = self.data.tiles.iter().collect();
        tiles.sort_by(|a, b| a.spec.name.cmp(&b.spec.name).then(a.id.cmp(&b.id)));
        tiles
    }

    /// Looks up a tile by id.
    pub fn tile(&self, id: u32) -> Option<&TileRecord> {
        self.data.tiles.iter().find(|t| t.id == id)
    }

    /// Tiles whose name contains `query`, case-insensitively, in name
    /// order.
    pub fn search_tiles(&self, query: &str) -> Vec<&TileRecord> {
        let needle = query.to_lowercase();
        self.tiles()
            .into_iter()
            .filter(|t| t.spec.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Removes a tile and every room that references it.
    ///
    /// Returns the number of rooms removed by the cascade.
    pub fn remove_tile(&mut self, id: u32) -> Result<usize> {
        if self.tile(id).is_none() {
            return Err(StoreError::TileNotFound(id));
        }

        self.data.tiles.retain(|t| t.id != id);
        let before = self.data.rooms.len();
        self.data.rooms.retain(|r| r.tile_id != id);
        let cascaded = before - self.data.rooms.len();
        self.save()?;

        info!(id, cascaded, "tile removed");
        Ok(cascaded)
    }

    // ---- rooms ----

    /// Adds a room referencing an existing tile, returning its new id.
    ///
    /// # Errors
    /// [`StoreError::Invalid`] when the spec fails validation,
    /// [`StoreError::TileNotFound`] when `tile_id` does not exist.
    pub fn add_room(&mut self, spec: RoomSpec, tile_id: u32) -> Result<u32> {
        let issues = validate_room(&spec);
        if !issues.is_empty() {
            return Err(StoreError::Invalid(issues));
        }
        if self.tile(tile_id).is_none() {
            return Err(StoreError::TileNotFound(tile_id));
        }

        let id = self.next_room_id();
        debug!(id, tile_id, name = %spec.name, "room added");
        self.data.rooms.push(RoomRecord {
            id,
            tile_id,
            spec,
            created_at: Utc::now(),
            calculated: false,
        });
        self.save()?;
        Ok(id)
    }

    /// Replaces the spec of an existing room.
    pub fn update_room(&mut self, id: u32, spec: RoomSpec) -> Result<()> {
        let issues = validate_room(&spec);
        if !issues.is_empty() {
            return Err(StoreError::Invalid(issues));
        }

        let record = self
            .data
            .rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::RoomNotFound(id))?;
        record.spec = spec;
        self.save()
    }

    /// All rooms, ordered by name.
    pub fn rooms(&self) -> Vec<&RoomRecord> {
        let mut rooms: Vec<&RoomRecord> = self.data.rooms.iter().collect();
        rooms.sort_by(|a, b| a.spec.name.cmp(&b.spec.name).then(a.id.cmp(&b.id)));
        rooms
    }

    /// Looks up a room by id.
    pub fn room(&self, id: u32) -> Option<&RoomRecord> {
        self.data.rooms.iter().find(|r| r.id == id)
    }

    /// All rooms joined with their tiles, in room-name order.
    ///
    /// The cascade on [`Catalog::remove_tile`] keeps every `tile_id`
    /// resolvable, so the join never drops a room.
    pub fn rooms_with_tiles(&self) -> Vec<RoomWithTile<'_>> {
        self.rooms()
            .into_iter()
            .filter_map(|room| {
                self.tile(room.tile_id).map(|tile| RoomWithTile { room, tile })
            })
            .collect()
    }

    /// A single room joined with its tile.
    pub fn room_with_tile(&self, id: u32) -> Result<RoomWithTile<'_>> {
        let room = self.room(id).ok_or(StoreError::RoomNotFound(id))?;
        let tile = self
            .tile(room.tile_id)
            .ok_or(StoreError::TileNotFound(room.tile_id))?;
        Ok(RoomWithTile { room, tile })
    }

    /// Rooms referencing the given tile, in name order.
    pub fn rooms_by_tile(&self, tile_id: u32) -> Vec<&RoomRecord> {
        self.rooms()
            .into_iter()
            .filter(|r| r.tile_id == tile_id)
            .collect()
    }

    /// Rooms filtered by whether they have been estimated, in name order.
    pub fn rooms_by_status(&self, calculated: bool) -> Vec<&RoomRecord> {
        self.rooms()
            .into_iter()
            .filter(|r| r.calculated == calculated)
            .collect()
    }

    /// Records that an estimate has been produced for a room.
    pub fn mark_calculated(&mut self, id: u32) -> Result<()> {
        let record = self
            .data
            .rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::RoomNotFound(id))?;
        record.calculated = true;
        self.save()
    }

    /// Removes a room.
    pub fn remove_room(&mut self, id: u32) -> Result<()> {
        if self.room(id).is_none() {
            return Err(StoreError::RoomNotFound(id));
        }
        self.data.rooms.retain(|r| r.id != id);
        self.save()?;
        info!(id, "room removed");
        Ok(())
    }
}
