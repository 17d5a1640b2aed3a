//! File-backed catalog of tiles and rooms.
//!
//! Persists the full catalog as a single JSON document and exposes the
//! insert/query/update/delete surface the calculator front ends build on.
//! A room references exactly one tile; deleting a tile cascades to the
//! rooms that reference it.
//!
//! # Example
//!
//! ```no_run
//! use tilecalc_store::Catalog;
//!
//! let mut catalog = Catalog::open("catalog.json")?;
//! catalog.seed_if_empty()?;
//!
//! for tile in catalog.tiles() {
//!     println!("#{} {}", tile.id, tile.spec.name);
//! }
//! # Ok::<(), tilecalc_store::StoreError>(())
//! ```

mod catalog;
mod error;
mod seed;

pub use catalog::{Catalog, RoomRecord, RoomWithTile, TileRecord};
pub use error::{Result, StoreError};
pub use seed::stock_tiles;
