//! Catalog location and opening.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tilecalc_store::Catalog;
use tracing::debug;

/// Resolves the catalog file path.
///
/// Precedence: `--data-file` flag (also fed by `TILECALC_DATA_FILE`),
/// then the platform data directory, then the working directory.
pub fn data_file(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tilecalc")
        .join("catalog.json")
}

/// Opens the catalog and seeds the stock tiles on first use.
pub fn open_catalog(path: &Path) -> Result<Catalog> {
    let mut catalog = Catalog::open(path)
        .with_context(|| format!("Failed to open catalog at {}", path.display()))?;

    let seeded = catalog.seed_if_empty()?;
    if seeded > 0 {
        debug!(seeded, "catalog seeded on first use");
    }

    Ok(catalog)
}
