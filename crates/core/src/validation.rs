//! Upstream input validation.
//!
//! The calculator itself accepts whatever arithmetic it is handed; these
//! checks run at the edges (persistence inserts, CLI input) before a spec
//! is accepted.

use crate::model::{RoomSpec, TileSpec};
use crate::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single failed validation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self { field: field.to_string(), message: message.into() }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn check_positive(issues: &mut Vec<ValidationIssue>, field: &str, dim: &Dimension) {
    if !dim.value.is_finite() || dim.value <= 0.0 {
        issues.push(ValidationIssue::new(field, "must be a positive length"));
    }
}

/// Validates a tile spec for acceptance into the catalog.
///
/// Returns every failed check; an empty vec means the spec is valid.
pub fn validate_tile(tile: &TileSpec) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if tile.name.trim().is_empty() {
        issues.push(ValidationIssue::new("name", "must not be empty"));
    }
    check_positive(&mut issues, "length", &tile.length);
    check_positive(&mut issues, "width", &tile.width);
    if tile.tiles_per_box == 0 {
        issues.push(ValidationIssue::new("tiles_per_box", "must be at least 1"));
    }
    if !tile.price_per_box.is_finite() || tile.price_per_box < 0.0 {
        issues.push(ValidationIssue::new("price_per_box", "must not be negative"));
    }

    issues
}

/// Validates a room spec for acceptance into the catalog.
pub fn validate_room(room: &RoomSpec) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if room.name.trim().is_empty() {
        issues.push(ValidationIssue::new("name", "must not be empty"));
    }
    check_positive(&mut issues, "length", &room.length);
    check_positive(&mut issues, "width", &room.width);

    issues
}
