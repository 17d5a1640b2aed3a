//! Core calculations for Tilecalc.
//!
//! This crate provides:
//! - Linear unit conversion (inches, feet, meters)
//! - Tile and box coverage calculations with wastage margins
//! - Domain value types for tiles and rooms
//! - Upstream input validation
//!
//! # Example
//!
//! ```
//! use tilecalc_core::{compute_coverage, convert_to_meters, LinearUnit};
//!
//! let room_length = convert_to_meters(4.0, LinearUnit::Meters);
//! let room_width = convert_to_meters(3.0, LinearUnit::Meters);
//!
//! let coverage = compute_coverage(room_length, room_width, 0.3, 0.3, 20, 10).unwrap();
//! assert_eq!(coverage.tile_count, 147);
//! assert_eq!(coverage.box_count, 8);
//! ```

mod coverage;
mod error;
mod model;
mod units;
pub mod validation;

pub use coverage::{compute_coverage, estimate, Coverage, Estimate};
pub use error::{CoreError, CoreErrorCode, Result};
pub use model::{RoomSpec, TileSpec};
pub use units::{
    convert_from_meters, convert_to_meters, LinearUnit, METERS_PER_FOOT, METERS_PER_INCH,
};

/// A length value tagged with its unit of measure.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dimension {
    /// Magnitude in `unit` (positivity is enforced upstream, not here)
    pub value: f64,
    /// Unit of measure
    pub unit: LinearUnit,
}

impl Dimension {
    /// Creates a new dimension.
    #[inline]
    pub fn new(value: f64, unit: LinearUnit) -> Self {
        Self { value, unit }
    }

    /// Converts this dimension to meters.
    #[inline]
    pub fn to_meters(&self) -> f64 {
        convert_to_meters(self.value, self.unit)
    }
}

impl From<(f64, LinearUnit)> for Dimension {
    fn from((value, unit): (f64, LinearUnit)) -> Self {
        Self::new(value, unit)
    }
}
