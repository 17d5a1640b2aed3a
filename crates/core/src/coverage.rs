//! Tile and box coverage calculation.
//!
//! All area math runs on meter-normalized inputs. Callers must convert
//! both room and tile dimensions to meters before calling
//! [`compute_coverage`]; mixing units produces silently wrong results.
//! [`estimate`] does that conversion for you from domain value types.

use crate::error::{CoreError, Result};
use crate::model::{RoomSpec, TileSpec};
use serde::{Deserialize, Serialize};

/// Tile and box quantities required to cover a room. Derived on demand,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    /// Whole tiles required, wastage included
    pub tile_count: u64,
    /// Sales boxes required
    pub box_count: u64,
}

impl Coverage {
    /// The zero result, returned when the tile area is not computable.
    pub const ZERO: Coverage = Coverage { tile_count: 0, box_count: 0 };
}

/// A coverage result enriched with display figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Whole tiles required, wastage included
    pub tile_count: u64,
    /// Sales boxes required
    pub box_count: u64,
    /// Room area in the room's own units (raw, not meter-normalized;
    /// kept that way for display alongside the entered dimensions)
    pub room_area: f64,
    /// Total price for the required boxes, when the tile is priced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Calculates the tiles and boxes needed to cover a room.
///
/// All four dimensions must be in meters. A non-positive tile area yields
/// [`Coverage::ZERO`] rather than an error, as the sentinel for "no valid
/// tile yet".
///
/// # Arguments
/// * `room_length_m`, `room_width_m` - Room dimensions in meters
/// * `tile_length_m`, `tile_width_m` - Tile face dimensions in meters
/// * `tiles_per_box` - Packing factor; must be at least 1
/// * `wastage_percent` - Extra margin added to the base tile count
///
/// # Errors
/// Returns [`CoreError::InvalidBoxSize`] when `tiles_per_box` is 0.
///
/// # Example
/// ```
/// use tilecalc_core::compute_coverage;
///
/// // 4m x 3m room, 30cm square tile, 10% wastage, 20 tiles per box
/// let coverage = compute_coverage(4.0, 3.0, 0.3, 0.3, 20, 10).unwrap();
/// assert_eq!(coverage.tile_count, 147);
/// assert_eq!(coverage.box_count, 8);
/// ```
pub fn compute_coverage(
    room_length_m: f64,
    room_width_m: f64,
    tile_length_m: f64,
    tile_width_m: f64,
    tiles_per_box: u32,
    wastage_percent: u32,
) -> Result<Coverage> {
    if tiles_per_box == 0 {
        return Err(CoreError::InvalidBoxSize);
    }

    let room_area = room_length_m * room_width_m;
    let tile_area = tile_length_m * tile_width_m;

    if tile_area <= 0.0 {
        return Ok(Coverage::ZERO);
    }

    // Truncation toward zero, not rounding; a negative room area lands on 0.
    let base_tiles = (room_area / tile_area) as u64;
    let with_wastage = base_tiles as f64 * (1.0 + f64::from(wastage_percent) / 100.0);

    let tile_count = with_wastage.ceil() as u64;
    // Ceiling of the true quotient, not of a pre-truncated integer division.
    let box_count = (tile_count as f64 / f64::from(tiles_per_box)).ceil() as u64;

    Ok(Coverage { tile_count, box_count })
}

/// Computes a full estimate for a room tiled with a given tile.
///
/// Converts every dimension to meters, applies the tile's own wastage and
/// packing factor, and reports the room area in the room's raw units for
/// display next to the entered dimensions.
///
/// # Errors
/// Returns [`CoreError::InvalidBoxSize`] when the tile's packing factor
/// is 0.
pub fn estimate(room: &RoomSpec, tile: &TileSpec) -> Result<Estimate> {
    let coverage = compute_coverage(
        room.length.to_meters(),
        room.width.to_meters(),
        tile.length.to_meters(),
        tile.width.to_meters(),
        tile.tiles_per_box,
        tile.wastage_percent,
    )?;

    let cost = (tile.price_per_box > 0.0)
        .then(|| coverage.box_count as f64 * tile.price_per_box);

    Ok(Estimate {
        tile_count: coverage.tile_count,
        box_count: coverage.box_count,
        room_area: room.length.value * room.width.value,
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimension, LinearUnit};
    use proptest::prelude::*;

    fn tile_30cm() -> TileSpec {
        TileSpec {
            name: "30cm square".to_string(),
            length: Dimension::new(0.3, LinearUnit::Meters),
            width: Dimension::new(0.3, LinearUnit::Meters),
            wastage_percent: 10,
            tiles_per_box: 20,
            price_per_box: 0.0,
        }
    }

    #[test]
    fn test_worked_example() {
        // room 12 m^2, tile 0.09 m^2: base 133, +10% = 146.3 -> 147, /20 -> 8
        let coverage = compute_coverage(4.0, 3.0, 0.3, 0.3, 20, 10).unwrap();
        assert_eq!(coverage.tile_count, 147);
        assert_eq!(coverage.box_count, 8);
    }

    #[test]
    fn test_zero_tile_area_is_sentinel() {
        let coverage = compute_coverage(4.0, 3.0, 0.0, 0.3, 20, 10).unwrap();
        assert_eq!(coverage, Coverage::ZERO);

        let coverage = compute_coverage(100.0, 100.0, -0.3, 0.3, 1, 0).unwrap();
        assert_eq!(coverage, Coverage::ZERO);
    }

    #[test]
    fn test_zero_box_size_rejected() {
        let err = compute_coverage(4.0, 3.0, 0.3, 0.3, 0, 10).unwrap_err();
        assert!(matches!(err, CoreError::InvalidBoxSize));
    }

    #[test]
    fn test_base_count_truncates() {
        // 1 m^2 room with 0.09 m^2 tiles: 11.11 tiles truncates to 11
        let coverage = compute_coverage(1.0, 1.0, 0.3, 0.3, 20, 0).unwrap();
        assert_eq!(coverage.tile_count, 11);
        assert_eq!(coverage.box_count, 1);
    }

    #[test]
    fn test_exact_fit_no_wastage() {
        // 3m x 3m room, 1m tiles: exactly 9 tiles, 9 boxes of 1
        let coverage = compute_coverage(3.0, 3.0, 1.0, 1.0, 1, 0).unwrap();
        assert_eq!(coverage.tile_count, 9);
        assert_eq!(coverage.box_count, 9);
    }

    #[test]
    fn test_negative_room_area_clamps_to_zero() {
        let coverage = compute_coverage(-4.0, 3.0, 0.3, 0.3, 20, 10).unwrap();
        assert_eq!(coverage, Coverage::ZERO);
    }

    #[test]
    fn test_wastage_over_100() {
        // base 9, +150% = 22.5 -> 23
        let coverage = compute_coverage(3.0, 3.0, 1.0, 1.0, 10, 150).unwrap();
        assert_eq!(coverage.tile_count, 23);
        assert_eq!(coverage.box_count, 3);
    }

    #[test]
    fn test_estimate_converts_units() {
        // 12in tile == 0.3048m; room 4m x 3m
        let tile = TileSpec {
            length: Dimension::new(12.0, LinearUnit::Inches),
            width: Dimension::new(12.0, LinearUnit::Inches),
            ..tile_30cm()
        };
        let room = RoomSpec {
            name: "Kitchen".to_string(),
            length: Dimension::new(4.0, LinearUnit::Meters),
            width: Dimension::new(3.0, LinearUnit::Meters),
        };

        let est = estimate(&room, &tile).unwrap();
        // 12 / 0.3048^2 = 129.16 -> 129 base, +10% = 141.9 -> 142
        assert_eq!(est.tile_count, 142);
        assert_eq!(est.box_count, 8);
        assert_eq!(est.room_area, 12.0);
        assert_eq!(est.cost, None);
    }

    #[test]
    fn test_estimate_room_area_stays_raw() {
        // 10ft x 10ft room: displayed area is 100 (square feet), not m^2
        let room = RoomSpec {
            name: "Den".to_string(),
            length: Dimension::new(10.0, LinearUnit::Feet),
            width: Dimension::new(10.0, LinearUnit::Feet),
        };
        let est = estimate(&room, &tile_30cm()).unwrap();
        assert_eq!(est.room_area, 100.0);
        // tile math still runs in meters: 9.29 m^2 / 0.09 m^2 = 103 base
        assert_eq!(est.tile_count, 114);
    }

    #[test]
    fn test_estimate_cost_from_priced_tile() {
        let tile = TileSpec { price_per_box: 24.5, ..tile_30cm() };
        let room = RoomSpec {
            name: "Bath".to_string(),
            length: Dimension::new(4.0, LinearUnit::Meters),
            width: Dimension::new(3.0, LinearUnit::Meters),
        };
        let est = estimate(&room, &tile).unwrap();
        assert_eq!(est.box_count, 8);
        assert_eq!(est.cost, Some(8.0 * 24.5));
    }

    proptest! {
        #[test]
        fn prop_room_area_monotonic(
            room in 0.1f64..50.0,
            grow in 0.0f64..10.0,
        ) {
            let small = compute_coverage(room, room, 0.3, 0.3, 20, 10).unwrap();
            let large = compute_coverage(room + grow, room, 0.3, 0.3, 20, 10).unwrap();
            prop_assert!(large.tile_count >= small.tile_count);
        }

        #[test]
        fn prop_wastage_monotonic(
            wastage in 0u32..200,
            extra in 0u32..100,
        ) {
            let low = compute_coverage(4.0, 3.0, 0.3, 0.3, 20, wastage).unwrap();
            let high = compute_coverage(4.0, 3.0, 0.3, 0.3, 20, wastage + extra).unwrap();
            prop_assert!(high.tile_count >= low.tile_count);
        }

        #[test]
        fn prop_boxes_cover_tiles(
            room_l in 0.1f64..30.0,
            room_w in 0.1f64..30.0,
            tile_side in 0.05f64..2.0,
            per_box in 1u32..100,
            wastage in 0u32..100,
        ) {
            let c = compute_coverage(room_l, room_w, tile_side, tile_side, per_box, wastage)
                .unwrap();
            prop_assert!(c.box_count * u64::from(per_box) >= c.tile_count);
            // one fewer box would not be enough
            if c.box_count > 0 {
                prop_assert!((c.box_count - 1) * u64::from(per_box) < c.tile_count);
            }
        }
    }
}
