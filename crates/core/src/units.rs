//! Linear unit conversion.
//!
//! Every supported unit carries a fixed conversion factor to meters, the
//! canonical unit all coverage math runs in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meters per inch.
pub const METERS_PER_INCH: f64 = 0.0254;

/// Meters per foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// A unit of linear measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearUnit {
    /// Imperial inches (0.0254 m)
    Inches,
    /// Imperial feet (0.3048 m)
    Feet,
    /// SI meters (identity)
    Meters,
}

impl LinearUnit {
    /// Every supported unit, in display order.
    pub const ALL: [LinearUnit; 3] = [LinearUnit::Inches, LinearUnit::Feet, LinearUnit::Meters];

    /// Conversion factor from this unit to meters.
    #[inline]
    pub const fn meters_per_unit(&self) -> f64 {
        match self {
            LinearUnit::Inches => METERS_PER_INCH,
            LinearUnit::Feet => METERS_PER_FOOT,
            LinearUnit::Meters => 1.0,
        }
    }

    /// Full human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            LinearUnit::Inches => "Inches",
            LinearUnit::Feet => "Feet",
            LinearUnit::Meters => "Meters",
        }
    }

    /// Short symbol used in formatted output ("in", "ft", "m").
    pub const fn symbol(&self) -> &'static str {
        match self {
            LinearUnit::Inches => "in",
            LinearUnit::Feet => "ft",
            LinearUnit::Meters => "m",
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LinearUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(LinearUnit::Inches),
            "ft" | "foot" | "feet" => Ok(LinearUnit::Feet),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LinearUnit::Meters),
            other => Err(format!("Unknown unit: {other} (expected in, ft, or m)")),
        }
    }
}

/// Converts a value in the given unit to meters.
///
/// Pure factor multiply; `Meters` is the identity. There are no error
/// conditions: every enumerated unit has a defined factor.
#[inline]
pub fn convert_to_meters(value: f64, unit: LinearUnit) -> f64 {
    value * unit.meters_per_unit()
}

/// Converts a value in meters back to the given unit.
///
/// Inverse of [`convert_to_meters`]; round-trips within floating-point
/// tolerance.
#[inline]
pub fn convert_from_meters(value: f64, unit: LinearUnit) -> f64 {
    value / unit.meters_per_unit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_identity() {
        for v in [0.0, 1.0, 2.75, 1234.5] {
            assert_eq!(convert_to_meters(v, LinearUnit::Meters), v);
        }
    }

    #[test]
    fn test_known_factors() {
        assert!((convert_to_meters(1.0, LinearUnit::Inches) - 0.0254).abs() < 1e-12);
        assert!((convert_to_meters(1.0, LinearUnit::Feet) - 0.3048).abs() < 1e-12);
        // 12 inches is exactly one foot
        assert!(
            (convert_to_meters(12.0, LinearUnit::Inches)
                - convert_to_meters(1.0, LinearUnit::Feet))
            .abs()
                < 1e-12
        );
    }

    #[test]
    fn test_linearity() {
        let v = 3.7;
        for k in [0.5, 2.0, 10.0] {
            let scaled = convert_to_meters(k * v, LinearUnit::Feet);
            let unscaled = k * convert_to_meters(v, LinearUnit::Feet);
            assert!((scaled - unscaled).abs() < 1e-9);
        }
    }

    #[test]
    fn test_round_trip() {
        for unit in LinearUnit::ALL {
            for v in [0.1, 1.0, 42.0, 9999.25] {
                let back = convert_from_meters(convert_to_meters(v, unit), unit);
                assert!((back - v).abs() < 1e-9, "{v} {unit} -> {back}");
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("in".parse::<LinearUnit>().unwrap(), LinearUnit::Inches);
        assert_eq!("Feet".parse::<LinearUnit>().unwrap(), LinearUnit::Feet);
        assert_eq!("M".parse::<LinearUnit>().unwrap(), LinearUnit::Meters);
        assert_eq!("metres".parse::<LinearUnit>().unwrap(), LinearUnit::Meters);
        assert!("yards".parse::<LinearUnit>().is_err());
    }

    #[test]
    fn test_display_symbols() {
        assert_eq!(LinearUnit::Inches.to_string(), "in");
        assert_eq!(LinearUnit::Feet.to_string(), "ft");
        assert_eq!(LinearUnit::Meters.to_string(), "m");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&LinearUnit::Feet).unwrap();
        assert_eq!(json, "\"feet\"");
        let back: LinearUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LinearUnit::Feet);
    }
}
