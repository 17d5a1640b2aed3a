//! Units command - list supported measurement units.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tilecalc_cli::output::Status;
use tilecalc_core::LinearUnit;

/// JSON output for units
#[derive(Debug, Serialize)]
struct JsonUnitsOutput {
    total: usize,
    units: Vec<UnitDetail>,
}

#[derive(Debug, Serialize)]
struct UnitDetail {
    name: String,
    symbol: String,
    meters_per_unit: f64,
}

/// Run units command
pub fn run(format: &str) -> Result<()> {
    let units: Vec<UnitDetail> = LinearUnit::ALL
        .iter()
        .map(|u| UnitDetail {
            name: u.name().to_string(),
            symbol: u.symbol().to_string(),
            meters_per_unit: u.meters_per_unit(),
        })
        .collect();

    if format == "json" {
        let output = JsonUnitsOutput { total: units.len(), units };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Status::header("Supported units");
    println!(
        "  {:<10} {:<8} {}",
        "Name".dimmed(),
        "Symbol".dimmed(),
        "Meters per unit".dimmed()
    );
    for unit in &units {
        println!(
            "  {:<10} {:<8} {}",
            unit.name,
            unit.symbol.green(),
            unit.meters_per_unit
        );
    }
    Ok(())
}
