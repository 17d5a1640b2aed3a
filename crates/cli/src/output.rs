//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;
use tilecalc_core::Dimension;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a dimension for display, trimming a trailing ".00"
pub fn format_dimension(dim: &Dimension) -> String {
    format!("{} {}", format_number(dim.value), dim.unit)
}

/// Format a length-by-width pair sharing a unit suffix where possible
pub fn format_face(length: &Dimension, width: &Dimension) -> String {
    if length.unit == width.unit {
        format!(
            "{} x {} {}",
            format_number(length.value),
            format_number(width.value),
            length.unit
        )
    } else {
        format!("{} x {}", format_dimension(length), format_dimension(width))
    }
}

/// Format an area with its squared unit symbol
pub fn format_area(area: f64, unit_symbol: &str) -> String {
    format!("{} sq {}", format_number(area), unit_symbol)
}

fn format_number(value: f64) -> String {
    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
