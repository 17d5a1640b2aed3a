//! Error types for the store crate.

use thiserror::Error;
use tilecalc_core::validation::ValidationIssue;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Catalog file could not be read or written
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No tile with the given id
    #[error("Tile not found: #{0}")]
    TileNotFound(u32),

    /// No room with the given id
    #[error("Room not found: #{0}")]
    RoomNotFound(u32),

    /// Spec rejected by upstream validation
    #[error("Invalid spec: {}", format_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display_joins_issues() {
        let err = StoreError::Invalid(vec![
            ValidationIssue { field: "name".into(), message: "must not be empty".into() },
            ValidationIssue { field: "width".into(), message: "must be a positive length".into() },
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid spec: name: must not be empty; width: must be a positive length"
        );
    }
}
