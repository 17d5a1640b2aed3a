//! CLI utilities for Tilecalc
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Status messages
//! - Measurement display helpers

#![warn(missing_docs)]

pub mod output;
