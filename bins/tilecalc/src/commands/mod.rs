//! Command implementations.

pub mod estimate;
pub mod quote;
pub mod rooms;
pub mod tiles;
pub mod units;
