//! Board dimension and tile-code bounds.

/// The grid is exactly `GRID_SIZE` rows by `GRID_SIZE` columns.
pub const GRID_SIZE: usize = 20;
