//! Geometry constants for label pages
//!
//! Nominal label dimensions are given in millimeters; all drawing happens in
//! PDF points.

/// Points per millimeter (1 mm = 2.834645669 pt)
pub const MM_TO_PT: f64 = 2.834645669;

/// Reference cell width in millimeters; font scaling is relative to it
pub const BASE_CELL_WIDTH_MM: f64 = 48.0;

/// Cell height in millimeters (both nominal sizes share it)
pub const CELL_HEIGHT_MM: f64 = 25.0;

/// Reference cell width in points
pub const BASE_CELL_WIDTH_PT: f64 = BASE_CELL_WIDTH_MM * MM_TO_PT;

/// Cell height in points
pub const CELL_HEIGHT_PT: f64 = CELL_HEIGHT_MM * MM_TO_PT;

/// Border rectangle inset from the cell edges, in points
pub const BORDER_PADDING_PT: f64 = 2.0;
