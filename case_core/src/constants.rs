//! # Physical Constants
//!
//! Fixed parameters of the Gridfinity system and the corner-bracket design.
//! Gridfinity values follow `gridfinity-rebuilt-openscad` (`src/core/standard.scad`).

// ============================================================================
// Gridfinity
// ============================================================================

/// Footprint of one grid unit (mm)
pub const GRID_PITCH_MM: f64 = 42.0;

/// Height of one z-unit (mm). Also the height of a bin's base profile.
pub const GRID_HEIGHT_MM: f64 = 7.0;

/// Headroom kept above the bins so they can be lifted out
pub const BIN_CLEARANCE_MM: f64 = 20.0;

/// Common bin heights in z-units, ascending
pub const COMMON_BIN_HEIGHTS: [i64; 6] = [3, 6, 9, 12, 18, 24];

// ============================================================================
// Corner brackets
// ============================================================================

/// Default bracket wall thickness (mm)
pub const DEFAULT_BRACKET_WALL_MM: f64 = 3.0;

/// Default clearance between bracket channel and plywood (mm)
pub const DEFAULT_TOLERANCE_MM: f64 = 0.2;

/// One bracket per vertical corner
pub const BRACKETS_PER_CASE: u32 = 4;

// ============================================================================
// Margins
// ============================================================================

/// Margin around the baseplate when a grid is given exactly (mm, each side)
pub const DEFAULT_GRID_MARGIN_MM: f64 = 10.0;

/// Minimum margin used by the command line for size-first and grid-first runs
pub const DEFAULT_CLI_MARGIN_MM: f64 = 5.0;

/// Margins above this get a centering hint in the report
pub const CENTERING_HINT_MARGIN_MM: f64 = 5.0;
