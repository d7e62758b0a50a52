//! # Corner Bracket Geometry
//!
//! Sizes the 3D-printed corner brackets that join the plywood panels.
//!
//! Each bracket is a U-channel around the panel edge. It needs clearance for
//! the plywood plus tolerance on both faces, and a full wall on the inner and
//! outer side:
//!
//! ```text
//! arm_width = wall + (ply + tolerance) * 2 + wall
//! bracket_height = interior_height + wall
//! ```
//!
//! No validation is done here; zero or negative inputs give zero or negative
//! geometry.
//!
//! ## Example
//!
//! ```rust
//! use case_core::calculations::bracket::arm_width;
//!
//! let arm = arm_width(8.73, 3.0, 0.2);
//! assert!((arm - 23.86).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::case::CaseConfig;

/// Width of a bracket arm (mm).
pub fn arm_width(ply_thickness_mm: f64, wall_mm: f64, tolerance_mm: f64) -> f64 {
    wall_mm + (ply_thickness_mm + tolerance_mm) * 2.0 + wall_mm
}

/// Bracket height (mm): one wall above the interior to cap the top panel.
pub fn bracket_height(interior_height_mm: f64, wall_mm: f64) -> f64 {
    interior_height_mm + wall_mm
}

/// Both bracket dimensions for one case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketGeometry {
    /// Channel depth of each arm (mm)
    pub arm_width_mm: f64,
    /// Overall bracket height (mm)
    pub bracket_height_mm: f64,
}

impl BracketGeometry {
    pub fn for_config(config: &CaseConfig) -> Self {
        BracketGeometry {
            arm_width_mm: arm_width(
                config.ply_thickness_mm,
                config.bracket_wall_mm,
                config.tolerance_mm,
            ),
            bracket_height_mm: bracket_height(config.interior_height_mm, config.bracket_wall_mm),
        }
    }
}
