//! # Mode Resolvers
//!
//! Back-solvers that turn a Gridfinity-centred request into a [`CaseConfig`]:
//!
//! - **Grid-first** ([`calculate_from_gridfinity`]): an exact grid (`6x4x6`)
//!   and a margin. Interior size is built around the baseplate.
//! - **Size-first** ([`calculate_from_size`]): a target interior size. Grid
//!   units are rounded (up by default, so the requested space is never lost)
//!   and the interior is rebuilt around the rounded baseplate.
//!
//! Both produce configs with `use_gridfinity = true`. Interior height is
//! always `baseplate + (z * 7 + 7) + 20`: the baseplate, a bin body of `z`
//! units on its 7mm base profile, and clearance to lift it out.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::case::CaseConfig;
use crate::calculations::gridfinity::{
    common_bin_height_for, interior_height_for_bins, BaseplateStyle, GridfinityLayout,
};
use crate::constants::{BIN_CLEARANCE_MM, DEFAULT_CLI_MARGIN_MM, DEFAULT_GRID_MARGIN_MM, GRID_PITCH_MM};
use crate::errors::CalcError;

fn default_grid_margin() -> f64 {
    DEFAULT_GRID_MARGIN_MM
}

fn default_min_margin() -> f64 {
    DEFAULT_CLI_MARGIN_MM
}

/// Exact grid request.
///
/// ## JSON Example
///
/// ```json
/// { "grid_x": 6, "grid_y": 4, "grid_z": 6, "margin_x_mm": 10.0, "margin_y_mm": 10.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Grid units across the width
    pub grid_x: u32,
    /// Grid units across the depth
    pub grid_y: u32,
    /// Bin height in z-units
    pub grid_z: u32,
    /// Margin around the baseplate, each side (mm)
    #[serde(default = "default_grid_margin")]
    pub margin_x_mm: f64,
    #[serde(default = "default_grid_margin")]
    pub margin_y_mm: f64,
}

impl GridSpec {
    /// Grid with the default 10mm margin on every side
    pub fn new(grid_x: u32, grid_y: u32, grid_z: u32) -> Self {
        GridSpec {
            grid_x,
            grid_y,
            grid_z,
            margin_x_mm: DEFAULT_GRID_MARGIN_MM,
            margin_y_mm: DEFAULT_GRID_MARGIN_MM,
        }
    }

    /// Same margin on both axes
    pub fn with_margin(mut self, margin_mm: f64) -> Self {
        self.margin_x_mm = margin_mm;
        self.margin_y_mm = margin_mm;
        self
    }
}

impl FromStr for GridSpec {
    type Err = CalcError;

    /// Parse `<X>x<Y>x<Z>`, e.g. `6x4x3`. All three must be positive integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalcError::invalid_grid_spec(s);

        let parts: Vec<&str> = s.trim().split(['x', 'X']).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let mut units = [0u32; 3];
        for (slot, part) in units.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
            if *slot == 0 {
                return Err(invalid());
            }
        }

        Ok(GridSpec::new(units[0], units[1], units[2]))
    }
}

/// Target interior size request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "target_width_mm": 400.0,
///   "target_depth_mm": 300.0,
///   "target_height_mm": 120.0,
///   "min_margin_mm": 5.0,
///   "round_down": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSpec {
    /// Desired minimum interior width (mm)
    pub target_width_mm: f64,
    /// Desired minimum interior depth (mm)
    pub target_depth_mm: f64,
    /// Desired interior height (mm)
    pub target_height_mm: f64,
    /// Minimum margin around the baseplate, each side (mm)
    #[serde(default = "default_min_margin")]
    pub min_margin_mm: f64,
    /// Round grid units down (smaller case) instead of up
    #[serde(default)]
    pub round_down: bool,
}

impl SizeSpec {
    /// Target size with a 5mm margin, rounding up
    pub fn new(target_width_mm: f64, target_depth_mm: f64, target_height_mm: f64) -> Self {
        SizeSpec {
            target_width_mm,
            target_depth_mm,
            target_height_mm,
            min_margin_mm: DEFAULT_CLI_MARGIN_MM,
            round_down: false,
        }
    }

    pub fn with_margin(mut self, min_margin_mm: f64) -> Self {
        self.min_margin_mm = min_margin_mm;
        self
    }

    pub fn rounding_down(mut self, round_down: bool) -> Self {
        self.round_down = round_down;
        self
    }
}

/// Result of a size-first resolution: the config plus the rounding decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeResolution {
    pub config: CaseConfig,
    pub grid_x: i64,
    pub grid_y: i64,
    /// Chosen common bin height in z-units
    pub grid_z: i64,
    /// Margin per side across the width (mm)
    pub actual_margin_x_mm: f64,
    /// Margin per side across the depth (mm)
    pub actual_margin_y_mm: f64,
}

impl SizeResolution {
    /// The forward layout with its grid pinned to this resolution.
    ///
    /// Re-deriving units from the final interior can disagree with the
    /// rounded grid once both margins add up to a full pitch, so unit counts,
    /// baseplate size and margins come from the resolution. Margins are totals
    /// (both sides), matching the forward layout. Bin height is kept.
    pub fn pinned_layout(&self, forward: &GridfinityLayout) -> GridfinityLayout {
        GridfinityLayout {
            units_x: self.grid_x,
            units_y: self.grid_y,
            baseplate_width_mm: self.grid_x as f64 * GRID_PITCH_MM,
            baseplate_depth_mm: self.grid_y as f64 * GRID_PITCH_MM,
            margin_x_mm: self.actual_margin_x_mm * 2.0,
            margin_y_mm: self.actual_margin_y_mm * 2.0,
            max_bin_height: forward.max_bin_height,
        }
    }
}

/// Build a case around an exact Gridfinity grid.
pub fn calculate_from_gridfinity(
    spec: &GridSpec,
    ply_thickness_mm: f64,
    bracket_wall_mm: f64,
    tolerance_mm: f64,
    baseplate_style: BaseplateStyle,
) -> CaseConfig {
    let baseplate_width_mm = f64::from(spec.grid_x) * GRID_PITCH_MM;
    let baseplate_depth_mm = f64::from(spec.grid_y) * GRID_PITCH_MM;

    CaseConfig {
        interior_width_mm: baseplate_width_mm + spec.margin_x_mm * 2.0,
        interior_depth_mm: baseplate_depth_mm + spec.margin_y_mm * 2.0,
        interior_height_mm: interior_height_for_bins(i64::from(spec.grid_z), baseplate_style),
        ply_thickness_mm,
        bracket_wall_mm,
        tolerance_mm,
        use_gridfinity: true,
        baseplate_style,
    }
}

/// Fit a Gridfinity grid to a target interior size.
pub fn calculate_from_size(
    spec: &SizeSpec,
    ply_thickness_mm: f64,
    bracket_wall_mm: f64,
    tolerance_mm: f64,
    baseplate_style: BaseplateStyle,
) -> SizeResolution {
    let margin = spec.min_margin_mm;

    let raw_grid_x = (spec.target_width_mm - margin * 2.0) / GRID_PITCH_MM;
    let raw_grid_y = (spec.target_depth_mm - margin * 2.0) / GRID_PITCH_MM;

    let round = |raw: f64| {
        if spec.round_down {
            raw.floor()
        } else {
            raw.ceil()
        }
    };
    let grid_x = round(raw_grid_x) as i64;
    let grid_y = round(raw_grid_y) as i64;

    let grid_z = common_bin_height_for(
        spec.target_height_mm,
        baseplate_style.height_mm(),
        BIN_CLEARANCE_MM,
    );

    tracing::debug!(
        raw_grid_x,
        raw_grid_y,
        grid_x,
        grid_y,
        grid_z,
        round_down = spec.round_down,
        "resolved size-first grid"
    );

    let config = CaseConfig {
        interior_width_mm: grid_x as f64 * GRID_PITCH_MM + margin * 2.0,
        interior_depth_mm: grid_y as f64 * GRID_PITCH_MM + margin * 2.0,
        interior_height_mm: interior_height_for_bins(grid_z, baseplate_style),
        ply_thickness_mm,
        bracket_wall_mm,
        tolerance_mm,
        use_gridfinity: true,
        baseplate_style,
    };

    SizeResolution {
        config,
        grid_x,
        grid_y,
        grid_z,
        actual_margin_x_mm: margin,
        actual_margin_y_mm: margin,
    }
}
