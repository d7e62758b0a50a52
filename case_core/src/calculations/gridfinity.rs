//! # Gridfinity Layout
//!
//! Fits a Gridfinity baseplate into a case interior (forward direction:
//! interior size in, grid layout out).
//!
//! - Grid units never round up: the baseplate must physically fit.
//!   `units = floor(interior / 42)`
//! - The residual `interior - units * 42` is reported as margin.
//! - Maximum bin height in z-units is what fits above the baseplate with
//!   20mm of headroom left to lift bins out:
//!   `floor((height - baseplate_height - 20) / 7)`
//!
//! A zero or negative `max_bin_height` means no bin fits. It is reported as
//! is and never clamped.
//!
//! ## Example
//!
//! ```rust
//! use case_core::calculations::gridfinity::{calculate_gridfinity, BaseplateStyle};
//!
//! let layout = calculate_gridfinity(272.0, 188.0, 76.0, BaseplateStyle::Standard);
//! assert_eq!((layout.units_x, layout.units_y), (6, 4));
//! assert_eq!(layout.margin_x_mm, 20.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BIN_CLEARANCE_MM, CENTERING_HINT_MARGIN_MM, COMMON_BIN_HEIGHTS, GRID_HEIGHT_MM, GRID_PITCH_MM,
};
use crate::errors::CalcError;

/// Baseplate style. Each style has a fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BaseplateStyle {
    /// 5mm plain baseplate
    Thin,
    /// 7mm baseplate
    #[default]
    Standard,
    /// 13.4mm baseplate with weight pockets
    Weighted,
}

impl BaseplateStyle {
    pub const ALL: [BaseplateStyle; 3] = [
        BaseplateStyle::Thin,
        BaseplateStyle::Standard,
        BaseplateStyle::Weighted,
    ];

    /// Baseplate height in millimetres
    pub fn height_mm(&self) -> f64 {
        match self {
            BaseplateStyle::Thin => 5.0,
            BaseplateStyle::Standard => 7.0,
            BaseplateStyle::Weighted => 13.4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BaseplateStyle::Thin => "thin",
            BaseplateStyle::Standard => "standard",
            BaseplateStyle::Weighted => "weighted",
        }
    }
}

impl FromStr for BaseplateStyle {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| CalcError::unknown_baseplate_style(s))
    }
}

impl fmt::Display for BaseplateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Baseplate layout inside a case interior.
///
/// ## JSON Example
///
/// ```json
/// {
///   "units_x": 6,
///   "units_y": 4,
///   "baseplate_width_mm": 252.0,
///   "baseplate_depth_mm": 168.0,
///   "margin_x_mm": 20.0,
///   "margin_y_mm": 20.0,
///   "max_bin_height": 7
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridfinityLayout {
    /// Grid units across the width
    pub units_x: i64,
    /// Grid units across the depth
    pub units_y: i64,
    pub baseplate_width_mm: f64,
    pub baseplate_depth_mm: f64,
    /// Total residual width (both sides together)
    pub margin_x_mm: f64,
    /// Total residual depth (both sides together)
    pub margin_y_mm: f64,
    /// Tallest bin body in z-units; non-positive means nothing fits
    pub max_bin_height: i64,
}

impl GridfinityLayout {
    pub fn total_units(&self) -> i64 {
        self.units_x * self.units_y
    }

    /// Offset that centers the baseplate across the width
    pub fn centering_offset_x_mm(&self) -> f64 {
        self.margin_x_mm / 2.0
    }

    /// Offset that centers the baseplate across the depth
    pub fn centering_offset_y_mm(&self) -> f64 {
        self.margin_y_mm / 2.0
    }

    /// Whether the margins are large enough to bother centering
    pub fn needs_centering(&self) -> bool {
        self.margin_x_mm > CENTERING_HINT_MARGIN_MM || self.margin_y_mm > CENTERING_HINT_MARGIN_MM
    }

    pub fn is_feasible(&self) -> bool {
        self.max_bin_height > 0
    }

    /// Body height of the tallest bin, excluding its base profile (mm)
    pub fn max_bin_body_mm(&self) -> f64 {
        self.max_bin_height as f64 * GRID_HEIGHT_MM
    }

    /// Body plus base profile (mm)
    pub fn max_bin_total_mm(&self) -> f64 {
        self.max_bin_body_mm() + GRID_HEIGHT_MM
    }

    /// Common bin heights that fit, ascending
    pub fn fitting_common_heights(&self) -> Vec<i64> {
        COMMON_BIN_HEIGHTS
            .iter()
            .copied()
            .filter(|&height| height <= self.max_bin_height)
            .collect()
    }
}

/// Lay out a baseplate in the given interior.
pub fn calculate_gridfinity(
    interior_width_mm: f64,
    interior_depth_mm: f64,
    interior_height_mm: f64,
    style: BaseplateStyle,
) -> GridfinityLayout {
    let units_x = (interior_width_mm / GRID_PITCH_MM).floor() as i64;
    let units_y = (interior_depth_mm / GRID_PITCH_MM).floor() as i64;

    let baseplate_width_mm = units_x as f64 * GRID_PITCH_MM;
    let baseplate_depth_mm = units_y as f64 * GRID_PITCH_MM;

    let available_mm = interior_height_mm - style.height_mm() - BIN_CLEARANCE_MM;
    let max_bin_height = (available_mm / GRID_HEIGHT_MM).floor() as i64;

    GridfinityLayout {
        units_x,
        units_y,
        baseplate_width_mm,
        baseplate_depth_mm,
        margin_x_mm: interior_width_mm - baseplate_width_mm,
        margin_y_mm: interior_depth_mm - baseplate_depth_mm,
        max_bin_height,
    }
}

/// Total height of a bin of `units` z-units: body plus 7mm base profile.
pub fn bin_height_mm(units: i64) -> f64 {
    units as f64 * GRID_HEIGHT_MM + GRID_HEIGHT_MM
}

/// Interior height that holds a baseplate, a `units`-tall bin and clearance.
pub fn interior_height_for_bins(units: i64, style: BaseplateStyle) -> f64 {
    style.height_mm() + bin_height_mm(units) + BIN_CLEARANCE_MM
}

/// Largest common bin height whose full height (body + base profile) fits.
///
/// Falls back to the smallest common height (3u) when none fits, even though
/// that bin will not physically fit.
pub fn common_bin_height_for(height_mm: f64, baseplate_height_mm: f64, clearance_mm: f64) -> i64 {
    let available_mm = height_mm - baseplate_height_mm - clearance_mm;
    let max_units = ((available_mm - GRID_HEIGHT_MM) / GRID_HEIGHT_MM).floor() as i64;

    match COMMON_BIN_HEIGHTS
        .iter()
        .rev()
        .copied()
        .find(|&height| height <= max_units)
    {
        Some(height) => height,
        None => {
            let smallest = COMMON_BIN_HEIGHTS[0];
            tracing::debug!(
                height_mm,
                max_units,
                fallback = smallest,
                "no common bin height fits, using smallest"
            );
            smallest
        }
    }
}

/// Smallest common bin height at least `units` tall; past the largest common
/// height, the next multiple of 3.
pub fn round_up_to_common_height(units: i64) -> i64 {
    COMMON_BIN_HEIGHTS
        .iter()
        .copied()
        .find(|&height| height >= units)
        .unwrap_or_else(|| (units + 2) / 3 * 3)
}
