//! # Case Calculation
//!
//! Composes bracket geometry, the cut list and (optionally) a Gridfinity
//! layout into one [`CaseCalculation`]. This is the single entry point once a
//! [`CaseConfig`] has been resolved, however it was obtained.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use case_core::calculations::case::{calculate_case, CaseConfig};
//! use case_core::calculations::gridfinity::BaseplateStyle;
//!
//! let config = CaseConfig {
//!     interior_width_mm: 300.0,
//!     interior_depth_mm: 200.0,
//!     interior_height_mm: 150.0,
//!     ply_thickness_mm: 8.73,
//!     bracket_wall_mm: 3.0,
//!     tolerance_mm: 0.2,
//!     use_gridfinity: false,
//!     baseplate_style: BaseplateStyle::Standard,
//! };
//!
//! let calc = calculate_case(&config);
//! assert_eq!(calc.cut_list.piece_count(), 6);
//! assert!((calc.exterior_width_mm - 347.72).abs() < 1e-9);
//! assert!(calc.gridfinity.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::bracket::BracketGeometry;
use crate::calculations::cut_list::{calculate_cut_list, CutList};
use crate::calculations::gridfinity::{calculate_gridfinity, BaseplateStyle, GridfinityLayout};
use crate::errors::{CalcError, CalcResult};

/// Fully resolved case parameters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "interior_width_mm": 300.0,
///   "interior_depth_mm": 200.0,
///   "interior_height_mm": 150.0,
///   "ply_thickness_mm": 8.73,
///   "bracket_wall_mm": 3.0,
///   "tolerance_mm": 0.2,
///   "use_gridfinity": false,
///   "baseplate_style": "standard"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseConfig {
    /// Interior X dimension (mm)
    pub interior_width_mm: f64,

    /// Interior Y dimension (mm)
    pub interior_depth_mm: f64,

    /// Interior Z dimension (mm)
    pub interior_height_mm: f64,

    /// Actual plywood thickness (mm), not the nominal size
    pub ply_thickness_mm: f64,

    /// Bracket wall thickness (mm)
    pub bracket_wall_mm: f64,

    /// Fit tolerance between bracket channel and plywood (mm)
    pub tolerance_mm: f64,

    /// Include a Gridfinity layout in the result
    pub use_gridfinity: bool,

    #[serde(default)]
    pub baseplate_style: BaseplateStyle,
}

impl CaseConfig {
    /// Validate input parameters.
    ///
    /// The calculations accept anything; this is for callers that take
    /// configs from outside (command line, JSON).
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("interior_width_mm", self.interior_width_mm),
            ("interior_depth_mm", self.interior_depth_mm),
            ("interior_height_mm", self.interior_height_mm),
            ("ply_thickness_mm", self.ply_thickness_mm),
            ("bracket_wall_mm", self.bracket_wall_mm),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be a positive number",
                ));
            }
        }
        if !self.tolerance_mm.is_finite() || self.tolerance_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "tolerance_mm",
                self.tolerance_mm.to_string(),
                "Tolerance cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Everything derived for one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseCalculation {
    /// The config this was computed from
    pub config: CaseConfig,

    /// Six panels: Bottom, Left, Right, Front, Back, Top
    pub cut_list: CutList,

    pub bracket_height_mm: f64,

    pub arm_width_mm: f64,

    /// Interior width plus a bracket arm on each side (mm)
    pub exterior_width_mm: f64,

    /// Interior depth plus a bracket arm on each side (mm)
    pub exterior_depth_mm: f64,

    /// Same as interior height; brackets only widen the footprint
    pub exterior_height_mm: f64,

    /// Present only when `config.use_gridfinity` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gridfinity: Option<GridfinityLayout>,
}

impl CaseCalculation {
    pub fn bracket(&self) -> BracketGeometry {
        BracketGeometry {
            arm_width_mm: self.arm_width_mm,
            bracket_height_mm: self.bracket_height_mm,
        }
    }
}

/// Calculate the full case geometry for a resolved config.
pub fn calculate_case(config: &CaseConfig) -> CaseCalculation {
    let bracket = BracketGeometry::for_config(config);
    let cut_list = calculate_cut_list(config);

    let gridfinity = config.use_gridfinity.then(|| {
        calculate_gridfinity(
            config.interior_width_mm,
            config.interior_depth_mm,
            config.interior_height_mm,
            config.baseplate_style,
        )
    });

    CaseCalculation {
        config: config.clone(),
        cut_list,
        bracket_height_mm: bracket.bracket_height_mm,
        arm_width_mm: bracket.arm_width_mm,
        exterior_width_mm: config.interior_width_mm + bracket.arm_width_mm * 2.0,
        exterior_depth_mm: config.interior_depth_mm + bracket.arm_width_mm * 2.0,
        exterior_height_mm: config.interior_height_mm,
        gridfinity,
    }
}
