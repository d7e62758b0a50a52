//! # Case Calculations
//!
//! The dimensional engine. Every function here is pure: an input record goes
//! in, a new record comes out, nothing is mutated or remembered.
//!
//! - [`bracket`] - bracket arm width and height
//! - [`cut_list`] - the six plywood panels
//! - [`gridfinity`] - baseplate layout and bin heights for an interior
//! - [`modes`] - grid-first and size-first back-solvers
//! - [`case`] - [`calculate_case`], composing all of the above
//!
//! ## Input Modes
//!
//! A case can be requested three ways. [`CaseRequest`] carries any of them
//! as one JSON-serializable value:
//!
//! ```json
//! { "mode": "Direct", "interior_width_mm": 300.0, "interior_depth_mm": 200.0,
//!   "interior_height_mm": 150.0, "ply_thickness_mm": 8.73, "bracket_wall_mm": 3.0,
//!   "tolerance_mm": 0.2, "use_gridfinity": false, "baseplate_style": "standard" }
//!
//! { "mode": "Grid", "spec": { "grid_x": 6, "grid_y": 4, "grid_z": 6 },
//!   "materials": { "ply_thickness_mm": 8.73, "bracket_wall_mm": 3.0,
//!                  "tolerance_mm": 0.2, "baseplate_style": "standard" } }
//! ```

pub mod bracket;
pub mod case;
pub mod cut_list;
pub mod gridfinity;
pub mod modes;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BRACKET_WALL_MM, DEFAULT_TOLERANCE_MM};
use crate::errors::{CalcError, CalcResult};
use crate::materials::PlywoodSize;

// Re-export commonly used types
pub use bracket::{arm_width, bracket_height, BracketGeometry};
pub use case::{calculate_case, CaseCalculation, CaseConfig};
pub use cut_list::{calculate_cut_list, CutList, CutPiece};
pub use gridfinity::{calculate_gridfinity, BaseplateStyle, GridfinityLayout};
pub use modes::{calculate_from_gridfinity, calculate_from_size, GridSpec, SizeResolution, SizeSpec};

/// Material and bracket parameters shared by the grid-first and size-first modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    /// Actual plywood thickness (mm)
    pub ply_thickness_mm: f64,
    pub bracket_wall_mm: f64,
    pub tolerance_mm: f64,
    #[serde(default)]
    pub baseplate_style: BaseplateStyle,
}

impl Default for MaterialParams {
    fn default() -> Self {
        MaterialParams::for_plywood(PlywoodSize::default())
    }
}

impl MaterialParams {
    /// Default bracket and baseplate settings for a given sheet
    pub fn for_plywood(plywood: PlywoodSize) -> Self {
        MaterialParams {
            ply_thickness_mm: plywood.thickness_mm(),
            bracket_wall_mm: DEFAULT_BRACKET_WALL_MM,
            tolerance_mm: DEFAULT_TOLERANCE_MM,
            baseplate_style: BaseplateStyle::default(),
        }
    }
}

/// One case request in any of the three input modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum CaseRequest {
    /// Interior dimensions given directly
    Direct(CaseConfig),
    /// Exact Gridfinity grid
    Grid {
        spec: GridSpec,
        #[serde(default)]
        materials: MaterialParams,
    },
    /// Target size, fitted to a Gridfinity grid
    Size {
        spec: SizeSpec,
        #[serde(default)]
        materials: MaterialParams,
    },
}

/// A request resolved down to a config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCase {
    pub config: CaseConfig,
    /// Rounding decision, for size-first requests only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_resolution: Option<SizeResolution>,
}

impl CaseRequest {
    /// Get the mode name as a string
    pub fn mode(&self) -> &'static str {
        match self {
            CaseRequest::Direct(_) => "Direct",
            CaseRequest::Grid { .. } => "Grid",
            CaseRequest::Size { .. } => "Size",
        }
    }

    /// Validate the request and resolve it to a [`CaseConfig`].
    pub fn resolve(&self) -> CalcResult<ResolvedCase> {
        let resolved = match self {
            CaseRequest::Direct(config) => ResolvedCase {
                config: config.clone(),
                size_resolution: None,
            },
            CaseRequest::Grid { spec, materials } => {
                for (field, value) in [("margin_x_mm", spec.margin_x_mm), ("margin_y_mm", spec.margin_y_mm)] {
                    validate_margin(field, value)?;
                }
                ResolvedCase {
                    config: calculate_from_gridfinity(
                        spec,
                        materials.ply_thickness_mm,
                        materials.bracket_wall_mm,
                        materials.tolerance_mm,
                        materials.baseplate_style,
                    ),
                    size_resolution: None,
                }
            }
            CaseRequest::Size { spec, materials } => {
                validate_size_spec(spec)?;
                let resolution = calculate_from_size(
                    spec,
                    materials.ply_thickness_mm,
                    materials.bracket_wall_mm,
                    materials.tolerance_mm,
                    materials.baseplate_style,
                );
                ResolvedCase {
                    config: resolution.config.clone(),
                    size_resolution: Some(resolution),
                }
            }
        };

        resolved.config.validate()?;
        Ok(resolved)
    }

    /// Resolve and calculate in one step.
    pub fn calculate(&self) -> CalcResult<CaseCalculation> {
        Ok(self.resolve()?.calculate())
    }
}

impl ResolvedCase {
    /// Run [`calculate_case`] on the resolved config.
    ///
    /// For size-first requests the Gridfinity layout is pinned to the
    /// resolved grid (see [`SizeResolution::pinned_layout`]).
    pub fn calculate(&self) -> CaseCalculation {
        let mut calc = calculate_case(&self.config);

        let pinned = match (&self.size_resolution, &calc.gridfinity) {
            (Some(resolution), Some(layout)) => Some(resolution.pinned_layout(layout)),
            _ => None,
        };
        if pinned.is_some() {
            calc.gridfinity = pinned;
        }

        calc
    }
}

fn validate_margin(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Margin cannot be negative",
        ));
    }
    Ok(())
}

fn validate_size_spec(spec: &SizeSpec) -> CalcResult<()> {
    validate_margin("min_margin_mm", spec.min_margin_mm)?;

    let targets = [
        ("target_width_mm", spec.target_width_mm),
        ("target_depth_mm", spec.target_depth_mm),
        ("target_height_mm", spec.target_height_mm),
    ];
    for (field, value) in targets {
        if !value.is_finite() || value <= 0.0 {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "Target size must be positive",
            ));
        }
    }

    // The baseplate needs at least some room once margins are taken out
    if spec.target_width_mm <= spec.min_margin_mm * 2.0 || spec.target_depth_mm <= spec.min_margin_mm * 2.0 {
        return Err(CalcError::invalid_input(
            "min_margin_mm",
            spec.min_margin_mm.to_string(),
            "Margins leave no room for a baseplate",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct_config() -> CaseConfig {
        CaseConfig {
            interior_width_mm: 300.0,
            interior_depth_mm: 200.0,
            interior_height_mm: 150.0,
            ply_thickness_mm: 8.73,
            bracket_wall_mm: 3.0,
            tolerance_mm: 0.2,
            use_gridfinity: false,
            baseplate_style: BaseplateStyle::Standard,
        }
    }

    #[test]
    fn test_default_materials() {
        let materials = MaterialParams::default();
        assert_eq!(materials.ply_thickness_mm, 8.73);
        assert_eq!(materials.bracket_wall_mm, 3.0);
        assert_eq!(materials.tolerance_mm, 0.2);
        assert_eq!(materials.baseplate_style, BaseplateStyle::Standard);
    }

    #[test]
    fn test_direct_request_matches_calculate_case() {
        let request = CaseRequest::Direct(direct_config());
        assert_eq!(request.mode(), "Direct");
        assert_eq!(request.calculate().unwrap(), calculate_case(&direct_config()));
    }

    #[test]
    fn test_direct_request_is_validated() {
        let mut config = direct_config();
        config.interior_width_mm = -1.0;
        let err = CaseRequest::Direct(config).calculate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_grid_request() {
        let request = CaseRequest::Grid {
            spec: GridSpec::new(6, 4, 6),
            materials: MaterialParams::default(),
        };
        let resolved = request.resolve().unwrap();
        assert_eq!(resolved.config.interior_width_mm, 272.0);
        assert!(resolved.size_resolution.is_none());

        let calc = request.calculate().unwrap();
        let layout = calc.gridfinity.unwrap();
        assert_eq!((layout.units_x, layout.units_y), (6, 4));
    }

    #[test]
    fn test_grid_request_rejects_negative_margin() {
        let request = CaseRequest::Grid {
            spec: GridSpec::new(6, 4, 6).with_margin(-1.0),
            materials: MaterialParams::default(),
        };
        assert!(request.resolve().is_err());
    }

    #[test]
    fn test_size_request_pins_layout() {
        let request = CaseRequest::Size {
            spec: SizeSpec::new(400.0, 300.0, 120.0),
            materials: MaterialParams::default(),
        };
        let resolved = request.resolve().unwrap();
        let resolution = resolved.size_resolution.unwrap();
        assert_eq!((resolution.grid_x, resolution.grid_y, resolution.grid_z), (10, 7, 12));

        let layout = request.calculate().unwrap().gridfinity.unwrap();
        assert_eq!((layout.units_x, layout.units_y), (10, 7));
        assert_eq!(layout.baseplate_width_mm, 420.0);
        assert_eq!(layout.baseplate_depth_mm, 294.0);
        assert_eq!(layout.margin_x_mm, 10.0);
        assert_eq!(layout.margin_y_mm, 10.0);
    }

    #[test]
    fn test_size_request_rejects_oversized_margin() {
        let request = CaseRequest::Size {
            spec: SizeSpec::new(100.0, 300.0, 120.0).with_margin(50.0),
            materials: MaterialParams::default(),
        };
        let err = request.resolve().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "min_margin_mm"));
    }

    #[test]
    fn test_request_json() {
        let json = r#"{
            "mode": "Grid",
            "spec": { "grid_x": 6, "grid_y": 4, "grid_z": 6 }
        }"#;
        let request: CaseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request,
            CaseRequest::Grid {
                spec: GridSpec::new(6, 4, 6),
                materials: MaterialParams::default(),
            }
        );

        let direct = CaseRequest::Direct(direct_config());
        let json = serde_json::to_string(&direct).unwrap();
        assert!(json.contains("\"mode\":\"Direct\""));
        let roundtrip: CaseRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, direct);
    }
}
