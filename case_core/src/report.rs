//! # Text Report
//!
//! Renders a [`CaseCalculation`] as a plain-text shop report: configuration,
//! exterior size, bracket print settings, the cut list and, when present, the
//! Gridfinity baseplate.
//!
//! ## Example
//!
//! ```rust
//! use case_core::calculations::{calculate_case, CaseConfig, BaseplateStyle};
//! use case_core::report::render_report;
//!
//! let calc = calculate_case(&CaseConfig {
//!     interior_width_mm: 300.0,
//!     interior_depth_mm: 200.0,
//!     interior_height_mm: 150.0,
//!     ply_thickness_mm: 8.73,
//!     bracket_wall_mm: 3.0,
//!     tolerance_mm: 0.2,
//!     use_gridfinity: false,
//!     baseplate_style: BaseplateStyle::Standard,
//! });
//!
//! let text = render_report(&calc);
//! assert!(text.contains("PLYWOOD CUT LIST"));
//! ```

use std::fmt;

use crate::calculations::case::CaseCalculation;
use crate::calculations::gridfinity::GridfinityLayout;
use crate::calculations::modes::{GridSpec, SizeResolution, SizeSpec};
use crate::calculations::{CaseRequest, ResolvedCase};
use crate::constants::{BRACKETS_PER_CASE, GRID_HEIGHT_MM};
use crate::units::Millimeters;

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;
const NAME_COLUMN: usize = 25;
const DIMS_COLUMN: usize = 25;

/// Display adapter for a full report.
pub struct Report<'a>(pub &'a CaseCalculation);

/// Render the full report as a string.
pub fn render_report(calc: &CaseCalculation) -> String {
    Report(calc).to_string()
}

fn mm(value: f64) -> Millimeters {
    Millimeters(value)
}

fn rule(f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(width))
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let calc = self.0;
        let config = &calc.config;
        let banner = "=".repeat(BANNER_WIDTH);

        writeln!(f)?;
        writeln!(f, "{}", banner)?;
        writeln!(f, "  PLYWOOD CASE CALCULATOR")?;
        writeln!(f, "{}", banner)?;

        writeln!(f)?;
        writeln!(f, "CASE CONFIGURATION:")?;
        rule(f, RULE_WIDTH)?;
        writeln!(f, "  Interior Dimensions:")?;
        writeln!(f, "    Width (X):  {}", mm(config.interior_width_mm).dual())?;
        writeln!(f, "    Depth (Y):  {}", mm(config.interior_depth_mm).dual())?;
        writeln!(f, "    Height (Z): {}", mm(config.interior_height_mm).dual())?;
        writeln!(f, "  Plywood Thickness: {}", mm(config.ply_thickness_mm).dual())?;
        writeln!(f, "  Bracket Wall: {}", mm(config.bracket_wall_mm))?;

        writeln!(f)?;
        writeln!(f, "EXTERIOR DIMENSIONS:")?;
        rule(f, RULE_WIDTH)?;
        writeln!(f, "  Width (X):  {}", mm(calc.exterior_width_mm).dual())?;
        writeln!(f, "  Depth (Y):  {}", mm(calc.exterior_depth_mm).dual())?;
        writeln!(f, "  Height (Z): {}", mm(calc.exterior_height_mm).dual())?;

        writeln!(f)?;
        writeln!(f, "CORNER BRACKETS (3D Print):")?;
        rule(f, RULE_WIDTH)?;
        writeln!(f, "  Bracket Height: {}", mm(calc.bracket_height_mm))?;
        writeln!(f, "  Arm Width: {}", mm(calc.arm_width_mm))?;
        writeln!(f, "  Quantity: {} corners", BRACKETS_PER_CASE)?;
        writeln!(f, "  OpenSCAD Parameters:")?;
        writeln!(f, "    case_height = {};", config.interior_height_mm)?;
        writeln!(f, "    ply_thickness = {:.2};", config.ply_thickness_mm)?;
        writeln!(f, "    wall = {};", config.bracket_wall_mm)?;

        writeln!(f)?;
        writeln!(f, "PLYWOOD CUT LIST:")?;
        rule(f, RULE_WIDTH)?;
        writeln!(f, "{:<NAME_COLUMN$} {:<DIMS_COLUMN$} Qty", "Piece", "W x H")?;
        rule(f, BANNER_WIDTH)?;
        for piece in &calc.cut_list {
            let dims = format!("{} x {}", mm(piece.width_mm), mm(piece.height_mm));
            writeln!(f, "{:<NAME_COLUMN$} {:<DIMS_COLUMN$} {}", piece.name, dims, piece.quantity)?;
            if let Some(notes) = &piece.notes {
                writeln!(f, "  {:<width$} {}", "", notes, width = NAME_COLUMN - 2)?;
            }
        }
        writeln!(f, "  Total plywood area: {:.2} m²", calc.cut_list.total_area_m2().0)?;

        if let Some(layout) = &calc.gridfinity {
            write_gridfinity(f, layout)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", banner)
    }
}

fn write_gridfinity(f: &mut fmt::Formatter<'_>, layout: &GridfinityLayout) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "GRIDFINITY BASEPLATE:")?;
    rule(f, RULE_WIDTH)?;
    writeln!(
        f,
        "  Grid Units: {} x {} ({} total)",
        layout.units_x,
        layout.units_y,
        layout.total_units()
    )?;
    writeln!(
        f,
        "  Baseplate Size: {} x {}",
        mm(layout.baseplate_width_mm),
        mm(layout.baseplate_depth_mm)
    )?;
    writeln!(
        f,
        "  Remaining Margin: X={}, Y={}",
        mm(layout.margin_x_mm),
        mm(layout.margin_y_mm)
    )?;
    writeln!(
        f,
        "  Max Bin Height: {}u ({}mm body + {}mm base = {}mm total)",
        layout.max_bin_height,
        layout.max_bin_body_mm(),
        GRID_HEIGHT_MM,
        layout.max_bin_total_mm()
    )?;

    let fitting = layout.fitting_common_heights();
    if fitting.is_empty() {
        writeln!(f, "  WARNING: no common bin height fits this interior")?;
    } else {
        let sizes: Vec<String> = fitting.iter().map(|units| format!("{}u", units)).collect();
        writeln!(f, "  Common sizes that fit: {}", sizes.join(", "))?;
    }

    writeln!(f, "  OpenSCAD Parameters:")?;
    writeln!(f, "    gridx = {};", layout.units_x)?;
    writeln!(f, "    gridy = {};", layout.units_y)?;

    if layout.needs_centering() {
        writeln!(f)?;
        writeln!(f, "  TIP: Center the baseplate for even margins:")?;
        writeln!(f, "    offset_x = {:.1};", layout.centering_offset_x_mm())?;
        writeln!(f, "    offset_y = {:.1};", layout.centering_offset_y_mm())?;
    }
    Ok(())
}

/// One-line banner for a grid-first run.
pub fn render_grid_summary(spec: &GridSpec) -> String {
    let body_mm = f64::from(spec.grid_z) * GRID_HEIGHT_MM;
    format!(
        "Gridfinity-first mode: {}x{} grid, fits {}u bins ({}mm + {}mm base)",
        spec.grid_x, spec.grid_y, spec.grid_z, body_mm, GRID_HEIGHT_MM
    )
}

/// Summary of a size-first rounding decision.
pub fn render_size_summary(spec: &SizeSpec, resolution: &SizeResolution) -> String {
    let body_mm = resolution.grid_z as f64 * GRID_HEIGHT_MM;
    let rounding = if spec.round_down { "down" } else { "up" };
    [
        format!(
            "Size-first Gridfinity mode: {}x{}x{}mm target",
            spec.target_width_mm, spec.target_depth_mm, spec.target_height_mm
        ),
        format!(
            "  -> {}x{} grid, {}u bins (rounded {})",
            resolution.grid_x, resolution.grid_y, resolution.grid_z, rounding
        ),
        format!(
            "  Bin height: {}mm + {}mm base = {}mm total",
            body_mm,
            GRID_HEIGHT_MM,
            body_mm + GRID_HEIGHT_MM
        ),
        format!("  Margin: {:.1}mm per side", resolution.actual_margin_x_mm),
    ]
    .join("\n")
}

/// Mode banner printed ahead of the report; `None` for direct requests.
pub fn render_mode_summary(request: &CaseRequest, resolved: &ResolvedCase) -> Option<String> {
    match (request, &resolved.size_resolution) {
        (CaseRequest::Grid { spec, .. }, _) => Some(render_grid_summary(spec)),
        (CaseRequest::Size { spec, .. }, Some(resolution)) => Some(render_size_summary(spec, resolution)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::case::{calculate_case, CaseConfig};
    use crate::calculations::cut_list::{
        BACK_PANEL, BOTTOM_PANEL, FRONT_PANEL, SIDE_PANEL_LEFT, SIDE_PANEL_RIGHT, TOP_PANEL,
    };
    use crate::calculations::gridfinity::BaseplateStyle;
    use crate::calculations::MaterialParams;

    fn config(use_gridfinity: bool) -> CaseConfig {
        CaseConfig {
            interior_width_mm: 272.0,
            interior_depth_mm: 188.0,
            interior_height_mm: 76.0,
            ply_thickness_mm: 8.73,
            bracket_wall_mm: 3.0,
            tolerance_mm: 0.2,
            use_gridfinity,
            baseplate_style: BaseplateStyle::Standard,
        }
    }

    #[test]
    fn test_report_sections() {
        let text = render_report(&calculate_case(&config(false)));
        assert!(text.contains("PLYWOOD CASE CALCULATOR"));
        assert!(text.contains("CASE CONFIGURATION:"));
        assert!(text.contains("EXTERIOR DIMENSIONS:"));
        assert!(text.contains("CORNER BRACKETS (3D Print):"));
        assert!(text.contains("Quantity: 4 corners"));
        assert!(text.contains("    case_height = 76;"));
        assert!(text.contains("    ply_thickness = 8.73;"));
        assert!(!text.contains("GRIDFINITY BASEPLATE"));
    }

    #[test]
    fn test_report_lists_every_piece_in_order() {
        let text = render_report(&calculate_case(&config(false)));
        let mut last = 0;
        for name in [BOTTOM_PANEL, SIDE_PANEL_LEFT, SIDE_PANEL_RIGHT, FRONT_PANEL, BACK_PANEL, TOP_PANEL] {
            let position = text.find(name).expect(name);
            assert!(position >= last, "{} out of order", name);
            last = position;
        }
    }

    #[test]
    fn test_report_cut_list_row() {
        let text = render_report(&calculate_case(&config(false)));
        // 272 + 17.46 = 289.46; 188 + 47.72 = 235.72
        let row = format!("{:<25} {:<25} 1", "Bottom Panel", "289.5mm x 235.7mm");
        assert!(text.contains(&row), "missing row in:\n{}", text);
    }

    #[test]
    fn test_report_gridfinity_section() {
        let text = render_report(&calculate_case(&config(true)));
        assert!(text.contains("GRIDFINITY BASEPLATE:"));
        assert!(text.contains("Grid Units: 6 x 4 (24 total)"));
        assert!(text.contains("Baseplate Size: 252.0mm x 168.0mm"));
        assert!(text.contains("Remaining Margin: X=20.0mm, Y=20.0mm"));
        assert!(text.contains("Max Bin Height: 7u (49mm body + 7mm base = 56mm total)"));
        assert!(text.contains("Common sizes that fit: 3u, 6u"));
        assert!(text.contains("    offset_x = 10.0;"));
    }

    #[test]
    fn test_report_infeasible_gridfinity() {
        let mut config = config(true);
        config.interior_height_mm = 20.0;
        let text = render_report(&calculate_case(&config));
        assert!(text.contains("Max Bin Height: -1u"));
        assert!(text.contains("WARNING: no common bin height fits"));
    }

    #[test]
    fn test_grid_summary() {
        let summary = render_grid_summary(&GridSpec::new(6, 4, 6));
        assert_eq!(summary, "Gridfinity-first mode: 6x4 grid, fits 6u bins (42mm + 7mm base)");
    }

    #[test]
    fn test_size_summary() {
        let request = CaseRequest::Size {
            spec: SizeSpec::new(400.0, 300.0, 120.0),
            materials: MaterialParams::default(),
        };
        let resolved = request.resolve().unwrap();
        let summary = render_mode_summary(&request, &resolved).unwrap();
        assert!(summary.starts_with("Size-first Gridfinity mode: 400x300x120mm target"));
        assert!(summary.contains("-> 10x7 grid, 12u bins (rounded up)"));
        assert!(summary.contains("Bin height: 84mm + 7mm base = 91mm total"));
        assert!(summary.contains("Margin: 5.0mm per side"));
    }

    #[test]
    fn test_direct_has_no_summary() {
        let request = CaseRequest::Direct(config(false));
        let resolved = request.resolve().unwrap();
        assert!(render_mode_summary(&request, &resolved).is_none());
    }
}
