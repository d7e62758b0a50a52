//! # OpenSCAD Export
//!
//! Generates an OpenSCAD parameter file for a calculated case. The file
//! includes the corner-bracket module and sets the case, plywood and
//! (optionally) baseplate parameters; the assembly itself lives in the
//! OpenSCAD library.

use std::fmt::Write;

use crate::calculations::case::CaseCalculation;

/// Path of the bracket module, relative to the generated file
pub const BRACKET_MODULE_INCLUDE: &str = "../modules/hardware/corner-bracket.scad";

/// Build the OpenSCAD source for a case.
pub fn generate_scad(calc: &CaseCalculation) -> String {
    let config = &calc.config;
    let mut scad = String::new();

    // Writing to a String cannot fail
    let _ = write!(
        scad,
        "// Generated Case Configuration
// Created by plycase

$parent_modules = true;

include <{include}>

// === CASE PARAMETERS ===
CASE_WIDTH = {width};   // Interior width (X)
CASE_DEPTH = {depth};   // Interior depth (Y)
CASE_HEIGHT = {height}; // Side panel height (Z)

PLY = {ply:.2};        // Plywood thickness
WALL = {wall};                   // Bracket wall
TOLERANCE = {tolerance};                // Fit tolerance
",
        include = BRACKET_MODULE_INCLUDE,
        width = config.interior_width_mm,
        depth = config.interior_depth_mm,
        height = config.interior_height_mm,
        ply = config.ply_thickness_mm,
        wall = config.bracket_wall_mm,
        tolerance = config.tolerance_mm,
    );

    if let Some(layout) = &calc.gridfinity {
        let _ = write!(
            scad,
            "
// === GRIDFINITY PARAMETERS ===
GRID_X = {units_x};           // Grid units in X
GRID_Y = {units_y};           // Grid units in Y
BASEPLATE_OFFSET_X = {offset_x:.1}; // Center offset
BASEPLATE_OFFSET_Y = {offset_y:.1}; // Center offset
",
            units_x = layout.units_x,
            units_y = layout.units_y,
            offset_x = layout.centering_offset_x_mm(),
            offset_y = layout.centering_offset_y_mm(),
        );
    }

    scad.push_str(
        "
// === DERIVED VALUES ===
ARM = WALL + (PLY + TOLERANCE) * 2 + WALL;

// === ASSEMBLY ===
// See examples/08-corner-brackets.scad for full assembly
",
    );

    scad
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::case::{calculate_case, CaseConfig};
    use crate::calculations::gridfinity::BaseplateStyle;

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
    fn test_case_parameters() {
        let scad = generate_scad(&calculate_case(&config(false)));
        assert!(scad.starts_with("// Generated Case Configuration"));
        assert!(scad.contains("include <../modules/hardware/corner-bracket.scad>"));
        assert!(scad.contains("CASE_WIDTH = 272;"));
        assert!(scad.contains("CASE_DEPTH = 188;"));
        assert!(scad.contains("CASE_HEIGHT = 76;"));
        assert!(scad.contains("PLY = 8.73;"));
        assert!(scad.contains("WALL = 3;"));
        assert!(scad.contains("TOLERANCE = 0.2;"));
        assert!(scad.contains("ARM = WALL + (PLY + TOLERANCE) * 2 + WALL;"));
        assert!(!scad.contains("GRID_X"));
    }

    #[test]
    fn test_gridfinity_parameters() {
        let scad = generate_scad(&calculate_case(&config(true)));
        assert!(scad.contains("GRID_X = 6;"));
        assert!(scad.contains("GRID_Y = 4;"));
        assert!(scad.contains("BASEPLATE_OFFSET_X = 10.0;"));
        assert!(scad.contains("BASEPLATE_OFFSET_Y = 10.0;"));
        // Gridfinity block sits before the derived values
        assert!(scad.find("GRID_X").unwrap() < scad.find("ARM =").unwrap());
    }
}
