use std::fs;

use clap::Parser;

use case_cli::{is_usage_error, run, Cli};
use case_core::{CaseCalculation, ShopSettings};

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("plycase").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_direct_mode_report() {
    let text = run_args(&["-w", "300", "-d", "200", "-H", "150"]).unwrap();
    assert!(text.contains("PLYWOOD CASE CALCULATOR"));
    assert!(text.contains("317.5mm x 247.7mm"));
    assert!(!text.contains("GRIDFINITY BASEPLATE"));
    assert!(!text.contains("mode:"));
}

#[test]
fn test_grid_mode_uses_default_margin() {
    let text = run_args(&["--grid", "6x4x6"]).unwrap();
    assert!(text.contains("Gridfinity-first mode: 6x4 grid, fits 6u bins (42mm + 7mm base)"));
    assert!(text.contains("Width (X):  262.0mm"));
    assert!(text.contains("Depth (Y):  178.0mm"));
    assert!(text.contains("Height (Z): 76.0mm"));
    assert!(text.contains("GRIDFINITY BASEPLATE:"));
}

#[test]
fn test_size_mode_rounds_up() {
    let text = run_args(&["-w", "400", "-d", "300", "-H", "120", "--gridfinity"]).unwrap();
    assert!(text.contains("10x7 grid, 12u bins (rounded up)"));
    assert!(text.contains("Grid Units: 10 x 7 (70 total)"));
}

#[test]
fn test_size_mode_rounds_down() {
    let text = run_args(&["-w", "400", "-d", "300", "-H", "120", "-g", "--round-down"]).unwrap();
    assert!(text.contains("(rounded down)"));
}

#[test]
fn test_json_output_parses() {
    let text = run_args(&["--grid", "6x4x6", "--json"]).unwrap();
    let calc: CaseCalculation = serde_json::from_str(&text).unwrap();
    assert_eq!(calc.config.interior_width_mm, 262.0);
    assert_eq!(calc.cut_list.piece_count(), 6);
    assert!(calc.gridfinity.is_some());
}

#[test]
fn test_scad_output_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("case-config.scad");
    let path_arg = path.to_str().unwrap();

    let text = run_args(&["--grid", "6x4x6", "-o", path_arg]).unwrap();
    assert!(text.contains("OpenSCAD config written to:"));

    let scad = fs::read_to_string(&path).unwrap();
    assert!(scad.contains("GRID_X = 6;"));
    assert!(scad.contains("GRID_Y = 4;"));
}

#[test]
fn test_missing_mode_is_usage_error() {
    let err = run_args(&["-w", "300"]).unwrap_err();
    assert!(is_usage_error(&err));
}

#[test]
fn test_invalid_values_rejected() {
    assert!(run_args(&["-w", "300", "-d", "200", "-H", "150", "--ply", "7/8"]).is_err());
    assert!(run_args(&["--grid", "0x4x6"]).is_err());
    assert!(run_args(&["--width=-5", "-d", "200", "-H", "150"]).is_err());
}

#[test]
fn test_settings_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop.json");
    let settings = ShopSettings {
        margin_mm: 10.0,
        ..ShopSettings::default()
    };
    fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();

    let text = run_args(&["--grid", "6x4x6", "--settings", path.to_str().unwrap()]).unwrap();
    assert!(text.contains("Width (X):  272.0mm"));

    let text = run_args(&[
        "--grid",
        "6x4x6",
        "--settings",
        path.to_str().unwrap(),
        "--margin",
        "5",
    ])
    .unwrap();
    assert!(text.contains("Width (X):  262.0mm"));
}

#[test]
fn test_missing_settings_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(run_args(&["--grid", "6x4x6", "--settings", path.to_str().unwrap()]).is_err());
}
