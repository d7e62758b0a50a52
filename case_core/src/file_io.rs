//! # File I/O Module
//!
//! File operations kept out of the pure calculation modules:
//! - **Atomic writes**: write to `.tmp`, sync, rename, so an interrupted
//!   export never leaves a half-written `.scad` or `.json` behind
//! - **Settings loading** with schema version validation
//!
//! ## Example
//!
//! ```rust,no_run
//! use case_core::calculations::{calculate_case, CaseRequest, GridSpec, MaterialParams};
//! use case_core::file_io::{write_scad, load_settings};
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("shop.json"))?;
//! let calc = CaseRequest::Grid {
//!     spec: GridSpec::new(6, 4, 6),
//!     materials: settings.materials(),
//! }
//! .calculate()?;
//!
//! write_scad(&calc, Path::new("case-config.scad"))?;
//! # Ok::<(), case_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::calculations::case::CaseCalculation;
use crate::errors::{CalcError, CalcResult};
use crate::scad::generate_scad;
use crate::settings::{ShopSettings, SCHEMA_VERSION};

/// Temp file used while writing `path`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Write `contents` to `path` with atomic write semantics.
///
/// The write process:
/// 1. Write to a temporary file (`<path>.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over the target (atomic on most filesystems)
pub fn write_atomic(path: &Path, contents: &str) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Write the OpenSCAD parameter file for a case.
pub fn write_scad(calc: &CaseCalculation, path: &Path) -> CalcResult<()> {
    write_atomic(path, &generate_scad(calc))
}

/// Write a case calculation as pretty JSON.
pub fn write_json(calc: &CaseCalculation, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(calc).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    write_atomic(path, &json)
}

/// Load shop settings from a JSON file.
///
/// # Returns
///
/// * `Ok(ShopSettings)` - Successfully loaded settings
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_settings(path: &Path) -> CalcResult<ShopSettings> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: ShopSettings =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&settings.version)?;

    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

/// Save shop settings to a JSON file.
pub fn save_settings(settings: &ShopSettings, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(settings).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    write_atomic(path, &json)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    // Parse semver-style versions
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor version is not supported
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::case::{calculate_case, CaseConfig};
    use crate::calculations::gridfinity::BaseplateStyle;
    use crate::materials::PlywoodSize;

    fn test_calc() -> CaseCalculation {
        calculate_case(&CaseConfig {
            interior_width_mm: 272.0,
            interior_depth_mm: 188.0,
            interior_height_mm: 76.0,
            ply_thickness_mm: 8.73,
            bracket_wall_mm: 3.0,
            tolerance_mm: 0.2,
            use_gridfinity: true,
            baseplate_style: BaseplateStyle::Standard,
        })
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/path/to/case.scad"));
        assert_eq!(tmp, Path::new("/path/to/case.scad.tmp"));
    }

    #[test]
    fn test_atomic_write_creates_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.scad");

        write_scad(&test_calc(), &path).unwrap();

        assert!(path.exists());
        assert!(!tmp_path_for(&path).exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("GRID_X = 6;"));
    }

    #[test]
    fn test_write_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.json");
        let calc = test_calc();

        write_json(&calc, &path).unwrap();

        let loaded: CaseCalculation =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, calc);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("case.scad");
        let err = write_scad(&test_calc(), &path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_settings_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");
        let settings = ShopSettings {
            plywood: PlywoodSize::Half,
            margin_mm: 8.0,
            ..ShopSettings::default()
        };

        save_settings(&settings, &path).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_settings_rejects_newer_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");
        fs::write(&path, r#"{ "version": "0.2.0" }"#).unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, CalcError::VersionMismatch { .. }));
    }

    #[test]
    fn test_load_settings_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_settings_unknown_plywood() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");
        fs::write(&path, r#"{ "plywood": "1/8" }"#).unwrap();

        assert!(load_settings(&path).is_err());
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
