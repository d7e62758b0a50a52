//! # Shop Settings
//!
//! Defaults that a workshop tends to keep from one case to the next: which
//! plywood is on the rack, how the bracket printer is tuned, which baseplate
//! gets printed. Stored as JSON; see [`crate::file_io::load_settings`].
//!
//! ## Example
//!
//! ```rust
//! use case_core::settings::ShopSettings;
//!
//! let settings: ShopSettings = serde_json::from_str(
//!     r#"{ "version": "0.1.0", "plywood": "1/2", "tolerance_mm": 0.3 }"#,
//! ).unwrap();
//!
//! assert_eq!(settings.materials().ply_thickness_mm, 11.91);
//! assert_eq!(settings.bracket_wall_mm, 3.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::gridfinity::BaseplateStyle;
use crate::calculations::MaterialParams;
use crate::constants::{DEFAULT_BRACKET_WALL_MM, DEFAULT_CLI_MARGIN_MM, DEFAULT_TOLERANCE_MM};
use crate::materials::PlywoodSize;

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Workshop defaults. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopSettings {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Sheet stock in use
    pub plywood: PlywoodSize,

    /// Bracket wall thickness (mm)
    pub bracket_wall_mm: f64,

    /// Bracket fit tolerance (mm)
    pub tolerance_mm: f64,

    pub baseplate_style: BaseplateStyle,

    /// Margin around the baseplate, each side (mm)
    pub margin_mm: f64,

    /// Round grid units down when fitting a target size
    pub round_down: bool,
}

impl Default for ShopSettings {
    fn default() -> Self {
        ShopSettings {
            version: SCHEMA_VERSION.to_string(),
            plywood: PlywoodSize::default(),
            bracket_wall_mm: DEFAULT_BRACKET_WALL_MM,
            tolerance_mm: DEFAULT_TOLERANCE_MM,
            baseplate_style: BaseplateStyle::default(),
            margin_mm: DEFAULT_CLI_MARGIN_MM,
            round_down: false,
        }
    }
}

impl ShopSettings {
    /// Material parameters for the grid-first and size-first resolvers
    pub fn materials(&self) -> MaterialParams {
        MaterialParams {
            ply_thickness_mm: self.plywood.thickness_mm(),
            bracket_wall_mm: self.bracket_wall_mm,
            tolerance_mm: self.tolerance_mm,
            baseplate_style: self.baseplate_style,
        }
    }
}
