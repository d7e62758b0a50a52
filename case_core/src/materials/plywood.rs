//! Standard Plywood Sizes
//!
//! Nominal-to-actual thickness conversions for sheet plywood. Sheet goods
//! sold by nominal fraction are thinner than the label, and the bracket
//! channel has to be sized to the real sheet.
//!
//! ## Nominal vs Actual Thickness
//!
//! | Nominal | Actual used |
//! |---------|-------------|
//! | 1/4"    | 6.35mm      |
//! | 3/8"    | 8.73mm      |
//! | 1/2"    | 11.91mm     |
//! | 5/8"    | 15.08mm     |
//! | 3/4"    | 17.86mm     |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Standard plywood size designation
///
/// Serializes as the nominal fraction (`"3/8"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlywoodSize {
    /// 1/4" nominal (~5.5mm real sheet, table value 6.35mm)
    #[serde(rename = "1/4")]
    Quarter,
    /// 3/8" nominal (11/32")
    #[default]
    #[serde(rename = "3/8")]
    ThreeEighths,
    /// 1/2" nominal (15/32")
    #[serde(rename = "1/2")]
    Half,
    /// 5/8" nominal (19/32")
    #[serde(rename = "5/8")]
    FiveEighths,
    /// 3/4" nominal (23/32")
    #[serde(rename = "3/4")]
    ThreeQuarters,
}

impl PlywoodSize {
    /// All sizes, thinnest first
    pub const ALL: [PlywoodSize; 5] = [
        PlywoodSize::Quarter,
        PlywoodSize::ThreeEighths,
        PlywoodSize::Half,
        PlywoodSize::FiveEighths,
        PlywoodSize::ThreeQuarters,
    ];

    /// Actual thickness in millimetres
    pub fn thickness_mm(&self) -> f64 {
        match self {
            PlywoodSize::Quarter => 6.35,
            PlywoodSize::ThreeEighths => 8.73,
            PlywoodSize::Half => 11.91,
            PlywoodSize::FiveEighths => 15.08,
            PlywoodSize::ThreeQuarters => 17.86,
        }
    }

    /// Nominal fraction as written on the sheet (e.g., "3/8")
    pub fn nominal(&self) -> &'static str {
        match self {
            PlywoodSize::Quarter => "1/4",
            PlywoodSize::ThreeEighths => "3/8",
            PlywoodSize::Half => "1/2",
            PlywoodSize::FiveEighths => "5/8",
            PlywoodSize::ThreeQuarters => "3/4",
        }
    }

    /// Comma-separated list of nominal sizes, for error messages
    pub fn valid_nominals() -> String {
        Self::ALL
            .iter()
            .map(|size| size.nominal())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for PlywoodSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('"');
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.nominal() == trimmed)
            .ok_or_else(|| CalcError::unknown_plywood(s, Self::valid_nominals()))
    }
}

impl fmt::Display for PlywoodSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\"", self.nominal())
    }
}
