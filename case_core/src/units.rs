//! # Unit Types
//!
//! Type-safe wrappers for the lengths used by the case calculator. They stay
//! lightweight (just f64 wrappers) and serialize as bare numbers.
//!
//! ## Metric First
//!
//! All geometry is computed in millimetres because Gridfinity is a metric
//! system (42mm pitch, 7mm height units). Inches exist only for display, so a
//! shop working in imperial can read the cut list without converting by hand.
//!
//! ## Example
//!
//! ```rust
//! use case_core::units::{Inches, Millimeters};
//!
//! let panel = Millimeters(254.0);
//! let inches: Inches = panel.into();
//! assert!((inches.0 - 10.0).abs() < 1e-9);
//!
//! assert_eq!(panel.to_string(), "254.0mm");
//! assert_eq!(panel.dual(), "254.0mm (10.00\")");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * MM_PER_INCH)
    }
}

impl Millimeters {
    /// Metric and imperial side by side, e.g. `317.5mm (12.50")`
    pub fn dual(self) -> String {
        format!("{} ({})", self, Inches::from(self))
    }
}

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}mm", self.0)
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\"", self.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqMm> for SqM {
    fn from(sqmm: SqMm) -> Self {
        SqM(sqmm.0 / 1_000_000.0)
    }
}

impl From<SqM> for SqMm {
    fn from(sqm: SqM) -> Self {
        SqMm(sqm.0 * 1_000_000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Inches);
impl_arithmetic!(SqMm);
impl_arithmetic!(SqM);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_inches() {
        let mm = Millimeters(50.8);
        let inches: Inches = mm.into();
        assert!((inches.0 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sqmm_to_sqm() {
        let area = SqMm(2_500_000.0);
        let sqm: SqM = area.into();
        assert_eq!(sqm.0, 2.5);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(10.0);
        let b = Millimeters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Millimeters(8.73).to_string(), "8.7mm");
        assert_eq!(Inches(1.0).to_string(), "1.00\"");
        assert_eq!(Millimeters(317.46).dual(), "317.5mm (12.50\")");
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(12.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
