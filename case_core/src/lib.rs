//! # case_core - Plywood Case Sizing Engine
//!
//! `case_core` is the computational heart of Plycase. It derives consistent
//! geometry for a plywood case held together by 3D-printed corner brackets,
//! optionally sized around a Gridfinity baseplate. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types at the boundary; the math itself cannot fail
//!
//! ## Quick Start
//!
//! ```rust
//! use case_core::calculations::{CaseRequest, GridSpec, MaterialParams};
//!
//! // Exactly 6x4 grid units, room for 6u bins
//! let request = CaseRequest::Grid {
//!     spec: GridSpec::new(6, 4, 6),
//!     materials: MaterialParams::default(),
//! };
//! let calc = request.calculate().unwrap();
//!
//! assert_eq!(calc.config.interior_width_mm, 272.0);
//! assert_eq!(calc.config.interior_height_mm, 76.0);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&calc).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Bracket, cut list, Gridfinity and mode resolvers
//! - [`constants`] - Gridfinity and bracket constants
//! - [`materials`] - Plywood thickness table
//! - [`units`] - Type-safe unit wrappers
//! - [`report`] - Text report rendering
//! - [`scad`] - OpenSCAD parameter file generation
//! - [`settings`] - Workshop defaults
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic exports and settings loading

pub mod calculations;
pub mod constants;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod report;
pub mod scad;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate_case, calculate_from_gridfinity, calculate_from_size, BaseplateStyle, CaseCalculation,
    CaseConfig, CaseRequest, GridSpec, SizeSpec,
};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_settings, write_json, write_scad};
pub use materials::PlywoodSize;
pub use settings::ShopSettings;
