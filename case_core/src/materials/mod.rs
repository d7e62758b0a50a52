//! # Materials Database
//!
//! Sheet material definitions for case construction. Only plywood is
//! supported; the table is closed and not user-configurable.
//!
//! ## Example
//!
//! ```rust
//! use case_core::materials::PlywoodSize;
//!
//! let ply: PlywoodSize = "3/8".parse().unwrap();
//! assert_eq!(ply.thickness_mm(), 8.73);
//! ```

pub mod plywood;

pub use plywood::PlywoodSize;
