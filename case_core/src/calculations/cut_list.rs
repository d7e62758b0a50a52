//! # Plywood Cut List
//!
//! Derives the six flat panels of a case from its interior size and bracket
//! geometry. Panel sizes follow a bottom-up construction order:
//!
//! 1. **Bottom** - full exterior footprint, everything else sits on it
//! 2. **Left/Right sides** - full depth, sit on the bottom
//! 3. **Front/Back** - fit *between* the sides, sit on the bottom
//! 4. **Top** - fits between the sides, rests on front/back
//!
//! With `A` = arm width and `P` = ply thickness:
//!
//! | Piece      | Width          | Height / Depth   |
//! |------------|----------------|------------------|
//! | Bottom     | W + 2P         | D + 2A           |
//! | Side (x2)  | D + 2A         | H + P            |
//! | Front/Back | W              | H + P            |
//! | Top        | W              | D + 2A - 2P      |
//!
//! The order of pieces (Bottom, Left, Right, Front, Back, Top) and their notes
//! are part of the output; reports address pieces by position.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::calculations::bracket::arm_width;
use crate::calculations::case::CaseConfig;
use crate::units::{SqM, SqMm};

pub const BOTTOM_PANEL: &str = "Bottom Panel";
pub const SIDE_PANEL_LEFT: &str = "Side Panel (Left)";
pub const SIDE_PANEL_RIGHT: &str = "Side Panel (Right)";
pub const FRONT_PANEL: &str = "Front Panel";
pub const BACK_PANEL: &str = "Back Panel";
pub const TOP_PANEL: &str = "Top Panel (optional)";

const BOTTOM_NOTE: &str = "Full exterior footprint - all sides sit on this";
const FRONT_BACK_NOTE: &str = "Fits between sides, sits on bottom";
const TOP_NOTE: &str = "Fits between sides, sits on front/back";

/// Number of pieces in every cut list
pub const PIECE_COUNT: usize = 6;

/// A single flat panel to cut.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Front Panel",
///   "width_mm": 300.0,
///   "height_mm": 158.73,
///   "quantity": 1,
///   "notes": "Fits between sides, sits on bottom"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPiece {
    /// Panel name (e.g., "Bottom Panel")
    pub name: String,

    /// First panel dimension (mm)
    pub width_mm: f64,

    /// Second panel dimension (mm); depth for horizontal panels
    pub height_mm: f64,

    /// Always 1; mirrored panels are listed separately
    pub quantity: u32,

    /// How the panel sits in the assembly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CutPiece {
    fn new(name: &str, width_mm: f64, height_mm: f64, notes: impl Into<String>) -> Self {
        CutPiece {
            name: name.to_string(),
            width_mm,
            height_mm,
            quantity: 1,
            notes: Some(notes.into()),
        }
    }

    /// Face area of all copies of this piece
    pub fn area_mm2(&self) -> SqMm {
        SqMm(self.width_mm * self.height_mm * f64::from(self.quantity))
    }
}

/// The six panels of a case, in construction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutList(Vec<CutPiece>);

impl CutList {
    pub fn pieces(&self) -> &[CutPiece] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CutPiece> {
        self.0.iter()
    }

    pub fn piece_count(&self) -> usize {
        self.0.len()
    }

    /// Look up a piece by its name
    pub fn find(&self, name: &str) -> Option<&CutPiece> {
        self.0.iter().find(|piece| piece.name == name)
    }

    /// Total plywood face area, useful for estimating sheet count
    pub fn total_area_mm2(&self) -> SqMm {
        self.0
            .iter()
            .fold(SqMm::default(), |total, piece| total + piece.area_mm2())
    }

    pub fn total_area_m2(&self) -> SqM {
        self.total_area_mm2().into()
    }
}

impl Index<usize> for CutList {
    type Output = CutPiece;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a CutList {
    type Item = &'a CutPiece;
    type IntoIter = std::slice::Iter<'a, CutPiece>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build the cut list for a case.
pub fn calculate_cut_list(config: &CaseConfig) -> CutList {
    let ply = config.ply_thickness_mm;
    let arm = arm_width(ply, config.bracket_wall_mm, config.tolerance_mm);

    // Bottom: interior plus both side panels across, plus both arms front to back
    let bottom_width = config.interior_width_mm + ply * 2.0;
    let bottom_depth = config.interior_depth_mm + arm * 2.0;

    // Sides run the full bottom depth and reach up past the top panel's thickness
    let side_depth = bottom_depth;
    let side_height = config.interior_height_mm + ply;

    // Front/back sit between the sides, so they must match side height exactly
    let front_back_width = config.interior_width_mm;
    let front_back_height = side_height;

    // Top sits between sides and on the front/back edges
    let top_width = config.interior_width_mm;
    let top_depth = config.interior_depth_mm + arm * 2.0 - ply * 2.0;

    let side_note = format!(
        "Full depth, sits on bottom, height includes top ply ({:.1}mm)",
        ply
    );

    CutList(vec![
        CutPiece::new(BOTTOM_PANEL, bottom_width, bottom_depth, BOTTOM_NOTE),
        CutPiece::new(SIDE_PANEL_LEFT, side_depth, side_height, side_note.clone()),
        CutPiece::new(SIDE_PANEL_RIGHT, side_depth, side_height, side_note),
        CutPiece::new(FRONT_PANEL, front_back_width, front_back_height, FRONT_BACK_NOTE),
        CutPiece::new(BACK_PANEL, front_back_width, front_back_height, FRONT_BACK_NOTE),
        CutPiece::new(TOP_PANEL, top_width, top_depth, TOP_NOTE),
    ])
}
