//! C5 Centerpiece geometry: a reserved rectangle of modules at the
//! symbol's center for a logo or decorative mark, either knocked out
//! (left blank) or imprinted (drawn over, post-render).
//!
//! The reserved module count and odd-dimension centering are ported
//! from the teacher's `utils::calculate_image_size::calculate_image_size`
//! (aspect-ratio-driven hide-dot counts, clamped to stay odd so the
//! reserve centers exactly on the symbol), generalized from "pixels of
//! an image" to "a `size_fraction` of the symbol's module count".

use crate::error::RenderError;
use crate::types::ErrorCorrectionLevel;

/// Whether reserved modules are simply omitted from rendering
/// (`Knockout`) or still rendered and then drawn over by the caller's
/// own content (`Imprint`, e.g. an `<image>` layer the emitter leaves
/// room for).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CenterpieceMode {
    Knockout,
    Imprint,
}

/// The reserve region's outline within its bounding box. `compute_reserve`
/// always sizes the box as an odd-dimensioned square; this only changes
/// how [`ReserveArea::contains`] tests membership inside that box, and
/// how the emitter draws the centerpiece hook element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CenterpieceShape {
    Rect,
    Circle,
    Squircle,
}

impl Default for CenterpieceShape {
    fn default() -> Self {
        CenterpieceShape::Rect
    }
}

/// A reserved area of modules, in matrix coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReserveArea {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
    pub shape: CenterpieceShape,
}

impl ReserveArea {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        if row < self.row || row >= self.row + self.height || col < self.col || col >= self.col + self.width {
            return false;
        }
        match self.shape {
            CenterpieceShape::Rect => true,
            CenterpieceShape::Circle => self
                .normalized_offset(row, col)
                .map(|(dx, dy)| dx * dx + dy * dy <= 1.0)
                .unwrap_or(true),
            CenterpieceShape::Squircle => self
                .normalized_offset(row, col)
                .map(|(dx, dy)| dx.abs().powi(4) + dy.abs().powi(4) <= 1.0)
                .unwrap_or(true),
        }
    }

    /// `(row, col)`'s cell-center offset from the area's center, each
    /// axis normalized by its own half-extent. `None` for a degenerate
    /// zero-sized reserve, where every contained cell trivially counts.
    fn normalized_offset(&self, row: usize, col: usize) -> Option<(f64, f64)> {
        let half_w = self.width as f64 / 2.0;
        let half_h = self.height as f64 / 2.0;
        if half_w == 0.0 || half_h == 0.0 {
            return None;
        }
        let center_row = self.row as f64 + half_h - 0.5;
        let center_col = self.col as f64 + half_w - 0.5;
        Some(((col as f64 - center_col) / half_w, (row as f64 - center_row) / half_h))
    }

    pub fn module_count(&self) -> usize {
        self.width * self.height
    }
}

/// Computes the reserved module rectangle for a `size_fraction` of a
/// `side`-module-wide symbol, centered with a symmetric `margin_modules`
/// pad and nudged by `(offset_x, offset_y)` (in modules).
///
/// Mirrors the teacher's odd-dimension-for-center-alignment rule: both
/// `width` and `height` are forced odd so the reserve sits exactly on a
/// module grid center.
pub fn compute_reserve(
    side: usize,
    size_fraction: f64,
    offset_x: i32,
    offset_y: i32,
    margin_modules: usize,
    shape: CenterpieceShape,
) -> ReserveArea {
    let target_modules = (side as f64 * side as f64 * size_fraction).sqrt();
    let mut dim = target_modules.round() as usize;
    if dim == 0 {
        dim = 1;
    }
    if dim % 2 == 0 {
        dim += 1;
    }
    dim += 2 * margin_modules;
    let dim = dim.min(side);

    let base = (side - dim) / 2;
    let row = (base as i32 + offset_y).clamp(0, (side - dim) as i32) as usize;
    let col = (base as i32 + offset_x).clamp(0, (side - dim) as i32) as usize;

    ReserveArea {
        row,
        col,
        width: dim,
        height: dim,
        shape,
    }
}

/// Validates a requested reserve against the error-level's safe
/// capacity cap (spec.md \S4.5/\S4.9). Returns the fraction the caller
/// should actually use — unchanged if safe, shrunk to the cap
/// otherwise — plus whether shrinking happened.
pub fn clamp_to_safe_cap(size_fraction: f64, error_level: ErrorCorrectionLevel) -> (f64, bool) {
    let cap = error_level.safe_reserve_cap();
    if size_fraction <= cap {
        (size_fraction, false)
    } else {
        (cap, true)
    }
}

/// Strict-mode variant of [`clamp_to_safe_cap`]: refuses instead of
/// shrinking.
pub fn require_safe_cap(
    size_fraction: f64,
    error_level: ErrorCorrectionLevel,
) -> Result<(), RenderError> {
    let cap = error_level.safe_reserve_cap();
    if size_fraction > cap {
        return Err(RenderError::unsafe_reserve(
            format!(
                "centerpiece size_fraction {size_fraction} exceeds the safe cap {cap} for error level {error_level:?}"
            ),
            crate::error::ErrorDetail::new()
                .field("centerpiece.size_fraction")
                .value(size_fraction.to_string())
                .suggest(cap.to_string()),
        ));
    }
    Ok(())
}
