//! Centerpiece reservation configuration.

use crate::error::{ErrorDetail, RenderError};
use crate::geometry::{CenterpieceMode, CenterpieceShape};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenterpieceConfig {
    pub enabled: bool,
    /// Fraction of the symbol's module area to reserve, before any
    /// ECC-indexed safe-cap adjustment (spec.md \S4.5/\S4.9). Valid
    /// domain is `0.0..=0.5`; the ECC-indexed safe cap is tighter still.
    pub size_fraction: f64,
    pub offset_x: i32,
    pub offset_y: i32,
    pub margin_modules: usize,
    pub mode: CenterpieceMode,
    pub shape: CenterpieceShape,
    /// When `true`, an over-cap `size_fraction` is a hard
    /// `UnsafeReserve` error instead of being auto-shrunk with a
    /// warning (spec.md \S4.9).
    pub strict: bool,
}

impl Default for CenterpieceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            size_fraction: 0.0,
            offset_x: 0,
            offset_y: 0,
            margin_modules: 1,
            mode: CenterpieceMode::Knockout,
            shape: CenterpieceShape::Rect,
            strict: false,
        }
    }
}

impl CenterpieceConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(0.0..=0.5).contains(&self.size_fraction) {
            return Err(RenderError::config_invalid(
                "centerpiece.size_fraction must be in 0.0..=0.5",
                ErrorDetail::new()
                    .field("centerpiece.size_fraction")
                    .value(self.size_fraction.to_string()),
            ));
        }
        Ok(())
    }
}
