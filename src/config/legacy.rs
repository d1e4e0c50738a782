//! Flat, legacy keyword configuration and its conversion into the
//! structured [`Config`](super::Config).
//!
//! Mirrors how the teacher's flat `QRCodeStylingOptions` fields map
//! one-to-one onto builder setters, but adds the one thing the teacher
//! never needed: detecting when a deprecated keyword and its current
//! replacement disagree, instead of silently letting one win.

use super::{Config, ConfigBuilder, GeometryConfig, Palette};
use crate::error::{ErrorDetail, RenderError, Result};
use crate::shapes::ShapeKind;
use crate::svg::Color;

/// A flat set of legacy keyword-style options. Both `dot_shape`
/// (deprecated) and `module_shape` (current) address the same
/// underlying field; supplying both is only accepted when they agree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyConfig {
    pub dot_shape: Option<ShapeKind>,
    pub module_shape: Option<ShapeKind>,
    pub fg_color: Option<Color>,
    pub bg_color: Option<Color>,
    pub safe_mode: Option<bool>,
}

impl LegacyConfig {
    /// Resolves the deprecated/current shape keyword pair, or fails
    /// with `ConfigConflict` if both are set and disagree.
    fn resolve_shape(&self) -> Result<Option<ShapeKind>> {
        match (&self.dot_shape, &self.module_shape) {
            (Some(deprecated), Some(current)) if deprecated != current => {
                Err(RenderError::config_conflict(
                    "legacy `dot_shape` and current `module_shape` disagree",
                    ErrorDetail::new()
                        .field("legacy.dot_shape")
                        .value(format!("{deprecated:?}"))
                        .suggest(format!("module_shape = {current:?}")),
                ))
            }
            (Some(deprecated), None) => Ok(Some(deprecated.clone())),
            (_, Some(current)) => Ok(Some(current.clone())),
            (None, None) => Ok(None),
        }
    }

    /// Converts this flat config into a structured, validated
    /// [`Config`], applying defaults for every field left unset.
    pub fn into_config(self) -> Result<Config> {
        let shape = self.resolve_shape()?;

        let mut geometry = GeometryConfig::default();
        if let Some(shape) = shape {
            geometry.shape = shape;
        }
        if let Some(safe_mode) = self.safe_mode {
            geometry.safe_mode = safe_mode;
        }

        let mut palette = Palette::default();
        if let Some(fg) = self.fg_color {
            palette.foreground = fg;
        }
        if let Some(bg) = self.bg_color {
            palette.background = bg;
        }

        ConfigBuilder::new().geometry(geometry).palette(palette).build()
    }
}
