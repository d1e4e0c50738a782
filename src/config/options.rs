//! Top-level, frozen rendering configuration and its builder.
//!
//! Builder shape ported from the teacher's
//! `config::options::{QRCodeStylingOptions, QRCodeStylingBuilder}`:
//! `Option<T>` fields on the builder, fluent `with_*`-style setters,
//! and a `build()` that fills defaults and runs field-level validation
//! before freezing the result.

use super::{
    AccessibilityConfig, CenterpieceConfig, FrameConfig, GeometryConfig, Palette, PatternsConfig,
};
use crate::error::Result;

/// A fully validated, immutable rendering configuration. Once built,
/// every field has already passed its own structural checks; only the
/// C9 composition validator can still adjust it (with a warning) at
/// render time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub geometry: GeometryConfig,
    pub palette: Palette,
    pub patterns: PatternsConfig,
    pub frame: FrameConfig,
    pub centerpiece: CenterpieceConfig,
    pub accessibility: AccessibilityConfig,
    /// Pixel size of a single module edge in the emitted SVG.
    pub module_px: f64,
    /// When `true`, composition adjustments (merge floor, reserve
    /// shrink, contrast clamp) become hard errors instead of
    /// warning-and-adjust (spec.md \S4.9).
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig::default(),
            palette: Palette::default(),
            patterns: PatternsConfig::default(),
            frame: FrameConfig::default(),
            centerpiece: CenterpieceConfig::default(),
            accessibility: AccessibilityConfig::default(),
            module_px: 10.0,
            strict: false,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Re-runs every sub-config's structural validation. `build()`
    /// already calls this; exposed so callers mutating a `Config` in
    /// place (legacy conversion, intent lowering) can re-check it.
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        self.patterns.validate()?;
        self.frame.validate()?;
        self.centerpiece.validate()?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    geometry: Option<GeometryConfig>,
    palette: Option<Palette>,
    patterns: Option<PatternsConfig>,
    frame: Option<FrameConfig>,
    centerpiece: Option<CenterpieceConfig>,
    accessibility: Option<AccessibilityConfig>,
    module_px: Option<f64>,
    strict: Option<bool>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(mut self, geometry: GeometryConfig) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn patterns(mut self, patterns: PatternsConfig) -> Self {
        self.patterns = Some(patterns);
        self
    }

    pub fn frame(mut self, frame: FrameConfig) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn centerpiece(mut self, centerpiece: CenterpieceConfig) -> Self {
        self.centerpiece = Some(centerpiece);
        self
    }

    pub fn accessibility(mut self, accessibility: AccessibilityConfig) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn module_px(mut self, module_px: f64) -> Self {
        self.module_px = Some(module_px);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    pub fn build(self) -> Result<Config> {
        let config = Config {
            geometry: self.geometry.unwrap_or_default(),
            palette: self.palette.unwrap_or_default(),
            patterns: self.patterns.unwrap_or_default(),
            frame: self.frame.unwrap_or_default(),
            centerpiece: self.centerpiece.unwrap_or_default(),
            accessibility: self.accessibility.unwrap_or_default(),
            module_px: self.module_px.unwrap_or(10.0),
            strict: self.strict.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }
}
