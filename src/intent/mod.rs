//! C8 Intent Processor: a looser, higher-level request vocabulary that
//! lowers onto [`Config`], degrading gracefully (with a recorded
//! warning) instead of failing outright when a requested detail isn't
//! supported.
//!
//! Lowering follows the same "flat keys fill in a default struct"
//! shape as [`crate::config::LegacyConfig`], but every substitution it
//! makes is reported rather than silent (spec.md \S4.8).

use crate::config::{CenterpieceConfig, Config, ConfigBuilder, FrameConfig, GeometryConfig, Palette};
use crate::error::Result;
use crate::geometry::{CenterpieceMode, CenterpieceShape, ClipMode, FrameShape};
use crate::report::{RenderReport, Severity, Warning};
use crate::shapes::ShapeKind;
use crate::svg::Color;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleIntent {
    pub module_shape: Option<ShapeKind>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameIntent {
    pub shape: Option<FrameShape>,
    pub clip_mode: Option<ClipMode>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReserveIntent {
    /// Fraction of the symbol's area the caller would like reserved,
    /// before any ECC-indexed safe-cap adjustment.
    pub area_pct: Option<f64>,
    pub mode: Option<CenterpieceMode>,
    pub shape: Option<CenterpieceShape>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessibilityIntent {
    pub label: Option<String>,
}

/// A caller's styling request in the intent vocabulary, lowered onto
/// [`Config`] by [`lower`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intent {
    pub style: StyleIntent,
    pub frame: FrameIntent,
    pub reserve: ReserveIntent,
    pub accessibility: AccessibilityIntent,
}

/// Lowers `intent` onto a fresh [`Config`], recording a warning on
/// `report` for every requested detail that had to be substituted
/// (spec.md \S4.8: degradation is never silent).
pub fn lower(intent: &Intent, report: &mut RenderReport) -> Result<Config> {
    let mut geometry = GeometryConfig::default();
    if let Some(shape) = &intent.style.module_shape {
        if shape.validate().is_ok() {
            geometry.shape = shape.clone();
        } else {
            report.push(
                Warning::new(
                    "SHAPE_FALLBACK",
                    Severity::Warning,
                    "requested module shape failed its own parameter contract; falling back to Square",
                )
                .with_values(format!("{shape:?}"), "Square"),
            );
        }
    }

    let mut palette = Palette::default();
    if let Some(fg) = intent.style.foreground {
        palette.foreground = fg;
    }
    if let Some(bg) = intent.style.background {
        palette.background = bg;
    }

    let mut frame = FrameConfig::default();
    if let Some(shape) = &intent.frame.shape {
        if shape.validate().is_ok() {
            frame.shape = shape.clone();
        } else {
            report.push(
                Warning::new(
                    "FRAME_SHAPE_FALLBACK",
                    Severity::Warning,
                    "requested frame shape failed its own parameter contract; falling back to Square",
                )
                .with_values(format!("{shape:?}"), "Square"),
            );
        }
    }
    if let Some(clip_mode) = intent.frame.clip_mode {
        frame.clip_mode = clip_mode;
    }

    let mut centerpiece = CenterpieceConfig::default();
    if let Some(area_pct) = intent.reserve.area_pct {
        if (0.0..=0.5).contains(&area_pct) {
            centerpiece.enabled = true;
            centerpiece.size_fraction = area_pct;
        } else {
            report.push(
                Warning::new(
                    "RESERVE_INTENT_OUT_OF_RANGE",
                    Severity::Warning,
                    "requested reserve area_pct is outside 0.0..=0.5; centerpiece left disabled",
                )
                .with_values(area_pct.to_string(), "disabled"),
            );
        }
    }
    if let Some(mode) = intent.reserve.mode {
        centerpiece.mode = mode;
    }
    if let Some(shape) = intent.reserve.shape {
        centerpiece.shape = shape;
    }

    let mut accessibility = crate::config::AccessibilityConfig::default();
    if let Some(label) = &intent.accessibility.label {
        accessibility.aria_label = Some(label.clone());
        accessibility.include_title = true;
    }

    ConfigBuilder::new()
        .geometry(geometry)
        .palette(palette)
        .frame(frame)
        .centerpiece(centerpiece)
        .accessibility(accessibility)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_intent_lowers_to_defaults() {
        let mut report = RenderReport::new();
        let config = lower(&Intent::default(), &mut report).unwrap();
        assert_eq!(config.geometry.shape, ShapeKind::Square);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn invalid_shape_params_degrade_with_a_warning() {
        let intent = Intent {
            style: StyleIntent {
                module_shape: Some(ShapeKind::Star {
                    points: 100,
                    inner_ratio: 0.5,
                }),
                ..StyleIntent::default()
            },
            ..Intent::default()
        };
        let mut report = RenderReport::new();
        let config = lower(&intent, &mut report).unwrap();
        assert_eq!(config.geometry.shape, ShapeKind::Square);
        assert!(report.warnings.iter().any(|w| w.code == "SHAPE_FALLBACK"));
    }

    #[test]
    fn reserve_area_pct_enables_centerpiece() {
        let intent = Intent {
            reserve: ReserveIntent {
                area_pct: Some(0.1),
                mode: None,
                shape: None,
            },
            ..Intent::default()
        };
        let mut report = RenderReport::new();
        let config = lower(&intent, &mut report).unwrap();
        assert!(config.centerpiece.enabled);
        assert_eq!(config.centerpiece.size_fraction, 0.1);
    }
}
