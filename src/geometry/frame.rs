//! C5 Frame geometry: the overall boundary shape the symbol is clipped,
//! faded, or scaled into.
//!
//! Grounded in the teacher's `rendering::svg_renderer::render_background`
//! clip-path construction (rounded-rect `rx` derived from a `round`
//! fraction of the shorter side) and `plugins::border::generate_rect_attributes`
//! (rounded-rect corner math for a border shell around the symbol).

use crate::error::RenderError;

/// The overall boundary the rendered symbol is fit into.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum FrameShape {
    Square,
    RoundedRect { corner_radius: f64 },
    Circle,
    Squircle { corner_radius: f64 },
    Custom { path: String },
}

impl FrameShape {
    pub fn validate(&self) -> Result<(), RenderError> {
        match self {
            FrameShape::RoundedRect { corner_radius } | FrameShape::Squircle { corner_radius } => {
                if !(0.0..=1.0).contains(corner_radius) {
                    return Err(RenderError::shape_param_error(
                        "frame corner_radius out of range",
                        crate::error::ErrorDetail::new()
                            .field("frame.corner_radius")
                            .value(corner_radius.to_string())
                            .suggest("0.0..=1.0"),
                    ));
                }
                Ok(())
            }
            FrameShape::Custom { path } => {
                if path.trim().is_empty() {
                    return Err(RenderError::shape_param_error(
                        "frame custom path is empty",
                        crate::error::ErrorDetail::new().field("frame.path"),
                    ));
                }
                Ok(())
            }
            FrameShape::Square | FrameShape::Circle => Ok(()),
        }
    }
}

/// How content outside the frame boundary is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ClipMode {
    Clip,
    Fade,
    Scale,
    None,
}

/// A resolved clip-path (or mask, for `Fade`) definition plus the
/// `<defs>` fragment that backs it, in user-space pixel coordinates.
pub struct FrameGeometry {
    pub id: String,
    pub defs: String,
    /// `clip-path` or `mask` attribute value referencing `id`, or
    /// `None` when `ClipMode::None`/`ClipMode::Scale` applies no
    /// boundary attribute to the modules layer.
    pub attribute: Option<(&'static str, String)>,
}

/// Computes the frame's clip/mask definition for a symbol occupying
/// `[0, side_px] x [0, side_px]`, given a stable `id_prefix` for
/// deterministic, content-derived IDs (spec.md \S4.6).
pub fn resolve_frame(
    shape: &FrameShape,
    clip_mode: ClipMode,
    side_px: f64,
    id_prefix: &str,
) -> FrameGeometry {
    let id = format!("{id_prefix}-frame-clip");

    if matches!(clip_mode, ClipMode::None | ClipMode::Scale) {
        return FrameGeometry {
            id,
            defs: String::new(),
            attribute: None,
        };
    }

    let rx = match shape {
        FrameShape::Square => 0.0,
        FrameShape::RoundedRect { corner_radius } | FrameShape::Squircle { corner_radius } => {
            (side_px / 2.0) * corner_radius
        }
        FrameShape::Circle => side_px / 2.0,
        FrameShape::Custom { .. } => 0.0,
    };

    let shape_el = match shape {
        FrameShape::Custom { path } => format!(r#"<path d="{path}"/>"#),
        _ => format!(
            r#"<rect x="0" y="0" width="{side_px}" height="{side_px}"{}/>"#,
            if rx > 0.0 {
                format!(r#" rx="{rx}" ry="{rx}""#)
            } else {
                String::new()
            }
        ),
    };

    match clip_mode {
        ClipMode::Clip => {
            let defs = format!(r#"<clipPath id="{id}">{shape_el}</clipPath>"#);
            FrameGeometry {
                id: id.clone(),
                defs,
                attribute: Some(("clip-path", format!("url(#{id})"))),
            }
        }
        ClipMode::Fade => {
            // A mask: opaque interior, feathered edge via a radial
            // gradient mirrors resvg-free fading without a raster pass.
            let gradient_id = format!("{id_prefix}-frame-fade");
            let defs = format!(
                r#"<radialGradient id="{gradient_id}"><stop offset="85%" stop-color="white"/><stop offset="100%" stop-color="black"/></radialGradient><mask id="{id}"><rect x="0" y="0" width="{side_px}" height="{side_px}" fill="url(#{gradient_id})"/></mask>"#
            );
            FrameGeometry {
                id: id.clone(),
                defs,
                attribute: Some(("mask", format!("url(#{id})"))),
            }
        }
        ClipMode::None | ClipMode::Scale => unreachable!("handled above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_clip_has_no_radius() {
        let g = resolve_frame(&FrameShape::Square, ClipMode::Clip, 100.0, "x");
        assert!(!g.defs.contains("rx"));
    }

    #[test]
    fn circle_clip_uses_half_side_radius() {
        let g = resolve_frame(&FrameShape::Circle, ClipMode::Clip, 100.0, "x");
        assert!(g.defs.contains("rx=\"50\""));
    }

    #[test]
    fn clip_mode_none_has_no_attribute() {
        let g = resolve_frame(&FrameShape::Square, ClipMode::None, 100.0, "x");
        assert!(g.attribute.is_none());
    }

    #[test]
    fn out_of_range_corner_radius_is_rejected() {
        let shape = FrameShape::RoundedRect { corner_radius: 2.0 };
        assert!(shape.validate().is_err());
    }
}
