//! Gradient fill definitions, ported from the teacher's
//! `config::gradient::Gradient`/`ColorStop` plus the gradient-def half
//! of `rendering::svg_renderer::create_color`.

use std::f64::consts::PI;

use super::color::Color;
use crate::types::GradientType;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    pub gradient_type: GradientType,
    pub rotation: f64,
    pub color_stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn linear(color_stops: Vec<ColorStop>) -> Self {
        Self {
            gradient_type: GradientType::Linear,
            rotation: 0.0,
            color_stops,
        }
    }

    pub fn linear_rotated(rotation: f64, color_stops: Vec<ColorStop>) -> Self {
        Self {
            gradient_type: GradientType::Linear,
            rotation,
            color_stops,
        }
    }

    pub fn radial(color_stops: Vec<ColorStop>) -> Self {
        Self {
            gradient_type: GradientType::Radial,
            rotation: 0.0,
            color_stops,
        }
    }

    pub fn simple_linear(start: Color, end: Color) -> Self {
        Self::linear(vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)])
    }

    pub fn simple_radial(center: Color, edge: Color) -> Self {
        Self::radial(vec![ColorStop::new(0.0, center), ColorStop::new(1.0, edge)])
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::simple_linear(Color::BLACK, Color::BLACK)
    }
}

/// A resolved fill: either a flat color or a reference to a gradient
/// def this function also emits.
pub struct Paint {
    pub defs: String,
    pub fill: String,
}

/// Builds the `<defs>` fragment and `fill` attribute value for a solid
/// color or gradient over a `width x height` box anchored at `(x, y)`,
/// with a stable, content-derived `id`.
pub fn paint_def(
    gradient: Option<&Gradient>,
    color: Color,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    id: &str,
) -> Paint {
    let Some(grad) = gradient else {
        return Paint {
            defs: String::new(),
            fill: color.to_hex(),
        };
    };

    let size = width.max(height);
    let defs = match grad.gradient_type {
        GradientType::Radial => {
            let cx = x + width / 2.0;
            let cy = y + height / 2.0;
            let r = size / 2.0;
            let mut d = format!(
                r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" fx="{cx}" fy="{cy}" cx="{cx}" cy="{cy}" r="{r}">"#
            );
            for stop in &grad.color_stops {
                d.push_str(&format!(
                    r#"<stop offset="{}%" stop-color="{}"/>"#,
                    stop.offset * 100.0,
                    stop.color.to_hex()
                ));
            }
            d.push_str("</radialGradient>");
            d
        }
        GradientType::Linear => {
            let rotation = grad.rotation % (2.0 * PI);
            let positive_rotation = (rotation + 2.0 * PI) % (2.0 * PI);
            let (mut x0, mut y0, mut x1, mut y1) =
                (x + width / 2.0, y + height / 2.0, x + width / 2.0, y + height / 2.0);

            if (0.0..=0.25 * PI).contains(&positive_rotation)
                || (1.75 * PI..=2.0 * PI).contains(&positive_rotation)
            {
                x0 -= width / 2.0;
                y0 -= (height / 2.0) * rotation.tan();
                x1 += width / 2.0;
                y1 += (height / 2.0) * rotation.tan();
            } else if (0.25 * PI..=0.75 * PI).contains(&positive_rotation) {
                y0 -= height / 2.0;
                x0 -= (width / 2.0) / rotation.tan();
                y1 += height / 2.0;
                x1 += (width / 2.0) / rotation.tan();
            } else if (0.75 * PI..=1.25 * PI).contains(&positive_rotation) {
                x0 += width / 2.0;
                y0 += (height / 2.0) * rotation.tan();
                x1 -= width / 2.0;
                y1 -= (height / 2.0) * rotation.tan();
            } else if (1.25 * PI..=1.75 * PI).contains(&positive_rotation) {
                y0 += height / 2.0;
                x0 += (width / 2.0) / rotation.tan();
                y1 -= height / 2.0;
                x1 -= (width / 2.0) / rotation.tan();
            }

            let mut d = format!(
                r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                x0.round(),
                y0.round(),
                x1.round(),
                y1.round()
            );
            for stop in &grad.color_stops {
                d.push_str(&format!(
                    r#"<stop offset="{}%" stop-color="{}"/>"#,
                    stop.offset * 100.0,
                    stop.color.to_hex()
                ));
            }
            d.push_str("</linearGradient>");
            d
        }
    };

    Paint {
        defs,
        fill: format!("url(#{id})"),
    }
}
