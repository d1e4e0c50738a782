//! Low-level SVG fragment builders shared by every shape drawer.
//!
//! Ported near-verbatim from the teacher's `figures::traits` helpers —
//! rotation transforms and the circle/rect/path element builders are
//! the same primitive vocabulary every shape variant composes with.

use std::f64::consts::PI;

/// Axis-aligned rectangle in user-space coordinates a shape is drawn
/// into: `(x, y)` is the top-left corner, `size` the module's edge
/// length in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl CellRect {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

/// Build a `rotate(deg, cx, cy)` transform around the rect's center, or
/// `None` when the rotation is negligible.
pub fn rotate_transform(rect: CellRect, rotation: f64) -> Option<String> {
    if rotation.abs() < 0.0001 {
        return None;
    }
    let (cx, cy) = rect.center();
    let degrees = (180.0 * rotation) / PI;
    Some(format!("rotate({},{},{})", degrees, cx, cy))
}

pub fn svg_circle(cx: f64, cy: f64, r: f64, transform: Option<&str>) -> String {
    match transform {
        Some(t) => format!(r#"<circle cx="{}" cy="{}" r="{}" transform="{}"/>"#, cx, cy, r, t),
        None => format!(r#"<circle cx="{}" cy="{}" r="{}"/>"#, cx, cy, r),
    }
}

pub fn svg_rect(x: f64, y: f64, width: f64, height: f64, transform: Option<&str>) -> String {
    match transform {
        Some(t) => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" transform="{}"/>"#,
            x, y, width, height, t
        ),
        None => format!(r#"<rect x="{}" y="{}" width="{}" height="{}"/>"#, x, y, width, height),
    }
}

pub fn svg_path(d: &str, clip_rule: Option<&str>, transform: Option<&str>) -> String {
    let mut attrs = format!(r#"d="{}""#, d);
    if let Some(rule) = clip_rule {
        attrs.push_str(&format!(r#" clip-rule="{}""#, rule));
    }
    if let Some(t) = transform {
        attrs.push_str(&format!(r#" transform="{}""#, t));
    }
    format!(r#"<path {}/>"#, attrs)
}

pub fn svg_polygon(points: &[(f64, f64)], transform: Option<&str>) -> String {
    let pts: Vec<String> = points.iter().map(|(x, y)| format!("{},{}", x, y)).collect();
    let points_attr = pts.join(" ");
    match transform {
        Some(t) => format!(r#"<polygon points="{}" transform="{}"/>"#, points_attr, t),
        None => format!(r#"<polygon points="{}"/>"#, points_attr),
    }
}
