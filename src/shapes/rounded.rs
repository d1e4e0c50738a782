//! `Rounded{radius}` and `Squircle{radius}` — uniformly rounded-corner
//! shapes with no neighbor dependence (as opposed to the `Connected*`
//! family, which rounds only the corners facing empty space).

use super::primitives::CellRect;
use crate::error::RenderError;

/// Contract: `radius` (fraction of half the module size) in `0.0..=1.0`
/// (spec.md \S4.4 shape parameter table). `1.0` degenerates to a circle.
pub fn validate(radius: f64) -> Result<(), RenderError> {
    if !(0.0..=1.0).contains(&radius) {
        return Err(RenderError::shape_param_error(
            "rounded radius out of range",
            crate::error::ErrorDetail::new()
                .field("shape.rounded.radius")
                .value(radius.to_string())
                .suggest("0.0..=1.0"),
        ));
    }
    Ok(())
}

/// A square with all four corners rounded by `radius * size / 2`.
pub fn rounded(rect: CellRect, radius: f64) -> String {
    let r = rect.size / 2.0 * radius;
    rect_with_corner_radius(rect, r)
}

/// A squircle: same parameterization as `rounded`, kept as a distinct
/// shape kind per spec.md so config/report diagnostics can name it
/// independently even though the geometry below is shared.
pub fn squircle(rect: CellRect, radius: f64) -> String {
    let r = rect.size / 2.0 * radius;
    rect_with_corner_radius(rect, r)
}

fn rect_with_corner_radius(rect: CellRect, r: f64) -> String {
    let (x, y, s) = (rect.x, rect.y, rect.size);
    if r <= 0.0001 {
        return format!(r#"<rect x="{}" y="{}" width="{}" height="{}"/>"#, x, y, s, s);
    }
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}"/>"#,
        x, y, s, s, r, r
    )
}
