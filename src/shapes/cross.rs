//! `Cross{thickness, sharp}` — a plus-sign shape, either hard-cornered
//! (`sharp = true`) or lightly rounded at its twelve corners.

use super::primitives::CellRect;
use crate::error::RenderError;

/// Contract: `thickness` (fraction of module size occupied by each
/// arm) in `0.1..=0.8` (spec.md \S4.4 shape parameter table).
pub fn validate(thickness: f64) -> Result<(), RenderError> {
    if !(0.1..=0.8).contains(&thickness) {
        return Err(RenderError::shape_param_error(
            "cross thickness out of range",
            crate::error::ErrorDetail::new()
                .field("shape.cross.thickness")
                .value(thickness.to_string())
                .suggest("0.1..=0.8"),
        ));
    }
    Ok(())
}

pub fn cross(rect: CellRect, thickness: f64, sharp: bool) -> String {
    let (x, y, s) = (rect.x, rect.y, rect.size);
    let arm = s * thickness;
    let lo = (s - arm) / 2.0;
    let hi = lo + arm;

    // Twelve vertices of the plus sign, clockwise from the top-left of
    // the vertical arm.
    let vertices = [
        (x + lo, y),
        (x + hi, y),
        (x + hi, y + lo),
        (x + s, y + lo),
        (x + s, y + hi),
        (x + hi, y + hi),
        (x + hi, y + s),
        (x + lo, y + s),
        (x + lo, y + hi),
        (x, y + hi),
        (x, y + lo),
        (x + lo, y + lo),
    ];

    if sharp {
        rounded_polygon_path(&vertices, 0.0)
    } else {
        rounded_polygon_path(&vertices, arm * 0.2)
    }
}

/// Builds a closed path over `vertices`, replacing each corner with a
/// quadratic curve of reach `radius` along its two adjacent edges
/// (`radius = 0.0` degenerates to a sharp polygon).
fn rounded_polygon_path(vertices: &[(f64, f64)], radius: f64) -> String {
    let n = vertices.len();
    if radius <= 0.0 {
        let mut d = String::new();
        for (i, &(vx, vy)) in vertices.iter().enumerate() {
            d.push_str(&format!("{}{} {} ", if i == 0 { "M" } else { "L" }, vx, vy));
        }
        d.push('Z');
        return format!(r#"<path d="{}"/>"#, d);
    }

    let point_toward = |from: (f64, f64), to: (f64, f64), dist: f64| -> (f64, f64) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 {
            from
        } else {
            (from.0 + dx / len * dist, from.1 + dy / len * dist)
        }
    };

    let mut d = String::new();
    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let cur = vertices[i];
        let next = vertices[(i + 1) % n];
        let approach = point_toward(cur, prev, radius);
        let leave = point_toward(cur, next, radius);
        if i == 0 {
            d.push_str(&format!("M{} {} ", approach.0, approach.1));
        } else {
            d.push_str(&format!("L{} {} ", approach.0, approach.1));
        }
        d.push_str(&format!("Q{} {} {} {} ", cur.0, cur.1, leave.0, leave.1));
    }
    d.push('Z');
    format!(r#"<path d="{}"/>"#, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_thickness() {
        assert!(validate(0.05).is_err());
        assert!(validate(0.9).is_err());
    }

    #[test]
    fn sharp_and_rounded_differ() {
        let rect = CellRect::new(0.0, 0.0, 10.0);
        assert_ne!(cross(rect, 0.4, true), cross(rect, 0.4, false));
    }

    #[test]
    fn sharp_cross_has_twelve_segments() {
        let rect = CellRect::new(0.0, 0.0, 10.0);
        let svg = cross(rect, 0.4, true);
        assert_eq!(svg.matches('L').count(), 11);
    }
}
