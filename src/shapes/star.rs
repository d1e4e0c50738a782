//! `Star{points, inner_ratio}` — an N-pointed star polygon.

use super::primitives::{svg_polygon, CellRect};
use crate::error::RenderError;

/// Contract: `points` in `3..=12`, `inner_ratio` in `0.1..=0.9`
/// (spec.md \S4.4 shape parameter table).
pub fn validate(points: u8, inner_ratio: f64) -> Result<(), RenderError> {
    if !(3..=12).contains(&points) {
        return Err(RenderError::shape_param_error(
            "star points out of range",
            crate::error::ErrorDetail::new()
                .field("shape.star.points")
                .value(points.to_string())
                .suggest("3..=12"),
        ));
    }
    if !(0.1..=0.9).contains(&inner_ratio) {
        return Err(RenderError::shape_param_error(
            "star inner_ratio out of range",
            crate::error::ErrorDetail::new()
                .field("shape.star.inner_ratio")
                .value(inner_ratio.to_string())
                .suggest("0.1..=0.9"),
        ));
    }
    Ok(())
}

pub fn star(rect: CellRect, points: u8, inner_ratio: f64) -> String {
    let (cx, cy) = rect.center();
    let outer_r = rect.size / 2.0;
    let inner_r = outer_r * inner_ratio;
    let n = points as usize;
    let mut vertices = Vec::with_capacity(n * 2);
    for i in 0..n * 2 {
        let r = if i % 2 == 0 { outer_r } else { inner_r };
        let angle = std::f64::consts::PI * i as f64 / n as f64 - std::f64::consts::FRAC_PI_2;
        vertices.push((cx + r * angle.cos(), cy + r * angle.sin()));
    }
    svg_polygon(&vertices, None)
}
