//! Shape drawers with no neighborhood dependence: `Square`, `Circle`,
//! `Dot`, `Diamond`, `Hexagon`.

use super::primitives::{svg_circle, svg_polygon, svg_rect, CellRect};

pub fn square(rect: CellRect) -> String {
    svg_rect(rect.x, rect.y, rect.size, rect.size, None)
}

/// Full-size inscribed circle, radius `0.45 * size` — matches the
/// scannable S2 scenario baseline (spec.md \S8 S2).
pub fn circle(rect: CellRect) -> String {
    let (cx, cy) = rect.center();
    svg_circle(cx, cy, rect.size * 0.45, None)
}

/// Smaller decorative dot, visually distinct from a full `Circle`
/// (deliberately undersized so neighboring dots never touch).
pub fn dot(rect: CellRect) -> String {
    let (cx, cy) = rect.center();
    svg_circle(cx, cy, rect.size * 0.32, None)
}

pub fn diamond(rect: CellRect) -> String {
    let (cx, cy) = rect.center();
    svg_polygon(
        &[
            (cx, rect.y),
            (rect.x + rect.size, cy),
            (cx, rect.y + rect.size),
            (rect.x, cy),
        ],
        None,
    )
}

pub fn hexagon(rect: CellRect) -> String {
    let (cx, cy) = rect.center();
    let r = rect.size / 2.0;
    let mut points = Vec::with_capacity(6);
    for i in 0..6 {
        let angle = std::f64::consts::PI / 3.0 * i as f64 - std::f64::consts::PI / 2.0;
        points.push((cx + r * angle.cos(), cy + r * angle.sin()));
    }
    svg_polygon(&points, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_a_rect() {
        let svg = square(CellRect::new(0.0, 0.0, 10.0));
        assert!(svg.contains("rect"));
    }

    #[test]
    fn circle_radius_matches_scenario_constant() {
        let svg = circle(CellRect::new(0.0, 0.0, 10.0));
        assert!(svg.contains("r=\"4.5\""));
    }

    #[test]
    fn hexagon_has_six_points() {
        let svg = hexagon(CellRect::new(0.0, 0.0, 10.0));
        let count = svg.matches(',').count();
        assert_eq!(count, 6);
    }
}
