//! `Triangle{direction}` — an equilateral triangle pointing in one of
//! the four cardinal directions.

use super::primitives::{svg_polygon, CellRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriangleDirection {
    Up,
    Down,
    Left,
    Right,
}

pub fn triangle(rect: CellRect, direction: TriangleDirection) -> String {
    let (x, y, s) = (rect.x, rect.y, rect.size);
    let points = match direction {
        TriangleDirection::Up => [(x + s / 2.0, y), (x + s, y + s), (x, y + s)],
        TriangleDirection::Down => [(x, y), (x + s, y), (x + s / 2.0, y + s)],
        TriangleDirection::Left => [(x + s, y), (x + s, y + s), (x, y + s / 2.0)],
        TriangleDirection::Right => [(x, y), (x, y + s), (x + s, y + s / 2.0)],
    };
    svg_polygon(&points, None)
}
