//! `Connected`, `ConnectedExtraRounded`, `ConnectedClassy`, and
//! `ConnectedClassyRounded` — neighbor-aware module shapes that round
//! only the corners facing empty space, so adjacent dark modules of
//! the same cluster appear to flow into one another.
//!
//! Branching ported from the teacher's `figures::dot::drawer::QRDot`
//! neighbor-count dispatch (`draw_rounded`/`draw_extra_rounded`/
//! `draw_classy`/`draw_classy_rounded`), generalized to take its
//! cardinal-neighbor booleans as a plain [`CardinalNeighbors`] value
//! instead of a closure over the teacher's own matrix type.

use std::f64::consts::PI;

use super::primitives::{rotate_transform, svg_circle, svg_path, svg_rect, CellRect};

/// Cardinal neighbor presence, in the same (left, right, top, bottom)
/// order the teacher's drawer used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardinalNeighbors {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl CardinalNeighbors {
    fn count(&self) -> u8 {
        self.left as u8 + self.right as u8 + self.top as u8 + self.bottom as u8
    }
}

fn basic_dot(rect: CellRect, rotation: f64) -> String {
    let transform = rotate_transform(rect, rotation);
    let (cx, cy) = rect.center();
    svg_circle(cx, cy, rect.size / 2.0, transform.as_deref())
}

fn basic_square(rect: CellRect, rotation: f64) -> String {
    let transform = rotate_transform(rect, rotation);
    svg_rect(rect.x, rect.y, rect.size, rect.size, transform.as_deref())
}

fn basic_side_rounded(rect: CellRect, rotation: f64) -> String {
    let transform = rotate_transform(rect, rotation);
    let half = rect.size / 2.0;
    let d = format!(
        "M {} {} v {} h {} a {} {} 0 0 0 0 {}",
        rect.x, rect.y, rect.size, half, half, half, -rect.size
    );
    svg_path(&d, None, transform.as_deref())
}

fn basic_corner_rounded(rect: CellRect, rotation: f64) -> String {
    let transform = rotate_transform(rect, rotation);
    let half = rect.size / 2.0;
    let d = format!(
        "M {} {} v {} h {} v {} a {} {} 0 0 0 {} {}",
        rect.x, rect.y, rect.size, rect.size, -half, half, half, -half, -half
    );
    svg_path(&d, None, transform.as_deref())
}

fn basic_corner_extra_rounded(rect: CellRect, rotation: f64) -> String {
    let transform = rotate_transform(rect, rotation);
    let d = format!(
        "M {} {} v {} h {} a {} {} 0 0 0 {} {}",
        rect.x, rect.y, rect.size, rect.size, rect.size, rect.size, -rect.size, -rect.size
    );
    svg_path(&d, None, transform.as_deref())
}

fn basic_corners_rounded(rect: CellRect, rotation: f64) -> String {
    let transform = rotate_transform(rect, rotation);
    let half = rect.size / 2.0;
    let d = format!(
        "M {} {} v {} a {} {} 0 0 0 {} {} h {} v {} a {} {} 0 0 0 {} {}",
        rect.x, rect.y, half, half, half, half, half, half, -half, half, half, -half, -half
    );
    svg_path(&d, None, transform.as_deref())
}

pub fn connected(rect: CellRect, n: CardinalNeighbors) -> String {
    let count = n.count();
    if count == 0 {
        return basic_dot(rect, 0.0);
    }
    if count > 2 || (n.left && n.right) || (n.top && n.bottom) {
        return basic_square(rect, 0.0);
    }
    if count == 2 {
        let rotation = if n.left && n.top {
            PI / 2.0
        } else if n.top && n.right {
            PI
        } else if n.right && n.bottom {
            -PI / 2.0
        } else {
            0.0
        };
        return basic_corner_rounded(rect, rotation);
    }
    let rotation = if n.top {
        PI / 2.0
    } else if n.right {
        PI
    } else if n.bottom {
        -PI / 2.0
    } else {
        0.0
    };
    basic_side_rounded(rect, rotation)
}

pub fn connected_extra_rounded(rect: CellRect, n: CardinalNeighbors) -> String {
    let count = n.count();
    if count == 0 {
        return basic_dot(rect, 0.0);
    }
    if count > 2 || (n.left && n.right) || (n.top && n.bottom) {
        return basic_square(rect, 0.0);
    }
    if count == 2 {
        let rotation = if n.left && n.top {
            PI / 2.0
        } else if n.top && n.right {
            PI
        } else if n.right && n.bottom {
            -PI / 2.0
        } else {
            0.0
        };
        return basic_corner_extra_rounded(rect, rotation);
    }
    let rotation = if n.top {
        PI / 2.0
    } else if n.right {
        PI
    } else if n.bottom {
        -PI / 2.0
    } else {
        0.0
    };
    basic_side_rounded(rect, rotation)
}

pub fn connected_classy(rect: CellRect, n: CardinalNeighbors) -> String {
    if n.count() == 0 {
        return basic_corners_rounded(rect, PI / 2.0);
    }
    if !n.left && !n.top {
        return basic_corner_rounded(rect, -PI / 2.0);
    }
    if !n.right && !n.bottom {
        return basic_corner_rounded(rect, PI / 2.0);
    }
    basic_square(rect, 0.0)
}

pub fn connected_classy_rounded(rect: CellRect, n: CardinalNeighbors) -> String {
    if n.count() == 0 {
        return basic_corners_rounded(rect, PI / 2.0);
    }
    if !n.left && !n.top {
        return basic_corner_extra_rounded(rect, -PI / 2.0);
    }
    if !n.right && !n.bottom {
        return basic_corner_extra_rounded(rect, PI / 2.0);
    }
    basic_square(rect, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_module_is_a_dot() {
        let rect = CellRect::new(0.0, 0.0, 10.0);
        let svg = connected(rect, CardinalNeighbors::default());
        assert!(svg.contains("circle"));
    }

    #[test]
    fn opposing_neighbors_force_square() {
        let rect = CellRect::new(0.0, 0.0, 10.0);
        let n = CardinalNeighbors {
            left: true,
            right: true,
            top: false,
            bottom: false,
        };
        assert!(connected(rect, n).contains("rect"));
    }

    #[test]
    fn single_neighbor_is_side_rounded() {
        let rect = CellRect::new(0.0, 0.0, 10.0);
        let n = CardinalNeighbors {
            right: true,
            ..Default::default()
        };
        assert!(connected(rect, n).contains("path"));
    }

    #[test]
    fn fully_interior_module_is_classy_square() {
        let rect = CellRect::new(0.0, 0.0, 10.0);
        let n = CardinalNeighbors {
            left: true,
            right: true,
            top: true,
            bottom: true,
        };
        assert!(connected_classy(rect, n).contains("rect"));
    }
}
