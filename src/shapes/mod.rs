//! C4 Shape Renderer Registry: the closed set of per-module shape
//! kinds and the rule that picks one for a given matrix cell.

mod basic;
mod connected;
mod cross;
mod primitives;
mod rounded;
mod star;
mod triangle;

use std::collections::HashMap;

pub use connected::CardinalNeighbors;
pub use primitives::CellRect;
pub use triangle::TriangleDirection;

use crate::error::RenderError;
use crate::matrix::{CellKind, PatternGroup};

/// The closed set of module shapes the registry can render. Every
/// variant must stay exhaustively handled in [`render`] (spec.md \S4.4).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum ShapeKind {
    Square,
    Circle,
    Dot,
    Diamond,
    Star { points: u8, inner_ratio: f64 },
    Triangle { direction: TriangleDirection },
    Hexagon,
    Cross { thickness: f64, sharp: bool },
    Rounded { radius: f64 },
    Squircle { radius: f64 },
    Connected,
    ConnectedExtraRounded,
    ConnectedClassy,
    ConnectedClassyRounded,
}

impl ShapeKind {
    /// All variants with field defaults filled in, in declaration
    /// order — the basis for `capabilities()` introspection.
    pub fn all() -> Vec<ShapeKind> {
        vec![
            ShapeKind::Square,
            ShapeKind::Circle,
            ShapeKind::Dot,
            ShapeKind::Diamond,
            ShapeKind::Star {
                points: 5,
                inner_ratio: 0.5,
            },
            ShapeKind::Triangle {
                direction: TriangleDirection::Up,
            },
            ShapeKind::Hexagon,
            ShapeKind::Cross {
                thickness: 0.4,
                sharp: true,
            },
            ShapeKind::Rounded { radius: 0.5 },
            ShapeKind::Squircle { radius: 0.5 },
            ShapeKind::Connected,
            ShapeKind::ConnectedExtraRounded,
            ShapeKind::ConnectedClassy,
            ShapeKind::ConnectedClassyRounded,
        ]
    }

    /// Whether this shape's geometry depends on the cell's cardinal
    /// neighbors (the `Connected*` family) as opposed to being fully
    /// determined by its own rect.
    pub fn is_neighbor_aware(&self) -> bool {
        matches!(
            self,
            ShapeKind::Connected
                | ShapeKind::ConnectedExtraRounded
                | ShapeKind::ConnectedClassy
                | ShapeKind::ConnectedClassyRounded
        )
    }

    /// Validates this shape's own parameters against their documented
    /// contracts (spec.md \S4.4). Structural validity only — composition
    /// concerns (contrast, clearance) are C9's job.
    pub fn validate(&self) -> Result<(), RenderError> {
        match self {
            ShapeKind::Star { points, inner_ratio } => star::validate(*points, *inner_ratio),
            ShapeKind::Cross { thickness, .. } => cross::validate(*thickness),
            ShapeKind::Rounded { radius } | ShapeKind::Squircle { radius } => {
                rounded::validate(*radius)
            }
            _ => Ok(()),
        }
    }
}

/// Per-cell context a shape drawer needs beyond its own rect: the
/// matrix coordinate, its [`CellKind`], and its cardinal-neighbor
/// occupancy (only consulted by neighbor-aware shapes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeContext {
    pub row: usize,
    pub col: usize,
    pub kind: CellKind,
    pub neighbors: CardinalNeighbors,
}

/// Resolves which [`ShapeKind`] a matrix cell should render as,
/// applying the three-rule precedence of spec.md \S4.4 in order:
///
/// 1. `safe_mode` forces every function-pattern cell to `Square`,
///    regardless of any override, so the symbol always stays scannable.
/// 2. Otherwise, a `patterns` override for the cell's [`PatternGroup`]
///    wins.
/// 3. Otherwise, the geometry's default shape applies.
pub fn resolve_shape_kind<'a>(
    default_shape: &'a ShapeKind,
    pattern_overrides: &'a HashMap<PatternGroup, ShapeKind>,
    safe_mode: bool,
    kind: CellKind,
) -> &'a ShapeKind {
    if safe_mode && kind.is_function_pattern() {
        return &ShapeKind::Square;
    }
    if let Some(shape) = pattern_overrides.get(&kind.pattern_group()) {
        return shape;
    }
    default_shape
}

/// Renders one module's shape into an SVG fragment (a bare `<rect>`,
/// `<circle>`, `<polygon>`, or `<path>` element — the caller wraps it
/// in whatever group/clip-path structure the emitter layer needs).
pub fn render(shape: &ShapeKind, rect: CellRect, ctx: &ShapeContext) -> String {
    match shape {
        ShapeKind::Square => basic::square(rect),
        ShapeKind::Circle => basic::circle(rect),
        ShapeKind::Dot => basic::dot(rect),
        ShapeKind::Diamond => basic::diamond(rect),
        ShapeKind::Hexagon => basic::hexagon(rect),
        ShapeKind::Star { points, inner_ratio } => star::star(rect, *points, *inner_ratio),
        ShapeKind::Triangle { direction } => triangle::triangle(rect, *direction),
        ShapeKind::Cross { thickness, sharp } => cross::cross(rect, *thickness, *sharp),
        ShapeKind::Rounded { radius } => rounded::rounded(rect, *radius),
        ShapeKind::Squircle { radius } => rounded::squircle(rect, *radius),
        ShapeKind::Connected => connected::connected(rect, ctx.neighbors),
        ShapeKind::ConnectedExtraRounded => connected::connected_extra_rounded(rect, ctx.neighbors),
        ShapeKind::ConnectedClassy => connected::connected_classy(rect, ctx.neighbors),
        ShapeKind::ConnectedClassyRounded => {
            connected::connected_classy_rounded(rect, ctx.neighbors)
        }
    }
}
