//! Foreground/background color and optional gradients.

use crate::svg::{Color, Gradient};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
    pub foreground_gradient: Option<Gradient>,
    pub background_gradient: Option<Gradient>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::WHITE,
            foreground_gradient: None,
            background_gradient: None,
        }
    }
}

impl Palette {
    /// The color actually used for contrast checks: the gradient's
    /// first stop when present, else the flat color (spec.md \S4.9).
    pub fn effective_foreground(&self) -> Color {
        self.foreground_gradient
            .as_ref()
            .and_then(|g| g.color_stops.first())
            .map(|s| s.color)
            .unwrap_or(self.foreground)
    }

    pub fn effective_background(&self) -> Color {
        self.background_gradient
            .as_ref()
            .and_then(|g| g.color_stops.first())
            .map(|s| s.color)
            .unwrap_or(self.background)
    }
}
