//! C7 geometry configuration: default module shape, clustering
//! connectivity, and merge strategy.

use crate::error::{ErrorDetail, RenderError};
use crate::shapes::ShapeKind;
use crate::topology::Connectivity;

/// How aggressively same-cluster modules are merged into continuous
/// shapes (spec.md \S4.3/\S4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MergeStrategy {
    /// Every module renders independently; clusters are computed but
    /// not used to bias shape choice.
    None,
    /// `Connected*` shape kinds round only the corners facing empty
    /// space, but small clusters are still rendered as-is.
    Soft,
    /// Like `Soft`, but clusters below `min_island_modules` get folded
    /// into their nearest neighbor's shape instead of standing alone.
    Aggressive,
}

/// Module-shape geometry: the default shape, clustering connectivity,
/// merge strategy, and the minimum island size a merge strategy
/// respects.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryConfig {
    pub shape: ShapeKind,
    pub connectivity: Connectivity,
    pub merge_strategy: MergeStrategy,
    pub min_island_modules: usize,
    /// Forces every function-pattern cell to `Square`, overriding any
    /// shape/pattern override, so the symbol stays scannable even
    /// under exotic styling (spec.md \S4.4 rule 1).
    pub safe_mode: bool,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Square,
            connectivity: Connectivity::Eight,
            merge_strategy: MergeStrategy::None,
            min_island_modules: 1,
            safe_mode: true,
        }
    }
}

impl GeometryConfig {
    /// Validates the shape's own parameters and the aggressive-merge
    /// floor (spec.md \S4.9 C9): `Aggressive` requires
    /// `min_island_modules >= 3`; below that it is auto-raised by the
    /// caller (default mode) or rejected (strict mode).
    pub fn validate(&self) -> Result<(), RenderError> {
        self.shape.validate()?;
        if self.min_island_modules == 0 {
            return Err(RenderError::config_invalid(
                "min_island_modules must be at least 1",
                ErrorDetail::new()
                    .field("geometry.min_island_modules")
                    .value("0")
                    .suggest("1"),
            ));
        }
        Ok(())
    }

    /// Applies the aggressive-merge floor, returning `true` if
    /// `min_island_modules` was raised.
    pub fn auto_raise_aggressive_floor(&mut self) -> bool {
        if matches!(self.merge_strategy, MergeStrategy::Aggressive) && self.min_island_modules < 3 {
            self.min_island_modules = 3;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_safe_and_valid() {
        let config = GeometryConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.safe_mode);
    }

    #[test]
    fn aggressive_floor_is_raised_to_three() {
        let mut config = GeometryConfig {
            merge_strategy: MergeStrategy::Aggressive,
            min_island_modules: 1,
            ..GeometryConfig::default()
        };
        assert!(config.auto_raise_aggressive_floor());
        assert_eq!(config.min_island_modules, 3);
    }

    #[test]
    fn non_aggressive_floor_is_untouched() {
        let mut config = GeometryConfig {
            merge_strategy: MergeStrategy::Soft,
            min_island_modules: 1,
            ..GeometryConfig::default()
        };
        assert!(!config.auto_raise_aggressive_floor());
        assert_eq!(config.min_island_modules, 1);
    }
}
