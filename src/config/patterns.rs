//! Per-pattern-group shape overrides (spec.md \S4.4 rule 2).

use std::collections::HashMap;

use crate::matrix::PatternGroup;
use crate::shapes::ShapeKind;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternsConfig {
    overrides: HashMap<PatternGroup, ShapeKind>,
}

impl PatternsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, group: PatternGroup, shape: ShapeKind) -> Self {
        self.overrides.insert(group, shape);
        self
    }

    pub fn overrides(&self) -> &HashMap<PatternGroup, ShapeKind> {
        &self.overrides
    }

    pub fn validate(&self) -> Result<(), crate::error::RenderError> {
        for shape in self.overrides.values() {
            shape.validate()?;
        }
        Ok(())
    }
}
