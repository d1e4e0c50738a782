//! Frame configuration: boundary shape, clip mode, and a quiet-zone
//! border width in modules.

use crate::error::RenderError;
use crate::geometry::{ClipMode, FrameShape};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameConfig {
    pub shape: FrameShape,
    pub clip_mode: ClipMode,
    pub border_modules: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            shape: FrameShape::Square,
            clip_mode: ClipMode::None,
            border_modules: 4,
        }
    }
}

impl FrameConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        self.shape.validate()
    }
}
