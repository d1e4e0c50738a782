//! C6 SVG Emitter: color/gradient paint model and deterministic
//! document assembly.

mod color;
mod emitter;
mod gradient;
mod ids;

pub use color::{clamp_to_contrast, contrast_ratio, Color};
pub use emitter::emit;
pub use gradient::{ColorStop, Gradient};
pub use ids::content_tag;
