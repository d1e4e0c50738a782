//! C5 Frame & Centerpiece geometry.

pub mod centerpiece;
pub mod frame;

pub use centerpiece::{clamp_to_safe_cap, compute_reserve, require_safe_cap, CenterpieceMode, CenterpieceShape, ReserveArea};
pub use frame::{resolve_frame, ClipMode, FrameGeometry, FrameShape};
