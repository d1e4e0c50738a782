//! Deterministic, content-derived SVG element IDs (spec.md \S4.6): two
//! renders of the same matrix and config must produce byte-identical
//! output, including `id`/`url(#...)` references, so IDs are derived
//! from a hash of their defining content rather than a process-global
//! counter (the teacher's `AtomicU64 instance_id` approach would make
//! output order-dependent across calls).

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hashes `parts` (joined with a separator byte) into a short,
/// stable, lowercase hex tag. `DefaultHasher` uses fixed keys, so this
/// is reproducible across runs and processes for the same input.
pub fn content_tag(parts: &[&str]) -> String {
    let mut hasher = DefaultHasher::new();
    for part in parts {
        part.hash(&mut hasher);
        0u8.hash(&mut hasher);
    }
    format!("{:x}", hasher.finish() & 0xffff_ffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_input_yields_same_tag() {
        assert_eq!(content_tag(&["a", "b"]), content_tag(&["a", "b"]));
    }

    #[test]
    fn different_input_yields_different_tag() {
        assert_ne!(content_tag(&["a", "b"]), content_tag(&["a", "c"]));
    }
}
