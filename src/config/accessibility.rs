//! Accessibility and compliance-target configuration (spec.md \S4.9).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ContrastTarget {
    /// WCAG AA for normal-size text/graphics: ratio >= 3.0.
    Aa,
    /// WCAG AAA: ratio >= 4.5.
    Aaa,
}

impl ContrastTarget {
    pub fn minimum_ratio(&self) -> f64 {
        match self {
            ContrastTarget::Aa => 3.0,
            ContrastTarget::Aaa => 4.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessibilityConfig {
    /// Prefix applied to every generated `id`/`class` hook, so multiple
    /// renders in one document never collide (spec.md \S4.6).
    pub id_prefix: String,
    pub aria_label: Option<String>,
    pub include_title: bool,
    pub compliance_target: ContrastTarget,
    /// When `true`, every rendered module fragment carries a stable
    /// `id="{id_prefix}-m-{row}-{col}"` (spec.md \S4.6). Off by default
    /// since per-cell ids roughly double document size for dense symbols.
    pub module_ids: bool,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            id_prefix: "qr".to_string(),
            aria_label: None,
            include_title: false,
            compliance_target: ContrastTarget::Aa,
            module_ids: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aaa_requires_a_higher_ratio_than_aa() {
        assert!(ContrastTarget::Aaa.minimum_ratio() > ContrastTarget::Aa.minimum_ratio());
    }
}
