//! Cell classification for finished QR bit matrices.

/// The classification of a single matrix coordinate. Exactly one kind
/// applies to every coordinate; classification is a pure function of
/// `version` and fixed QR geometry (spec.md \S4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CellKind {
    FinderOuter,
    FinderInner,
    Separator,
    TimingH,
    TimingV,
    AlignmentOuter,
    AlignmentInner,
    FormatInfo,
    VersionInfo,
    Data,
}

impl CellKind {
    /// Returns all closed variants, in declaration order.
    pub fn all() -> &'static [CellKind] {
        &[
            CellKind::FinderOuter,
            CellKind::FinderInner,
            CellKind::Separator,
            CellKind::TimingH,
            CellKind::TimingV,
            CellKind::AlignmentOuter,
            CellKind::AlignmentInner,
            CellKind::FormatInfo,
            CellKind::VersionInfo,
            CellKind::Data,
        ]
    }

    /// Whether this kind is part of a function pattern (anything a
    /// scanner needs that is not payload/ECC data).
    pub fn is_function_pattern(&self) -> bool {
        !matches!(self, CellKind::Data)
    }

    /// The pattern-override group this kind belongs to in
    /// `config.patterns` (spec.md \S3/\S4.4): finder, timing,
    /// alignment, or data. Format/version info cells are grouped with
    /// `finder` since they sit adjacent to the top-left finder and
    /// safe_mode always forces them to squares regardless.
    pub fn pattern_group(&self) -> PatternGroup {
        match self {
            CellKind::FinderOuter
            | CellKind::FinderInner
            | CellKind::Separator
            | CellKind::FormatInfo
            | CellKind::VersionInfo => PatternGroup::Finder,
            CellKind::TimingH | CellKind::TimingV => PatternGroup::Timing,
            CellKind::AlignmentOuter | CellKind::AlignmentInner => PatternGroup::Alignment,
            CellKind::Data => PatternGroup::Data,
        }
    }
}

/// The four pattern-override groups addressable from `config.patterns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PatternGroup {
    Finder,
    Timing,
    Alignment,
    Data,
}
