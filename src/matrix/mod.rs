//! C1 Matrix Detector: an immutable QR bit matrix plus total, pure
//! per-cell classification into [`CellKind`].
//!
//! QR encoding itself is out of scope (spec.md \S1) — the matrix is
//! either supplied pre-built by an external QR library, or (for the
//! `render_with_intents` convenience entry point) built once via the
//! `qrcode` crate, the same external collaborator the teacher crate
//! used for encoding.

mod geometry_tables;
mod kind;

pub use kind::{CellKind, PatternGroup};

use crate::error::{RenderError, Result};
use crate::types::{ErrorCorrectionLevel, Mode};
use qrcode::{QrCode, Version};

/// An immutable, square boolean grid of QR modules (true = dark) plus
/// the version/error-level it was produced with. Read-only after
/// construction: the pipeline never mutates a `Matrix`.
#[derive(Debug, Clone)]
pub struct Matrix {
    bits: Vec<bool>,
    side: usize,
    version: u8,
    error_level: ErrorCorrectionLevel,
}

impl Matrix {
    /// Build a matrix from a caller-supplied bit grid (row-major,
    /// `side * side` long). Fails if the grid length is inconsistent
    /// with `21 + 4*(version-1)`.
    pub fn from_bits(bits: Vec<bool>, version: u8, error_level: ErrorCorrectionLevel) -> Result<Self> {
        if !(1..=40).contains(&version) {
            return Err(RenderError::invalid_matrix(format!(
                "version {version} out of range [1, 40]"
            )));
        }
        let side = geometry_tables::side_for_version(version);
        if bits.len() != side * side {
            return Err(RenderError::invalid_matrix(format!(
                "matrix of {} cells is inconsistent with version {version} (expected {} cells, side {side})",
                bits.len(),
                side * side
            )));
        }
        Ok(Self {
            bits,
            side,
            version,
            error_level,
        })
    }

    /// Encode `data` into a fresh matrix using the external `qrcode`
    /// crate. `version` of `None` auto-selects the smallest version
    /// that fits; `mode` of `None` lets the encoder auto-detect.
    pub fn encode(
        data: &str,
        version: Option<u8>,
        error_level: ErrorCorrectionLevel,
        _mode: Option<Mode>,
    ) -> Result<Self> {
        let ec_level = error_level.to_qrcode_level();
        let qr = match version {
            Some(v) => QrCode::with_version(data.as_bytes(), Version::Normal(v as i16), ec_level)
                .map_err(|e| RenderError::invalid_matrix(e.to_string()))?,
            None => QrCode::with_error_correction_level(data.as_bytes(), ec_level)
                .map_err(|e| RenderError::invalid_matrix(e.to_string()))?,
        };

        let side = qr.width() as usize;
        let mut bits = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                bits.push(qr[(x, y)] == qrcode::Color::Dark);
            }
        }
        let resolved_version = ((side - 21) / 4 + 1) as u8;

        Ok(Self {
            bits,
            side,
            version: resolved_version,
            error_level,
        })
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn version(&self) -> u8 {
        self.version
    }

    #[inline]
    pub fn error_level(&self) -> ErrorCorrectionLevel {
        self.error_level
    }

    #[inline]
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        if row >= self.side || col >= self.side {
            return false;
        }
        self.bits[row * self.side + col]
    }

    /// Signed-coordinate variant used by neighborhood lookups; out of
    /// bounds reads as light (false).
    #[inline]
    pub fn is_dark_signed(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.is_dark(row as usize, col as usize)
    }

    /// Classify `(row, col)` per spec.md \S4.1. Total and unique over
    /// every coordinate in range.
    pub fn kind(&self, row: usize, col: usize) -> CellKind {
        kind_at(self.version, self.side, row, col)
    }

    /// Iterate all `(row, col, kind, dark)` quadruples in row-major
    /// order — the canonical iteration order the emitter and clusterer
    /// rely on for determinism (spec.md \S4.3/\S4.6).
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellKind, bool)> + '_ {
        let side = self.side;
        (0..side).flat_map(move |row| {
            (0..side).map(move |col| (row, col, self.kind(row, col), self.is_dark(row, col)))
        })
    }
}

/// Pure classification function, independent of any `Matrix` instance,
/// so C1 can be exercised as "just a function of version and
/// coordinates" (spec.md \S4.1).
pub fn kind_at(version: u8, side: usize, row: usize, col: usize) -> CellKind {
    debug_assert_eq!(side, geometry_tables::side_for_version(version));

    if geometry_tables::is_in_finder_block(row, col, side) {
        return classify_finder_block(row, col, side);
    }

    if version >= 7 {
        for &(r, c) in &geometry_tables::version_info_cells(version, side) {
            if (r, c) == (row, col) {
                return CellKind::VersionInfo;
            }
        }
    }

    for &(r, c) in &geometry_tables::format_info_cells(side) {
        if (r, c) == (row, col) {
            return CellKind::FormatInfo;
        }
    }

    if row == 6 && col >= 8 && col + 8 < side {
        return CellKind::TimingH;
    }
    if col == 6 && row >= 8 && row + 8 < side {
        return CellKind::TimingV;
    }

    for &(ar, ac) in &geometry_tables::alignment_pattern_centers(version) {
        if row.abs_diff(ar) <= 2 && col.abs_diff(ac) <= 2 {
            return if row.abs_diff(ar) <= 1 && col.abs_diff(ac) <= 1 {
                CellKind::AlignmentInner
            } else {
                CellKind::AlignmentOuter
            };
        }
    }

    CellKind::Data
}

fn classify_finder_block(row: usize, col: usize, side: usize) -> CellKind {
    let (origin_r, origin_c) = if row < 8 && col < 8 {
        (0usize, 0usize)
    } else if row < 8 {
        (0, side - 7)
    } else {
        (side - 7, 0)
    };

    let in_finder_proper = row >= origin_r
        && row < origin_r + 7
        && col >= origin_c
        && col < origin_c + 7;

    if !in_finder_proper {
        return CellKind::Separator;
    }

    let lr = row - origin_r;
    let lc = col - origin_c;
    if lr == 0 || lr == 6 || lc == 0 || lc == 6 {
        CellKind::FinderOuter
    } else if (2..=4).contains(&lr) && (2..=4).contains(&lc) {
        CellKind::FinderInner
    } else {
        CellKind::FinderOuter
    }
}
