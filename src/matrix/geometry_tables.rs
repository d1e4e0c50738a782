//! Fixed QR geometry: alignment pattern centers, finder/timing/format/
//! version-info positions. Pure functions of `version`; no dependency
//! on the actual bit content of a matrix.
//!
//! The alignment-pattern-position formula is ported from the
//! `nayuki-QR-Code-generator` reference implementation present in the
//! retrieval pack (`get_alignment_pattern_positions`), which documents
//! the same closed-form the QR standard uses rather than a 40-entry
//! literal table.

/// Side length in modules for a given version (1..=40).
pub fn side_for_version(version: u8) -> usize {
    21 + 4 * (version as usize - 1)
}

/// Centers of alignment patterns along one axis, ascending. Both the
/// row and column axes use the same set; the 3x3 combinations that
/// overlap a finder pattern are excluded by the caller (spec.md \S4.1).
/// Version 1 has none.
pub fn alignment_centers(version: u8) -> Vec<usize> {
    if version == 1 {
        return Vec::new();
    }
    let ver = version as i32;
    let num_align = ver / 7 + 2;
    let step = if ver != 32 {
        (ver * 4 + num_align * 2 + 1) / (2 * num_align - 2) * 2
    } else {
        26
    };
    let mut result = vec![6i32];
    let mut pos = ver * 4 + 10;
    for _ in 0..num_align - 1 {
        result.insert(1, pos);
        pos -= step;
    }
    result.into_iter().map(|v| v as usize).collect()
}

/// All valid alignment-pattern center coordinates `(row, col)` for a
/// version, already excluding the three combinations that would
/// collide with a finder pattern.
pub fn alignment_pattern_centers(version: u8) -> Vec<(usize, usize)> {
    let centers = alignment_centers(version);
    let side = side_for_version(version);
    let mut out = Vec::new();
    for &r in &centers {
        for &c in &centers {
            if collides_with_finder(r, c, side) {
                continue;
            }
            out.push((r, c));
        }
    }
    out
}

fn collides_with_finder(r: usize, c: usize, side: usize) -> bool {
    let near_top = r <= 7;
    let near_bottom = r + 7 >= side;
    let near_left = c <= 7;
    let near_right = c + 7 >= side;
    (near_top && near_left) || (near_top && near_right) || (near_bottom && near_left)
}

/// Whether `(row, col)` lies within one of the three 8x8 finder+separator
/// corner blocks (the finder pattern proper plus its one-module
/// separator ring).
pub fn is_in_finder_block(row: usize, col: usize, side: usize) -> bool {
    (row < 8 && col < 8)
        || (row < 8 && col + 8 >= side)
        || (row + 8 >= side && col < 8)
}

/// Coordinates of the format-information cells (two copies, always
/// present regardless of version).
pub fn format_info_cells(side: usize) -> Vec<(usize, usize)> {
    let mut cells = Vec::with_capacity(30);
    // Around the top-left finder (row 8 and column 8, both 0..=8),
    // skipping column/row 6 which belongs to the timing pattern.
    for i in 0..=8 {
        if i == 6 {
            continue;
        }
        cells.push((8, i));
        cells.push((i, 8));
    }
    // Top-right strip (row 8, columns side-8..side).
    for i in 0..8 {
        cells.push((8, side - 1 - i));
    }
    // Bottom-left strip (column 8, rows side-7..side).
    for i in 0..7 {
        cells.push((side - 1 - i, 8));
    }
    cells
}

/// Coordinates of the version-information blocks (two 6x3/3x6 blocks),
/// present only for version >= 7.
pub fn version_info_cells(version: u8, side: usize) -> Vec<(usize, usize)> {
    if version < 7 {
        return Vec::new();
    }
    let mut cells = Vec::with_capacity(36);
    for r in 0..6 {
        for c in 0..3 {
            cells.push((r, side - 11 + c));
            cells.push((side - 11 + c, r));
        }
    }
    cells
}
