//! C3 Region Clusterer: connected-component analysis over dark cells.

use crate::error::RenderError;
use crate::matrix::{CellKind, Matrix};

/// Connectivity used when flood-filling dark cells into clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    Four,
    Eight,
}

impl Connectivity {
    fn offsets(self) -> &'static [(i32, i32)] {
        const FOUR: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const EIGHT: [(i32, i32); 8] = [
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1),
            (-1, -1),
            (-1, 1),
            (1, -1),
            (1, 1),
        ];
        match self {
            Connectivity::Four => &FOUR,
            Connectivity::Eight => &EIGHT,
        }
    }
}

/// A connected set of dark cells under the chosen connectivity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Row-major sorted member coordinates.
    pub cells: Vec<(usize, usize)>,
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl Cluster {
    pub fn module_count(&self) -> usize {
        self.cells.len()
    }

    pub fn bbox_width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn bbox_height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn bbox_area(&self) -> usize {
        self.bbox_width() * self.bbox_height()
    }

    pub fn density(&self) -> f64 {
        self.module_count() as f64 / self.bbox_area() as f64
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.bbox_width() as f64 / self.bbox_height() as f64
    }

    pub fn is_rectangular(&self) -> bool {
        self.module_count() == self.bbox_area()
    }

    /// Top-left member cell; clusters are ordered by this for
    /// deterministic emission (spec.md \S4.3).
    pub fn anchor(&self) -> (usize, usize) {
        self.cells[0]
    }

    /// Whether this cluster satisfies `min_island_modules` and may
    /// participate in merged/connected rendering.
    pub fn meets_threshold(&self, min_island_modules: usize) -> bool {
        self.module_count() >= min_island_modules
    }
}

/// Which dark cells participate in clustering: all dark cells, or only
/// `Data`-kind cells (the usual choice when `safe_mode` keeps function
/// patterns rendered independently as squares).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterScope {
    AllDark,
    DataOnly,
}

/// Flood-fills `matrix` into disjoint [`Cluster`]s. Clusters are
/// returned ordered by `(min_row, min_col)` of their top-left member,
/// which is also how they are indexed internally, giving deterministic
/// SVG emission for a given input (spec.md \S4.3, \S8 invariant 2).
pub fn clusterize(
    matrix: &Matrix,
    connectivity: Connectivity,
    scope: ClusterScope,
) -> Result<Vec<Cluster>, RenderError> {
    let side = matrix.side();
    let includes = |row: usize, col: usize| -> bool {
        if !matrix.is_dark(row, col) {
            return false;
        }
        match scope {
            ClusterScope::AllDark => true,
            ClusterScope::DataOnly => matrix.kind(row, col) == CellKind::Data,
        }
    };

    let mut visited = vec![false; side * side];
    let mut clusters = Vec::new();
    let mut stack = Vec::new();

    for row in 0..side {
        for col in 0..side {
            let idx = row * side + col;
            if visited[idx] || !includes(row, col) {
                continue;
            }

            let mut cells = Vec::new();
            stack.push((row, col));
            visited[idx] = true;

            while let Some((r, c)) = stack.pop() {
                cells.push((r, c));
                for &(dr, dc) in connectivity.offsets() {
                    let nr = r as i32 + dr;
                    let nc = c as i32 + dc;
                    if nr < 0 || nc < 0 || nr as usize >= side || nc as usize >= side {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    let nidx = nr * side + nc;
                    if visited[nidx] || !includes(nr, nc) {
                        continue;
                    }
                    visited[nidx] = true;
                    stack.push((nr, nc));
                }
            }

            cells.sort_unstable();
            let min_row = cells.iter().map(|c| c.0).min().unwrap();
            let max_row = cells.iter().map(|c| c.0).max().unwrap();
            let min_col = cells.iter().map(|c| c.1).min().unwrap();
            let max_col = cells.iter().map(|c| c.1).max().unwrap();
            clusters.push(Cluster {
                cells,
                min_row,
                max_row,
                min_col,
                max_col,
            });
        }
    }

    clusters.sort_by_key(|c| c.anchor());

    verify_partition(matrix, scope, &clusters)?;

    Ok(clusters)
}

/// Internal consistency check: the union of cluster cells equals the
/// dark-cell set under scope, with no overlaps (spec.md \S8 invariant 2).
fn verify_partition(
    matrix: &Matrix,
    scope: ClusterScope,
    clusters: &[Cluster],
) -> Result<(), RenderError> {
    let side = matrix.side();
    let mut covered = vec![false; side * side];
    for cluster in clusters {
        for &(r, c) in &cluster.cells {
            let idx = r * side + c;
            if covered[idx] {
                return Err(RenderError::internal_inconsistency(format!(
                    "cell ({r}, {c}) claimed by more than one cluster"
                )));
            }
            covered[idx] = true;
        }
    }
    for row in 0..side {
        for col in 0..side {
            let should_cover = matrix.is_dark(row, col)
                && matches!(scope, ClusterScope::AllDark)
                || (matches!(scope, ClusterScope::DataOnly)
                    && matrix.is_dark(row, col)
                    && matrix.kind(row, col) == CellKind::Data);
            if should_cover != covered[row * side + col] {
                return Err(RenderError::internal_inconsistency(format!(
                    "cell ({row}, {col}) coverage mismatch against cluster scope"
                )));
            }
        }
    }
    Ok(())
}
