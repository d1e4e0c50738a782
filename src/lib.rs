//! # Styled QR SVG Rendering Pipeline
//!
//! Turns a finished QR bit matrix into a deterministic, styled SVG
//! document: per-module shape selection (C4), frame and centerpiece
//! geometry (C5), paint/gradient/contrast handling (C6), a strongly
//! typed config model with a legacy flat-keyword bridge (C7), a
//! higher-level intent vocabulary that degrades gracefully instead of
//! failing (C8), and cross-cutting composition validation (C9).
//!
//! QR *encoding* is out of scope; [`matrix::Matrix`] is either supplied
//! pre-built or produced once via the `qrcode` crate through
//! [`render_with_intents`] and [`Matrix::encode`](matrix::Matrix::encode).
//!
//! ## Example
//!
//! ```rust
//! use qr_svg_styling::{config::Config, matrix::Matrix, render, types::ErrorCorrectionLevel};
//!
//! let matrix = Matrix::encode("https://example.com", None, ErrorCorrectionLevel::M, None).unwrap();
//! let config = Config::builder().build().unwrap();
//! let (svg, report) = render(&matrix, &config).unwrap();
//! assert!(svg.starts_with("<?xml"));
//! assert!(report.scannability_score > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod intent;
pub mod matrix;
pub mod report;
pub mod shapes;
pub mod svg;
pub mod topology;
pub mod types;
pub mod validate;

use std::collections::HashSet;
use std::time::Instant;

use config::{Config, MergeStrategy};
use error::Result;
use geometry::{ClipMode, FrameShape};
use intent::Intent;
use matrix::Matrix;
use report::{RenderReport, TimingMetrics};
use shapes::ShapeKind;
use topology::{clusterize, ClusterScope};
use types::{ErrorCorrectionLevel, Mode};

pub use config::{Config as RenderConfig, ConfigBuilder, LegacyConfig};
pub use error::{RenderError, Result as RenderResult};
pub use geometry::{CenterpieceMode, CenterpieceShape};
pub use intent::Intent as RenderIntent;
pub use report::{Severity, Warning};

/// Renders an already-built `matrix` under `config`, returning the SVG
/// document plus the [`RenderReport`] describing any degradations the
/// pipeline applied along the way.
///
/// Pipeline order (spec.md \S4, \S8 invariant 1 — deterministic output
/// for deterministic input): topology clustering (only when needed to
/// enforce `min_island_modules`), C9 composition validation (which may
/// adjust a working copy of `config` and/or resolve a centerpiece
/// reserve), then C6 emission.
pub fn render(matrix: &Matrix, config: &Config) -> Result<(String, RenderReport)> {
    let mut report = RenderReport::new();

    let topology_start = Instant::now();
    let small_islands = undersized_islands(matrix, config)?;
    let topology_elapsed = topology_start.elapsed();

    let geometry_start = Instant::now();
    let (adjusted_config, reserve) = validate::validate_composition(matrix, config, &mut report)?;
    let geometry_elapsed = geometry_start.elapsed();

    let emit_start = Instant::now();
    let svg = svg::emit(matrix, &adjusted_config, reserve, small_islands.as_ref());
    let emit_elapsed = emit_start.elapsed();

    report.timing = TimingMetrics::record(
        std::time::Duration::default(),
        topology_elapsed,
        geometry_elapsed,
        emit_elapsed,
    );

    Ok((svg, report))
}

/// Encodes `data` into a fresh matrix, lowers `intent` onto a [`Config`]
/// (recording degradation warnings as it goes), then renders it —
/// the one-call convenience path for callers who don't want to build a
/// [`Matrix`] or [`Config`] by hand (spec.md \S4.8).
pub fn render_with_intents(
    data: &str,
    version: Option<u8>,
    error_level: ErrorCorrectionLevel,
    mode: Option<Mode>,
    intent: &Intent,
) -> Result<(String, RenderReport)> {
    let mut report = RenderReport::new();
    let classify_start = Instant::now();
    let matrix = Matrix::encode(data, version, error_level, mode)?;
    let classify_elapsed = classify_start.elapsed();

    let config = intent::lower(intent, &mut report)?;

    let topology_start = Instant::now();
    let small_islands = undersized_islands(&matrix, &config)?;
    let topology_elapsed = topology_start.elapsed();

    let geometry_start = Instant::now();
    let (adjusted_config, reserve) = validate::validate_composition(&matrix, &config, &mut report)?;
    let geometry_elapsed = geometry_start.elapsed();

    let emit_start = Instant::now();
    let svg = svg::emit(&matrix, &adjusted_config, reserve, small_islands.as_ref());
    let emit_elapsed = emit_start.elapsed();

    report.timing = TimingMetrics::record(classify_elapsed, topology_elapsed, geometry_elapsed, emit_elapsed);

    Ok((svg, report))
}

/// Flood-fills `matrix` into clusters under `config.geometry` when the
/// merge strategy requires enforcing a minimum island size, returning
/// the set of cells belonging to clusters that fall short. `None` when
/// no neighbor-aware downgrading is needed (the common case), so
/// single-cell renders skip clustering entirely.
fn undersized_islands(matrix: &Matrix, config: &Config) -> Result<Option<HashSet<(usize, usize)>>> {
    if matches!(config.geometry.merge_strategy, MergeStrategy::None) || config.geometry.min_island_modules <= 1 {
        return Ok(None);
    }

    let scope = if config.geometry.safe_mode {
        ClusterScope::DataOnly
    } else {
        ClusterScope::AllDark
    };
    let clusters = clusterize(matrix, config.geometry.connectivity, scope)?;

    let mut small = HashSet::new();
    for cluster in &clusters {
        if !cluster.meets_threshold(config.geometry.min_island_modules) {
            small.extend(cluster.cells.iter().copied());
        }
    }
    Ok(Some(small))
}

/// A snapshot of what this build of the pipeline can render, for
/// callers building their own UI around it (spec.md \S4 REDESIGN
/// FLAGS — introspectable capabilities instead of a hardcoded list
/// duplicated client-side).
#[derive(Debug, Clone, PartialEq)]
pub struct Capabilities {
    pub shapes: Vec<ShapeKind>,
    pub frame_shapes: Vec<FrameShape>,
    pub clip_modes: Vec<ClipMode>,
    pub centerpiece_modes: Vec<CenterpieceMode>,
    pub supports_serde: bool,
}

/// Returns the closed set of shapes, frame shapes, clip modes, and
/// centerpiece modes this build supports.
pub fn capabilities() -> Capabilities {
    Capabilities {
        shapes: ShapeKind::all(),
        frame_shapes: vec![
            FrameShape::Square,
            FrameShape::RoundedRect { corner_radius: 0.5 },
            FrameShape::Circle,
            FrameShape::Squircle { corner_radius: 0.5 },
        ],
        clip_modes: vec![ClipMode::Clip, ClipMode::Fade, ClipMode::Scale, ClipMode::None],
        centerpiece_modes: vec![CenterpieceMode::Knockout, CenterpieceMode::Imprint],
        supports_serde: cfg!(feature = "serde"),
    }
}
