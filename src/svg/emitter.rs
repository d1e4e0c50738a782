//! C6 SVG Emitter: deterministic layer assembly into a single SVG
//! document.
//!
//! Layer order and defs/elements split follow the teacher's
//! `rendering::svg_renderer::SvgRenderer::render` (background, then
//! modules, then any centerpiece/image hook) — IDs are content-derived
//! (see [`super::ids`]) instead of the teacher's atomic instance
//! counter, so the same input always emits byte-identical output
//! (spec.md \S4.6/\S8 invariant 1).

use std::collections::HashSet;

use crate::config::Config;
use crate::geometry::{resolve_frame, CenterpieceMode, CenterpieceShape, ReserveArea};
use crate::matrix::{Matrix, PatternGroup};
use crate::shapes::{render as render_shape, resolve_shape_kind, CardinalNeighbors, CellRect, ShapeContext, ShapeKind};
use crate::svg::gradient::paint_def;
use crate::svg::ids::content_tag;

/// CSS class a [`PatternGroup`]'s `<g>` wrapper carries (spec.md \S4.6).
fn group_class(group: PatternGroup) -> &'static str {
    match group {
        PatternGroup::Finder => "qr-finder",
        PatternGroup::Timing => "qr-timing",
        PatternGroup::Alignment => "qr-alignment",
        PatternGroup::Data => "qr-data",
    }
}

/// Renders `matrix` under `config` into a complete SVG document.
/// `reserve`, when present, is the already-clamped centerpiece area and
/// mode computed by the C9 composition pass. `small_islands`, when
/// present, names cells whose connected-region cluster fell short of
/// `geometry.min_island_modules`; a neighbor-aware shape on one of
/// these cells renders as a plain square instead, since there's no
/// island left for it to connect to (spec.md \S4.2/\S4.3).
pub fn emit(
    matrix: &Matrix,
    config: &Config,
    reserve: Option<(ReserveArea, CenterpieceMode)>,
    small_islands: Option<&HashSet<(usize, usize)>>,
) -> String {
    let side = matrix.side();
    let module_px = config.module_px;
    let border = config.frame.border_modules as f64;
    let content_px = side as f64 * module_px;
    let total_px = content_px + 2.0 * border * module_px;
    let offset = border * module_px;

    let id_prefix = &config.accessibility.id_prefix;
    let tag = content_tag(&[id_prefix, &side.to_string(), &format!("{:?}", config.geometry.shape)]);

    let mut defs = String::new();
    let mut elements = String::new();

    // Background, clipped/masked to the frame shape.
    let frame_geo = resolve_frame(&config.frame.shape, config.frame.clip_mode, total_px, &tag);
    defs.push_str(&frame_geo.defs);

    let bg_id = format!("{tag}-bg");
    let bg_paint = paint_def(
        config.palette.background_gradient.as_ref(),
        config.palette.background,
        0.0,
        0.0,
        total_px,
        total_px,
        &bg_id,
    );
    defs.push_str(&bg_paint.defs);

    let bg_attr = frame_geo
        .attribute
        .as_ref()
        .map(|(name, value)| format!(r#" {name}="{value}""#))
        .unwrap_or_default();
    elements.push_str(&format!(
        r#"<rect class="qr-background" x="0" y="0" width="{total_px}" height="{total_px}" fill="{}"{bg_attr}/>"#,
        bg_paint.fill
    ));

    // Foreground paint shared by every module this render emits.
    let fg_id = format!("{tag}-fg");
    let fg_paint = paint_def(
        config.palette.foreground_gradient.as_ref(),
        config.palette.foreground,
        offset,
        offset,
        content_px,
        content_px,
        &fg_id,
    );
    defs.push_str(&fg_paint.defs);

    let id_prefix = id_prefix.as_str();
    let mut groups: [String; 4] = [String::new(), String::new(), String::new(), String::new()];

    for (row, col, kind, dark) in matrix.iter_cells() {
        if !dark {
            continue;
        }
        let imprinted = matches!(&reserve, Some((area, CenterpieceMode::Imprint)) if area.contains(row, col));
        if let Some((area, CenterpieceMode::Knockout)) = &reserve {
            if area.contains(row, col) {
                continue;
            }
        }

        let mut shape = resolve_shape_kind(
            &config.geometry.shape,
            config.patterns.overrides(),
            config.geometry.safe_mode,
            kind,
        );
        let undersized_island = small_islands.is_some_and(|set| set.contains(&(row, col)));
        if shape.is_neighbor_aware() && undersized_island {
            shape = &ShapeKind::Square;
        }

        let rect = CellRect::new(offset + col as f64 * module_px, offset + row as f64 * module_px, module_px);
        let neighbors = CardinalNeighbors {
            left: matrix.is_dark_signed(row as i32, col as i32 - 1),
            right: matrix.is_dark_signed(row as i32, col as i32 + 1),
            top: matrix.is_dark_signed(row as i32 - 1, col as i32),
            bottom: matrix.is_dark_signed(row as i32 + 1, col as i32),
        };
        let ctx = ShapeContext { row, col, kind, neighbors };
        let fragment = render_shape(shape, rect, &ctx);
        let fragment = wrap_cell(fragment, row, col, id_prefix, config.accessibility.module_ids, imprinted);

        let bucket = &mut groups[group_index(kind.pattern_group())];
        bucket.push_str(&fragment);
    }

    elements.push_str(&format!(r#"<g class="qr-modules" fill="{}">"#, fg_paint.fill));
    for group in [PatternGroup::Finder, PatternGroup::Timing, PatternGroup::Alignment, PatternGroup::Data] {
        let buffer = &groups[group_index(group)];
        if buffer.is_empty() {
            continue;
        }
        elements.push_str(&format!(r#"<g class="{}">"#, group_class(group)));
        elements.push_str(buffer);
        elements.push_str("</g>");
    }
    elements.push_str("</g>");

    if let Some((area, mode)) = &reserve {
        let mode_class = match mode {
            CenterpieceMode::Knockout => "knockout",
            CenterpieceMode::Imprint => "imprint",
        };
        elements.push_str(&centerpiece_hook(area, offset, module_px, &tag, mode_class));
    }

    let role_and_label = match &config.accessibility.aria_label {
        Some(label) => format!(r#" role="img" aria-label="{}""#, escape_attr(label)),
        None => String::new(),
    };
    let title = if config.accessibility.include_title {
        config
            .accessibility
            .aria_label
            .as_deref()
            .map(|label| format!("<title>{}</title>", escape_text(label)))
            .unwrap_or_default()
    } else {
        String::new()
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{total_px}" height="{total_px}" viewBox="0 0 {total_px} {total_px}"{role_and_label}>{title}<defs>{defs}</defs>{elements}</svg>"#
    )
}

fn group_index(group: PatternGroup) -> usize {
    match group {
        PatternGroup::Finder => 0,
        PatternGroup::Timing => 1,
        PatternGroup::Alignment => 2,
        PatternGroup::Data => 3,
    }
}

/// Wraps one module's rendered fragment with its stable id (when
/// `include_id`) and/or the imprint alternate style (when `imprinted`).
/// Plain cells with neither get no wrapper at all, keeping the common
/// case's markup unchanged.
fn wrap_cell(fragment: String, row: usize, col: usize, id_prefix: &str, include_id: bool, imprinted: bool) -> String {
    let id_attr = if include_id {
        format!(r#" id="{id_prefix}-m-{row}-{col}""#)
    } else {
        String::new()
    };
    if imprinted {
        format!(r#"<g class="qr-imprint"{id_attr} opacity="0.35">{fragment}</g>"#)
    } else if include_id {
        format!(r#"<g{id_attr}>{fragment}</g>"#)
    } else {
        fragment
    }
}

/// The visible centerpiece hook element: an empty outline the caller
/// overlays a logo onto (knockout) or draws over (imprint), shaped to
/// match [`CenterpieceShape`] (spec.md \S4.5).
fn centerpiece_hook(area: &ReserveArea, offset: f64, module_px: f64, tag: &str, mode_class: &str) -> String {
    let x = offset + area.col as f64 * module_px;
    let y = offset + area.row as f64 * module_px;
    let w = area.width as f64 * module_px;
    let h = area.height as f64 * module_px;
    let class = format!("qr-centerpiece {mode_class}");

    match area.shape {
        CenterpieceShape::Rect => {
            format!(r#"<rect id="{tag}-centerpiece" class="{class}" x="{x}" y="{y}" width="{w}" height="{h}" fill="none"/>"#)
        }
        CenterpieceShape::Circle => {
            let cx = x + w / 2.0;
            let cy = y + h / 2.0;
            let r = w.min(h) / 2.0;
            format!(r#"<circle id="{tag}-centerpiece" class="{class}" cx="{cx}" cy="{cy}" r="{r}" fill="none"/>"#)
        }
        CenterpieceShape::Squircle => {
            let rx = w.min(h) * 0.4;
            format!(
                r#"<rect id="{tag}-centerpiece" class="{class}" x="{x}" y="{y}" width="{w}" height="{h}" rx="{rx}" ry="{rx}" fill="none"/>"#
            )
        }
    }
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn escape_text(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;")
}
