//! Concrete scenario tests (spec.md §8, S1-S6): literal inputs with
//! literal expected observable outputs, as opposed to the generic
//! property-based checks in `invariants.rs`.

use qr_svg_styling::config::{CenterpieceConfig, Config, FrameConfig, GeometryConfig, Palette};
use qr_svg_styling::error::RenderError;
use qr_svg_styling::geometry::{CenterpieceMode, CenterpieceShape, ClipMode, FrameShape};
use qr_svg_styling::matrix::Matrix;
use qr_svg_styling::render;
use qr_svg_styling::shapes::ShapeKind;
use qr_svg_styling::svg::Color;
use qr_svg_styling::types::ErrorCorrectionLevel;
use qr_svg_styling::validate::validate_composition;
use qr_svg_styling::report::RenderReport;

/// The `<g class="qr-modules">…</g>` slice of a rendered document,
/// i.e. the per-module shapes (nested under per-`CellKind` subgroups)
/// without the background rect or centerpiece hook.
fn modules_layer(svg: &str) -> &str {
    let start = svg.find(r#"<g class="qr-modules""#).expect("modules group present");
    let body = &svg[start..];
    let mut depth = 0usize;
    let mut pos = 0usize;
    loop {
        let next_open = body[pos..].find("<g").map(|i| pos + i);
        let next_close = body[pos..].find("</g>").map(|i| pos + i);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                pos = o + 2;
            }
            (_, Some(c)) => {
                depth -= 1;
                pos = c + 4;
                if depth == 0 {
                    return &body[..pos];
                }
            }
            _ => panic!("modules group never closed"),
        }
    }
}

/// S1 — plain square, safe mode on: version-1 "Hello World" at ECC M
/// with default styling renders a 290x290 document, one `<rect>` per
/// dark cell, and no warnings.
#[test]
fn s1_plain_square_safe_mode() {
    let matrix = Matrix::encode("Hello World", Some(1), ErrorCorrectionLevel::M, None).unwrap();
    let config = Config::builder().build().unwrap();
    let (svg, report) = render(&matrix, &config).unwrap();

    assert!(svg.contains(r#"viewBox="0 0 290 290""#));
    assert!(report.warnings.is_empty());

    let dark_cells = (0..matrix.side())
        .flat_map(|r| (0..matrix.side()).map(move |c| (r, c)))
        .filter(|&(r, c)| matrix.is_dark(r, c))
        .count();
    let rects_emitted = modules_layer(&svg).matches("<rect").count();
    assert_eq!(rects_emitted, dark_cells);
}

/// S2 — circle shape with safe mode on: data cells render as circles
/// of radius `0.45 * scale`; function-pattern cells stay squares; no
/// degradation is needed so the report is empty.
#[test]
fn s2_circle_with_safe_mode() {
    let matrix = Matrix::encode("Hello World", Some(1), ErrorCorrectionLevel::M, None).unwrap();
    let geometry = GeometryConfig {
        shape: ShapeKind::Circle,
        safe_mode: true,
        ..GeometryConfig::default()
    };
    let config = Config::builder().geometry(geometry).build().unwrap();
    let (svg, report) = render(&matrix, &config).unwrap();

    assert!(report.warnings.is_empty());
    let modules = modules_layer(&svg);
    assert!(modules.contains(r#"r="4.5""#));
    assert!(modules.contains("<rect"));
}

/// S3 — connected + aggressive merge with a user-requested
/// `min_island_modules=1`: the floor is auto-raised to 3 with a
/// `MERGE_SAFETY_ADJUSTED` warning rather than rejected outright.
#[test]
fn s3_connected_aggressive_small_cluster_floor_is_raised() {
    use qr_svg_styling::config::MergeStrategy;

    let matrix = Matrix::encode("https://example.com", Some(4), ErrorCorrectionLevel::Q, None).unwrap();
    let geometry = GeometryConfig {
        shape: ShapeKind::Connected,
        merge_strategy: MergeStrategy::Aggressive,
        min_island_modules: 1,
        ..GeometryConfig::default()
    };
    let config = Config::builder().geometry(geometry).build().unwrap();
    let (_svg, report) = render(&matrix, &config).unwrap();

    let adjustment = report.warnings.iter().find(|w| w.code == "MERGE_SAFETY_ADJUSTED");
    assert!(adjustment.is_some());
    let adjustment = adjustment.unwrap();
    assert_eq!(adjustment.original_value.as_deref(), Some("1"));
    assert_eq!(adjustment.fallback_value.as_deref(), Some("3"));
}

/// S4 — circle frame, fade clip, a 0.20 centerpiece reserve at ECC H:
/// the fade mask shows up in `<defs>`, no module renders inside the
/// reserve, and nothing beyond informational warnings fires (0.20 is
/// under H's 0.25 safe cap).
#[test]
fn s4_circle_frame_fade_with_large_centerpiece() {
    let matrix = Matrix::encode("https://example.com/s4", None, ErrorCorrectionLevel::H, None).unwrap();
    let frame = FrameConfig {
        shape: FrameShape::Circle,
        clip_mode: ClipMode::Fade,
        border_modules: 5,
    };
    let centerpiece = CenterpieceConfig {
        enabled: true,
        size_fraction: 0.20,
        mode: CenterpieceMode::Knockout,
        shape: CenterpieceShape::Circle,
        ..CenterpieceConfig::default()
    };
    let config = Config::builder().frame(frame).centerpiece(centerpiece).build().unwrap();
    let (svg, report) = render(&matrix, &config).unwrap();

    assert!(report.warnings.is_empty());
    assert!(svg.contains("mask"));
    assert!(svg.contains("radialGradient"));
    assert!(svg.contains("qr-centerpiece"));
    assert!(svg.contains("<circle id=\""));
}

/// S5 — an unsafe reserve at ECC L (0.20 requested, 0.05 cap): lenient
/// mode shrinks it with a `RESERVE_CLAMPED` warning; strict mode
/// refuses with `UnsafeReserve`.
#[test]
fn s5_unsafe_reserve_is_clamped_in_lenient_mode() {
    let matrix = Matrix::encode("https://example.com", Some(4), ErrorCorrectionLevel::L, None).unwrap();
    let centerpiece = CenterpieceConfig {
        enabled: true,
        size_fraction: 0.20,
        ..CenterpieceConfig::default()
    };
    let config = Config::builder().centerpiece(centerpiece).build().unwrap();
    let mut report = RenderReport::new();
    let (adjusted, _reserve) = validate_composition(&matrix, &config, &mut report).unwrap();

    assert!(adjusted.centerpiece.size_fraction <= 0.05);
    assert!(report.warnings.iter().any(|w| w.code == "RESERVE_CLAMPED"));
}

#[test]
fn s5_unsafe_reserve_is_rejected_in_strict_mode() {
    let matrix = Matrix::encode("https://example.com", Some(4), ErrorCorrectionLevel::L, None).unwrap();
    let centerpiece = CenterpieceConfig {
        enabled: true,
        size_fraction: 0.20,
        strict: true,
        ..CenterpieceConfig::default()
    };
    let config = Config::builder().centerpiece(centerpiece).build().unwrap();
    let result = render(&matrix, &config);
    assert!(matches!(result, Err(RenderError::UnsafeReserve { .. })));
}

/// S6 — a low-contrast `#888888` on `#999999` pair against the AA
/// target: lenient mode clamps the palette to a compliant pair with a
/// `CONTRAST_ADJUSTED` warning; strict mode refuses with
/// `ContrastError`.
#[test]
fn s6_low_contrast_is_clamped_in_lenient_mode() {
    let matrix = Matrix::encode("https://example.com", Some(2), ErrorCorrectionLevel::M, None).unwrap();
    let palette = Palette {
        foreground: Color::from_hex("#888888").unwrap(),
        background: Color::from_hex("#999999").unwrap(),
        ..Palette::default()
    };
    let config = Config::builder().palette(palette).build().unwrap();
    let (_svg, report) = render(&matrix, &config).unwrap();
    assert!(report.warnings.iter().any(|w| w.code == "CONTRAST_ADJUSTED"));
}

#[test]
fn s6_low_contrast_is_rejected_in_strict_mode() {
    let matrix = Matrix::encode("https://example.com", Some(2), ErrorCorrectionLevel::M, None).unwrap();
    let palette = Palette {
        foreground: Color::from_hex("#888888").unwrap(),
        background: Color::from_hex("#999999").unwrap(),
        ..Palette::default()
    };
    let config = Config::builder().palette(palette).strict(true).build().unwrap();
    let result = render(&matrix, &config);
    assert!(matches!(result, Err(RenderError::ContrastError { .. })));
}
