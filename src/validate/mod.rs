//! C9 Composition Validator: cross-cutting checks a single field's own
//! validation can't catch — contrast, reserve-vs-ECC capacity, frame
//! clearance, and the aggressive-merge floor.
//!
//! By default each check auto-adjusts the config and records a
//! [`Warning`](crate::report::Warning); in `config.strict` mode the
//! same conditions become hard [`RenderError`]s instead (spec.md \S4.9).

use crate::config::Config;
use crate::error::{ErrorDetail, RenderError, Result};
use crate::geometry::{clamp_to_safe_cap, compute_reserve, require_safe_cap, CenterpieceMode, ReserveArea};
use crate::matrix::Matrix;
use crate::report::{RenderReport, Severity, Warning};
use crate::svg::{clamp_to_contrast, contrast_ratio};

/// Runs every C9 check against `config` for `matrix`, mutating a
/// working copy as needed and recording warnings on `report`. Returns
/// the adjusted config plus the resolved centerpiece reserve (if any).
pub fn validate_composition(
    matrix: &Matrix,
    config: &Config,
    report: &mut RenderReport,
) -> Result<(Config, Option<(ReserveArea, CenterpieceMode)>)> {
    let mut config = config.clone();

    check_aggressive_merge_floor(&mut config, report)?;
    check_contrast(&mut config, report)?;
    let reserve = check_centerpiece_reserve(matrix, &mut config, report)?;
    check_function_patterns_not_clipped(&config, report);

    Ok((config, reserve))
}

fn check_aggressive_merge_floor(config: &mut Config, report: &mut RenderReport) -> Result<()> {
    use crate::config::MergeStrategy;

    if !matches!(config.geometry.merge_strategy, MergeStrategy::Aggressive) {
        return Ok(());
    }
    if config.geometry.min_island_modules >= 3 {
        return Ok(());
    }

    if config.strict {
        return Err(RenderError::config_invalid(
            "aggressive merge strategy requires min_island_modules >= 3",
            ErrorDetail::new()
                .field("geometry.min_island_modules")
                .value(config.geometry.min_island_modules.to_string())
                .suggest("3"),
        ));
    }

    let raised = config.geometry.auto_raise_aggressive_floor();
    if raised {
        report.push(
            Warning::new(
                "MERGE_SAFETY_ADJUSTED",
                Severity::Warning,
                "aggressive merge strategy requires at least 3 modules per island",
            )
            .with_values("1", "3"),
        );
    }
    Ok(())
}

/// Below the declared compliance target, the flat foreground/background
/// pair is pushed toward black/white until compliant (spec.md \S8
/// scenario S6: "fg/bg clamped to a compliant pair in lenient mode").
/// Gradient fills are left untouched — only their effective (first-stop)
/// color feeds the ratio check, since rewriting a whole gradient to hit
/// a target ratio has no single well-defined answer.
fn check_contrast(config: &mut Config, report: &mut RenderReport) -> Result<()> {
    let fg = config.palette.effective_foreground();
    let bg = config.palette.effective_background();
    let ratio = contrast_ratio(fg, bg);
    let minimum = config.accessibility.compliance_target.minimum_ratio();

    if ratio >= minimum {
        return Ok(());
    }

    if config.strict {
        return Err(RenderError::contrast_error(
            format!("contrast ratio {ratio:.2} is below the required {minimum:.2}"),
            ErrorDetail::new()
                .field("palette")
                .value(format!("{ratio:.2}"))
                .suggest(format!(">= {minimum:.2}")),
        ));
    }

    if config.palette.foreground_gradient.is_none() && config.palette.background_gradient.is_none() {
        let (adjusted_fg, adjusted_bg) = clamp_to_contrast(fg, bg, minimum);
        config.palette.foreground = adjusted_fg;
        config.palette.background = adjusted_bg;
    }

    report.push(
        Warning::new(
            "CONTRAST_ADJUSTED",
            Severity::Warning,
            "foreground/background contrast was below the declared compliance target and was clamped",
        )
        .with_values(format!("{ratio:.2}"), format!(">= {minimum:.2} required")),
    );
    Ok(())
}

fn check_centerpiece_reserve(
    matrix: &Matrix,
    config: &mut Config,
    report: &mut RenderReport,
) -> Result<Option<(ReserveArea, CenterpieceMode)>> {
    if !config.centerpiece.enabled {
        return Ok(None);
    }

    let error_level = matrix.error_level();
    if config.centerpiece.strict || config.strict {
        require_safe_cap(config.centerpiece.size_fraction, error_level)?;
    } else {
        let (adjusted, shrunk) = clamp_to_safe_cap(config.centerpiece.size_fraction, error_level);
        if shrunk {
            report.push(
                Warning::new(
                    "RESERVE_CLAMPED",
                    Severity::Warning,
                    "centerpiece size_fraction exceeded the error level's safe capacity and was shrunk",
                )
                .with_values(config.centerpiece.size_fraction.to_string(), adjusted.to_string()),
            );
            config.centerpiece.size_fraction = adjusted;
        }
    }

    let area = compute_reserve(
        matrix.side(),
        config.centerpiece.size_fraction,
        config.centerpiece.offset_x,
        config.centerpiece.offset_y,
        config.centerpiece.margin_modules,
        config.centerpiece.shape,
    );
    Ok(Some((area, config.centerpiece.mode)))
}

/// A frame clip/fade must never cut into a function pattern — doing so
/// would make the symbol unscannable regardless of styling (spec.md
/// \S4.5/\S4.9). The frame geometry in this crate is always sized to
/// the full bordered symbol, so the only way this invariant could be
/// violated is a `border_modules` too small to hold the quiet zone;
/// record a warning rather than silently letting it through.
fn check_function_patterns_not_clipped(config: &Config, report: &mut RenderReport) {
    const MIN_QUIET_ZONE_MODULES: u32 = 4;
    if matches!(config.frame.clip_mode, crate::geometry::ClipMode::None) {
        return;
    }
    if config.frame.border_modules < MIN_QUIET_ZONE_MODULES {
        report.push(
            Warning::new(
                "QUIET_ZONE_NARROW",
                Severity::Warning,
                "frame border is narrower than the recommended quiet zone for a clipped/faded frame",
            )
            .with_values(config.frame.border_modules.to_string(), MIN_QUIET_ZONE_MODULES.to_string()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CenterpieceConfig, ConfigBuilder, GeometryConfig, MergeStrategy, Palette};
    use crate::svg::Color;
    use crate::types::ErrorCorrectionLevel;

    fn matrix() -> Matrix {
        Matrix::encode("https://example.com", Some(4), ErrorCorrectionLevel::L, None).unwrap()
    }

    #[test]
    fn aggressive_merge_floor_is_auto_raised_with_warning() {
        let geometry = GeometryConfig {
            merge_strategy: MergeStrategy::Aggressive,
            min_island_modules: 1,
            ..GeometryConfig::default()
        };
        let config = ConfigBuilder::new().geometry(geometry).build().unwrap();
        let mut report = RenderReport::new();
        let (adjusted, _) = validate_composition(&matrix(), &config, &mut report).unwrap();
        assert_eq!(adjusted.geometry.min_island_modules, 3);
        assert!(report.warnings.iter().any(|w| w.code == "MERGE_SAFETY_ADJUSTED"));
    }

    #[test]
    fn strict_mode_rejects_instead_of_adjusting() {
        let geometry = GeometryConfig {
            merge_strategy: MergeStrategy::Aggressive,
            min_island_modules: 1,
            ..GeometryConfig::default()
        };
        let config = ConfigBuilder::new().geometry(geometry).strict(true).build().unwrap();
        let mut report = RenderReport::new();
        assert!(validate_composition(&matrix(), &config, &mut report).is_err());
    }

    #[test]
    fn low_contrast_is_flagged_and_the_palette_is_clamped() {
        let palette = Palette {
            foreground: Color::rgb(200, 200, 200),
            background: Color::WHITE,
            ..Palette::default()
        };
        let config = ConfigBuilder::new().palette(palette).build().unwrap();
        let mut report = RenderReport::new();
        let (adjusted, _) = validate_composition(&matrix(), &config, &mut report).unwrap();
        assert!(report.warnings.iter().any(|w| w.code == "CONTRAST_ADJUSTED"));
        let ratio = crate::svg::contrast_ratio(adjusted.palette.foreground, adjusted.palette.background);
        assert!(ratio >= config.accessibility.compliance_target.minimum_ratio());
    }

    #[test]
    fn oversized_reserve_is_clamped_with_warning() {
        let centerpiece = CenterpieceConfig {
            enabled: true,
            size_fraction: 0.5,
            ..CenterpieceConfig::default()
        };
        let config = ConfigBuilder::new().centerpiece(centerpiece).build().unwrap();
        let mut report = RenderReport::new();
        let (adjusted, reserve) = validate_composition(&matrix(), &config, &mut report).unwrap();
        assert!(adjusted.centerpiece.size_fraction < 0.5);
        assert!(reserve.is_some());
        assert!(report.warnings.iter().any(|w| w.code == "RESERVE_CLAMPED"));
    }
}
