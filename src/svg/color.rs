//! RGBA color value, ported near-verbatim from the teacher's
//! `config::color::Color`.

use crate::error::{ErrorDetail, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: &str) -> Result<Self, RenderError> {
        let hex = hex.trim_start_matches('#');
        let invalid = || {
            RenderError::config_invalid(
                format!("invalid color hex string {hex:?}"),
                ErrorDetail::new().field("color").value(hex),
            )
        };
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[1..2], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[2..3], 16).map_err(|_| invalid())?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                let a = u8::from_str_radix(&hex[6..8], 16).map_err(|_| invalid())?;
                Ok(Self::rgba(r, g, b, a))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_rgba_string(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }

    /// Relative luminance per WCAG 2.x, used by the C9 contrast check.
    pub fn relative_luminance(&self) -> f64 {
        let channel = |c: u8| -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// WCAG contrast ratio between two colors, in `1.0..=21.0`.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (l1, l2) = (a.relative_luminance(), b.relative_luminance());
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pushes `fg`/`bg` toward black/white (whichever is already darker or
/// lighter) until their contrast ratio meets `minimum`, used by the C9
/// contrast check's lenient-mode auto-adjustment. A no-op pair is
/// returned unchanged when already compliant. Converges within the
/// iteration budget since repeated geometric interpolation toward
/// black/white always reaches `contrast_ratio(BLACK, WHITE) == 21.0`.
pub fn clamp_to_contrast(fg: Color, bg: Color, minimum: f64) -> (Color, Color) {
    let mut fg = fg;
    let mut bg = bg;
    if contrast_ratio(fg, bg) >= minimum {
        return (fg, bg);
    }

    let fg_is_lighter = fg.relative_luminance() >= bg.relative_luminance();
    for _ in 0..32 {
        if contrast_ratio(fg, bg) >= minimum {
            break;
        }
        if fg_is_lighter {
            fg = nudge_toward(fg, Color::WHITE, 0.1);
            bg = nudge_toward(bg, Color::BLACK, 0.1);
        } else {
            fg = nudge_toward(fg, Color::BLACK, 0.1);
            bg = nudge_toward(bg, Color::WHITE, 0.1);
        }
    }
    (fg, bg)
}

fn nudge_toward(c: Color, target: Color, t: f64) -> Color {
    let lerp = |a: u8, b: u8| -> u8 {
        (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
    };
    Color::rgba(lerp(c.r, target.r), lerp(c.g, target.g), lerp(c.b, target.b), c.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_roundtrips_common_forms() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hex("000000").unwrap(), Color::rgb(0, 0, 0));
        assert_eq!(Color::from_hex("#FFF").unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#ZZZ").is_err());
        assert!(Color::from_hex("#12345").is_err());
    }

    #[test]
    fn black_on_white_has_maximum_contrast() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn identical_colors_have_unit_contrast() {
        assert!((contrast_ratio(Color::BLACK, Color::BLACK) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_to_contrast_is_a_no_op_when_already_compliant() {
        let (fg, bg) = clamp_to_contrast(Color::BLACK, Color::WHITE, 4.5);
        assert_eq!(fg, Color::BLACK);
        assert_eq!(bg, Color::WHITE);
    }

    #[test]
    fn clamp_to_contrast_separates_a_low_contrast_pair() {
        let fg = Color::rgb(140, 140, 140);
        let bg = Color::rgb(160, 160, 160);
        let before = contrast_ratio(fg, bg);
        let (fg, bg) = clamp_to_contrast(fg, bg, 4.5);
        assert!(contrast_ratio(fg, bg) >= 4.5);
        assert!(contrast_ratio(fg, bg) > before);
    }
}
