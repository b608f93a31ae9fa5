//! RGB/HSL conversion and hex formatting
//!
//! The pipeline works in HSL with every component normalized to [0, 1]
//! (hue wraps at 1). The conversions here are the plain six-sector HSL
//! formulas over 8-bit sRGB channels; `palette`'s own HSL type keeps hue
//! in degrees and floats throughout, whereas variant derivation depends
//! on these exact normalized values and integer rounding.

use palette::Srgb;
use std::str::FromStr;

use crate::error::{ExtractionError, Result};

/// Hue, saturation, lightness, each in [0, 1].
///
/// Hue is circular (wraps at 1). Achromatic colors have hue 0 and
/// saturation 0 by convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

/// Convert an 8-bit sRGB color to normalized HSL.
///
/// The achromatic case (`max == min`) yields hue 0 and saturation 0.
pub fn rgb_to_hsl(color: Srgb<u8>) -> Hsl {
    let r = f32::from(color.red) / 255.0;
    let g = f32::from(color.green) / 255.0;
    let b = f32::from(color.blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

/// Convert normalized HSL back to 8-bit sRGB, rounding each channel.
///
/// Zero saturation yields an achromatic gray at the given lightness.
/// Together with [`rgb_to_hsl`] this round-trips any 8-bit color to
/// within 1 per channel.
pub fn hsl_to_rgb(hsl: Hsl) -> Srgb<u8> {
    let Hsl { h, s, l } = hsl;

    if s == 0.0 {
        let v = channel(l);
        return Srgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Srgb::new(
        channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        channel(hue_to_channel(p, q, h)),
        channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    // Wrap hue into [0, 1)
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f32) -> u8 {
    (v * 255.0).round() as u8
}

/// Format an 8-bit sRGB color as lowercase `#rrggbb`.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:x}", color)
}

/// Parse a `#RRGGBB` hex string into an 8-bit sRGB color.
///
/// The leading `#` is optional; case is ignored.
///
/// # Errors
///
/// Returns [`ExtractionError::InvalidHexColor`] for anything else.
pub fn from_hex(hex: &str) -> Result<Srgb<u8>> {
    Srgb::<u8>::from_str(hex).map_err(|source| ExtractionError::InvalidHexColor {
        value: hex.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let red = rgb_to_hsl(Srgb::new(255u8, 0, 0));
        assert_close(red.h, 0.0);
        assert_close(red.s, 1.0);
        assert_close(red.l, 0.5);

        let green = rgb_to_hsl(Srgb::new(0u8, 255, 0));
        assert_close(green.h, 1.0 / 3.0);

        let blue = rgb_to_hsl(Srgb::new(0u8, 0, 255));
        assert_close(blue.h, 2.0 / 3.0);
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        for v in [0u8, 64, 128, 255] {
            let hsl = rgb_to_hsl(Srgb::new(v, v, v));
            assert_close(hsl.h, 0.0);
            assert_close(hsl.s, 0.0);
            assert_close(hsl.l, f32::from(v) / 255.0);
        }
    }

    #[test]
    fn test_rgb_to_hsl_components_in_unit_range() {
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    let hsl = rgb_to_hsl(Srgb::new(r as u8, g as u8, b as u8));
                    assert!((0.0..=1.0).contains(&hsl.h));
                    assert!((0.0..=1.0).contains(&hsl.s));
                    assert!((0.0..=1.0).contains(&hsl.l));
                }
            }
        }
    }

    #[test]
    fn test_hsl_to_rgb_achromatic() {
        let gray = hsl_to_rgb(Hsl::new(0.7, 0.0, 0.5));
        assert_eq!(gray, Srgb::new(128u8, 128, 128));
    }

    #[test]
    fn test_round_trip_within_one_per_channel() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let original = Srgb::new(r as u8, g as u8, b as u8);
                    let back = hsl_to_rgb(rgb_to_hsl(original));
                    assert!(
                        (i16::from(back.red) - i16::from(original.red)).abs() <= 1
                            && (i16::from(back.green) - i16::from(original.green)).abs() <= 1
                            && (i16::from(back.blue) - i16::from(original.blue)).abs() <= 1,
                        "round trip drifted: {original:?} -> {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(Srgb::new(255u8, 0, 0)), "#ff0000");
        assert_eq!(to_hex(Srgb::new(136u8, 136, 136)), "#888888");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("#ff0000").unwrap(), Srgb::new(255u8, 0, 0));
        assert_eq!(from_hex("00FF00").unwrap(), Srgb::new(0u8, 255, 0));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(from_hex("#ff00").is_err());
        assert!(from_hex("#gggggg").is_err());
        assert!(from_hex("").is_err());
    }
}
