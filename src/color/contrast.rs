//! WCAG relative luminance and contrast ratio
//!
//! Used by presentation layers to judge how derived brand colors behave
//! behind light and dark text. Follows WCAG 2.1: channels are linearized
//! with the piecewise sRGB transform (using the 0.03928 cutoff the WCAG
//! formula specifies), weighted into relative luminance, and compared as
//! `(lighter + 0.05) / (darker + 0.05)`.

use palette::Srgb;

use crate::color::space::from_hex;
use crate::constants::wcag;
use crate::error::Result;

/// Contrast of one color against white and black text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    /// Contrast ratio against `#ffffff`
    pub against_white: f64,
    /// Contrast ratio against `#000000`
    pub against_black: f64,
}

/// Relative luminance of an 8-bit sRGB color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0]: 0 for black, 1 for white.
pub fn relative_luminance(color: Srgb<u8>) -> f64 {
    wcag::RED_WEIGHT * linearize(color.red)
        + wcag::GREEN_WEIGHT * linearize(color.green)
        + wcag::BLUE_WEIGHT * linearize(color.blue)
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= wcag::LINEAR_CUTOFF {
        c / wcag::LINEAR_DIVISOR
    } else {
        ((c + wcag::GAMMA_OFFSET) / (1.0 + wcag::GAMMA_OFFSET)).powf(wcag::GAMMA)
    }
}

/// WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0], independent of argument order.
pub fn contrast_ratio_rgb(a: Srgb<u8>, b: Srgb<u8>) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + wcag::CONTRAST_OFFSET) / (darker + wcag::CONTRAST_OFFSET)
}

/// WCAG contrast ratio between two `#RRGGBB` hex strings.
///
/// # Errors
///
/// Returns [`crate::ExtractionError::InvalidHexColor`] if either string
/// does not parse.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> Result<f64> {
    Ok(contrast_ratio_rgb(from_hex(hex_a)?, from_hex(hex_b)?))
}

/// Evaluate one hex color against white and black text.
///
/// # Errors
///
/// Returns [`crate::ExtractionError::InvalidHexColor`] if the string does
/// not parse.
pub fn contrast_report(hex: &str) -> Result<ContrastReport> {
    let color = from_hex(hex)?;
    Ok(ContrastReport {
        against_white: contrast_ratio_rgb(color, Srgb::new(255, 255, 255)),
        against_black: contrast_ratio_rgb(color, Srgb::new(0, 0, 0)),
    })
}
