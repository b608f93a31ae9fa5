//! Light/dark variant derivation
//!
//! Shifts the primary's HSL lightness up and down to produce scheme
//! variants, with three corrections beyond the plain deltas:
//!
//! - a saturation floor so a near-gray primary still yields visibly
//!   colored variants at its original hue,
//! - compressed shifts when the primary is already very light or very
//!   dark, where the default deltas would clamp into uselessness,
//! - a minimum lightness gap so the dark variant stays perceptibly
//!   darker than the primary even after clamping.

use palette::Srgb;

use crate::color::space::{hsl_to_rgb, rgb_to_hsl, Hsl};
use crate::config::VariantConfig;

/// Light and dark scheme variants of a primary color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeVariants {
    pub light: Srgb<u8>,
    pub dark: Srgb<u8>,
}

/// Derive light and dark variants from the primary color.
///
/// The primary itself is returned to the caller unmodified; only the
/// variants receive the saturation floor and lightness shifts.
pub fn derive_variants(primary: Srgb<u8>, config: &VariantConfig) -> SchemeVariants {
    let Hsl { h, s, l } = rgb_to_hsl(primary);

    let effective_s = s.max(config.saturation_floor);
    let clamp_l = |value: f32| value.clamp(config.lightness_min, config.lightness_max);

    let mut light_l = clamp_l(l + config.light_delta);
    let mut dark_l = clamp_l(l - config.dark_delta);

    if l > config.very_light_threshold {
        // Very light primary: both variants sit below it
        light_l = clamp_l(l - config.extreme_near_delta);
        dark_l = clamp_l(l - config.extreme_far_delta);
    } else if l < config.very_dark_threshold {
        // Very dark primary: both variants sit above the clamp floor
        light_l = clamp_l(l + config.extreme_far_delta);
        dark_l = clamp_l(l - config.extreme_near_delta);
    }

    // The dark variant must stay perceptibly darker than the primary
    if l - dark_l < config.min_dark_gap {
        dark_l = clamp_l(l - config.min_dark_gap);
    }

    SchemeVariants {
        light: hsl_to_rgb(Hsl::new(h, effective_s, light_l)),
        dark: hsl_to_rgb(Hsl::new(h, effective_s, dark_l)),
    }
}
