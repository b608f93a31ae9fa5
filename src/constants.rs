//! Heuristic constants for the branding-color pipeline
//!
//! These are the baseline values used by [`crate::config::ExtractionConfig::default`].
//! The selection and variant thresholds are tuned by eye against a corpus of
//! application icons, not derived; they are exposed through the configuration
//! layer so callers can adjust them without forking the pipeline.

/// Pixel sampling parameters
pub mod sampling {
    /// Target sample grid dimension; the sampling stride is chosen so at most
    /// roughly this many samples are taken per axis regardless of image size
    pub const TARGET_GRID: u32 = 60;

    /// Minimum alpha (out of 255) for a pixel to count as opaque enough to sample
    pub const MIN_ALPHA: u8 = 10;
}

/// K-means clustering parameters
pub mod clustering {
    /// Lower bound on cluster count
    pub const MIN_CLUSTERS: usize = 2;

    /// Upper bound on cluster count
    pub const MAX_CLUSTERS: usize = 6;

    /// One cluster is budgeted per this many samples, within the bounds above
    pub const SAMPLES_PER_CLUSTER: usize = 20;

    /// Iteration cap; the loop also stops early on convergence
    pub const MAX_ITERATIONS: usize = 12;
}

/// Primary-cluster selection parameters
pub mod selection {
    /// Weight of saturation in the cluster score `members * (1 + s * weight)`
    pub const SATURATION_WEIGHT: f32 = 3.0;

    /// Saturation below which a cluster is considered effectively gray
    pub const GRAY_SATURATION: f32 = 0.12;

    /// Minimum saturation advantage required to displace a gray top cluster
    pub const SATURATION_GAP: f32 = 0.05;

    /// Minimum share of total samples for a cluster to be a displacement candidate
    pub const MIN_MEMBER_SHARE: f32 = 0.03;
}

/// Light/dark variant derivation parameters
pub mod variants {
    /// Variants never drop below this saturation when the primary is near-gray
    pub const SATURATION_FLOOR: f32 = 0.12;

    /// Default lightness shift for the light variant
    pub const LIGHT_DELTA: f32 = 0.22;

    /// Default lightness shift for the dark variant
    pub const DARK_DELTA: f32 = 0.26;

    /// Lightness clamp range for derived variants
    pub const LIGHTNESS_MIN: f32 = 0.03;
    pub const LIGHTNESS_MAX: f32 = 0.97;

    /// Primaries lighter than this use the compressed near/far shifts
    pub const VERY_LIGHT_THRESHOLD: f32 = 0.85;

    /// Primaries darker than this use the compressed near/far shifts
    pub const VERY_DARK_THRESHOLD: f32 = 0.15;

    /// Shift toward the primary for the variant on the crowded side
    pub const EXTREME_NEAR_DELTA: f32 = 0.08;

    /// Shift away from the primary for the variant on the open side
    pub const EXTREME_FAR_DELTA: f32 = 0.3;

    /// The dark variant must end up at least this far below the primary
    pub const MIN_DARK_GAP: f32 = 0.12;
}

/// WCAG 2.x relative-luminance and contrast constants
///
/// Source: WCAG 2.1 §relative luminance. The 0.03928 linearization cutoff is
/// the value the WCAG formula specifies (inherited from an early sRGB draft;
/// IEC 61966-2-1 uses 0.04045, the difference is below display precision).
pub mod wcag {
    /// sRGB channel values at or below this are linearized by simple division
    pub const LINEAR_CUTOFF: f64 = 0.03928;

    /// Divisor for the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset in the power segment `((c + offset) / (1 + offset))^gamma`
    pub const GAMMA_OFFSET: f64 = 0.055;

    /// Exponent of the power segment
    pub const GAMMA: f64 = 2.4;

    /// Luminance channel weights (Rec. 709 primaries)
    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;

    /// Flare term added to both luminances in the contrast ratio
    pub const CONTRAST_OFFSET: f64 = 0.05;
}

/// Fixed result returned when no opaque pixels can be sampled
pub mod fallback {
    pub const PRIMARY: &str = "#888888";
    pub const LIGHT: &str = "#bbbbbb";
    pub const DARK: &str = "#444444";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clustering_bounds_ordered() {
        assert!(clustering::MIN_CLUSTERS >= 1);
        assert!(clustering::MIN_CLUSTERS <= clustering::MAX_CLUSTERS);
        assert!(clustering::MAX_ITERATIONS >= 1);
    }

    #[test]
    fn test_selection_thresholds_in_unit_range() {
        assert!(selection::GRAY_SATURATION > 0.0 && selection::GRAY_SATURATION < 1.0);
        assert!(selection::SATURATION_GAP > 0.0 && selection::SATURATION_GAP < 1.0);
        assert!(selection::MIN_MEMBER_SHARE > 0.0 && selection::MIN_MEMBER_SHARE < 1.0);
    }

    #[test]
    fn test_variant_lightness_ranges() {
        assert!(variants::LIGHTNESS_MIN < variants::LIGHTNESS_MAX);
        assert!(variants::VERY_DARK_THRESHOLD < variants::VERY_LIGHT_THRESHOLD);
        assert!(variants::MIN_DARK_GAP > 0.0);
    }

    #[test]
    fn test_wcag_weights_sum_to_one() {
        let sum = wcag::RED_WEIGHT + wcag::GREEN_WEIGHT + wcag::BLUE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }
}
