//! Configuration structures for the branding-color extraction pipeline.
//!
//! This module defines all tunable parameters for extraction, organized
//! into logical groups for sampling, clustering, selection, and variant
//! derivation. The defaults reproduce the reference heuristic exactly;
//! the selection and variant thresholds in particular are hand-tuned
//! values with no closed-form derivation, so they are exposed here rather
//! than hard-coded in the pipeline.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use brand_colors::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ExtractionConfig::default();
//! # Ok::<(), brand_colors::ExtractionError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{clustering, sampling, selection, variants};
use crate::error::{ExtractionError, Result};

/// Complete configuration for one extraction run.
///
/// Can be serialized to/from JSON for reproducible tuning experiments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Pixel sampling configuration
    pub sampling: SamplingConfig,

    /// K-means clustering configuration
    pub clustering: ClusteringConfig,

    /// Primary-cluster selection configuration
    pub selection: SelectionConfig,

    /// Light/dark variant derivation configuration
    pub variants: VariantConfig,
}

/// Pixel sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Target sample grid dimension per axis; the stride is
    /// `max(1, min(width, height) / target_grid)`
    pub target_grid: u32,

    /// Minimum alpha (0-255) for a pixel to be sampled from RGBA buffers
    pub min_alpha: u8,
}

/// K-means clustering parameters.
///
/// The cluster count is `clamp(samples / samples_per_cluster,
/// min_clusters, max_clusters)`; iteration stops at `max_iterations` or
/// on convergence, whichever comes first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Lower bound on cluster count
    pub min_clusters: usize,

    /// Upper bound on cluster count
    pub max_clusters: usize,

    /// Samples budgeted per cluster when choosing the cluster count
    pub samples_per_cluster: usize,

    /// Iteration cap
    pub max_iterations: usize,
}

/// Primary-cluster selection parameters.
///
/// Scoring biases toward clusters that are both large and saturated; the
/// desaturation guard prevents a dominant neutral background from winning
/// over a smaller but clearly branded color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Saturation weight in the score `members * (1 + saturation * weight)`
    pub saturation_weight: f32,

    /// Saturation below which the top-scoring cluster counts as gray (0.0-1.0)
    pub gray_saturation: f32,

    /// Saturation advantage a challenger needs to displace a gray winner (0.0-1.0)
    pub saturation_gap: f32,

    /// Minimum share of total samples for a displacement candidate (0.0-1.0)
    pub min_member_share: f32,
}

/// Light/dark variant derivation parameters.
///
/// All lightness values are in HSL lightness units, [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Minimum saturation applied to derived variants
    pub saturation_floor: f32,

    /// Default lightness shift up for the light variant
    pub light_delta: f32,

    /// Default lightness shift down for the dark variant
    pub dark_delta: f32,

    /// Lower clamp for derived lightness
    pub lightness_min: f32,

    /// Upper clamp for derived lightness
    pub lightness_max: f32,

    /// Primaries lighter than this switch to the compressed shifts
    pub very_light_threshold: f32,

    /// Primaries darker than this switch to the compressed shifts
    pub very_dark_threshold: f32,

    /// Compressed shift toward the primary on the crowded side
    pub extreme_near_delta: f32,

    /// Compressed shift away from the primary on the open side
    pub extreme_far_delta: f32,

    /// Minimum lightness gap between the primary and the dark variant
    pub min_dark_gap: f32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            target_grid: sampling::TARGET_GRID,
            min_alpha: sampling::MIN_ALPHA,
        }
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            min_clusters: clustering::MIN_CLUSTERS,
            max_clusters: clustering::MAX_CLUSTERS,
            samples_per_cluster: clustering::SAMPLES_PER_CLUSTER,
            max_iterations: clustering::MAX_ITERATIONS,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            saturation_weight: selection::SATURATION_WEIGHT,
            gray_saturation: selection::GRAY_SATURATION,
            saturation_gap: selection::SATURATION_GAP,
            min_member_share: selection::MIN_MEMBER_SHARE,
        }
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            saturation_floor: variants::SATURATION_FLOOR,
            light_delta: variants::LIGHT_DELTA,
            dark_delta: variants::DARK_DELTA,
            lightness_min: variants::LIGHTNESS_MIN,
            lightness_max: variants::LIGHTNESS_MAX,
            very_light_threshold: variants::VERY_LIGHT_THRESHOLD,
            very_dark_threshold: variants::VERY_DARK_THRESHOLD,
            extreme_near_delta: variants::EXTREME_NEAR_DELTA,
            extreme_far_delta: variants::EXTREME_FAR_DELTA,
            min_dark_gap: variants::MIN_DARK_GAP,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig::default(),
            clustering: ClusteringConfig::default(),
            selection: SelectionConfig::default(),
            variants: VariantConfig::default(),
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExtractionError::config_io(format!("reading {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ExtractionError::config_io(format!("parsing {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExtractionError::config_io("serializing configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| ExtractionError::config_io(format!("writing {}", path.display()), e))?;
        Ok(())
    }

    /// Check every field against its documented range
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidParameter`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        if self.sampling.target_grid == 0 {
            return Err(ExtractionError::invalid_parameter(
                "sampling.target_grid",
                self.sampling.target_grid,
            ));
        }
        if self.clustering.min_clusters == 0 {
            return Err(ExtractionError::invalid_parameter(
                "clustering.min_clusters",
                self.clustering.min_clusters,
            ));
        }
        if self.clustering.max_clusters < self.clustering.min_clusters {
            return Err(ExtractionError::invalid_parameter(
                "clustering.max_clusters",
                self.clustering.max_clusters,
            ));
        }
        if self.clustering.samples_per_cluster == 0 {
            return Err(ExtractionError::invalid_parameter(
                "clustering.samples_per_cluster",
                self.clustering.samples_per_cluster,
            ));
        }
        if self.clustering.max_iterations == 0 {
            return Err(ExtractionError::invalid_parameter(
                "clustering.max_iterations",
                self.clustering.max_iterations,
            ));
        }
        if !(0.0..=1.0).contains(&self.selection.gray_saturation) {
            return Err(ExtractionError::invalid_parameter(
                "selection.gray_saturation",
                self.selection.gray_saturation,
            ));
        }
        if !(0.0..=1.0).contains(&self.selection.saturation_gap) {
            return Err(ExtractionError::invalid_parameter(
                "selection.saturation_gap",
                self.selection.saturation_gap,
            ));
        }
        if !(0.0..=1.0).contains(&self.selection.min_member_share) {
            return Err(ExtractionError::invalid_parameter(
                "selection.min_member_share",
                self.selection.min_member_share,
            ));
        }
        if self.selection.saturation_weight < 0.0 {
            return Err(ExtractionError::invalid_parameter(
                "selection.saturation_weight",
                self.selection.saturation_weight,
            ));
        }
        if !(0.0..=1.0).contains(&self.variants.saturation_floor) {
            return Err(ExtractionError::invalid_parameter(
                "variants.saturation_floor",
                self.variants.saturation_floor,
            ));
        }
        if self.variants.lightness_min >= self.variants.lightness_max
            || self.variants.lightness_min < 0.0
            || self.variants.lightness_max > 1.0
        {
            return Err(ExtractionError::invalid_parameter(
                "variants.lightness_min",
                self.variants.lightness_min,
            ));
        }
        if self.variants.very_dark_threshold >= self.variants.very_light_threshold {
            return Err(ExtractionError::invalid_parameter(
                "variants.very_dark_threshold",
                self.variants.very_dark_threshold,
            ));
        }
        for (name, value) in [
            ("variants.light_delta", self.variants.light_delta),
            ("variants.dark_delta", self.variants.dark_delta),
            ("variants.extreme_near_delta", self.variants.extreme_near_delta),
            ("variants.extreme_far_delta", self.variants.extreme_far_delta),
            ("variants.min_dark_gap", self.variants.min_dark_gap),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ExtractionError::invalid_parameter(name, value));
            }
        }
        Ok(())
    }
}
