//! # Brand Colors
//!
//! A Rust crate for proposing branding colors from application icons and
//! logos.
//!
//! Given a decoded pixel buffer, this library:
//! - Samples a bounded grid of opaque pixels
//! - Clusters them into dominant colors with deterministic k-means
//! - Selects a primary color with a saturation-aware heuristic
//! - Derives light and dark scheme variants via HSL lightness shifts
//!
//! The result is a `{primary, light, dark}` triple of `#rrggbb` hex
//! strings, suitable for an AppStream `<branding>` element, plus a WCAG
//! contrast-ratio utility for accessibility feedback.
//!
//! ## Example
//!
//! ```rust
//! use brand_colors::{extract_branding, PixelBuffer};
//!
//! // A 2x2 opaque red image, RGBA
//! let data = [255u8, 0, 0, 255].repeat(4);
//! let buffer = PixelBuffer::new(2, 2, 8, 4, &data)?;
//!
//! let colors = extract_branding(&buffer);
//! assert_eq!(colors.primary, "#ff0000");
//! # Ok::<(), brand_colors::ExtractionError>(())
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

pub mod buffer;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;

pub use buffer::{ChannelLayout, PixelBuffer};
pub use color::contrast::{contrast_ratio, contrast_report, relative_luminance, ContrastReport};
pub use color::space::Hsl;
pub use config::ExtractionConfig;
pub use error::{ExtractionError, Result};

use color::space::to_hex;
use extract::{kmeans, sampler, selection, variants};

/// Branding-color triple produced by the pipeline.
///
/// Each field is a lowercase `#rrggbb` hex string. The value is terminal:
/// once produced it has no further lifecycle and can be handed to any
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    /// The dominant brand color as sampled, unmodified
    pub primary: String,
    /// Variant for light color schemes
    pub light: String,
    /// Variant for dark color schemes
    pub dark: String,
}

impl BrandColors {
    /// The fixed triple returned when no opaque pixels can be sampled.
    pub fn fallback() -> Self {
        Self {
            primary: constants::fallback::PRIMARY.to_string(),
            light: constants::fallback::LIGHT.to_string(),
            dark: constants::fallback::DARK.to_string(),
        }
    }

    /// Render the AppStream `<branding>` element for this triple.
    ///
    /// The light variant is proposed for light color schemes and the dark
    /// variant for dark schemes, ready to paste into a metainfo file.
    pub fn appstream_snippet(&self) -> String {
        format!(
            "<branding>\n  \
             <color type=\"primary\" scheme_preference=\"light\">{}</color>\n  \
             <color type=\"primary\" scheme_preference=\"dark\">{}</color>\n\
             </branding>",
            self.light, self.dark
        )
    }
}

/// Branding-color extractor with tunable heuristics.
///
/// Stateless across invocations: each [`extract`](Self::extract) call
/// owns its intermediate data, so one extractor may be used from multiple
/// threads on different images.
#[derive(Debug, Clone, Default)]
pub struct BrandExtractor {
    config: ExtractionConfig,
}

impl BrandExtractor {
    /// Create an extractor with the reference heuristic parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidParameter`] if any field is
    /// outside its documented range.
    pub fn with_config(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Run the full pipeline over a pixel buffer.
    ///
    /// Always produces a structurally valid triple: a buffer with no
    /// sampleable pixels (for example a fully transparent icon) yields
    /// [`BrandColors::fallback`] rather than an error.
    pub fn extract(&self, buffer: &PixelBuffer<'_>) -> BrandColors {
        let samples = sampler::sample_pixels(buffer, &self.config.sampling);
        if samples.is_empty() {
            debug!("no opaque samples, returning fallback triple");
            return BrandColors::fallback();
        }

        let clustering = kmeans::cluster(&samples, &self.config.clustering);
        let Some(primary) = selection::select_primary(&clustering, &self.config.selection) else {
            return BrandColors::fallback();
        };

        let scheme = variants::derive_variants(primary.centroid, &self.config.variants);

        BrandColors {
            primary: to_hex(primary.centroid),
            light: to_hex(scheme.light),
            dark: to_hex(scheme.dark),
        }
    }
}

/// Extract branding colors with the reference heuristic parameters.
///
/// This is the main entry point; see [`BrandExtractor`] for tunable
/// parameters.
pub fn extract_branding(buffer: &PixelBuffer<'_>) -> BrandColors {
    BrandExtractor::new().extract(buffer)
}
