//! Error types for the brand_colors library

use thiserror::Error;

/// Result type alias for brand_colors operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Error types for branding-color extraction
///
/// The pipeline itself never fails: malformed per-pixel reads are skipped
/// and an empty sample set degrades to the fixed fallback triple. Errors
/// are reserved for inputs that cannot be interpreted at all — impossible
/// buffer geometry, unparseable hex strings, out-of-range configuration.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Pixel buffer geometry is internally inconsistent
    #[error("Invalid pixel buffer: {reason}")]
    InvalidBuffer { reason: String },

    /// Hex color string could not be parsed as #RRGGBB
    #[error("Invalid hex color {value:?}")]
    InvalidHexColor {
        value: String,
        #[source]
        source: palette::rgb::FromHexError,
    },

    /// Configuration value outside its documented range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration I/O error: {message}")]
    ConfigIoError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ExtractionError {
    /// Create an invalid-buffer error with context
    pub fn invalid_buffer(reason: impl Into<String>) -> Self {
        Self::InvalidBuffer {
            reason: reason.into(),
        }
    }

    /// Create an invalid-parameter error for a configuration field
    pub fn invalid_parameter(parameter: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter,
            value: value.to_string(),
        }
    }

    /// Create a configuration I/O error with context
    pub fn config_io<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigIoError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
