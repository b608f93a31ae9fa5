//! Color space conversion and contrast evaluation
//!
//! This module handles RGB/HSL conversions, hex formatting and parsing,
//! and WCAG relative-luminance contrast scoring.

pub mod contrast;
pub mod space;

pub use contrast::{contrast_ratio, relative_luminance};
pub use space::Hsl;
