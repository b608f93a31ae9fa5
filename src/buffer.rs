//! Pixel-buffer accessor shared with the decoding layer
//!
//! The pipeline never decodes image files itself; the surrounding
//! application hands it an already-decoded buffer described by width,
//! height, row stride, channel count, and raw bytes. This module validates
//! that description once at construction, so downstream stages can read
//! pixels without treating every access as a potential fault: a read that
//! still falls outside the data (possible with padded strides) yields
//! `None` and the sample is simply skipped.

use palette::Srgb;

use crate::error::{ExtractionError, Result};

/// Channel layouts accepted from the decoding layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// Three bytes per pixel, no alpha
    Rgb,
    /// Four bytes per pixel, alpha last
    Rgba,
}

impl ChannelLayout {
    /// Bytes per pixel for this layout
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    fn from_channel_count(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(ChannelLayout::Rgb),
            4 => Some(ChannelLayout::Rgba),
            _ => None,
        }
    }
}

/// Borrowed view of a decoded raster image.
///
/// Geometry is validated at construction; the buffer itself is never
/// copied or mutated.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    rowstride: usize,
    layout: ChannelLayout,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Create a buffer view over raw decoded bytes.
    ///
    /// # Arguments
    ///
    /// * `width`, `height` - image dimensions in pixels, both > 0
    /// * `rowstride` - bytes per row, at least `width * channels`
    /// * `channels` - 3 (RGB) or 4 (RGBA)
    /// * `data` - at least `height * rowstride` bytes
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidBuffer`] if the geometry cannot
    /// describe a real image.
    pub fn new(
        width: u32,
        height: u32,
        rowstride: usize,
        channels: u8,
        data: &'a [u8],
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ExtractionError::invalid_buffer(format!(
                "zero dimension: {}x{}",
                width, height
            )));
        }
        let layout = ChannelLayout::from_channel_count(channels).ok_or_else(|| {
            ExtractionError::invalid_buffer(format!("unsupported channel count {}", channels))
        })?;
        let min_stride = width as usize * layout.bytes_per_pixel();
        if rowstride < min_stride {
            return Err(ExtractionError::invalid_buffer(format!(
                "rowstride {} < width * channels {}",
                rowstride, min_stride
            )));
        }
        let required = height as usize * rowstride;
        if data.len() < required {
            return Err(ExtractionError::invalid_buffer(format!(
                "data length {} < height * rowstride {}",
                data.len(),
                required
            )));
        }
        Ok(Self {
            width,
            height,
            rowstride,
            layout,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout of the underlying bytes
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Read one pixel, returning its color and alpha (255 for RGB buffers).
    ///
    /// Returns `None` for coordinates outside the image or reads that fall
    /// outside the data slice; callers treat that as a skipped sample.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(Srgb<u8>, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.rowstride + x as usize * self.layout.bytes_per_pixel();
        let bytes = self.data.get(offset..offset + self.layout.bytes_per_pixel())?;
        let alpha = match self.layout {
            ChannelLayout::Rgb => u8::MAX,
            ChannelLayout::Rgba => bytes[3],
        };
        Some((Srgb::new(bytes[0], bytes[1], bytes[2]), alpha))
    }
}

#[cfg(feature = "image")]
impl<'a> PixelBuffer<'a> {
    /// Borrow a decoded [`image::RgbaImage`] as a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidBuffer`] for empty (0x0) images.
    pub fn from_rgba_image(image: &'a image::RgbaImage) -> Result<Self> {
        Self::new(
            image.width(),
            image.height(),
            image.width() as usize * 4,
            4,
            image.as_raw(),
        )
    }
}
