//! Grid sampling of representative pixels
//!
//! Walks the image at a stride chosen so at most roughly `target_grid`
//! samples are taken per axis, which bounds clustering cost independent
//! of image resolution. Near-transparent pixels are skipped so that the
//! empty background of logo-style images does not bias the color choice;
//! a read that cannot be completed is likewise skipped rather than
//! treated as fatal.

use log::debug;
use palette::Srgb;

use crate::buffer::PixelBuffer;
use crate::config::SamplingConfig;

/// Collect RGB samples on a regular grid over the buffer.
///
/// The result preserves scan order (rows top to bottom, pixels left to
/// right), which downstream clustering relies on for determinism. May be
/// empty, e.g. for a fully transparent image; the caller is expected to
/// fall back rather than cluster nothing.
pub fn sample_pixels(buffer: &PixelBuffer<'_>, config: &SamplingConfig) -> Vec<Srgb<u8>> {
    let step = (buffer.width().min(buffer.height()) / config.target_grid).max(1);

    let mut samples = Vec::new();
    let mut y = 0;
    while y < buffer.height() {
        let mut x = 0;
        while x < buffer.width() {
            if let Some((color, alpha)) = buffer.pixel(x, y) {
                if alpha >= config.min_alpha {
                    samples.push(color);
                }
            }
            x += step;
        }
        y += step;
    }

    debug!(
        "sampled {} pixels from {}x{} at stride {}",
        samples.len(),
        buffer.width(),
        buffer.height(),
        step
    );
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_rgba(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        data
    }

    #[test]
    fn test_small_image_samples_every_pixel() {
        let data = solid_rgba(4, 4, [10, 20, 30, 255]);
        let buffer = PixelBuffer::new(4, 4, 16, 4, &data).unwrap();
        let samples = sample_pixels(&buffer, &SamplingConfig::default());
        assert_eq!(samples.len(), 16);
        assert!(samples.iter().all(|s| *s == Srgb::new(10u8, 20, 30)));
    }

    #[test]
    fn test_narrow_image_stride_clamps_to_one() {
        // min(600, 2) / 60 = 0, so the stride clamps to 1 and every pixel is visited
        let data = solid_rgba(600, 2, [1, 2, 3, 255]);
        let buffer = PixelBuffer::new(600, 2, 2400, 4, &data).unwrap();
        let samples = sample_pixels(&buffer, &SamplingConfig::default());
        assert_eq!(samples.len(), 1200);
    }

    #[test]
    fn test_large_square_is_capped_near_target_grid() {
        let data = solid_rgba(120, 120, [9, 9, 9, 255]);
        let buffer = PixelBuffer::new(120, 120, 480, 4, &data).unwrap();
        let config = SamplingConfig {
            target_grid: 60,
            ..SamplingConfig::default()
        };
        let samples = sample_pixels(&buffer, &config);
        // stride 2 over 120 pixels -> exactly 60 per axis
        assert_eq!(samples.len(), 3600);
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let mut data = solid_rgba(3, 1, [50, 50, 50, 0]);
        // Middle pixel opaque
        data[7] = 255;
        let buffer = PixelBuffer::new(3, 1, 12, 4, &data).unwrap();
        let samples = sample_pixels(&buffer, &SamplingConfig::default());
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_alpha_threshold_boundary() {
        let config = SamplingConfig::default();

        let below = solid_rgba(1, 1, [1, 2, 3, 9]);
        let buffer = PixelBuffer::new(1, 1, 4, 4, &below).unwrap();
        assert!(sample_pixels(&buffer, &config).is_empty());

        let at = solid_rgba(1, 1, [1, 2, 3, 10]);
        let buffer = PixelBuffer::new(1, 1, 4, 4, &at).unwrap();
        assert_eq!(sample_pixels(&buffer, &config).len(), 1);
    }

    #[test]
    fn test_rgb_buffer_has_no_alpha_skipping() {
        let data = vec![7u8; 3 * 3 * 3];
        let buffer = PixelBuffer::new(3, 3, 9, 3, &data).unwrap();
        let samples = sample_pixels(&buffer, &SamplingConfig::default());
        assert_eq!(samples.len(), 9);
    }

    #[test]
    fn test_fully_transparent_yields_empty() {
        let data = solid_rgba(10, 10, [255, 0, 0, 0]);
        let buffer = PixelBuffer::new(10, 10, 40, 4, &data).unwrap();
        assert!(sample_pixels(&buffer, &SamplingConfig::default()).is_empty());
    }
}
