//! PNG and JPEG encoding for the editor's save step.
//!
//! Encoding follows what a browser canvas does when serialized: JPEG at
//! quality 0.92 with transparent pixels composited onto black, PNG
//! lossless, and any other requested type falls back to PNG.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::io::Cursor;
use thiserror::Error;

use crate::decode::DecodedImage;

/// JPEG quality used when no explicit quality is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying codec failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Output formats the encoder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Lossless PNG, keeps alpha.
    #[default]
    Png,
    /// Lossy JPEG, alpha composited onto black.
    Jpeg,
}

impl OutputFormat {
    /// Resolve a requested MIME type to an encodable format.
    ///
    /// Unknown or unsupported types fall back to PNG.
    pub fn from_mime(mime_type: &str) -> Self {
        match mime_type.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Self::Jpeg,
            _ => Self::Png,
        }
    }

    /// MIME type actually produced by this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// An encoded image together with the format that was produced.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
}

/// Encode an RGBA surface for the requested MIME type.
///
/// # Errors
///
/// Returns an error if the image is empty, its buffer does not match its
/// dimensions, or the codec fails.
pub fn encode_image(image: &DecodedImage, mime_type: &str) -> Result<EncodedImage, EncodeError> {
    let format = OutputFormat::from_mime(mime_type);
    let bytes = match format {
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height)?,
        OutputFormat::Jpeg => encode_jpeg(
            &image.pixels,
            image.width,
            image.height,
            DEFAULT_JPEG_QUALITY,
        )?,
    };
    Ok(EncodedImage { bytes, format })
}

/// Encode RGBA pixel data to PNG bytes.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode RGBA pixel data to JPEG bytes.
///
/// `quality` is clamped to 1-100.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let rgb = flatten_onto_black(pixels);
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn validate(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

/// Drop alpha by compositing each pixel onto opaque black.
fn flatten_onto_black(pixels: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(pixels.len() / 4 * 3);
    for px in pixels.chunks_exact(4) {
        let alpha = px[3] as u32;
        for &channel in &px[..3] {
            rgb.push(((channel as u32 * alpha + 127) / 255) as u8);
        }
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[128, 128, 128, 255]);
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_output_format_from_mime() {
        assert_eq!(OutputFormat::from_mime("image/jpeg"), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_mime("IMAGE/JPG"), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_mime("image/png"), OutputFormat::Png);
        assert_eq!(OutputFormat::from_mime("image/webp"), OutputFormat::Png);
        assert_eq!(OutputFormat::from_mime(""), OutputFormat::Png);
    }

    #[test]
    fn test_encode_png_magic() {
        let img = gray(10, 10);
        let encoded = encode_image(&img, "image/png").unwrap();
        assert_eq!(encoded.format, OutputFormat::Png);
        assert_eq!(&encoded.bytes[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let img = gray(16, 8);
        let encoded = encode_image(&img, "image/jpeg").unwrap();
        assert_eq!(encoded.format, OutputFormat::Jpeg);

        let len = encoded.bytes.len();
        assert_eq!(&encoded.bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&encoded.bytes[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_unsupported_mime_falls_back_to_png() {
        let encoded = encode_image(&gray(4, 4), "image/gif").unwrap();
        assert_eq!(encoded.format.mime_type(), "image/png");
    }

    #[test]
    fn test_encode_zero_dimensions() {
        let result = encode_png(&[], 0, 10);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));

        let result = encode_jpeg(&[], 10, 0, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_wrong_buffer_length() {
        let result = encode_png(&[0u8; 10 * 10 * 3], 10, 10);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 400,
                actual: 300
            })
        ));
    }

    #[test]
    fn test_jpeg_quality_clamping() {
        let img = gray(8, 8);
        assert!(encode_jpeg(&img.pixels, 8, 8, 0).is_ok());
        assert!(encode_jpeg(&img.pixels, 8, 8, 255).is_ok());
    }

    #[test]
    fn test_flatten_onto_black() {
        let rgb = flatten_onto_black(&[200, 100, 50, 255, 200, 100, 50, 0]);
        assert_eq!(rgb, vec![200, 100, 50, 0, 0, 0]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
