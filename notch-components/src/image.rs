//! Decoded raster images for widget content.
//!
//! ## Usage
//!
//! Decode a thumb image once, outside the frame loop, with
//! [`crate::slider::SliderArgs::thumb_image_from`] or
//! [`load_image_from_source`].
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

/// Where an image comes from.
#[derive(Clone, PartialEq, Debug)]
pub enum ImageSource {
    /// A file on disk.
    Path(String),
    /// Encoded bytes already in memory.
    Bytes(Arc<[u8]>),
}

/// Why an image could not be turned into [`ImageData`].
#[derive(Debug, Error)]
pub enum ImageError {
    /// The file could not be read or the bytes could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    /// The image has no pixels.
    #[error("image is empty ({width}x{height})")]
    Empty {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// The pixel buffer does not hold `width * height` RGBA8 pixels.
    #[error("expected {expected} bytes of RGBA8 pixels, got {actual}")]
    BufferSize {
        /// `width * height * 4`.
        expected: usize,
        /// Length of the buffer.
        actual: usize,
    },
}

/// Decoded RGBA8 pixels, row-major.
#[derive(Clone, PartialEq, Debug)]
pub struct ImageData {
    pixels: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl ImageData {
    /// Wraps an RGBA8 buffer after checking it matches the dimensions.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::Empty { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|count| count.checked_mul(4))
            .unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels: pixels.into(),
            width,
            height,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 buffer, `width * height * 4` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA8 value at `(x, y)`, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * 4;
        let rgba = self.pixels.get(start..start + 4)?;
        Some([rgba[0], rgba[1], rgba[2], rgba[3]])
    }
}

/// Decodes `source` into RGBA8 pixels.
///
/// Call this outside the frame loop; decoding on every frame is expensive.
pub fn load_image_from_source(source: &ImageSource) -> Result<ImageData, ImageError> {
    let decoded = match source {
        ImageSource::Path(path) => image::open(path)?,
        ImageSource::Bytes(bytes) => image::load_from_memory(bytes)?,
    }
    .into_rgba8();
    let (width, height) = decoded.dimensions();
    debug!(width, height, "decoded image");
    ImageData::from_rgba8(width, height, decoded.into_raw())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = RgbaImage::new(width, height);
        pixels.put_pixel(width - 1, height - 1, Rgba([52, 52, 52, 255]));
        let mut encoded = Vec::new();
        pixels
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .expect("encode png");
        encoded
    }

    #[test]
    fn test_decode_png_bytes() {
        let image = load_image_from_source(&ImageSource::Bytes(encoded_png(2, 3).into()))
            .expect("decode png");
        assert_eq!((image.width(), image.height()), (2, 3));
        assert_eq!(image.pixels().len(), 2 * 3 * 4);
        assert_eq!(image.pixel(1, 2), Some([52, 52, 52, 255]));
        assert_eq!(image.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(image.pixel(2, 0), None);
    }

    #[test]
    fn test_rgba8_buffer_must_match_dimensions() {
        let short = ImageData::from_rgba8(2, 2, vec![0; 15]);
        assert!(matches!(
            short,
            Err(ImageError::BufferSize {
                expected: 16,
                actual: 15
            })
        ));
        let empty = ImageData::from_rgba8(0, 4, Vec::new());
        assert!(matches!(empty, Err(ImageError::Empty { width: 0, height: 4 })));
        assert!(ImageData::from_rgba8(1, 1, vec![1, 2, 3, 4]).is_ok());
    }

    #[test]
    fn test_invalid_bytes_error() {
        let result = load_image_from_source(&ImageSource::Bytes(Arc::from(&b"not an image"[..])));
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_missing_path_error() {
        let result = load_image_from_source(&ImageSource::Path("/nonexistent/thumb.png".into()));
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }
}
