//! Image decoding and downscaling.
//!
//! Decoding happens on Tokio's blocking pool so the caller's task is never
//! stalled by large images.

use std::path::PathBuf;

use eduvision_core::config::ImageConfig;
use eduvision_core::error::{EduError, Result};
use eduvision_core::prepared_image::DEFAULT_MAX_DIMENSION;
use eduvision_core::PreparedImage;
use image::DynamicImage;
use image::imageops::FilterType;

/// Where the raw image bytes come from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Decodes user images and bounds their longest side.
#[derive(Debug, Clone, Copy)]
pub struct ImagePreprocessor {
    max_dimension: u32,
}

impl ImagePreprocessor {
    pub fn new(max_dimension: u32) -> Self {
        Self { max_dimension }
    }

    pub fn from_config(config: &ImageConfig) -> Self {
        Self::new(config.max_dimension)
    }

    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    /// Decodes `source` and scales it down to fit the configured bound.
    ///
    /// Unreadable sources and corrupt or unsupported data yield
    /// [`EduError::Decode`].
    pub async fn decode_and_bound(&self, source: ImageSource) -> Result<PreparedImage> {
        let max_dimension = self.max_dimension;
        tokio::task::spawn_blocking(move || decode_blocking(source, max_dimension))
            .await
            .map_err(|e| EduError::internal(format!("Image decode task failed: {e}")))?
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIMENSION)
    }
}

fn decode_blocking(source: ImageSource, max_dimension: u32) -> Result<PreparedImage> {
    let bytes = match source {
        ImageSource::Path(path) => std::fs::read(&path)
            .map_err(|e| EduError::decode(format!("Cannot read {}: {e}", path.display())))?,
        ImageSource::Bytes(bytes) => bytes,
    };

    let raster = image::load_from_memory(&bytes)?;
    tracing::debug!(
        width = raster.width(),
        height = raster.height(),
        max_dimension,
        "Decoded image"
    );

    Ok(PreparedImage::new(resize_bitmap(raster, max_dimension)))
}

/// Target size for an image that exceeds `max_dimension`, or `None` when it
/// already fits.
///
/// The longer side becomes `max_dimension`; the other side is scaled by the
/// aspect ratio and truncated, but never drops below 1.
pub fn bounded_dimensions(width: u32, height: u32, max_dimension: u32) -> Option<(u32, u32)> {
    if width <= max_dimension && height <= max_dimension {
        return None;
    }

    let ratio = width as f32 / height as f32;
    let (width, height) = if ratio > 1.0 {
        (max_dimension, (max_dimension as f32 / ratio) as u32)
    } else {
        ((max_dimension as f32 * ratio) as u32, max_dimension)
    };

    Some((width.max(1), height.max(1)))
}

/// Downscales `image` so neither side exceeds `max_dimension`. Never upscales.
pub fn resize_bitmap(image: DynamicImage, max_dimension: u32) -> DynamicImage {
    match bounded_dimensions(image.width(), image.height(), max_dimension) {
        Some((width, height)) => {
            tracing::debug!(
                "Resizing image from {}x{} to {}x{}",
                image.width(),
                image.height(),
                width,
                height
            );
            image.resize_exact(width, height, FilterType::Triangle)
        }
        None => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_landscape_is_clamped_on_width() {
        assert_eq!(bounded_dimensions(2000, 1000, 1024), Some((1024, 512)));
    }

    #[test]
    fn test_portrait_is_clamped_on_height() {
        assert_eq!(bounded_dimensions(1000, 2000, 1024), Some((512, 1024)));
    }

    #[test]
    fn test_square_is_clamped_on_both_sides() {
        assert_eq!(bounded_dimensions(3000, 3000, 1024), Some((1024, 1024)));
    }

    #[test]
    fn test_within_bounds_is_untouched() {
        assert_eq!(bounded_dimensions(500, 300, 1024), None);
        assert_eq!(bounded_dimensions(1024, 1024, 1024), None);
    }

    #[test]
    fn test_extreme_aspect_keeps_one_pixel() {
        assert_eq!(bounded_dimensions(5000, 1, 1024), Some((1024, 1)));
    }

    #[test]
    fn test_resize_bitmap() {
        let resized = resize_bitmap(DynamicImage::ImageRgb8(RgbImage::new(2000, 1000)), 1024);
        assert_eq!((resized.width(), resized.height()), (1024, 512));

        let unchanged = resize_bitmap(DynamicImage::ImageRgb8(RgbImage::new(500, 300)), 1024);
        assert_eq!((unchanged.width(), unchanged.height()), (500, 300));
    }

    #[tokio::test]
    async fn test_decode_and_bound_from_bytes() {
        let preprocessor = ImagePreprocessor::new(256);
        let prepared = preprocessor
            .decode_and_bound(ImageSource::Bytes(png_bytes(600, 300)))
            .await
            .unwrap();
        assert_eq!((prepared.width(), prepared.height()), (256, 128));
    }

    #[tokio::test]
    async fn test_decode_and_bound_from_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("diagram.png");
        std::fs::write(&path, png_bytes(40, 20)).unwrap();

        let prepared = ImagePreprocessor::default()
            .decode_and_bound(ImageSource::Path(path))
            .await
            .unwrap();
        assert_eq!((prepared.width(), prepared.height()), (40, 20));
    }

    #[tokio::test]
    async fn test_corrupt_bytes_are_a_decode_error() {
        let err = ImagePreprocessor::default()
            .decode_and_bound(ImageSource::Bytes(b"definitely not an image".to_vec()))
            .await
            .unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_missing_file_is_a_decode_error() {
        let err = ImagePreprocessor::default()
            .decode_and_bound(ImageSource::Path(PathBuf::from("/nonexistent/diagram.png")))
            .await
            .unwrap_err();
        assert!(err.is_decode());
    }
}
