//! Prepared (decoded and bounded) images.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

use crate::error::{EduError, Result};

/// Default bound for the longest side of an uploaded image.
pub const DEFAULT_MAX_DIMENSION: u32 = 1024;

/// A decoded raster whose longest side is within the configured bound.
///
/// Lives for the duration of one request and is never persisted.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    raster: DynamicImage,
}

impl PreparedImage {
    pub fn new(raster: DynamicImage) -> Self {
        Self { raster }
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn raster(&self) -> &DynamicImage {
        &self.raster
    }

    pub fn into_raster(self) -> DynamicImage {
        self.raster
    }

    /// MIME type of the bytes produced by [`encode_png`](Self::encode_png).
    pub fn mime_type(&self) -> &'static str {
        "image/png"
    }

    /// Encodes the raster for upload.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.raster
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| EduError::Encode(e.to_string()))?;
        Ok(bytes)
    }
}
