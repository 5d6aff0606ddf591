use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use crate::error::{PaintError, PaintResult};

/// Formats accepted by [`decode_stretched`].
pub const IMPORT_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
];

/// File extensions offered by the import dialog
pub const IMPORT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff"];

/// An imported raster, stretched to the canvas size it was imported at.
///
/// The background is not part of the document. It sits above every shape
/// whose serial is below `watermark` and below everything painted later.
/// A session holds at most one: a new import replaces the previous image
/// rather than stacking on top of it.
#[derive(Clone)]
pub struct ImportedBackground {
    image: RgbaImage,
    watermark: u64,
    generation: u64,
}

// RgbaImage's Debug would dump every pixel
impl std::fmt::Debug for ImportedBackground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportedBackground")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("watermark", &self.watermark)
            .field("generation", &self.generation)
            .finish()
    }
}

impl ImportedBackground {
    pub fn new(image: RgbaImage, watermark: u64, generation: u64) -> Self {
        Self {
            image,
            watermark,
            generation,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Shapes with a serial below this were painted before the import
    pub fn watermark(&self) -> u64 {
        self.watermark
    }

    /// Changes every time a new background is imported
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Decode `bytes` and stretch the result to exactly `width` x `height`,
/// ignoring the source aspect ratio.
pub fn decode_stretched(bytes: &[u8], width: u32, height: u32) -> PaintResult<RgbaImage> {
    let format = image::guess_format(bytes)
        .map_err(|e| PaintError::Decode(format!("unrecognized image data: {}", e)))?;

    if !IMPORT_FORMATS.contains(&format) {
        return Err(PaintError::Decode(format!(
            "{:?} images cannot be imported",
            format
        )));
    }

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| PaintError::Decode(e.to_string()))?;
    log::debug!(
        "Decoded {:?} image: {}x{}",
        format,
        decoded.width(),
        decoded.height()
    );

    let rgba = decoded.to_rgba8();
    if rgba.width() == width && rgba.height() == height {
        return Ok(rgba);
    }

    Ok(imageops::resize(&rgba, width, height, FilterType::Lanczos3))
}
