use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbImage};

use crate::error::{PaintError, PaintResult};

/// Raster formats the canvas can be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Gif,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Gif];

    /// Match a file extension, without the dot, case-insensitively.
    pub fn from_extension(ext: &str) -> PaintResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            "gif" => Ok(ExportFormat::Gif),
            _ => Err(PaintError::UnsupportedFormat(format!(".{}", ext))),
        }
    }

    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> PaintResult<Self> {
        let ext = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            PaintError::UnsupportedFormat(format!("'{}' has no file extension", path.display()))
        })?;
        Self::from_extension(ext)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Gif => "gif",
        }
    }

    /// Label used in the save dialog filter list
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG files",
            ExportFormat::Jpeg => "JPG files",
            ExportFormat::Gif => "GIF files",
        }
    }
}

/// Encode a rendered canvas into the bytes of an image file.
pub fn encode(image: &RgbImage, format: ExportFormat, jpeg_quality: u8) -> PaintResult<Vec<u8>> {
    let mut bytes = Vec::new();

    match format {
        ExportFormat::Png => {
            image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        }
        ExportFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality);
            encoder.write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            )?;
        }
        ExportFormat::Gif => {
            image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Gif)?;
        }
    }

    Ok(bytes)
}
