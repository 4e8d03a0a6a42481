//! Reading and writing rasters as image files.
//!
//! Three formats are supported:
//! - **PPM**: plain (P3) and raw (P6) pixmaps, with `#` comments, are read;
//!   output is always the plain P3 form
//! - **PNG**: lossless; alpha is dropped and grey expanded to RGB
//! - **JPEG**: lossy; EXIF orientation is applied on decode so the raster
//!   is upright
//!
//! The format of a path is chosen from its extension.
//!
//! # Examples
//!
//! ```ignore
//! use pixelwork_core::codec;
//!
//! let image = codec::decode("photo.jpg".as_ref()).unwrap();
//! codec::encode(&image, "photo.ppm".as_ref()).unwrap();
//! ```

mod jpeg;
mod pnm;

pub use image::metadata::Orientation;
pub use jpeg::get_orientation;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::DEFAULT_JPEG_QUALITY;
use crate::Raster;

/// Errors that can occur while decoding or encoding images.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The extension does not name a supported format.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The bytes could not be decoded.
    #[error("Corrupted image data: {0}")]
    CorruptedData(String),

    /// Encoding failed.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Reading or writing the file failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Ppm,
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Pick a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Result<Self, CodecError> {
        match ext.to_ascii_lowercase().as_str() {
            "ppm" | "pnm" => Ok(ImageFormat::Ppm),
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            _ => Err(CodecError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Pick a format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| CodecError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// Canonical extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Decode an in-memory image.
///
/// # Errors
/// Returns `CodecError::CorruptedData` if the bytes are not a valid image of
/// `format`.
pub fn decode_bytes(bytes: &[u8], format: ImageFormat) -> Result<Raster, CodecError> {
    log::debug!("decoding {} bytes as {}", bytes.len(), format);
    let rgb = match format {
        ImageFormat::Ppm => pnm::decode(bytes)?,
        ImageFormat::Png => image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
            .map_err(|e| CodecError::CorruptedData(e.to_string()))?
            .into_rgb8(),
        ImageFormat::Jpeg => jpeg::decode(bytes)?,
    };
    Raster::from_rgb_image(rgb).map_err(|e| CodecError::CorruptedData(e.to_string()))
}

/// Encode a raster in memory.
///
/// `quality` (1-100) only affects JPEG output.
pub fn encode_bytes(
    raster: &Raster,
    format: ImageFormat,
    quality: u8,
) -> Result<Vec<u8>, CodecError> {
    log::debug!(
        "encoding {}x{} image as {}",
        raster.width(),
        raster.height(),
        format
    );
    match format {
        ImageFormat::Ppm => pnm::encode(raster),
        ImageFormat::Png => encode_png(raster),
        ImageFormat::Jpeg => jpeg::encode(raster, quality),
    }
}

/// Read and decode the image at `path`.
pub fn decode(path: &Path) -> Result<Raster, CodecError> {
    let format = ImageFormat::from_path(path)?;
    let bytes = std::fs::read(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_bytes(&bytes, format)
}

/// Encode `raster` to `path` using the default JPEG quality.
pub fn encode(raster: &Raster, path: &Path) -> Result<(), CodecError> {
    encode_with_quality(raster, path, DEFAULT_JPEG_QUALITY)
}

/// Encode `raster` to `path`.
pub fn encode_with_quality(raster: &Raster, path: &Path, quality: u8) -> Result<(), CodecError> {
    let format = ImageFormat::from_path(path)?;
    let bytes = encode_bytes(raster, format, quality)?;
    std::fs::write(path, bytes).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn encode_png(raster: &Raster) -> Result<Vec<u8>, CodecError> {
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            raster.pixels(),
            raster.width(),
            raster.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CodecError::EncodingFailed(e.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> Raster {
        Raster::from_fn(5, 4, |x, y| [(x * 50) as u8, (y * 60) as u8, 128]).unwrap()
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ImageFormat::from_extension("PPM").unwrap(), ImageFormat::Ppm);
        assert_eq!(ImageFormat::from_extension("png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("JPEG").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("jpg").unwrap(), ImageFormat::Jpeg);
        assert!(matches!(
            ImageFormat::from_extension("gif"),
            Err(CodecError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ImageFormat::from_path(Path::new("/tmp/a.b/photo.jpeg")).unwrap(),
            ImageFormat::Jpeg
        );
        assert!(ImageFormat::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_png_bytes_round_trip() {
        let img = test_image();
        let bytes = encode_bytes(&img, ImageFormat::Png, 90).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(decode_bytes(&bytes, ImageFormat::Png).unwrap(), img);
    }

    #[test]
    fn test_corrupted_png() {
        assert!(matches!(
            decode_bytes(b"not an image", ImageFormat::Png),
            Err(CodecError::CorruptedData(_))
        ));
    }

    #[test]
    fn test_file_round_trip_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let img = test_image();
        for name in ["out.ppm", "out.png"] {
            let path = dir.path().join(name);
            encode(&img, &path).unwrap();
            assert_eq!(decode(&path).unwrap(), img, "{} round trip", name);
        }
    }

    #[test]
    fn test_file_round_trip_jpeg_keeps_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let img = Raster::filled(16, 8, [120, 120, 120]).unwrap();
        encode_with_quality(&img, &path, 95).unwrap();
        let back = decode(&path).unwrap();
        assert_eq!(back.dimensions(), (16, 8));
        assert!(back.pixels().iter().all(|&v| (v as i32 - 120).abs() <= 3));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            decode(&dir.path().join("absent.png")),
            Err(CodecError::Io { .. })
        ));
    }
}
