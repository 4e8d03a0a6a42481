//! Portable pixmap reading and plain (P3) writing.

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use super::CodecError;
use crate::Raster;

/// Decode a P3 or P6 pixmap.
pub(super) fn decode(bytes: &[u8]) -> Result<RgbImage, CodecError> {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Pnm)
        .map(|img| img.into_rgb8())
        .map_err(|e| CodecError::CorruptedData(e.to_string()))
}

/// Encode as a plain-text P3 pixmap with maxval 255.
pub(super) fn encode(raster: &Raster) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Vec::new();
    PnmEncoder::new(&mut buffer)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Ascii))
        .write_image(
            raster.pixels(),
            raster.width(),
            raster.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CodecError::EncodingFailed(e.to_string()))?;
    Ok(buffer)
}
