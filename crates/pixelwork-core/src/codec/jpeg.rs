//! JPEG decoding with EXIF orientation handling, and quality-controlled
//! encoding.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::codecs::jpeg::JpegEncoder;
use image::metadata::Orientation;
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbImage};

use super::CodecError;
use crate::Raster;

/// Decode JPEG bytes, rotating and flipping per the EXIF orientation.
pub(super) fn decode(bytes: &[u8]) -> Result<RgbImage, CodecError> {
    let orientation = get_orientation(bytes);

    let mut img = ImageReader::with_format(Cursor::new(bytes), image::ImageFormat::Jpeg)
        .decode()
        .map_err(|e| CodecError::CorruptedData(e.to_string()))?;

    if orientation != Orientation::NoTransforms {
        log::debug!("applying EXIF orientation {:?}", orientation);
        img.apply_orientation(orientation);
    }
    Ok(img.into_rgb8())
}

/// Encode at `quality`, clamped to 1-100.
pub(super) fn encode(raster: &Raster, quality: u8) -> Result<Vec<u8>, CodecError> {
    let quality = quality.clamp(1, 100);
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            raster.pixels(),
            raster.width(),
            raster.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CodecError::EncodingFailed(e.to_string()))?;
    Ok(buffer)
}

/// Read the EXIF orientation from JPEG bytes.
///
/// Returns `Orientation::NoTransforms` if there is no EXIF data, no
/// orientation tag, or an out-of-range value.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .and_then(|value| u8::try_from(value).ok())
        .and_then(Orientation::from_exif)
        .unwrap_or(Orientation::NoTransforms)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splice an APP1 EXIF segment carrying only an orientation tag after
    /// the SOI marker.
    fn with_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
        let [hi, lo] = orientation.to_be_bytes();
        #[rustfmt::skip]
        let tiff: [u8; 26] = [
            b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08,
            0x00, 0x01,
            0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, hi, lo, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ];
        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&[0xFF, 0xE1, 0x00, 34]);
        out.extend_from_slice(b"Exif\0\0");
        out.extend_from_slice(&tiff);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    fn test_jpeg(width: u32, height: u32) -> Vec<u8> {
        let raster = Raster::filled(width, height, [200, 100, 50]).unwrap();
        encode(&raster, 90).unwrap()
    }

    #[test]
    fn test_encode_magic_bytes() {
        let jpeg = test_jpeg(8, 8);
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_quality_affects_size() {
        let raster = Raster::from_fn(64, 64, |x, y| [(x * 4) as u8, (y * 4) as u8, ((x ^ y) * 4) as u8])
            .unwrap();
        let high = encode(&raster, 100).unwrap();
        let low = encode(&raster, 10).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn test_decode_without_exif() {
        let jpeg = test_jpeg(6, 3);
        assert_eq!(get_orientation(&jpeg), Orientation::NoTransforms);
        let img = decode(&jpeg).unwrap();
        assert_eq!(img.dimensions(), (6, 3));
    }

    #[test]
    fn test_decode_applies_rotation() {
        let jpeg = with_orientation(&test_jpeg(6, 3), 6);
        assert_eq!(get_orientation(&jpeg), Orientation::Rotate90);
        let img = decode(&jpeg).unwrap();
        assert_eq!(img.dimensions(), (3, 6));
    }

    #[test]
    fn test_decode_applies_flip_keeps_size() {
        let jpeg = with_orientation(&test_jpeg(6, 3), 2);
        assert_eq!(get_orientation(&jpeg), Orientation::FlipHorizontal);
        assert_eq!(decode(&jpeg).unwrap().dimensions(), (6, 3));
    }

    #[test]
    fn test_out_of_range_orientation_ignored() {
        let jpeg = with_orientation(&test_jpeg(6, 3), 99);
        assert_eq!(get_orientation(&jpeg), Orientation::NoTransforms);
        assert_eq!(decode(&jpeg).unwrap().dimensions(), (6, 3));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode(&[0xFF, 0xD8, 0x00, 0x01]),
            Err(CodecError::CorruptedData(_))
        ));
    }
}
