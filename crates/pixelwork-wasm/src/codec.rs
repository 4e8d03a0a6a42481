//! Image file decode/encode WASM bindings.

use crate::types::{to_js_error, JsRaster};
use pixelwork_core::codec::{self, ImageFormat};
use wasm_bindgen::prelude::*;

/// Decode file bytes into a raster.
///
/// # Arguments
/// * `bytes` - Encoded file contents
/// * `format` - File extension naming the format: `ppm`, `png`, `jpg` or `jpeg`
///
/// JPEG input is rotated per its EXIF orientation.
///
/// # Example (TypeScript)
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes, "jpg");
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8], format: &str) -> Result<JsRaster, JsValue> {
    let format = ImageFormat::from_extension(format).map_err(to_js_error)?;
    codec::decode_bytes(bytes, format)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Encode a raster as file bytes.
///
/// `quality` (1-100) only applies to JPEG. PPM output is plain text (P3).
#[wasm_bindgen]
pub fn encode_image(image: &JsRaster, format: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
    let format = ImageFormat::from_extension(format).map_err(to_js_error)?;
    codec::encode_bytes(image.raster(), format, quality).map_err(to_js_error)
}
