//! Color correction, levels and compression WASM bindings.

use crate::types::{to_js_error, JsRaster};
use pixelwork_core::{compress as core_compress, correction, levels};
use wasm_bindgen::prelude::*;

/// Align the three channels' histogram peaks to remove a color cast.
#[wasm_bindgen]
pub fn color_correct(image: &JsRaster, split: Option<u8>) -> Result<JsRaster, JsValue> {
    correction::color_correct(image.raster(), split)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Remap channels through the quadratic through (black, 0), (mid, 128), (white, 255).
///
/// # Errors
/// Throws unless `0 <= black < mid < white <= 255`.
#[wasm_bindgen]
pub fn levels_adjust(
    image: &JsRaster,
    black: i32,
    mid: i32,
    white: i32,
    split: Option<u8>,
) -> Result<JsRaster, JsValue> {
    levels::levels_adjust(image.raster(), black, mid, white, split)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Haar-wavelet compression suppressing `percent` of the distinct
/// coefficient magnitudes per channel.
#[wasm_bindgen]
pub fn compress(image: &JsRaster, percent: f64) -> Result<JsRaster, JsValue> {
    core_compress::compress(image.raster(), percent)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}
