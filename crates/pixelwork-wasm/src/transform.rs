//! WASM bindings for geometric operations.

use crate::types::{to_js_error, JsRaster};
use pixelwork_core::transform;
use wasm_bindgen::prelude::*;

/// Mirror the image left-to-right.
#[wasm_bindgen]
pub fn flip_horizontal(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(transform::flip_horizontal(image.raster()))
}

/// Mirror the image top-to-bottom.
#[wasm_bindgen]
pub fn flip_vertical(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(transform::flip_vertical(image.raster()))
}

/// Resample to `width x height` with bilinear interpolation.
///
/// # Errors
/// Throws if either target dimension is zero or negative.
#[wasm_bindgen]
pub fn resize(image: &JsRaster, width: i32, height: i32) -> Result<JsRaster, JsValue> {
    transform::resize(image.raster(), width, height)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}
