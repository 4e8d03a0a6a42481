//! Color matrix and component extraction WASM bindings.

use crate::types::{mask_for, to_js_error, JsRaster};
use pixelwork_core::color::{self, ColorMatrix, Component};
use wasm_bindgen::prelude::*;

/// Apply a 1x3 or 3x3 color matrix.
///
/// A single row sets all three channels to the same weighted sum; three
/// rows each produce one output channel.
///
/// # Example (TypeScript)
/// ```typescript
/// const swapped = apply_matrix(image, [[0, 0, 1], [0, 1, 0], [1, 0, 0]], undefined, undefined);
/// ```
#[wasm_bindgen]
pub fn apply_matrix(
    image: &JsRaster,
    matrix: JsValue,
    mask: Option<Vec<u8>>,
    split: Option<u8>,
) -> Result<JsRaster, JsValue> {
    let matrix: ColorMatrix = serde_wasm_bindgen::from_value(matrix)
        .map_err(|e| JsValue::from_str(&format!("Invalid color matrix: {}", e)))?;
    let mask = mask_for(image, mask).map_err(to_js_error)?;
    color::apply_matrix(image.raster(), &matrix, mask.as_ref(), split)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Convert to greyscale with BT.709 weights.
#[wasm_bindgen]
pub fn greyscale(
    image: &JsRaster,
    mask: Option<Vec<u8>>,
    split: Option<u8>,
) -> Result<JsRaster, JsValue> {
    let mask = mask_for(image, mask).map_err(to_js_error)?;
    color::greyscale(image.raster(), mask.as_ref(), split)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Apply sepia toning.
#[wasm_bindgen]
pub fn sepia(image: &JsRaster, mask: Option<Vec<u8>>, split: Option<u8>) -> Result<JsRaster, JsValue> {
    let mask = mask_for(image, mask).map_err(to_js_error)?;
    color::sepia(image.raster(), mask.as_ref(), split)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Extract one component: `red`, `green`, `blue`, `luma`, `intensity` or `value`.
///
/// # Errors
/// Throws for an unknown component name.
#[wasm_bindgen]
pub fn extract_component(
    image: &JsRaster,
    component: &str,
    mask: Option<Vec<u8>>,
) -> Result<JsRaster, JsValue> {
    let component: Component = component.parse().map_err(to_js_error)?;
    let mask = mask_for(image, mask).map_err(to_js_error)?;
    color::extract_component(image.raster(), component, mask.as_ref())
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}
