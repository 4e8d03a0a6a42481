//! Operation and pipeline WASM bindings.
//!
//! Operations are plain objects tagged by `op`, for example
//! `{ op: "levels", black: 10, mid: 128, white: 240 }` or
//! `{ op: "blur", split: 50 }`.

use crate::types::{mask_for, to_js_error, JsRaster};
use pixelwork_core::{Operation, Pipeline};
use wasm_bindgen::prelude::*;

/// Apply one serialized operation.
///
/// # Example (TypeScript)
/// ```typescript
/// const out = apply_operation(image, { op: "resize", width: 320, height: 240 }, undefined);
/// ```
#[wasm_bindgen]
pub fn apply_operation(
    image: &JsRaster,
    operation: JsValue,
    mask: Option<Vec<u8>>,
) -> Result<JsRaster, JsValue> {
    let operation: Operation = serde_wasm_bindgen::from_value(operation)
        .map_err(|e| JsValue::from_str(&format!("Invalid operation: {}", e)))?;
    let mask = mask_for(image, mask).map_err(to_js_error)?;
    operation
        .apply(image.raster(), mask.as_ref())
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Apply an array of serialized operations in order.
///
/// Stops at, and throws, the first error.
#[wasm_bindgen]
pub fn run_pipeline(
    image: &JsRaster,
    operations: JsValue,
    mask: Option<Vec<u8>>,
) -> Result<JsRaster, JsValue> {
    let operations: Vec<Operation> = serde_wasm_bindgen::from_value(operations)
        .map_err(|e| JsValue::from_str(&format!("Invalid pipeline: {}", e)))?;
    let mask = mask_for(image, mask).map_err(to_js_error)?;
    Pipeline::new(operations)
        .run(image.raster(), mask.as_ref())
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}
