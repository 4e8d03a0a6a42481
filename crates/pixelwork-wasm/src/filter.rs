//! Convolution and brightness WASM bindings.

use crate::types::{mask_for, to_js_error, JsRaster};
use pixelwork_core::convolution::{self, Kernel};
use wasm_bindgen::prelude::*;

/// Convolve an image with a custom kernel.
///
/// # Arguments
/// * `image` - Source image
/// * `kernel` - Square matrix with an odd side, as an array of rows
/// * `mask` - Optional RGB mask bytes; black pixels are convolved
/// * `split` - Optional percentage of columns (from the left) to convolve
///
/// # Example (TypeScript)
/// ```typescript
/// const edges = apply_kernel(image, [[0, -1, 0], [-1, 4, -1], [0, -1, 0]], undefined, undefined);
/// ```
#[wasm_bindgen]
pub fn apply_kernel(
    image: &JsRaster,
    kernel: JsValue,
    mask: Option<Vec<u8>>,
    split: Option<u8>,
) -> Result<JsRaster, JsValue> {
    let kernel: Kernel = serde_wasm_bindgen::from_value(kernel)
        .map_err(|e| JsValue::from_str(&format!("Invalid kernel: {}", e)))?;
    let mask = mask_for(image, mask).map_err(to_js_error)?;
    convolution::apply_kernel(image.raster(), &kernel, mask.as_ref(), split)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Blur with the standard 3x3 Gaussian kernel.
#[wasm_bindgen]
pub fn blur(image: &JsRaster, mask: Option<Vec<u8>>, split: Option<u8>) -> Result<JsRaster, JsValue> {
    let mask = mask_for(image, mask).map_err(to_js_error)?;
    convolution::blur(image.raster(), mask.as_ref(), split)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Sharpen with the standard 5x5 kernel.
#[wasm_bindgen]
pub fn sharpen(
    image: &JsRaster,
    mask: Option<Vec<u8>>,
    split: Option<u8>,
) -> Result<JsRaster, JsValue> {
    let mask = mask_for(image, mask).map_err(to_js_error)?;
    convolution::sharpen(image.raster(), mask.as_ref(), split)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Add `delta` to every channel of every pixel, clamping to 0-255.
#[wasm_bindgen]
pub fn adjust_brightness(image: &JsRaster, delta: i32) -> JsRaster {
    JsRaster::from_raster(convolution::adjust_brightness(image.raster(), delta))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use pixelwork_core::Raster;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn image() -> JsRaster {
        JsRaster::from_raster(Raster::filled(3, 3, [60, 60, 60]).unwrap())
    }

    #[wasm_bindgen_test]
    fn test_identity_kernel_from_js() {
        let kernel = serde_wasm_bindgen::to_value(&vec![vec![1.0]]).unwrap();
        let out = apply_kernel(&image(), kernel, None, None).unwrap();
        assert_eq!(out.pixels(), image().pixels());
    }

    #[wasm_bindgen_test]
    fn test_even_kernel_rejected() {
        let kernel = serde_wasm_bindgen::to_value(&vec![vec![0.25; 2]; 2]).unwrap();
        assert!(apply_kernel(&image(), kernel, None, None).is_err());
    }

    #[wasm_bindgen_test]
    fn test_invalid_split_rejected() {
        assert!(blur(&image(), None, Some(101)).is_err());
    }

    #[wasm_bindgen_test]
    fn test_wrong_mask_size_rejected() {
        assert!(blur(&image(), Some(vec![0; 3]), None).is_err());
    }
}
