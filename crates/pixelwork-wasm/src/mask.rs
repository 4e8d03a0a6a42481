//! Mask WASM bindings.
//!
//! Masks are ordinary rasters; pass `mask.pixels()` as the `mask` argument
//! of any mask-aware operation.

use crate::types::{to_js_error, JsRaster};
use wasm_bindgen::prelude::*;

/// Create a mask the size of `image` selecting `[x, x + width) x [y, y + height)`.
///
/// Selected pixels are black, everything else white.
///
/// # Example (TypeScript)
/// ```typescript
/// const mask = create_mask(image, 10, 10, 64, 32);
/// const result = blur(image, mask.pixels(), undefined);
/// ```
///
/// # Errors
/// Throws if any value is negative or the rectangle leaves the image.
#[wasm_bindgen]
pub fn create_mask(
    image: &JsRaster,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> Result<JsRaster, JsValue> {
    pixelwork_core::create_mask(image.raster(), x, y, width, height)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use pixelwork_core::Raster;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_out_of_bounds_rejected() {
        let image = JsRaster::from_raster(Raster::filled(4, 4, [9, 9, 9]).unwrap());
        assert!(create_mask(&image, 3, 0, 2, 1).is_err());
        assert!(create_mask(&image, -1, 0, 1, 1).is_err());
    }
}
