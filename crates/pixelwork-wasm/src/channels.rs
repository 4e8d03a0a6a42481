//! Channel split and combine WASM bindings.

use crate::types::{to_js_error, JsRaster};
use pixelwork_core::channels;
use wasm_bindgen::prelude::*;

/// Split into three images (red, green, blue), each keeping one channel.
#[wasm_bindgen]
pub fn split_rgb(image: &JsRaster) -> Vec<JsRaster> {
    channels::split_rgb(image.raster())
        .into_iter()
        .map(JsRaster::from_raster)
        .collect()
}

/// Sum three same-sized images channel-wise, clamping at 255.
///
/// # Errors
/// Throws if the images differ in size.
#[wasm_bindgen]
pub fn combine_rgb(red: &JsRaster, green: &JsRaster, blue: &JsRaster) -> Result<JsRaster, JsValue> {
    channels::combine_rgb(red.raster(), green.raster(), blue.raster())
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelwork_core::Raster;

    #[test]
    fn test_split_and_combine() {
        let image = JsRaster::from_raster(Raster::filled(2, 1, [10, 20, 30]).unwrap());
        let parts = split_rgb(&image);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].pixel(0, 0), vec![0, 20, 0]);
        let back = combine_rgb(&parts[0], &parts[1], &parts[2]).unwrap();
        assert_eq!(back.pixels(), image.pixels());
    }
}
