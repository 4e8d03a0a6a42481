//! WASM-compatible wrapper types for raster data.
//!
//! This module provides JavaScript-friendly types that wrap the core pixelwork
//! types, handling the conversion between Rust and JavaScript data representations.

use pixelwork_core::{OpError, Raster};
use wasm_bindgen::prelude::*;

/// An RGB raster wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsRaster {
    raster: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a raster from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels (at least 1)
    /// * `height` - Image height in pixels (at least 1)
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Throws if the pixel data length is not `width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRaster, JsValue> {
        Raster::new(width, height, pixels)
            .map(Self::from_raster)
            .map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.raster.pixels().len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.raster.pixels().to_vec()
    }

    /// RGB value at column `x`, row `y` as a 3-element array.
    ///
    /// Returns an empty array for coordinates outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Vec<u8> {
        if x >= self.raster.width() || y >= self.raster.height() {
            return Vec::new();
        }
        self.raster.pixel(x, y).to_vec()
    }
}

impl JsRaster {
    pub(crate) fn from_raster(raster: Raster) -> Self {
        Self { raster }
    }

    pub(crate) fn raster(&self) -> &Raster {
        &self.raster
    }
}

/// Build the optional mask raster for `image` from raw RGB bytes.
///
/// The mask must have the image's dimensions.
pub(crate) fn mask_for(image: &JsRaster, mask: Option<Vec<u8>>) -> Result<Option<Raster>, OpError> {
    mask.map(|pixels| Raster::new(image.width(), image.height(), pixels))
        .transpose()
}

/// Convert any displayable error into a JavaScript error string.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
