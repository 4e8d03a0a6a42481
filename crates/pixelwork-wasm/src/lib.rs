//! Pixelwork WASM - WebAssembly bindings for the pixelwork engine
//!
//! This crate exposes every pixelwork-core operation to JavaScript/TypeScript.
//! Functions convert their arguments, forward to the core crate and turn
//! errors into thrown strings. No image processing happens here.
//!
//! # Module Structure
//!
//! - `types` - `JsRaster`, the raster wrapper passed to and returned from every call
//! - `filter` - Kernel convolution, blur, sharpen and brightness
//! - `color` - Color matrices and component extraction
//! - `transform` - Flips and resize
//! - `mask` - Rectangular mask creation
//! - `histogram` - Histogram counts and chart rendering
//! - `effects` - Color correction, levels and compression
//! - `channels` - Channel split and combine
//! - `operation` - Serialized operations and pipelines
//! - `codec` - PPM/PNG/JPEG decode and encode
//!
//! # Masks and splits
//!
//! Operations that take a mask accept an optional `Uint8Array` of RGB bytes
//! the same size as the image; black pixels are eligible. Operations that
//! take a split accept an optional percentage (0-100) of columns, from the
//! left, that are eligible.
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRaster, blur, levels_adjust } from '@pixelwork/wasm';
//!
//! await init();
//!
//! const image = new JsRaster(width, height, rgbBytes);
//! const soft = blur(image, undefined, 50);
//! const leveled = levels_adjust(soft, 10, 128, 245, undefined);
//! ```

use wasm_bindgen::prelude::*;

mod channels;
mod codec;
mod color;
mod effects;
mod filter;
mod histogram;
mod mask;
mod operation;
mod transform;
mod types;

// Re-export public types
pub use channels::{combine_rgb, split_rgb};
pub use codec::{decode_image, encode_image};
pub use color::{apply_matrix, extract_component, greyscale, sepia};
pub use effects::{color_correct, compress, levels_adjust};
pub use filter::{adjust_brightness, apply_kernel, blur, sharpen};
pub use histogram::{compute_histogram, render_histogram, JsHistogram};
pub use mask::create_mask;
pub use operation::{apply_operation, run_pipeline};
pub use transform::{flip_horizontal, flip_vertical, resize};
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
///
/// Installs the panic hook and routes core log output to the browser
/// console at `warn` level.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed, which is fine
    let _ = console_log::init_with_level(log::Level::Warn);
}

/// Change how much core log output reaches the console.
///
/// Accepts `off`, `error`, `warn`, `info`, `debug` or `trace`
/// (case-insensitive); anything else selects `warn`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    log::set_max_level(parse_level(level));
}

fn parse_level(name: &str) -> log::LevelFilter {
    name.parse().unwrap_or(log::LevelFilter::Warn)
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
