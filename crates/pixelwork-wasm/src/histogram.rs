//! Histogram WASM bindings.

use crate::types::JsRaster;
use pixelwork_core::correction::PEAK_RANGE;
use pixelwork_core::histogram::{self, Channel};
use pixelwork_core::Histogram;
use wasm_bindgen::prelude::*;

/// Per-channel counts of an image, as returned to JavaScript.
#[wasm_bindgen]
pub struct JsHistogram(Histogram);

#[wasm_bindgen]
impl JsHistogram {
    /// 256 red bins.
    pub fn red(&self) -> Vec<u32> {
        self.0.red.to_vec()
    }

    /// 256 green bins.
    pub fn green(&self) -> Vec<u32> {
        self.0.green.to_vec()
    }

    /// 256 blue bins.
    pub fn blue(&self) -> Vec<u32> {
        self.0.blue.to_vec()
    }

    /// Largest bin over all channels; the chart's vertical scale.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.0.max_value()
    }

    /// Most frequent value of `channel` (`red`, `green` or `blue`) in the
    /// color-correction peak range, or 0 if that range is empty.
    pub fn peak(&self, channel: &str) -> Result<u8, JsValue> {
        let channel = match channel.to_ascii_lowercase().as_str() {
            "red" => Channel::Red,
            "green" => Channel::Green,
            "blue" => Channel::Blue,
            other => return Err(JsValue::from_str(&format!("Unknown channel: {}", other))),
        };
        Ok(self.0.peak(channel, PEAK_RANGE))
    }
}

/// Count per-channel values over the whole image.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_histogram(image);
/// const peak = hist.max_value;
/// const reds = hist.red();
/// ```
#[wasm_bindgen]
pub fn compute_histogram(image: &JsRaster) -> JsHistogram {
    JsHistogram(histogram::compute_histogram(image.raster()))
}

/// Render the 256x256 histogram chart of an image.
#[wasm_bindgen]
pub fn render_histogram(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(histogram::render_histogram(image.raster()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelwork_core::Raster;

    #[test]
    fn test_compute_histogram() {
        let image = JsRaster::from_raster(Raster::filled(2, 3, [255, 70, 0]).unwrap());
        let hist = compute_histogram(&image);
        assert_eq!(hist.red().len(), 256);
        assert_eq!(hist.red()[255], 6);
        assert_eq!(hist.green()[70], 6);
        assert_eq!(hist.blue()[0], 6);
        assert_eq!(hist.max_value(), 6);
        assert_eq!(hist.peak("Green").unwrap(), 70);
        // 255 and 0 fall outside the peak range
        assert_eq!(hist.peak("red").unwrap(), 0);
    }

    #[test]
    fn test_render_histogram_size() {
        let image = JsRaster::from_raster(Raster::filled(2, 2, [1, 2, 3]).unwrap());
        let chart = render_histogram(&image);
        assert_eq!((chart.width(), chart.height()), (256, 256));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use pixelwork_core::Raster;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_unknown_peak_channel_throws() {
        let image = JsRaster::from_raster(Raster::filled(1, 1, [1, 2, 3]).unwrap());
        assert!(compute_histogram(&image).peak("alpha").is_err());
    }
}
