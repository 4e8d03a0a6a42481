//! Closed set of single-image operations, dispatched by `match`.
//!
//! [`Operation`] names every engine operation that maps one raster to one
//! raster together with its parameters. Operations (de)serialize as tagged
//! objects, so a [`Pipeline`] can be stored as JSON or TOML:
//!
//! ```toml
//! [[operations]]
//! op = "levels"
//! black = 10
//! mid = 120
//! white = 240
//!
//! [[operations]]
//! op = "resize"
//! width = 640
//! height = 480
//! ```

use serde::{Deserialize, Serialize};

use crate::color::{apply_matrix, extract_component, ColorMatrix, Component};
use crate::compress::compress;
use crate::config::EnginePresets;
use crate::convolution::{adjust_brightness, apply_kernel, Kernel};
use crate::correction::color_correct;
use crate::histogram::render_histogram;
use crate::levels::levels_adjust;
use crate::mask::create_mask;
use crate::transform::{flip_horizontal, flip_vertical, resize};
use crate::{OpError, Raster};

/// One engine operation and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Blur {
        split: Option<u8>,
    },
    Sharpen {
        split: Option<u8>,
    },
    Convolve {
        kernel: Kernel,
        split: Option<u8>,
    },
    Brightness {
        delta: i32,
    },
    Greyscale {
        split: Option<u8>,
    },
    Sepia {
        split: Option<u8>,
    },
    ColorMatrix {
        matrix: ColorMatrix,
        split: Option<u8>,
    },
    Component {
        component: Component,
    },
    FlipHorizontal,
    FlipVertical,
    Resize {
        width: i32,
        height: i32,
    },
    Mask {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Histogram,
    ColorCorrect {
        split: Option<u8>,
    },
    Levels {
        black: i32,
        mid: i32,
        white: i32,
        split: Option<u8>,
    },
    Compress {
        percent: f64,
    },
}

impl Operation {
    /// Short name, matching the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Blur { .. } => "blur",
            Operation::Sharpen { .. } => "sharpen",
            Operation::Convolve { .. } => "convolve",
            Operation::Brightness { .. } => "brightness",
            Operation::Greyscale { .. } => "greyscale",
            Operation::Sepia { .. } => "sepia",
            Operation::ColorMatrix { .. } => "color_matrix",
            Operation::Component { .. } => "component",
            Operation::FlipHorizontal => "flip_horizontal",
            Operation::FlipVertical => "flip_vertical",
            Operation::Resize { .. } => "resize",
            Operation::Mask { .. } => "mask",
            Operation::Histogram => "histogram",
            Operation::ColorCorrect { .. } => "color_correct",
            Operation::Levels { .. } => "levels",
            Operation::Compress { .. } => "compress",
        }
    }

    /// Whether a mask restricts which pixels this operation changes.
    pub fn honors_mask(&self) -> bool {
        matches!(
            self,
            Operation::Blur { .. }
                | Operation::Sharpen { .. }
                | Operation::Convolve { .. }
                | Operation::Greyscale { .. }
                | Operation::Sepia { .. }
                | Operation::ColorMatrix { .. }
                | Operation::Component { .. }
        )
    }

    /// Apply with the built-in presets.
    pub fn apply(&self, image: &Raster, mask: Option<&Raster>) -> Result<Raster, OpError> {
        self.apply_with(&EnginePresets::default(), image, mask)
    }

    /// Apply using `presets` for the standard kernels and matrices.
    ///
    /// Operations that do not honor masks ignore `mask` and log a warning.
    ///
    /// # Errors
    /// Returns whatever error the underlying operation reports.
    pub fn apply_with(
        &self,
        presets: &EnginePresets,
        image: &Raster,
        mask: Option<&Raster>,
    ) -> Result<Raster, OpError> {
        if mask.is_some() && !self.honors_mask() {
            log::warn!("{} does not support masks; ignoring mask", self.name());
        }

        match self {
            Operation::Blur { split } => apply_kernel(image, &presets.blur_kernel, mask, *split),
            Operation::Sharpen { split } => {
                apply_kernel(image, &presets.sharpen_kernel, mask, *split)
            }
            Operation::Convolve { kernel, split } => apply_kernel(image, kernel, mask, *split),
            Operation::Brightness { delta } => Ok(adjust_brightness(image, *delta)),
            Operation::Greyscale { split } => {
                apply_matrix(image, &presets.greyscale_matrix(), mask, *split)
            }
            Operation::Sepia { split } => apply_matrix(image, &presets.sepia_matrix, mask, *split),
            Operation::ColorMatrix { matrix, split } => apply_matrix(image, matrix, mask, *split),
            Operation::Component { component } => extract_component(image, *component, mask),
            Operation::FlipHorizontal => Ok(flip_horizontal(image)),
            Operation::FlipVertical => Ok(flip_vertical(image)),
            Operation::Resize { width, height } => resize(image, *width, *height),
            Operation::Mask {
                x,
                y,
                width,
                height,
            } => create_mask(image, *x, *y, *width, *height),
            Operation::Histogram => Ok(render_histogram(image)),
            Operation::ColorCorrect { split } => color_correct(image, *split),
            Operation::Levels {
                black,
                mid,
                white,
                split,
            } => levels_adjust(image, *black, *mid, *white, *split),
            Operation::Compress { percent } => compress(image, *percent),
        }
    }
}

/// An ordered list of operations applied left to right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub operations: Vec<Operation>,
}

impl Pipeline {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Run every operation with the built-in presets.
    pub fn run(&self, image: &Raster, mask: Option<&Raster>) -> Result<Raster, OpError> {
        self.run_with(&EnginePresets::default(), image, mask)
    }

    /// Run every operation in order, feeding each output to the next.
    ///
    /// The same mask is offered to every step. Stops at the first error.
    pub fn run_with(
        &self,
        presets: &EnginePresets,
        image: &Raster,
        mask: Option<&Raster>,
    ) -> Result<Raster, OpError> {
        let mut current = image.clone();
        for (step, op) in self.operations.iter().enumerate() {
            log::debug!("pipeline step {}: {}", step, op.name());
            current = op.apply_with(presets, &current, mask)?;
        }
        Ok(current)
    }
}
