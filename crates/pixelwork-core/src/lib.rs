//! Pixelwork Core - image transformation engine
//!
//! A library of pure operations over 8-bit RGB rasters: convolution
//! filters, linear color transforms, component extraction, mirroring and
//! resampling, rectangular masks, histograms, color correction, levels and
//! wavelet compression.
//!
//! Every operation takes its input explicitly and returns a freshly
//! allocated [`Raster`]; nothing is mutated in place. Many operations accept
//! an optional mask (black pixels are eligible) and an optional split
//! percentage (only columns left of `width * split / 100` are eligible).
//!
//! # Example
//!
//! ```ignore
//! use pixelwork_core::{blur, create_mask, levels_adjust, Raster};
//!
//! let image = Raster::filled(64, 64, [120, 90, 60])?;
//! let mask = create_mask(&image, 8, 8, 32, 32)?;
//! let softened = blur(&image, Some(&mask), None)?;
//! let leveled = levels_adjust(&softened, 10, 128, 245, Some(50))?;
//! ```

pub mod channels;
pub mod codec;
pub mod color;
pub mod compress;
pub mod config;
pub mod convolution;
pub mod correction;
pub mod error;
pub mod histogram;
pub mod levels;
pub mod luminance;
pub mod mask;
pub mod operation;
pub mod raster;
pub mod transform;

use std::ops::RangeInclusive;

pub use channels::{combine_rgb, split_rgb};
pub use color::{apply_matrix, extract_component, greyscale, sepia, ColorMatrix, Component};
pub use compress::compress;
pub use config::{ConfigError, EnginePresets};
pub use convolution::{adjust_brightness, apply_kernel, blur, sharpen, Kernel};
pub use correction::color_correct;
pub use error::{ErrorKind, OpError};
pub use histogram::{compute_histogram, render_histogram, Channel};
pub use levels::{levels_adjust, LevelsCurve};
pub use mask::{create_mask, Selection};
pub use operation::{Operation, Pipeline};
pub use raster::Raster;
pub use transform::{flip_horizontal, flip_vertical, resize};

/// Per-channel value counts for an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Red channel histogram (256 bins)
    pub red: [u32; 256],
    /// Green channel histogram (256 bins)
    pub green: [u32; 256],
    /// Blue channel histogram (256 bins)
    pub blue: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            red: [0; 256],
            green: [0; 256],
            blue: [0; 256],
        }
    }
}

impl Histogram {
    /// Create a new empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Bins for one channel
    pub fn channel(&self, channel: Channel) -> &[u32; 256] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Find the maximum count across all channels for normalization
    pub fn max_value(&self) -> u32 {
        let max_r = *self.red.iter().max().unwrap_or(&0);
        let max_g = *self.green.iter().max().unwrap_or(&0);
        let max_b = *self.blue.iter().max().unwrap_or(&0);
        max_r.max(max_g).max(max_b)
    }

    /// Most frequent value of `channel` within `range`.
    ///
    /// Ties go to the lowest value. Returns 0 if every bin in the range is
    /// empty.
    pub fn peak(&self, channel: Channel, range: RangeInclusive<u8>) -> u8 {
        let bins = self.channel(channel);
        let mut peak = 0u8;
        let mut best = 0u32;
        for value in range {
            if bins[value as usize] > best {
                best = bins[value as usize];
                peak = value;
            }
        }
        peak
    }

    /// Check for highlight clipping (values at 255)
    pub fn has_highlight_clipping(&self) -> bool {
        self.red[255] > 0 || self.green[255] > 0 || self.blue[255] > 0
    }

    /// Check for shadow clipping (values at 0)
    pub fn has_shadow_clipping(&self) -> bool {
        self.red[0] > 0 || self.green[0] > 0 || self.blue[0] > 0
    }
}
