//! Per-channel frequency counts and their rendered polyline chart.
//!
//! [`compute_histogram`] counts how many pixels carry each 0-255 value in
//! each channel. [`render_histogram`] draws those counts as three colored
//! polylines on a gridded 256x256 canvas.

mod render;

pub use render::{render_histogram, render_frequencies, HISTOGRAM_SIZE};

use crate::{Histogram, Raster};

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel within a pixel.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Count per-channel sample values over the whole image.
///
/// # Example
/// ```ignore
/// use pixelwork_core::{histogram::compute_histogram, Raster};
///
/// let img = Raster::new(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
/// let hist = compute_histogram(&img);
/// assert_eq!(hist.red[255], 1);
/// assert_eq!(hist.green[255], 1);
/// ```
pub fn compute_histogram(image: &Raster) -> Histogram {
    let mut hist = Histogram::new();
    for chunk in image.pixels().chunks_exact(3) {
        hist.red[chunk[0] as usize] += 1;
        hist.green[chunk[1] as usize] += 1;
        hist.blue[chunk[2] as usize] += 1;
    }
    hist
}
