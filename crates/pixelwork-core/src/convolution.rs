//! Square-kernel convolution and brightness shift.
//!
//! Kernels are centered on each eligible pixel. Neighbors outside the image
//! contribute zero (zero padding). Each output channel is the weighted sum
//! of the neighborhood, rounded to the nearest integer and clamped to 0-255.

use serde::{Deserialize, Serialize};

use crate::mask::Selection;
use crate::raster::{clamp_channel, clamp_channel_i32};
use crate::{OpError, Raster};

/// A validated square convolution kernel with an odd side length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from its rows.
    ///
    /// # Errors
    /// Returns `OpError::InvalidKernel` if the matrix is empty, not square,
    /// or has an even side length.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, OpError> {
        let size = rows.len();
        let ragged = rows.iter().find(|row| row.len() != size);
        if size == 0 || size % 2 == 0 || ragged.is_some() {
            return Err(OpError::InvalidKernel {
                rows: size,
                cols: ragged.or(rows.first()).map_or(0, Vec::len),
            });
        }
        Ok(Self {
            size,
            weights: rows.into_iter().flatten().collect(),
        })
    }

    /// 3x3 normalized Gaussian used for blurring.
    pub fn gaussian_blur() -> Self {
        Self {
            size: 3,
            #[rustfmt::skip]
            weights: vec![
                1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
                1.0 / 8.0,  1.0 / 4.0, 1.0 / 8.0,
                1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
            ],
        }
    }

    /// 5x5 unsharp-style kernel used for sharpening.
    pub fn sharpen() -> Self {
        let o = -0.125;
        let r = 0.25;
        Self {
            size: 5,
            #[rustfmt::skip]
            weights: vec![
                o, o, o,   o, o,
                o, r, r,   r, o,
                o, r, 1.0, r, o,
                o, r, r,   r, o,
                o, o, o,   o, o,
            ],
        }
    }

    /// Single-weight kernel that leaves images unchanged.
    pub fn identity(size: usize) -> Result<Self, OpError> {
        let mut rows = vec![vec![0.0; size]; size];
        if let Some(center) = rows.get_mut(size / 2) {
            center[size / 2] = 1.0;
        }
        Self::new(rows)
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight at `row`, `col`.
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.size + col]
    }

    /// Kernel rows.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.weights.chunks(self.size).map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Kernel {
    type Error = OpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Kernel::new(rows)
    }
}

impl From<Kernel> for Vec<Vec<f64>> {
    fn from(kernel: Kernel) -> Self {
        kernel.rows()
    }
}

/// Convolve eligible pixels of `image` with `kernel`.
///
/// # Arguments
/// * `image` - Source raster
/// * `kernel` - Odd-sized square kernel
/// * `mask` - Optional selector; black pixels are convolved
/// * `split` - Optional percentage of columns, from the left, that are eligible
///
/// # Errors
/// Returns an error if the split percentage exceeds 100 or the mask size
/// differs from the image.
pub fn apply_kernel(
    image: &Raster,
    kernel: &Kernel,
    mask: Option<&Raster>,
    split: Option<u8>,
) -> Result<Raster, OpError> {
    let selection = Selection::new(image, mask, split)?;
    log::debug!(
        "convolving {}x{} image with {}x{} kernel",
        image.width(),
        image.height(),
        kernel.size(),
        kernel.size()
    );
    Ok(selection.apply(image, |x, y, _| convolve_at(image, kernel, x, y)))
}

/// Weighted neighborhood sum at one pixel with zero padding.
fn convolve_at(image: &Raster, kernel: &Kernel, x: u32, y: u32) -> [u8; 3] {
    let radius = (kernel.size() / 2) as i64;
    let (w, h) = (image.width() as i64, image.height() as i64);
    let mut sum = [0.0f64; 3];

    for ky in 0..kernel.size() {
        let sy = y as i64 + ky as i64 - radius;
        if sy < 0 || sy >= h {
            continue;
        }
        for kx in 0..kernel.size() {
            let sx = x as i64 + kx as i64 - radius;
            if sx < 0 || sx >= w {
                continue;
            }
            let weight = kernel.weight(ky, kx);
            let px = image.pixel(sx as u32, sy as u32);
            for c in 0..3 {
                sum[c] += px[c] as f64 * weight;
            }
        }
    }

    sum.map(clamp_channel)
}

/// Blur with the standard 3x3 Gaussian.
pub fn blur(image: &Raster, mask: Option<&Raster>, split: Option<u8>) -> Result<Raster, OpError> {
    apply_kernel(image, &Kernel::gaussian_blur(), mask, split)
}

/// Sharpen with the standard 5x5 kernel.
pub fn sharpen(
    image: &Raster,
    mask: Option<&Raster>,
    split: Option<u8>,
) -> Result<Raster, OpError> {
    apply_kernel(image, &Kernel::sharpen(), mask, split)
}

/// Add `delta` to every channel of every pixel, clamping to 0-255.
///
/// Applies to the whole image; there is no mask or split.
pub fn adjust_brightness(image: &Raster, delta: i32) -> Raster {
    if delta == 0 {
        return image.clone();
    }
    image.map_pixels(|_, _, px| px.map(|v| clamp_channel_i32((v as i32).saturating_add(delta))))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
