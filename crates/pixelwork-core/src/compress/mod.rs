//! Lossy compression with a 2D Haar wavelet.
//!
//! ## Pipeline
//!
//! 1. Split the image into three real-valued channel planes
//! 2. Zero-pad each plane to a square whose side is the next power of two
//!    at or above `max(width, height)`
//! 3. Forward Haar transform
//! 4. Zero every coefficient below the channel's threshold
//! 5. Inverse transform, crop, round and clamp
//!
//! ## Threshold
//!
//! `retain_percent` picks how many of the *distinct* non-zero coefficient
//! magnitudes are suppressed: the threshold is the k-th smallest distinct
//! magnitude with `k = floor(count * percent / 100)`. It is not a fraction
//! of coefficients or of signal energy.

mod haar;
mod threshold;

pub use haar::Plane;
pub use threshold::{suppress_below, threshold_for};

use crate::raster::clamp_channel;
use crate::{OpError, Raster};

/// Compress `image`, suppressing `retain_percent` of the distinct
/// coefficient magnitudes in each channel.
///
/// # Errors
/// Returns `OpError::RetainOutOfRange` unless `retain_percent` is within
/// 0-100.
pub fn compress(image: &Raster, retain_percent: f64) -> Result<Raster, OpError> {
    if !(0.0..=100.0).contains(&retain_percent) {
        return Err(OpError::RetainOutOfRange(retain_percent));
    }

    let (width, height) = image.dimensions();
    let side = width.max(height).next_power_of_two() as usize;
    log::debug!(
        "compressing {}x{} image (padded to {}) at {}%",
        width,
        height,
        side,
        retain_percent
    );

    let mut channels: Vec<Plane> = Vec::with_capacity(3);
    for channel in 0..3 {
        let mut plane = Plane::from_channel(image, channel, side);
        plane.forward();
        let threshold = threshold_for(plane.coefficients(), retain_percent);
        log::trace!("channel {} threshold {}", channel, threshold);
        suppress_below(plane.coefficients_mut(), threshold);
        plane.inverse();
        channels.push(plane);
    }

    Raster::from_fn(width, height, |x, y| {
        let (x, y) = (x as usize, y as usize);
        [0, 1, 2].map(|c| clamp_channel(channels[c].get(x, y)))
    })
}
