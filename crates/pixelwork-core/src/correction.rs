//! Histogram-peak color correction.
//!
//! Each channel's peak is its most frequent value inside a guard band that
//! ignores near-black and near-white samples. Shifting every channel so its
//! peak lands on the mean peak removes a uniform color cast.

use std::ops::RangeInclusive;

use crate::histogram::{compute_histogram, Channel};
use crate::mask::split_boundary;
use crate::raster::clamp_channel_i32;
use crate::{OpError, Raster};

/// Values considered when locating a channel's peak.
pub const PEAK_RANGE: RangeInclusive<u8> = 10..=245;

/// Align the histogram peaks of the three channels.
///
/// Only columns left of the split boundary change.
///
/// # Errors
/// Returns `OpError::SplitOutOfRange` if `split` exceeds 100.
pub fn color_correct(image: &Raster, split: Option<u8>) -> Result<Raster, OpError> {
    let boundary = split_boundary(image.width(), split)?;

    let hist = compute_histogram(image);
    let peaks = Channel::ALL.map(|c| hist.peak(c, PEAK_RANGE) as i32);
    let average = (peaks[0] + peaks[1] + peaks[2]) / 3;
    log::debug!("color correction peaks {:?}, average {}", peaks, average);

    Ok(image.map_pixels(|x, _, px| {
        if x >= boundary {
            return px;
        }
        [0, 1, 2].map(|c| clamp_channel_i32(px[c] as i32 - average + peaks[c]))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_cast_removed() {
        let img = Raster::filled(4, 4, [100, 130, 160]).unwrap();
        let out = color_correct(&img, None).unwrap();
        // Peaks 100/130/160, average 130: each channel becomes v - 130 + v
        assert_eq!(out.pixel(0, 0), [70, 130, 190]);
    }

    #[test]
    fn test_peak_ignores_guard_band() {
        // Most pixels are pure black, which sits outside the peak range
        let img = Raster::from_fn(5, 1, |x, _| if x == 0 { [50, 50, 50] } else { [0, 0, 0] })
            .unwrap();
        let out = color_correct(&img, None).unwrap();
        // Equal peaks, so nothing moves
        assert_eq!(out, img);
    }

    #[test]
    fn test_no_peak_defaults_to_zero() {
        let img = Raster::from_fn(2, 1, |x, _| if x == 0 { [255, 60, 60] } else { [250, 60, 60] })
            .unwrap();
        let out = color_correct(&img, None).unwrap();
        // Red peak 0, green/blue 60, average 40: red -40, green/blue +20
        assert_eq!(out.pixel(0, 0), [215, 80, 80]);
        assert_eq!(out.pixel(1, 0), [210, 80, 80]);
    }

    #[test]
    fn test_clamps_results() {
        let img = Raster::from_fn(3, 1, |x, _| match x {
            0 => [20, 240, 128],
            1 => [20, 240, 128],
            _ => [255, 0, 128],
        })
        .unwrap();
        let out = color_correct(&img, None).unwrap();
        // Peaks 20/240/128, average 129
        assert_eq!(out.pixel(2, 0), [146, 111, 127]);
        assert_eq!(out.pixel(0, 0), [0, 255, 127]);
    }

    #[test]
    fn test_split_limits_columns() {
        let img = Raster::filled(4, 2, [100, 130, 160]).unwrap();
        let out = color_correct(&img, Some(50)).unwrap();
        assert_eq!(out.pixel(1, 1), [70, 130, 190]);
        assert_eq!(out.pixel(2, 1), [100, 130, 160]);
    }

    #[test]
    fn test_split_zero_noop_and_invalid() {
        let img = Raster::filled(4, 2, [100, 130, 160]).unwrap();
        assert_eq!(color_correct(&img, Some(0)).unwrap(), img);
        assert_eq!(
            color_correct(&img, Some(101)).unwrap_err(),
            OpError::SplitOutOfRange(101)
        );
    }
}
