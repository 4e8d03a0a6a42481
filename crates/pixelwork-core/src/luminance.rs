//! Per-pixel brightness measures.
//!
//! Two weightings are used across the engine:
//! - ITU-R BT.709 for greyscale conversion
//! - ITU-R BT.601 for the luma component extraction
//!
//! plus the unweighted intensity (channel mean) and value (channel max).

/// ITU-R BT.709 channel weights (red, green, blue).
pub const BT709: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// ITU-R BT.601 channel weights (red, green, blue).
pub const BT601: [f64; 3] = [0.299, 0.587, 0.114];

/// Weighted sum of a pixel's channels, unrounded.
#[inline]
pub fn weighted(rgb: [u8; 3], weights: [f64; 3]) -> f64 {
    weights[0] * rgb[0] as f64 + weights[1] * rgb[1] as f64 + weights[2] * rgb[2] as f64
}

/// BT.601 luma, rounded to the nearest integer.
#[inline]
pub fn luma_u8(rgb: [u8; 3]) -> u8 {
    weighted(rgb, BT601).round().clamp(0.0, 255.0) as u8
}

/// Channel mean with integer division.
#[inline]
pub fn intensity_u8(rgb: [u8; 3]) -> u8 {
    ((rgb[0] as u16 + rgb[1] as u16 + rgb[2] as u16) / 3) as u8
}

/// Largest channel.
#[inline]
pub fn value_u8(rgb: [u8; 3]) -> u8 {
    rgb[0].max(rgb[1]).max(rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        for weights in [BT709, BT601] {
            let sum: f64 = weights.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "Coefficients should sum to 1.0");
        }
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in [0u8, 64, 128, 192, 255] {
            assert_eq!(luma_u8([v, v, v]), v);
        }
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255 = 76.245
        assert_eq!(luma_u8([255, 0, 0]), 76);
        // 0.587 * 255 = 149.685
        assert_eq!(luma_u8([0, 255, 0]), 150);
        // 0.114 * 255 = 29.07
        assert_eq!(luma_u8([0, 0, 255]), 29);
    }

    #[test]
    fn test_intensity_truncates() {
        assert_eq!(intensity_u8([255, 255, 0]), 170);
        assert_eq!(intensity_u8([1, 1, 0]), 0);
        assert_eq!(intensity_u8([255, 255, 255]), 255);
    }

    #[test]
    fn test_value_is_max() {
        assert_eq!(value_u8([10, 200, 30]), 200);
        assert_eq!(value_u8([0, 0, 0]), 0);
    }

    #[test]
    fn test_bt709_weighted() {
        // 0.2126 * 255 ~= 54.21
        assert!((weighted([255, 0, 0], BT709) - 54.213).abs() < 1e-3);
    }
}
