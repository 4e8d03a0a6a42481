//! Bilinear resampling.
//!
//! # Algorithm
//!
//! Each destination pixel maps back to a fractional source position by
//! scaling its coordinates with `source / target`:
//! ```text
//! src_x = dst_x * (src_width / dst_width)
//! src_y = dst_y * (src_height / dst_height)
//! ```
//! The four neighbors at the floor position and one step right/down are
//! blended by the fractional parts. At the right and bottom edges the
//! "one step" neighbor is clamped to the last column or row.

use crate::raster::clamp_channel;
use crate::{OpError, Raster};

/// Resample `image` to `width x height` with bilinear interpolation.
///
/// # Arguments
/// * `image` - Source raster
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
///
/// # Errors
/// Returns `OpError::InvalidDimensions` if either target is zero or
/// negative.
pub fn resize(image: &Raster, width: i32, height: i32) -> Result<Raster, OpError> {
    if width <= 0 || height <= 0 {
        return Err(OpError::InvalidDimensions { width, height });
    }
    let (dst_w, dst_h) = (width as u32, height as u32);

    // Fast path: same size
    if image.dimensions() == (dst_w, dst_h) {
        return Ok(image.clone());
    }

    log::debug!(
        "resizing {}x{} -> {}x{}",
        image.width(),
        image.height(),
        dst_w,
        dst_h
    );

    let x_scale = image.width() as f64 / dst_w as f64;
    let y_scale = image.height() as f64 / dst_h as f64;

    Raster::from_fn(dst_w, dst_h, |x, y| {
        sample_bilinear(image, x as f64 * x_scale, y as f64 * y_scale)
    })
}

fn sample_bilinear(image: &Raster, x: f64, y: f64) -> [u8; 3] {
    let (last_x, last_y) = (image.width() - 1, image.height() - 1);

    let x0 = (x.floor() as u32).min(last_x);
    let y0 = (y.floor() as u32).min(last_y);
    let x1 = (x0 + 1).min(last_x);
    let y1 = (y0 + 1).min(last_y);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = image.pixel(x0, y0);
    let p10 = image.pixel(x1, y0);
    let p01 = image.pixel(x0, y1);
    let p11 = image.pixel(x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let top = p00[i] as f64 * (1.0 - fx) + p10[i] as f64 * fx;
        let bottom = p01[i] as f64 * (1.0 - fx) + p11[i] as f64 * fx;
        result[i] = clamp_channel(top * (1.0 - fy) + bottom * fy);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive() {
        let img = Raster::filled(4, 4, [1, 1, 1]).unwrap();
        for (w, h) in [(0, 2), (2, 0), (-1, 2), (2, -5), (0, 0)] {
            assert_eq!(
                resize(&img, w, h).unwrap_err(),
                OpError::InvalidDimensions { width: w, height: h }
            );
        }
    }

    #[test]
    fn test_same_size_is_copy() {
        let img = Raster::from_fn(3, 3, |x, y| [x as u8, y as u8, 0]).unwrap();
        assert_eq!(resize(&img, 3, 3).unwrap(), img);
    }

    #[test]
    fn test_halving_picks_even_samples() {
        // Scale 2 lands on integer source positions
        let img = Raster::from_fn(4, 4, |x, y| [(x * 10) as u8, (y * 10) as u8, 7]).unwrap();
        let out = resize(&img, 2, 2).unwrap();
        assert_eq!(out.pixel(0, 0), [0, 0, 7]);
        assert_eq!(out.pixel(1, 0), [20, 0, 7]);
        assert_eq!(out.pixel(0, 1), [0, 20, 7]);
        assert_eq!(out.pixel(1, 1), [20, 20, 7]);
    }

    #[test]
    fn test_fractional_blend() {
        // 3 -> 2 columns: dst x=1 maps to src x=1.5
        let img = Raster::from_fn(3, 1, |x, _| [(x * 100) as u8, 0, 0]).unwrap();
        let out = resize(&img, 2, 1).unwrap();
        assert_eq!(out.pixel(0, 0), [0, 0, 0]);
        assert_eq!(out.pixel(1, 0), [150, 0, 0]);
    }

    #[test]
    fn test_upscale_clamps_edge_neighbor() {
        // 2 -> 4 columns: dst x=3 maps to src x=1.5, right neighbor clamps to x=1
        let img = Raster::from_fn(2, 1, |x, _| [(x * 100) as u8, 0, 0]).unwrap();
        let out = resize(&img, 4, 1).unwrap();
        assert_eq!(out.pixel(0, 0)[0], 0);
        assert_eq!(out.pixel(1, 0)[0], 50);
        assert_eq!(out.pixel(2, 0)[0], 100);
        assert_eq!(out.pixel(3, 0)[0], 100);
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        let img = Raster::filled(7, 5, [90, 120, 200]).unwrap();
        let out = resize(&img, 3, 2).unwrap();
        assert!(out.pixels().chunks_exact(3).all(|c| c == [90, 120, 200]));
    }

    #[test]
    fn test_to_single_pixel() {
        let img = Raster::from_fn(4, 4, |x, y| [(x + y) as u8, 0, 0]).unwrap();
        let out = resize(&img, 1, 1).unwrap();
        assert_eq!(out.pixel(0, 0), img.pixel(0, 0));
    }
}
