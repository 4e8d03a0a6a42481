//! Splitting an image into per-channel images and recombining them.

use crate::raster::clamp_channel_i32;
use crate::{OpError, Raster};

/// Split `image` into three images, each keeping one channel in place and
/// zeroing the other two. Returned in red, green, blue order.
pub fn split_rgb(image: &Raster) -> [Raster; 3] {
    [0, 1, 2].map(|keep| {
        image.map_pixels(|_, _, px| {
            let mut out = [0u8; 3];
            out[keep] = px[keep];
            out
        })
    })
}

/// Sum three same-sized images channel-wise, clamping at 255.
///
/// # Errors
/// Returns `OpError::DimensionMismatch` if the images differ in size.
pub fn combine_rgb(red: &Raster, green: &Raster, blue: &Raster) -> Result<Raster, OpError> {
    red.ensure_same_dimensions(green)?;
    red.ensure_same_dimensions(blue)?;

    let mut pixels = Vec::with_capacity(red.pixels().len());
    for ((r, g), b) in red.pixels().iter().zip(green.pixels()).zip(blue.pixels()) {
        pixels.push(clamp_channel_i32(*r as i32 + *g as i32 + *b as i32));
    }
    Ok(Raster::from_parts(red.width(), red.height(), pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> Raster {
        Raster::from_fn(3, 2, |x, y| [(x * 40) as u8, (y * 90) as u8, 200]).unwrap()
    }

    #[test]
    fn test_split_zeroes_other_channels() {
        let [r, g, b] = split_rgb(&test_image());
        assert_eq!(r.pixel(2, 1), [80, 0, 0]);
        assert_eq!(g.pixel(2, 1), [0, 90, 0]);
        assert_eq!(b.pixel(2, 1), [0, 0, 200]);
    }

    #[test]
    fn test_split_then_combine_is_identity() {
        let img = test_image();
        let [r, g, b] = split_rgb(&img);
        assert_eq!(combine_rgb(&r, &g, &b).unwrap(), img);
    }

    #[test]
    fn test_combine_clamps() {
        let a = Raster::filled(2, 2, [200, 10, 0]).unwrap();
        let b = Raster::filled(2, 2, [100, 10, 0]).unwrap();
        let c = Raster::filled(2, 2, [0, 10, 255]).unwrap();
        let out = combine_rgb(&a, &b, &c).unwrap();
        assert_eq!(out.pixel(1, 1), [255, 30, 255]);
    }

    #[test]
    fn test_combine_dimension_mismatch() {
        let a = Raster::filled(2, 2, [0, 0, 0]).unwrap();
        let b = Raster::filled(2, 3, [0, 0, 0]).unwrap();
        assert_eq!(
            combine_rgb(&a, &a, &b).unwrap_err(),
            OpError::DimensionMismatch {
                expected: (2, 2),
                actual: (2, 3)
            }
        );
        assert!(combine_rgb(&b, &a, &a).is_err());
    }
}
