//! Levels adjustment via a fitted quadratic tone curve.
//!
//! Three control points (black, mid, white) map to output 0, 128 and 255.
//! The unique parabola `y = a*x^2 + b*x + c` through them is solved in
//! closed form and tabulated into a 256-entry LUT, which is then applied
//! to every channel of every eligible pixel.

use crate::mask::split_boundary;
use crate::raster::clamp_channel;
use crate::{OpError, Raster};

/// Quadratic curve through (black, 0), (mid, 128), (white, 255).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelsCurve {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LevelsCurve {
    /// Fit the curve through the three control points.
    ///
    /// # Errors
    /// Returns `OpError::InvalidLevels` unless `0 <= black < mid < white <= 255`.
    pub fn fit(black: i32, mid: i32, white: i32) -> Result<Self, OpError> {
        if !(0 <= black && black < mid && mid < white && white <= 255) {
            return Err(OpError::InvalidLevels { black, mid, white });
        }

        let (b, m, w) = (black as f64, mid as f64, white as f64);
        let det = b * b * (m - w) - b * (m * m - w * w) + w * m * m - m * w * w;
        let det_a = -b * (128.0 - 255.0) + 128.0 * w - 255.0 * m;
        let det_b = b * b * (128.0 - 255.0) + 255.0 * m * m - 128.0 * w * w;
        let det_c = b * b * (255.0 * m - 128.0 * w) - b * (255.0 * m * m - 128.0 * w * w);

        Ok(Self {
            a: det_a / det,
            b: det_b / det,
            c: det_c / det,
        })
    }

    /// Unclamped curve value at `x`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Pre-computed lookup table: `lut[input] = round(clamp(curve(input)))`.
    pub fn lut(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for (i, value) in lut.iter_mut().enumerate() {
            *value = clamp_channel(self.evaluate(i as f64));
        }
        lut
    }
}

/// Remap every channel of the eligible columns through the levels curve.
///
/// # Errors
/// - `OpError::InvalidLevels` if the control points are not strictly
///   ascending within 0-255
/// - `OpError::SplitOutOfRange` if `split` exceeds 100
pub fn levels_adjust(
    image: &Raster,
    black: i32,
    mid: i32,
    white: i32,
    split: Option<u8>,
) -> Result<Raster, OpError> {
    let curve = LevelsCurve::fit(black, mid, white)?;
    let boundary = split_boundary(image.width(), split)?;
    let lut = curve.lut();

    Ok(image.map_pixels(|x, _, px| {
        if x < boundary {
            px.map(|v| lut[v as usize])
        } else {
            px
        }
    }))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn levels_strategy() -> impl Strategy<Value = (i32, i32, i32)> {
        (0i32..=253)
            .prop_flat_map(|black| (Just(black), black + 1..=254))
            .prop_flat_map(|(black, mid)| (Just(black), Just(mid), mid + 1..=255))
    }

    fn raster_strategy() -> impl Strategy<Value = Raster> {
        (1u32..=10, 1u32..=6).prop_flat_map(|(w, h)| {
            let size = (w * h * 3) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |pixels| Raster::new(w, h, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: any ascending triple fits and hits its control points.
        #[test]
        fn prop_fit_hits_control_points((black, mid, white) in levels_strategy()) {
            let lut = LevelsCurve::fit(black, mid, white).unwrap().lut();
            prop_assert_eq!(lut[black as usize], 0);
            prop_assert_eq!(lut[mid as usize], 128);
            prop_assert_eq!(lut[white as usize], 255);
        }

        /// Property: split 0 leaves the image untouched.
        #[test]
        fn prop_split_zero((black, mid, white) in levels_strategy(), v: u8) {
            let img = Raster::filled(3, 3, [v, v, v]).unwrap();
            prop_assert_eq!(levels_adjust(&img, black, mid, white, Some(0)).unwrap(), img);
        }

        /// Property: split 100 matches no split at all.
        #[test]
        fn prop_split_full_equals_none(
            (black, mid, white) in levels_strategy(),
            img in raster_strategy(),
        ) {
            let full = levels_adjust(&img, black, mid, white, Some(100)).unwrap();
            let none = levels_adjust(&img, black, mid, white, None).unwrap();
            prop_assert_eq!(full, none);
        }
    }
}
