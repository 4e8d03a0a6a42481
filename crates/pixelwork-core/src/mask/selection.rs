//! Per-pixel eligibility from an optional mask and split boundary.

use crate::{OpError, Raster};

/// Which pixels of an image an operation may change.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    mask: Option<&'a Raster>,
    boundary: u32,
}

impl<'a> Selection<'a> {
    /// Build a selection for `image`.
    ///
    /// # Errors
    /// - `OpError::SplitOutOfRange` if `split` exceeds 100
    /// - `OpError::DimensionMismatch` if the mask is not the image's size
    pub fn new(
        image: &Raster,
        mask: Option<&'a Raster>,
        split: Option<u8>,
    ) -> Result<Self, OpError> {
        let boundary = split_boundary(image.width(), split)?;
        if let Some(mask) = mask {
            image.ensure_same_dimensions(mask)?;
        }
        Ok(Self { mask, boundary })
    }

    /// Selection admitting every pixel of `image`.
    pub fn all(image: &Raster) -> Self {
        Self {
            mask: None,
            boundary: image.width(),
        }
    }

    /// First column that is never eligible.
    pub fn boundary(&self) -> u32 {
        self.boundary
    }

    /// Whether the pixel at column `x`, row `y` is eligible.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        if x >= self.boundary {
            return false;
        }
        match self.mask {
            Some(mask) => mask.pixel(x, y)[0] == 0,
            None => true,
        }
    }

    /// Map eligible pixels through `f`, copying the rest unchanged.
    pub(crate) fn apply<F>(&self, image: &Raster, mut f: F) -> Raster
    where
        F: FnMut(u32, u32, [u8; 3]) -> [u8; 3],
    {
        image.map_pixels(|x, y, rgb| {
            if self.contains(x, y) {
                f(x, y, rgb)
            } else {
                rgb
            }
        })
    }
}

/// Column boundary for a split percentage over an image `width` pixels wide.
///
/// `None` means the whole width. Otherwise `width * percent / 100`, rounded
/// down.
///
/// # Errors
/// Returns `OpError::SplitOutOfRange` if `split` exceeds 100.
pub fn split_boundary(width: u32, split: Option<u8>) -> Result<u32, OpError> {
    match split {
        None => Ok(width),
        Some(percent) if percent > 100 => Err(OpError::SplitOutOfRange(percent)),
        Some(percent) => Ok(((width as u64 * percent as u64) / 100) as u32),
    }
}
