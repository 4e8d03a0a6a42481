//! Rectangular mask generation.

use super::{SELECTED, UNSELECTED};
use crate::{OpError, Raster};

/// Create a mask the size of `image` selecting the rectangle
/// `[x, x + width) x [y, y + height)`.
///
/// Pixels inside the rectangle are black (selected), everything else is
/// white. `x` indexes columns and `y` indexes rows.
///
/// # Errors
/// Returns `OpError::MaskOutOfBounds` if any component is negative or the
/// rectangle extends past the image.
pub fn create_mask(
    image: &Raster,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> Result<Raster, OpError> {
    let (image_width, image_height) = image.dimensions();
    let out_of_bounds = x < 0
        || y < 0
        || width < 0
        || height < 0
        || x as i64 + width as i64 > image_width as i64
        || y as i64 + height as i64 > image_height as i64;
    if out_of_bounds {
        return Err(OpError::MaskOutOfBounds {
            x,
            y,
            width,
            height,
            image_width,
            image_height,
        });
    }

    let (left, top) = (x as u32, y as u32);
    let (right, bottom) = (left + width as u32, top + height as u32);

    Raster::from_fn(image_width, image_height, |col, row| {
        if (left..right).contains(&col) && (top..bottom).contains(&row) {
            SELECTED
        } else {
            UNSELECTED
        }
    })
}
