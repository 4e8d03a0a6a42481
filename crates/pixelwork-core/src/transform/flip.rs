//! Mirroring along the vertical and horizontal axes.

use crate::Raster;

/// Mirror the image top-to-bottom (reverse the row order).
pub fn flip_vertical(image: &Raster) -> Raster {
    let row_len = image.width() as usize * 3;
    let mut pixels = Vec::with_capacity(image.pixels().len());
    for row in image.pixels().chunks_exact(row_len).rev() {
        pixels.extend_from_slice(row);
    }
    Raster::from_parts(image.width(), image.height(), pixels)
}

/// Mirror the image left-to-right (reverse each row).
pub fn flip_horizontal(image: &Raster) -> Raster {
    let row_len = image.width() as usize * 3;
    let mut pixels = Vec::with_capacity(image.pixels().len());
    for row in image.pixels().chunks_exact(row_len) {
        for px in row.chunks_exact(3).rev() {
            pixels.extend_from_slice(px);
        }
    }
    Raster::from_parts(image.width(), image.height(), pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Raster {
        Raster::from_fn(width, height, |x, y| [x as u8, y as u8, (x + y) as u8]).unwrap()
    }

    #[test]
    fn test_flip_vertical() {
        let img = gradient(3, 4);
        let out = flip_vertical(&img);
        assert_eq!(out.dimensions(), (3, 4));
        for y in 0..4 {
            for x in 0..3 {
                assert_eq!(out.pixel(x, y), img.pixel(x, 3 - y));
            }
        }
    }

    #[test]
    fn test_flip_horizontal() {
        let img = gradient(3, 4);
        let out = flip_horizontal(&img);
        for y in 0..4 {
            for x in 0..3 {
                assert_eq!(out.pixel(x, y), img.pixel(2 - x, y));
            }
        }
    }

    #[test]
    fn test_flip_single_pixel() {
        let img = Raster::filled(1, 1, [1, 2, 3]).unwrap();
        assert_eq!(flip_vertical(&img), img);
        assert_eq!(flip_horizontal(&img), img);
    }

    #[test]
    fn test_flip_keeps_source() {
        let img = gradient(2, 2);
        let copy = img.clone();
        let _ = flip_horizontal(&img);
        assert_eq!(img, copy);
    }
}
