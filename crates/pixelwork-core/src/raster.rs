//! The raster buffer value type.
//!
//! A [`Raster`] is an immutable `width x height` grid of 8-bit RGB samples
//! stored row-major, 3 bytes per pixel. Operations never modify a raster;
//! they read one and return a freshly allocated result.

use crate::OpError;

/// An 8-bit RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster from dimensions and RGB pixel data.
    ///
    /// # Errors
    /// Returns `OpError::InvalidRaster` if either dimension is zero or the
    /// pixel data length is not `width * height * 3`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, OpError> {
        let expected = (width as usize) * (height as usize) * 3;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(OpError::InvalidRaster {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster with every pixel set to `rgb`.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, OpError> {
        let count = (width as usize) * (height as usize);
        let mut pixels = Vec::with_capacity(count * 3);
        for _ in 0..count {
            pixels.extend_from_slice(&rgb);
        }
        Self::new(width, height, pixels)
    }

    /// Create a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, OpError>
    where
        F: FnMut(u32, u32) -> [u8; 3],
    {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 3);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Build a raster from parts already known to be consistent.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a raster from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, OpError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert to an `image::RgbImage`.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .unwrap_or_else(|| image::RgbImage::new(self.width, self.height))
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// RGB sample at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = self.index(x, y);
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Row-major RGB data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the raster, returning its RGB data.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Check that `other` has the same dimensions as `self`.
    pub(crate) fn ensure_same_dimensions(&self, other: &Raster) -> Result<(), OpError> {
        if self.dimensions() != other.dimensions() {
            return Err(OpError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Produce a new raster of the same size by mapping every pixel.
    pub(crate) fn map_pixels<F>(&self, mut f: F) -> Raster
    where
        F: FnMut(u32, u32, [u8; 3]) -> [u8; 3],
    {
        let mut out = Vec::with_capacity(self.pixels.len());
        for (idx, chunk) in self.pixels.chunks_exact(3).enumerate() {
            let x = (idx % self.width as usize) as u32;
            let y = (idx / self.width as usize) as u32;
            out.extend_from_slice(&f(x, y, [chunk[0], chunk[1], chunk[2]]));
        }
        Raster::from_parts(self.width, self.height, out)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 3
    }
}

/// Round a real channel value and clamp it into `0..=255`.
#[inline]
pub(crate) fn clamp_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Clamp an integer channel value into `0..=255`.
#[inline]
pub(crate) fn clamp_channel_i32(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
