//! Error types for engine operations.
//!
//! Every operation validates its parameters before allocating output, so an
//! `Err` always means no buffer was produced.

use thiserror::Error;

/// Broad classification of an [`OpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A kernel, matrix or buffer has the wrong shape.
    Shape,
    /// A parameter lies outside its accepted range.
    Range,
    /// A requested output dimension is not positive.
    Dimension,
}

/// Errors raised by engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpError {
    /// Kernel is not square, has an even side, or is empty.
    #[error("Invalid kernel: expected an odd-sized square matrix, got {rows}x{cols}")]
    InvalidKernel { rows: usize, cols: usize },

    /// Color matrix is neither 1x3 nor 3x3.
    #[error("Invalid color matrix: expected 1x3 or 3x3, got {rows} rows")]
    InvalidMatrix { rows: usize },

    /// Two buffers that must share dimensions do not.
    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Pixel data does not describe a valid raster.
    #[error("Invalid raster: {width}x{height} needs {expected} bytes, got {actual}")]
    InvalidRaster {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Split percentage above 100.
    #[error("Split percentage must be within 0-100, got {0}")]
    SplitOutOfRange(u8),

    /// Level control points are not strictly ascending within 0-255.
    #[error("Invalid levels: require 0 <= black < mid < white <= 255, got {black}/{mid}/{white}")]
    InvalidLevels { black: i32, mid: i32, white: i32 },

    /// Mask rectangle has a negative component or leaves the image.
    #[error("Mask rectangle ({x}, {y}, {width}, {height}) does not fit a {image_width}x{image_height} image")]
    MaskOutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        image_width: u32,
        image_height: u32,
    },

    /// Component tag not recognized.
    #[error("Unsupported component: {0}")]
    UnknownComponent(String),

    /// Compression retain percentage outside 0-100.
    #[error("Retain percentage must be within 0-100, got {0}")]
    RetainOutOfRange(f64),

    /// Resize target is zero or negative.
    #[error("Invalid target dimensions: width ({width}) and height ({height}) must be positive")]
    InvalidDimensions { width: i32, height: i32 },
}

impl OpError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OpError::InvalidKernel { .. }
            | OpError::InvalidMatrix { .. }
            | OpError::DimensionMismatch { .. }
            | OpError::InvalidRaster { .. } => ErrorKind::Shape,
            OpError::SplitOutOfRange(_)
            | OpError::InvalidLevels { .. }
            | OpError::MaskOutOfBounds { .. }
            | OpError::UnknownComponent(_)
            | OpError::RetainOutOfRange(_) => ErrorKind::Range,
            OpError::InvalidDimensions { .. } => ErrorKind::Dimension,
        }
    }
}
