//! Rectangular masks and region selection.
//!
//! A mask is an ordinary [`Raster`](crate::Raster) the size of the image it
//! guards. A pixel is selected when the mask's red sample is `0`; any other
//! value leaves the source pixel unchanged.
//!
//! ## Selection Rules
//!
//! Mask-aware operations combine two optional restrictions:
//!
//! - **Mask**: only pixels whose mask sample is black are eligible
//! - **Split**: only columns left of `width * percent / 100` are eligible
//!
//! A pixel changes only when both restrictions admit it. Without either,
//! the whole image is eligible.

pub mod rect;
pub mod selection;

pub use rect::create_mask;
pub use selection::{split_boundary, Selection};

/// Mask sample marking a selected pixel.
pub const SELECTED: [u8; 3] = [0, 0, 0];

/// Mask sample marking an unselected pixel.
pub const UNSELECTED: [u8; 3] = [255, 255, 255];
