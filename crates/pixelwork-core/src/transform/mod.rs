//! Geometric operations: mirroring and resampling.
//!
//! Both operate on the whole image. Neither takes a mask or split
//! percentage.
//!
//! # Coordinate System
//!
//! - `x` indexes columns, `y` indexes rows
//! - Origin is the top-left corner

mod flip;
mod resize;

pub use flip::{flip_horizontal, flip_vertical};
pub use resize::resize;
