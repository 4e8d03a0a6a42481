//! Linear color transforms and single-component extraction.
//!
//! ## Color matrices
//!
//! A [`ColorMatrix`] is either a single row that reduces a pixel to one
//! scalar (written to all three channels) or three rows that each produce
//! one output channel.
//!
//! ## Components
//!
//! [`Component`] selects a per-pixel reducer. The red, green and blue
//! components keep one channel in place and zero the other two. The luma,
//! intensity and value components replicate one scalar into every channel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::luminance::{self, BT709};
use crate::mask::Selection;
use crate::raster::clamp_channel;
use crate::{OpError, Raster};

/// Standard sepia tone coefficients.
#[rustfmt::skip]
pub const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// A 1x3 or 3x3 linear color transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub enum ColorMatrix {
    /// One row: every output channel gets the same weighted sum.
    Reduce([f64; 3]),
    /// Three rows: row k produces output channel k.
    Mix([[f64; 3]; 3]),
}

impl ColorMatrix {
    /// Build a matrix from its rows.
    ///
    /// # Errors
    /// Returns `OpError::InvalidMatrix` unless there are 1 or 3 rows of
    /// exactly 3 weights.
    pub fn new(rows: &[Vec<f64>]) -> Result<Self, OpError> {
        let invalid = || OpError::InvalidMatrix { rows: rows.len() };
        let row = |r: &Vec<f64>| -> Result<[f64; 3], OpError> {
            <[f64; 3]>::try_from(r.as_slice()).map_err(|_| invalid())
        };
        match rows {
            [only] => Ok(Self::Reduce(row(only)?)),
            [r, g, b] => Ok(Self::Mix([row(r)?, row(g)?, row(b)?])),
            _ => Err(invalid()),
        }
    }

    /// BT.709 greyscale reduction.
    pub fn greyscale() -> Self {
        Self::Reduce(BT709)
    }

    /// Sepia toning.
    pub fn sepia() -> Self {
        Self::Mix(SEPIA)
    }

    /// Transform one pixel, rounding and clamping each channel.
    #[inline]
    pub fn transform(&self, rgb: [u8; 3]) -> [u8; 3] {
        match self {
            Self::Reduce(weights) => {
                let v = clamp_channel(luminance::weighted(rgb, *weights));
                [v, v, v]
            }
            Self::Mix(rows) => rows.map(|weights| clamp_channel(luminance::weighted(rgb, weights))),
        }
    }

    /// Matrix rows.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        match self {
            Self::Reduce(weights) => vec![weights.to_vec()],
            Self::Mix(rows) => rows.iter().map(|r| r.to_vec()).collect(),
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for ColorMatrix {
    type Error = OpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        ColorMatrix::new(&rows)
    }
}

impl From<ColorMatrix> for Vec<Vec<f64>> {
    fn from(matrix: ColorMatrix) -> Self {
        matrix.rows()
    }
}

/// Apply `matrix` to every eligible pixel.
///
/// # Errors
/// Returns an error if the split exceeds 100 or the mask size differs from
/// the image.
pub fn apply_matrix(
    image: &Raster,
    matrix: &ColorMatrix,
    mask: Option<&Raster>,
    split: Option<u8>,
) -> Result<Raster, OpError> {
    let selection = Selection::new(image, mask, split)?;
    Ok(selection.apply(image, |_, _, rgb| matrix.transform(rgb)))
}

/// Convert to greyscale with BT.709 weights.
pub fn greyscale(
    image: &Raster,
    mask: Option<&Raster>,
    split: Option<u8>,
) -> Result<Raster, OpError> {
    apply_matrix(image, &ColorMatrix::greyscale(), mask, split)
}

/// Apply sepia toning.
pub fn sepia(image: &Raster, mask: Option<&Raster>, split: Option<u8>) -> Result<Raster, OpError> {
    apply_matrix(image, &ColorMatrix::sepia(), mask, split)
}

/// A per-pixel component to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Red,
    Green,
    Blue,
    /// BT.601 weighted brightness.
    Luma,
    /// Channel mean, rounded down.
    Intensity,
    /// Largest channel.
    Value,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::Red,
        Component::Green,
        Component::Blue,
        Component::Luma,
        Component::Intensity,
        Component::Value,
    ];

    /// Lowercase tag for this component.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Red => "red",
            Component::Green => "green",
            Component::Blue => "blue",
            Component::Luma => "luma",
            Component::Intensity => "intensity",
            Component::Value => "value",
        }
    }

    /// Reduce one pixel.
    #[inline]
    pub fn reduce(&self, rgb: [u8; 3]) -> [u8; 3] {
        let keep = |channel: usize| {
            let mut out = [0u8; 3];
            out[channel] = rgb[channel];
            out
        };
        let splat = |v: u8| [v, v, v];
        match self {
            Component::Red => keep(0),
            Component::Green => keep(1),
            Component::Blue => keep(2),
            Component::Luma => splat(luminance::luma_u8(rgb)),
            Component::Intensity => splat(luminance::intensity_u8(rgb)),
            Component::Value => splat(luminance::value_u8(rgb)),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Component::ALL
            .into_iter()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| OpError::UnknownComponent(s.to_string()))
    }
}

/// Extract `component` from every mask-selected pixel.
///
/// Extraction has no split parameter; unselected pixels pass through.
///
/// # Errors
/// Returns `OpError::DimensionMismatch` if the mask size differs from the
/// image.
pub fn extract_component(
    image: &Raster,
    component: Component,
    mask: Option<&Raster>,
) -> Result<Raster, OpError> {
    let selection = Selection::new(image, mask, None)?;
    Ok(selection.apply(image, |_, _, rgb| component.reduce(rgb)))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
