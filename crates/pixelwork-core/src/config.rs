//! Engine presets loaded from TOML.
//!
//! Presets hold the standard kernels and matrices used by the convenience
//! operations, plus the JPEG quality used when encoding. Every field is
//! optional in the file; missing fields take their built-in defaults.
//!
//! ```toml
//! greyscale_weights = [0.299, 0.587, 0.114]
//! jpeg_quality = 85
//!
//! blur_kernel = [
//!     [0.0, 0.2, 0.0],
//!     [0.2, 0.2, 0.2],
//!     [0.0, 0.2, 0.0],
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::ColorMatrix;
use crate::convolution::Kernel;
use crate::luminance::BT709;

/// Default JPEG encode quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur when loading presets.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Standard kernels, matrices and encode settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginePresets {
    pub blur_kernel: Kernel,
    pub sharpen_kernel: Kernel,
    pub greyscale_weights: [f64; 3],
    pub sepia_matrix: ColorMatrix,
    pub jpeg_quality: u8,
}

impl Default for EnginePresets {
    fn default() -> Self {
        Self {
            blur_kernel: Kernel::gaussian_blur(),
            sharpen_kernel: Kernel::sharpen(),
            greyscale_weights: BT709,
            sepia_matrix: ColorMatrix::sepia(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl EnginePresets {
    /// Parse presets from TOML text.
    ///
    /// Kernel and matrix shapes are checked while parsing.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed TOML or invalid kernel/matrix shapes
    /// - `ConfigError::Invalid` if `jpeg_quality` is outside 1-100
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let presets: EnginePresets = toml::from_str(text)?;
        presets.validate()?;
        Ok(presets)
    }

    /// Load presets from a file.
    ///
    /// Returns the defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no presets at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serialize presets to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Greyscale reduction built from `greyscale_weights`.
    pub fn greyscale_matrix(&self) -> ColorMatrix {
        ColorMatrix::Reduce(self.greyscale_weights)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Invalid(format!(
                "jpeg_quality must be within 1-100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}
