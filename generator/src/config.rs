//! Compiled-in generation settings.
//!
//! The generator reads no files and no environment; [`IconConfig::default`]
//! is the configuration every run of the binary uses.

use core::{fmt, num::NonZeroU32};
use std::path::PathBuf;

use crate::error::GenerateError;

/// Base image the icon set is derived from, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "assets/icon-base.png";

/// Directory the web app serves its manifest icons from.
pub const DEFAULT_OUTPUT_DIR: &str = "client/public/icons";

/// Icon sizes required by the web app manifest.
pub const DEFAULT_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Edge length of a square output icon, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetSize(NonZeroU32);

impl TargetSize {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for TargetSize {
    type Error = GenerateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(GenerateError::InvalidSize(value))
    }
}

/// Formats as `NxN`, the notation used in filenames and manifests.
impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{size}x{size}", size = self.get())
    }
}

/// Inputs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    /// Path of the base raster image. The format is detected from the contents;
    /// PNG, JPEG, GIF, WebP, BMP, TIFF and ICO are decoded.
    pub source: PathBuf,
    /// Directory receiving `icon-NxN.png` files. Created with parents if missing.
    pub output_dir: PathBuf,
    /// Sizes in generation order. Duplicates regenerate the same file.
    pub sizes: Vec<u32>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

impl IconConfig {
    /// Validates the configured sizes, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidSize`] for the first size that is zero.
    pub fn target_sizes(&self) -> Result<Vec<TargetSize>, GenerateError> {
        self.sizes.iter().copied().map(TargetSize::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_manifest_sizes() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.source, PathBuf::from("assets/icon-base.png"));
        assert_eq!(cfg.output_dir, PathBuf::from("client/public/icons"));
        let sizes: Vec<u32> = cfg
            .target_sizes()
            .unwrap()
            .into_iter()
            .map(TargetSize::get)
            .collect();
        assert_eq!(sizes, vec![72, 96, 128, 144, 152, 192, 384, 512]);
    }

    #[test]
    fn default_paths_are_relative() {
        let cfg = IconConfig::default();
        assert!(cfg.source.is_relative(), "source must not be machine specific");
        assert!(
            cfg.output_dir.is_relative(),
            "output dir must not be machine specific"
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        let cfg = IconConfig {
            sizes: vec![16, 0, 32],
            ..IconConfig::default()
        };
        let err = cfg.target_sizes().unwrap_err();
        assert!(matches!(err, GenerateError::InvalidSize(0)), "got {err:?}");
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let cfg = IconConfig {
            sizes: vec![48, 16, 48],
            ..IconConfig::default()
        };
        let sizes: Vec<u32> = cfg
            .target_sizes()
            .unwrap()
            .into_iter()
            .map(TargetSize::get)
            .collect();
        assert_eq!(sizes, vec![48, 16, 48]);
    }

    #[test]
    fn target_size_displays_as_square() {
        let size = TargetSize::try_from(192).unwrap();
        assert_eq!(size.to_string(), "192x192");
    }
}
