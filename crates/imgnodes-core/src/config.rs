// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Node configuration.

use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Resampling filter used by the resize and scale nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resample {
    Nearest,
    Bilinear,
    /// Catmull-Rom cubic, the usual "bicubic" default.
    #[default]
    Bicubic,
    Gaussian,
    Lanczos,
}

impl Resample {
    /// The `image` crate filter backing this policy.
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Bilinear => FilterType::Triangle,
            Self::Bicubic => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos => FilterType::Lanczos3,
        }
    }
}

/// Settings shared by every node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Filter used when resizing or scaling.
    pub resample: Resample,
    /// Largest image (width * height) a node will decode or produce.
    pub max_pixels: u64,
    /// JPEG quality (1-100) used by `ImageValue::to_jpeg_with_config`.
    pub jpeg_quality: u8,
    /// Longest side of previews from `ImageValue::to_thumbnail_with_config`.
    pub thumbnail_max_side: u32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            resample: Resample::default(),
            // Twice the common 89.5 MP decompression-bomb warning threshold.
            max_pixels: 178_956_970,
            jpeg_quality: 75,
            thumbnail_max_side: 200,
        }
    }
}

impl NodeConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// True when an image of `width` x `height` is within `max_pixels`.
    pub fn allows(&self, width: u64, height: u64) -> bool {
        width.saturating_mul(height) <= self.max_pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImgNodesError;

    #[test]
    fn default_uses_bicubic() {
        let config = NodeConfig::default();
        assert_eq!(config.resample, Resample::Bicubic);
        assert!(matches!(config.resample.filter_type(), FilterType::CatmullRom));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = NodeConfig::from_json(r#"{ "resample": "lanczos" }"#).unwrap();
        assert_eq!(config.resample, Resample::Lanczos);
        assert_eq!(config.max_pixels, NodeConfig::default().max_pixels);
        assert_eq!(config.jpeg_quality, 75);
        assert_eq!(config.thumbnail_max_side, 200);
    }

    #[test]
    fn encoding_fields_parse() {
        let config =
            NodeConfig::from_json(r#"{ "jpeg_quality": 90, "thumbnail_max_side": 64 }"#).unwrap();
        assert_eq!(config.jpeg_quality, 90);
        assert_eq!(config.thumbnail_max_side, 64);
        assert_eq!(config.resample, Resample::Bicubic);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = NodeConfig::from_json(r#"{ "resample": "sinc" }"#).unwrap_err();
        assert!(matches!(err, ImgNodesError::Config(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodes.json");
        std::fs::write(&path, r#"{ "max_pixels": 1000 }"#).unwrap();

        let config = NodeConfig::load(&path).unwrap();
        assert_eq!(config.max_pixels, 1000);
        assert!(config.allows(10, 100));
        assert!(!config.allows(10, 101));
    }
}
