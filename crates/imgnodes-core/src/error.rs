// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error type for imgnodes.
//
// Errors raised by the `image` crate are carried through untouched; only the
// conditions the port/node layer can detect itself get their own variants.

use thiserror::Error;

use crate::types::PortType;

/// Top-level error type for all imgnodes operations.
#[derive(Debug, Error)]
pub enum ImgNodesError {
    // -- Port errors --
    #[error("node `{node}` has no port named `{port}`")]
    UnknownPort { node: &'static str, port: String },

    #[error("port `{port}` on node `{node}` has no value")]
    MissingValue { node: &'static str, port: String },

    #[error("port `{port}` expects {expected}, got {actual}")]
    TypeMismatch {
        port: String,
        expected: PortType,
        actual: PortType,
    },

    // -- Image parameter errors --
    #[error("invalid array shape: {0}")]
    InvalidShape(String),

    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("crop box ({x1}, {y1}, {x2}, {y2}) does not fit a {width}x{height} image")]
    CropOutOfBounds {
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        width: u32,
        height: u32,
    },

    #[error("scale factor must be a positive finite number, got {0}")]
    InvalidScale(f64),

    #[error("image of {width}x{height} exceeds the limit of {max_pixels} pixels")]
    TooLarge {
        width: u64,
        height: u64,
        max_pixels: u64,
    },

    // -- Library errors, passed through --
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ImgNodesError>;
