// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometric transforms — resize, crop, scale. Each takes an `ImageValue` by
// reference and returns a new one; the pixel work is done by the `image`
// crate.

use imgnodes_core::{ImageValue, ImgNodesError, NodeConfig, Result};
use tracing::{debug, info, instrument};

/// Resize to exactly `width` x `height`, ignoring aspect ratio.
///
/// Both dimensions must be positive.
#[instrument(skip(img, config), fields(from_w = img.width(), from_h = img.height()))]
pub fn resize(img: &ImageValue, width: i64, height: i64, config: &NodeConfig) -> Result<ImageValue> {
    let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => return Err(ImgNodesError::InvalidDimensions { width, height }),
    };
    check_limit(w.into(), h.into(), config)?;

    info!(width = w, height = h, filter = ?config.resample, "Resizing image");
    let resized = img
        .as_dynamic()
        .resize_exact(w, h, config.resample.filter_type());
    debug!(new_w = resized.width(), new_h = resized.height(), "Resize complete");
    Ok(ImageValue::from_dynamic(resized))
}

/// Cut out the box with corners `(x1, y1)` (inclusive) and `(x2, y2)`
/// (exclusive).
///
/// Requires `0 <= x1 < x2 <= width` and `0 <= y1 < y2 <= height`; anything
/// else is a `CropOutOfBounds` error rather than a clamped crop.
#[instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn crop(img: &ImageValue, x1: i64, y1: i64, x2: i64, y2: i64) -> Result<ImageValue> {
    let (width, height) = img.dimensions();
    let fits = 0 <= x1
        && x1 < x2
        && x2 <= i64::from(width)
        && 0 <= y1
        && y1 < y2
        && y2 <= i64::from(height);
    if !fits {
        return Err(ImgNodesError::CropOutOfBounds {
            x1,
            y1,
            x2,
            y2,
            width,
            height,
        });
    }

    // All four coordinates are now within 0..=u32::MAX.
    let (x, y) = (x1 as u32, y1 as u32);
    let (w, h) = ((x2 - x1) as u32, (y2 - y1) as u32);
    info!(x, y, w, h, "Cropping image");
    Ok(ImageValue::from_dynamic(img.as_dynamic().crop_imm(x, y, w, h)))
}

/// Multiply both dimensions by `factor`, rounding half to even.
///
/// A factor of exactly 1 returns a copy. Non-positive or non-finite factors
/// are rejected, as are factors that round either axis down to zero.
#[instrument(skip(img, config), fields(from_w = img.width(), from_h = img.height()))]
pub fn scale(img: &ImageValue, factor: f64, config: &NodeConfig) -> Result<ImageValue> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ImgNodesError::InvalidScale(factor));
    }
    if factor == 1.0 {
        return Ok(img.clone());
    }

    let (w, h) = scaled_dimensions(img.dimensions(), factor);
    if w < 1.0 || h < 1.0 {
        return Err(ImgNodesError::InvalidDimensions {
            width: w as i64,
            height: h as i64,
        });
    }
    if !config.allows(w as u64, h as u64) || w > f64::from(u32::MAX) || h > f64::from(u32::MAX) {
        return Err(ImgNodesError::TooLarge {
            width: w as u64,
            height: h as u64,
            max_pixels: config.max_pixels,
        });
    }

    let (w, h) = (w as u32, h as u32);
    info!(factor, width = w, height = h, "Scaling image");
    let scaled = img
        .as_dynamic()
        .resize_exact(w, h, config.resample.filter_type());
    Ok(ImageValue::from_dynamic(scaled))
}

/// Target size for `scale`, before any validation.
pub fn scaled_dimensions((width, height): (u32, u32), factor: f64) -> (f64, f64) {
    (
        (f64::from(width) * factor).round_ties_even(),
        (f64::from(height) * factor).round_ties_even(),
    )
}

fn check_limit(width: u64, height: u64, config: &NodeConfig) -> Result<()> {
    if config.allows(width, height) {
        Ok(())
    } else {
        Err(ImgNodesError::TooLarge {
            width,
            height,
            max_pixels: config.max_pixels,
        })
    }
}
