// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dense 8-bit pixel array in row-major (height, width, channels) order.

use crate::error::{ImgNodesError, Result};

/// Row-major `u8` array with shape `(height, width, channels)`.
///
/// Grayscale images keep an explicit channel axis of length 1, so `shape()`
/// always has three components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelArray {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<u8>,
}

impl PixelArray {
    /// Build an array from raw interleaved samples.
    ///
    /// Fails when any axis is zero, when `channels` is not 1-4, or when
    /// `data.len()` differs from `height * width * channels`.
    pub fn from_vec(height: usize, width: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected = checked_len(height, width, channels)?;
        if data.len() != expected {
            return Err(ImgNodesError::InvalidShape(format!(
                "shape ({height}, {width}, {channels}) needs {expected} samples, got {}",
                data.len()
            )));
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Wrap a buffer whose length is already known to match the shape.
    pub(crate) fn from_raw_parts(
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(data.len(), height * width * channels);
        Self {
            height,
            width,
            channels,
            data,
        }
    }

    /// Build an array by evaluating `f(y, x, c)` for every sample.
    pub fn from_fn(
        height: usize,
        width: usize,
        channels: usize,
        mut f: impl FnMut(usize, usize, usize) -> u8,
    ) -> Result<Self> {
        let mut data = Vec::with_capacity(checked_len(height, width, channels)?);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    data.push(f(y, x, c));
                }
            }
        }
        Self::from_vec(height, width, channels, data)
    }

    /// `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Sample at row `y`, column `x`, channel `c`.
    pub fn get(&self, y: usize, x: usize, c: usize) -> Option<u8> {
        if y >= self.height || x >= self.width || c >= self.channels {
            return None;
        }
        self.data
            .get((y * self.width + x) * self.channels + c)
            .copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Sample count for a shape, rejecting empty axes, unsupported channel
/// counts and overflow.
fn checked_len(height: usize, width: usize, channels: usize) -> Result<usize> {
    if height == 0 || width == 0 {
        return Err(ImgNodesError::InvalidShape(format!(
            "empty array ({height}, {width}, {channels})"
        )));
    }
    if !(1..=4).contains(&channels) {
        return Err(ImgNodesError::InvalidShape(format!(
            "expected 1 to 4 channels, got {channels}"
        )));
    }
    height
        .checked_mul(width)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| {
            ImgNodesError::InvalidShape(format!("shape ({height}, {width}, {channels}) overflows"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_length_mismatch() {
        let err = PixelArray::from_vec(2, 2, 3, vec![0; 11]).unwrap_err();
        assert!(matches!(err, ImgNodesError::InvalidShape(_)));
    }

    #[test]
    fn from_vec_rejects_five_channels() {
        assert!(PixelArray::from_vec(1, 1, 5, vec![0; 5]).is_err());
    }

    #[test]
    fn from_vec_rejects_empty_axis() {
        assert!(PixelArray::from_vec(0, 4, 1, Vec::new()).is_err());
    }

    #[test]
    fn from_fn_rejects_overflowing_shape_before_allocating() {
        let mut calls = 0;
        let err = PixelArray::from_fn(usize::MAX, 2, 3, |_, _, _| {
            calls += 1;
            0
        })
        .unwrap_err();
        assert!(matches!(err, ImgNodesError::InvalidShape(_)));
        assert_eq!(calls, 0);
    }

    #[test]
    fn get_indexes_row_major() {
        let arr = PixelArray::from_fn(2, 3, 2, |y, x, c| (y * 100 + x * 10 + c) as u8).unwrap();
        assert_eq!(arr.shape(), (2, 3, 2));
        assert_eq!(arr.get(1, 2, 1), Some(121));
        assert_eq!(arr.get(0, 1, 0), Some(10));
        assert_eq!(arr.get(2, 0, 0), None);
        assert_eq!(arr.get(0, 0, 2), None);
    }
}
