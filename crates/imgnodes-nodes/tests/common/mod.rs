// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared fixtures for the integration tests.

use imgnodes_nodes::{ImageValue, PixelArray};

/// Deterministic noise image of shape `(height, width, channels)`.
///
/// Uses a xorshift generator so every run sees the same pixels.
pub fn noise_array(height: usize, width: usize, channels: usize, seed: u64) -> PixelArray {
    let mut state = seed.max(1);
    PixelArray::from_fn(height, width, channels, |_, _, _| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 56) as u8
    })
    .expect("noise fixture shape is valid")
}

pub fn noise_image(height: usize, width: usize, channels: usize) -> ImageValue {
    ImageValue::from_array(noise_array(height, width, channels, 0x5eed))
        .expect("noise fixture converts to an image")
}
