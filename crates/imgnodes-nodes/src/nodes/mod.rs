// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Node adapters — one node per image operation.

pub mod crop;
pub mod from_bytes;
pub mod resize;
pub mod scale;

pub use crop::CropImage;
pub use from_bytes::FromBytes;
pub use resize::ResizeImage;
pub use scale::ScaleImage;
