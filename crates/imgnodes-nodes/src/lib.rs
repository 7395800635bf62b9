// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// imgnodes-nodes — Image nodes for async node-graph execution.
//
// Provides the geometric transforms (resize, crop, scale) and four nodes that
// expose them, plus byte decoding, through typed ports.

pub mod nodes;
pub mod transform;

// Re-export the node types so callers can use `imgnodes_nodes::ResizeImage` etc.
pub use nodes::{CropImage, FromBytes, ResizeImage, ScaleImage};

// Re-export the core API the nodes are driven through.
pub use imgnodes_core::{ImageValue, ImgNodesError, Node, NodeConfig, PixelArray, PortValue};
