// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// FromBytes — decode an encoded image (PNG, JPEG, ...) into an image value.

use imgnodes_core::{ImageValue, Node, NodeConfig, PortMap, PortSpec, PortType, Result};
use tracing::instrument;

pub const NODE_ID: &str = "imgnodes.from_bytes";

/// Input: encoded image bytes.
pub const DATA: &str = "data";
/// Output: decoded image.
pub const IMG: &str = "img";

/// Decodes the bytes on `data` and writes the image to `img`.
///
/// The format is sniffed from the content. Images whose pixel count exceeds
/// `NodeConfig::max_pixels` are refused before decoding.
#[derive(Debug, Clone)]
pub struct FromBytes {
    inputs: PortMap,
    outputs: PortMap,
    config: NodeConfig,
}

impl FromBytes {
    pub fn new() -> Self {
        Self::with_config(NodeConfig::default())
    }

    pub fn with_config(config: NodeConfig) -> Self {
        Self {
            inputs: PortMap::new(
                NODE_ID,
                [PortSpec::new(DATA, PortType::Bytes, "Encoded image bytes")],
            ),
            outputs: PortMap::new(
                NODE_ID,
                [PortSpec::new(IMG, PortType::Image, "Decoded image")],
            ),
            config,
        }
    }
}

impl Default for FromBytes {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for FromBytes {
    fn node_id(&self) -> &'static str {
        NODE_ID
    }

    fn inputs(&self) -> &PortMap {
        &self.inputs
    }

    fn inputs_mut(&mut self) -> &mut PortMap {
        &mut self.inputs
    }

    fn outputs(&self) -> &PortMap {
        &self.outputs
    }

    fn outputs_mut(&mut self) -> &mut PortMap {
        &mut self.outputs
    }

    #[instrument(skip(self), fields(node = NODE_ID))]
    async fn run(&mut self) -> Result<()> {
        let data = self.inputs.require_bytes(DATA)?;
        let img = ImageValue::from_bytes_limited(data, self.config.max_pixels)?;
        self.outputs.set(IMG, img.into())
    }
}
