// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ResizeImage — resize to an exact width and height.

use imgnodes_core::{Node, NodeConfig, PortMap, PortSpec, PortType, Result};
use tracing::instrument;

use crate::transform;

pub const NODE_ID: &str = "imgnodes.resize";

pub const IMG: &str = "img";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const RESIZED_IMG: &str = "resized_img";

/// Resizes `img` to `width` x `height` using the configured resampling
/// filter and writes the result to `resized_img`.
#[derive(Debug, Clone)]
pub struct ResizeImage {
    inputs: PortMap,
    outputs: PortMap,
    config: NodeConfig,
}

impl ResizeImage {
    pub fn new() -> Self {
        Self::with_config(NodeConfig::default())
    }

    pub fn with_config(config: NodeConfig) -> Self {
        Self {
            inputs: PortMap::new(
                NODE_ID,
                [
                    PortSpec::new(IMG, PortType::Image, "Image to resize"),
                    PortSpec::new(WIDTH, PortType::Int, "Target width in pixels"),
                    PortSpec::new(HEIGHT, PortType::Int, "Target height in pixels"),
                ],
            ),
            outputs: PortMap::new(
                NODE_ID,
                [PortSpec::new(RESIZED_IMG, PortType::Image, "Resized image")],
            ),
            config,
        }
    }
}

impl Default for ResizeImage {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for ResizeImage {
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
        let img = self.inputs.require_image(IMG)?;
        let width = self.inputs.require_int(WIDTH)?;
        let height = self.inputs.require_int(HEIGHT)?;
        let resized = transform::resize(img, width, height, &self.config)?;
        self.outputs.set(RESIZED_IMG, resized.into())
    }
}
