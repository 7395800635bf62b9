// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ScaleImage — resize by a uniform factor.

use imgnodes_core::{Node, NodeConfig, PortMap, PortSpec, PortType, Result};
use tracing::instrument;

use crate::transform;

pub const NODE_ID: &str = "imgnodes.scale";

pub const IMG: &str = "img";
pub const SCALE: &str = "scale";
pub const SCALED_IMG: &str = "scaled_img";

#[derive(Debug, Clone)]
pub struct ScaleImage {
    inputs: PortMap,
    outputs: PortMap,
    config: NodeConfig,
}

impl ScaleImage {
    pub fn new() -> Self {
        Self::with_config(NodeConfig::default())
    }

    pub fn with_config(config: NodeConfig) -> Self {
        Self {
            inputs: PortMap::new(
                NODE_ID,
                [
                    PortSpec::new(IMG, PortType::Image, "Image to scale"),
                    PortSpec::new(SCALE, PortType::Float, "Scale factor").with_default(1.0),
                ],
            ),
            outputs: PortMap::new(
                NODE_ID,
                [PortSpec::new(SCALED_IMG, PortType::Image, "Scaled image")],
            ),
            config,
        }
    }
}

impl Default for ScaleImage {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for ScaleImage {
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
        let factor = self.inputs.require_float(SCALE)?;
        let scaled = transform::scale(img, factor, &self.config)?;
        self.outputs.set(SCALED_IMG, scaled.into())
    }
}
