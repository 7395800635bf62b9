// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// CropImage — cut a rectangle out of an image.

use imgnodes_core::{Node, PortMap, PortSpec, PortType, Result};
use tracing::instrument;

use crate::transform;

pub const NODE_ID: &str = "imgnodes.crop";

pub const IMG: &str = "img";
pub const X1: &str = "x1";
pub const Y1: &str = "y1";
pub const X2: &str = "x2";
pub const Y2: &str = "y2";
pub const CROPPED_IMG: &str = "cropped_img";

/// Crops `img` to the box `(x1, y1)`-`(x2, y2)` and writes it to
/// `cropped_img`. The box must lie inside the image.
#[derive(Debug, Clone)]
pub struct CropImage {
    inputs: PortMap,
    outputs: PortMap,
}

impl CropImage {
    pub fn new() -> Self {
        Self {
            inputs: PortMap::new(
                NODE_ID,
                [
                    PortSpec::new(IMG, PortType::Image, "Image to crop"),
                    PortSpec::new(X1, PortType::Int, "Left edge (inclusive)"),
                    PortSpec::new(Y1, PortType::Int, "Top edge (inclusive)"),
                    PortSpec::new(X2, PortType::Int, "Right edge (exclusive)"),
                    PortSpec::new(Y2, PortType::Int, "Bottom edge (exclusive)"),
                ],
            ),
            outputs: PortMap::new(
                NODE_ID,
                [PortSpec::new(CROPPED_IMG, PortType::Image, "Cropped image")],
            ),
        }
    }
}

impl Default for CropImage {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for CropImage {
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
        let x1 = self.inputs.require_int(X1)?;
        let y1 = self.inputs.require_int(Y1)?;
        let x2 = self.inputs.require_int(X2)?;
        let y2 = self.inputs.require_int(Y2)?;
        let cropped = transform::crop(img, x1, y1, x2, y2)?;
        self.outputs.set(CROPPED_IMG, cropped.into())
    }
}
