// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The node abstraction: named typed inputs, named typed outputs, and one
// awaitable invocation.
//
// Scheduling, wiring outputs to inputs, cancellation and timeouts belong to
// whatever executor drives the nodes. A node only reads its inputs, does its
// work, and fills its outputs.

use std::future::Future;

use tracing::{debug, warn};

use crate::error::Result;
use crate::port::{Port, PortMap};
use crate::types::PortValue;

/// A unit of work with typed input and output ports.
pub trait Node: Send {
    /// Stable identifier, e.g. `"imgnodes.resize"`.
    fn node_id(&self) -> &'static str;

    fn inputs(&self) -> &PortMap;

    fn inputs_mut(&mut self) -> &mut PortMap;

    fn outputs(&self) -> &PortMap;

    fn outputs_mut(&mut self) -> &mut PortMap;

    /// Read the inputs and write the outputs. Called by [`Node::trigger`].
    fn run(&mut self) -> impl Future<Output = Result<()>> + Send;

    fn get_input(&self, name: &str) -> Result<&Port> {
        self.inputs().get(name)
    }

    fn set_input(&mut self, name: &str, value: impl Into<PortValue>) -> Result<()> {
        self.inputs_mut().set(name, value.into())
    }

    fn get_output(&self, name: &str) -> Result<&Port> {
        self.outputs().get(name)
    }

    /// Value on output `name`; fails when the node has not produced one.
    fn output(&self, name: &str) -> Result<&PortValue> {
        self.outputs().value(name)
    }

    /// Run the node once.
    ///
    /// Outputs are cleared first, so after a failed run no output holds a
    /// value from an earlier invocation.
    fn trigger(&mut self) -> impl Future<Output = Result<()>> + Send {
        async move {
            let node = self.node_id();
            self.outputs_mut().reset();
            debug!(node, "Node triggered");
            let result = self.run().await;
            match &result {
                Ok(()) => debug!(node, "Node finished"),
                Err(err) => warn!(node, error = %err, "Node failed"),
            }
            result
        }
    }
}
