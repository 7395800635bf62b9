// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Named, typed node ports.

use tracing::trace;

use crate::error::{ImgNodesError, Result};
use crate::format::ImageValue;
use crate::types::{PortType, PortValue};

/// Static description of a port.
#[derive(Debug, Clone)]
pub struct PortSpec {
    pub name: &'static str,
    pub port_type: PortType,
    pub description: &'static str,
    pub default: Option<PortValue>,
}

impl PortSpec {
    pub fn new(name: &'static str, port_type: PortType, description: &'static str) -> Self {
        Self {
            name,
            port_type,
            description,
            default: None,
        }
    }

    /// Value the port holds until something is assigned.
    pub fn with_default(mut self, value: impl Into<PortValue>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A port and its current value.
#[derive(Debug, Clone)]
pub struct Port {
    spec: PortSpec,
    value: Option<PortValue>,
}

impl Port {
    pub fn new(spec: PortSpec) -> Self {
        let value = spec.default.clone();
        Self { spec, value }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn port_type(&self) -> PortType {
        self.spec.port_type
    }

    pub fn description(&self) -> &'static str {
        self.spec.description
    }

    pub fn value(&self) -> Option<&PortValue> {
        self.value.as_ref()
    }

    /// Assign a value, coercing it to the port type.
    pub fn set(&mut self, value: PortValue) -> Result<()> {
        let value = value
            .coerce(self.spec.port_type)
            .map_err(|rejected| ImgNodesError::TypeMismatch {
                port: self.spec.name.to_string(),
                expected: self.spec.port_type,
                actual: rejected.port_type(),
            })?;
        self.value = Some(value);
        Ok(())
    }

    /// Reset to the declared default.
    pub fn reset(&mut self) {
        self.value = self.spec.default.clone();
    }

    pub fn take(&mut self) -> Option<PortValue> {
        self.value.take()
    }
}

/// The input or output side of a node.
#[derive(Debug, Clone)]
pub struct PortMap {
    node: &'static str,
    ports: Vec<Port>,
}

impl PortMap {
    pub fn new(node: &'static str, specs: impl IntoIterator<Item = PortSpec>) -> Self {
        Self {
            node,
            ports: specs.into_iter().map(Port::new).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Port> {
        self.ports
            .iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| self.unknown(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Port> {
        match self.ports.iter().position(|p| p.name() == name) {
            Some(idx) => Ok(&mut self.ports[idx]),
            None => Err(self.unknown(name)),
        }
    }

    pub fn set(&mut self, name: &str, value: PortValue) -> Result<()> {
        trace!(node = self.node, port = name, kind = %value.port_type(), "Port set");
        self.get_mut(name)?.set(value)
    }

    /// Value of `name`, or `MissingValue` when the port is empty.
    pub fn value(&self, name: &str) -> Result<&PortValue> {
        self.get(name)?
            .value()
            .ok_or_else(|| ImgNodesError::MissingValue {
                node: self.node,
                port: name.to_string(),
            })
    }

    pub fn require_bytes(&self, name: &str) -> Result<&[u8]> {
        let value = self.value(name)?;
        value.as_bytes().ok_or_else(|| mismatch(name, PortType::Bytes, value))
    }

    pub fn require_int(&self, name: &str) -> Result<i64> {
        let value = self.value(name)?;
        value.as_int().ok_or_else(|| mismatch(name, PortType::Int, value))
    }

    pub fn require_float(&self, name: &str) -> Result<f64> {
        let value = self.value(name)?;
        value.as_float().ok_or_else(|| mismatch(name, PortType::Float, value))
    }

    pub fn require_image(&self, name: &str) -> Result<&ImageValue> {
        let value = self.value(name)?;
        value.as_image().ok_or_else(|| mismatch(name, PortType::Image, value))
    }

    /// Reset every port to its default.
    pub fn reset(&mut self) {
        self.ports.iter_mut().for_each(Port::reset);
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ports.iter().map(Port::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter()
    }

    fn unknown(&self, name: &str) -> ImgNodesError {
        ImgNodesError::UnknownPort {
            node: self.node,
            port: name.to_string(),
        }
    }
}

fn mismatch(name: &str, expected: PortType, actual: &PortValue) -> ImgNodesError {
    ImgNodesError::TypeMismatch {
        port: name.to_string(),
        expected,
        actual: actual.port_type(),
    }
}
