// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Values that travel through node ports.

use serde::{Deserialize, Serialize};

use crate::format::ImageValue;

/// Declared type of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortType {
    Bytes,
    Int,
    Float,
    Image,
}

impl PortType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Int => "int",
            Self::Float => "float",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for PortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A value held by a port.
#[derive(Debug, Clone, PartialEq)]
pub enum PortValue {
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
    Image(ImageValue),
}

impl PortValue {
    pub fn port_type(&self) -> PortType {
        match self {
            Self::Bytes(_) => PortType::Bytes,
            Self::Int(_) => PortType::Int,
            Self::Float(_) => PortType::Float,
            Self::Image(_) => PortType::Image,
        }
    }

    /// Coerce this value for a port of type `target`.
    ///
    /// Identical types pass through; an integer widens to a float. Every other
    /// pairing is rejected and the value is handed back.
    pub fn coerce(self, target: PortType) -> std::result::Result<Self, Self> {
        match (self, target) {
            (Self::Int(v), PortType::Float) => Ok(Self::Float(v as f64)),
            (value, target) if value.port_type() == target => Ok(value),
            (value, _) => Err(value),
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageValue> {
        match self {
            Self::Image(img) => Some(img),
            _ => None,
        }
    }

    pub fn into_image(self) -> Option<ImageValue> {
        match self {
            Self::Image(img) => Some(img),
            _ => None,
        }
    }
}

impl From<Vec<u8>> for PortValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for PortValue {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<i64> for PortValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for PortValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for PortValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for PortValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<ImageValue> for PortValue {
    fn from(img: ImageValue) -> Self {
        Self::Image(img)
    }
}
