// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// imgnodes — Core types, ports, node trait and error definitions shared by
// the node crates.

pub mod array;
pub mod config;
pub mod error;
pub mod format;
pub mod node;
pub mod port;
pub mod types;

pub use array::PixelArray;
pub use config::{NodeConfig, Resample};
pub use error::{ImgNodesError, Result};
pub use format::ImageValue;
pub use node::Node;
pub use port::{Port, PortMap, PortSpec};
pub use types::{PortType, PortValue};
