//! A node on the pipeline canvas.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{NodeConfig, NodeKind, Port};

/// Stable identifier of a node (`<wire-tag>-<n>`, e.g. `text-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
  /// Wraps an existing id string.
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  /// Id for the `seq`-th node of `kind`.
  pub fn for_kind(kind: &NodeKind, seq: u64) -> Self {
    Self(format!("{}-{}", kind.as_str(), seq))
  }

  /// The id as a string slice.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for NodeId {
  fn from(s: &str) -> Self {
    Self(s.to_string())
  }
}

/// Canvas position of a node; layout only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

impl Position {
  /// Creates a position at `(x, y)`.
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// A node of the pipeline graph.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineNode {
  pub id: NodeId,
  pub position: Position,
  pub config: NodeConfig,
}

impl PipelineNode {
  /// Creates a node with the given configuration and position.
  pub fn new(id: NodeId, config: NodeConfig, position: Position) -> Self {
    Self {
      id,
      position,
      config,
    }
  }

  /// Kind of the node, read from its configuration.
  pub fn kind(&self) -> NodeKind {
    self.config.kind()
  }

  /// Ports derived from the current configuration.
  pub fn ports(&self) -> Vec<Port> {
    crate::ports::resolve_ports(&self.config)
  }
}
