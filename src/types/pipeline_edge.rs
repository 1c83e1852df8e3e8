//! A directed connection between two node ports.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{NodeId, PortId};

/// Unique identifier of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(Uuid);

impl EdgeId {
  /// Fresh random edge id.
  pub fn new_v4() -> Self {
    Self(Uuid::new_v4())
  }

  /// The underlying UUID.
  pub fn as_uuid(&self) -> &Uuid {
    &self.0
  }
}

impl fmt::Display for EdgeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// One end of an edge: a port on a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
  pub node: NodeId,
  pub port: PortId,
}

impl Endpoint {
  /// Creates an endpoint on `port` of `node`.
  pub fn new(node: NodeId, port: PortId) -> Self {
    Self { node, port }
  }
}

/// A directed edge from an output port to an input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEdge {
  pub id: EdgeId,
  pub source: Endpoint,
  pub target: Endpoint,
}

impl PipelineEdge {
  /// True if either endpoint is on `node`.
  pub fn touches(&self, node: &NodeId) -> bool {
    self.source.node == *node || self.target.node == *node
  }

  /// True if source and target are the same node.
  pub fn is_self_loop(&self) -> bool {
    self.source.node == self.target.node
  }
}
