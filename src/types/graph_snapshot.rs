//! Immutable point-in-time copy of a pipeline graph.
//!
//! A snapshot is detached from the editable model: later edits never show through, so it can
//! be handed to a validation in flight on another task.

use std::sync::Arc;

use super::{PayloadEdge, PayloadNode, PipelineEdge, PipelineNode, PipelinePayload};

/// Ordered nodes and edges of a pipeline at one instant. Cloning is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSnapshot {
  nodes: Arc<[PipelineNode]>,
  edges: Arc<[PipelineEdge]>,
}

impl GraphSnapshot {
  /// Builds a snapshot from owned parts. The model is the usual producer; building one by hand
  /// bypasses its referential checks.
  pub fn from_parts(nodes: Vec<PipelineNode>, edges: Vec<PipelineEdge>) -> Self {
    Self {
      nodes: nodes.into(),
      edges: edges.into(),
    }
  }

  /// Nodes in insertion order.
  pub fn nodes(&self) -> &[PipelineNode] {
    &self.nodes
  }

  /// Edges in insertion order.
  pub fn edges(&self) -> &[PipelineEdge] {
    &self.edges
  }

  /// Number of nodes.
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  /// Number of edges.
  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  /// True when the snapshot has no nodes.
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Serializes the snapshot into the validation service's request record.
  pub fn to_payload(&self) -> PipelinePayload {
    PipelinePayload {
      nodes: self
        .nodes
        .iter()
        .map(|n| PayloadNode {
          id: n.id.to_string(),
          kind: n.kind(),
          position: n.position,
          data: n.config.to_data(n.id.as_str()),
        })
        .collect(),
      edges: self
        .edges
        .iter()
        .map(|e| PayloadEdge {
          id: e.id.to_string(),
          source: e.source.node.to_string(),
          target: e.target.node.to_string(),
        })
        .collect(),
    }
  }
}
