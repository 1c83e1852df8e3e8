//! Editable pipeline graph: an arena of nodes keyed by stable id plus edges referencing them
//! by id.
//!
//! Invariant: every edge's source is an existing output port of an existing node and its target
//! an existing input port. Every mutation restores it before returning, so a caller holding
//! `&PipelineGraph` never sees a dangling edge.

use std::collections::HashMap;

use tracing::{debug, info, instrument};

use crate::error::{PipelineError, PipelineResult};
use crate::ports::{find_port, removed_ports};
use crate::types::{
  EdgeId, Endpoint, GraphSnapshot, NodeConfig, NodeId, NodeKind, PipelineEdge, PipelineNode,
  Port, PortDirection, PortId, Position,
};

/// The pipeline being edited.
#[derive(Debug, Clone, Default)]
pub struct PipelineGraph {
  nodes: HashMap<NodeId, PipelineNode>,
  /// Node ids in insertion order.
  order: Vec<NodeId>,
  edges: Vec<PipelineEdge>,
  /// Next sequence number per kind tag; ids are never reused.
  next_seq: HashMap<String, u64>,
}

impl PipelineGraph {
  /// Creates an empty pipeline.
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a node whose kind is the variant of `config`. Returns its fresh id.
  #[instrument(level = "trace", skip(self, config), fields(kind = %config.kind()))]
  pub fn add_node(&mut self, config: NodeConfig, position: Position) -> NodeId {
    let kind = config.kind();
    let seq = self.next_seq.entry(kind.as_str().to_string()).or_insert(0);
    *seq += 1;
    let id = NodeId::for_kind(&kind, *seq);
    self.order.push(id.clone());
    self
      .nodes
      .insert(id.clone(), PipelineNode::new(id.clone(), config, position));
    debug!(node_id = %id, kind = %kind, "node added");
    id
  }

  /// Adds a node of `kind` with its default configuration.
  pub fn add_node_of_kind(&mut self, kind: &NodeKind, position: Position) -> NodeId {
    self.add_node(NodeConfig::default_for(kind), position)
  }

  /// Removes a node and every edge touching it. Unknown ids are a no-op.
  ///
  /// Returns the removed edges.
  #[instrument(level = "trace", skip(self))]
  pub fn remove_node(&mut self, id: &NodeId) -> Vec<PipelineEdge> {
    if self.nodes.remove(id).is_none() {
      return Vec::new();
    }
    self.order.retain(|n| n != id);
    let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.edges)
      .into_iter()
      .partition(|e| e.touches(id));
    self.edges = kept;
    debug!(node_id = %id, removed_edges = removed.len(), "node removed");
    removed
  }

  /// Replaces a node's configuration, re-derives its ports and drops edges whose endpoint port
  /// vanished. Returns the ids of the dropped edges.
  #[instrument(level = "trace", skip(self, config))]
  pub fn update_node_config(
    &mut self,
    id: &NodeId,
    config: NodeConfig,
  ) -> PipelineResult<Vec<EdgeId>> {
    let node = self
      .nodes
      .get_mut(id)
      .ok_or_else(|| PipelineError::NodeNotFound(id.clone()))?;
    let current = node.kind();
    let requested = config.kind();
    if current != requested {
      return Err(PipelineError::KindMismatch {
        node: id.clone(),
        current,
        requested,
      });
    }

    let before = node.ports();
    node.config = config;
    let after = node.ports();

    let vanished = removed_ports(&before, &after);
    if vanished.is_empty() {
      return Ok(Vec::new());
    }
    let vanished: Vec<(PortId, PortDirection)> = vanished
      .into_iter()
      .map(|p| (p.id.clone(), p.direction))
      .collect();
    debug!(node_id = %id, ports = ?vanished, "ports removed by configuration change");

    let dropped = self.drop_edges_where(|e| {
      vanished.iter().any(|(port, direction)| match direction {
        PortDirection::Output => e.source.node == *id && e.source.port == *port,
        PortDirection::Input => e.target.node == *id && e.target.port == *port,
      })
    });
    if !dropped.is_empty() {
      info!(node_id = %id, dropped = dropped.len(), "dropped edges attached to removed ports");
    }
    Ok(dropped)
  }

  /// Moves a node on the canvas. Unknown ids are a no-op; structure is unaffected.
  pub fn set_position(&mut self, id: &NodeId, position: Position) {
    if let Some(node) = self.nodes.get_mut(id) {
      node.position = position;
    }
  }

  /// Connects an output port of `source` to an input port of `target`.
  ///
  /// Fan-in, fan-out and cycles are allowed; only endpoint existence is checked.
  #[instrument(level = "trace", skip(self))]
  pub fn add_edge(
    &mut self,
    source: &NodeId,
    source_port: &str,
    target: &NodeId,
    target_port: &str,
  ) -> PipelineResult<EdgeId> {
    let source_port = self.require_port(source, source_port, PortDirection::Output)?;
    let target_port = self.require_port(target, target_port, PortDirection::Input)?;
    let edge = PipelineEdge {
      id: EdgeId::new_v4(),
      source: Endpoint::new(source.clone(), source_port),
      target: Endpoint::new(target.clone(), target_port),
    };
    let id = edge.id;
    debug!(edge_id = %id, source = %source, target = %target, "edge added");
    self.edges.push(edge);
    Ok(id)
  }

  /// Removes an edge. Unknown ids are a no-op.
  pub fn remove_edge(&mut self, id: &EdgeId) -> Option<PipelineEdge> {
    let idx = self.edges.iter().position(|e| e.id == *id)?;
    Some(self.edges.remove(idx))
  }

  /// Detached copy of the current nodes and edges.
  #[instrument(level = "trace", skip(self))]
  pub fn snapshot(&self) -> GraphSnapshot {
    let nodes = self
      .order
      .iter()
      .filter_map(|id| self.nodes.get(id).cloned())
      .collect();
    GraphSnapshot::from_parts(nodes, self.edges.clone())
  }

  /// Node with `id`, if present.
  pub fn node(&self, id: &NodeId) -> Option<&PipelineNode> {
    self.nodes.get(id)
  }

  /// Nodes in insertion order.
  pub fn nodes(&self) -> impl Iterator<Item = &PipelineNode> {
    self.order.iter().filter_map(|id| self.nodes.get(id))
  }

  /// Edges in insertion order.
  pub fn edges(&self) -> &[PipelineEdge] {
    &self.edges
  }

  /// Edge with `id`, if present.
  pub fn edge(&self, id: &EdgeId) -> Option<&PipelineEdge> {
    self.edges.iter().find(|e| e.id == *id)
  }

  /// Edges with either endpoint on `id`.
  pub fn edges_of<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a PipelineEdge> + 'a {
    self.edges.iter().filter(move |e| e.touches(id))
  }

  /// Currently resolved ports of a node; `None` if the node does not exist.
  pub fn ports_of(&self, id: &NodeId) -> Option<Vec<Port>> {
    self.nodes.get(id).map(PipelineNode::ports)
  }

  /// Number of nodes.
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  /// Number of edges.
  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  /// True when the pipeline has no nodes.
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  fn require_port(
    &self,
    node: &NodeId,
    port: &str,
    direction: PortDirection,
  ) -> PipelineResult<PortId> {
    let not_found = || PipelineError::PortNotFound {
      node: node.clone(),
      port: PortId::from(port),
      direction,
    };
    let ports = self.ports_of(node).ok_or_else(not_found)?;
    find_port(&ports, port, direction)
      .map(|p| p.id.clone())
      .ok_or_else(not_found)
  }

  fn drop_edges_where(&mut self, pred: impl Fn(&PipelineEdge) -> bool) -> Vec<EdgeId> {
    let mut dropped = Vec::new();
    self.edges.retain(|e| {
      if pred(e) {
        dropped.push(e.id);
        false
      } else {
        true
      }
    });
    dropped
  }
}
