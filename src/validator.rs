//! Structural validation: node count, edge count and whether the pipeline is acyclic.
//!
//! Only node ids and the (source node, target node) pairs of edges matter. Ports, positions and
//! configuration never change the verdict.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, instrument};

use crate::error::ConsistencyFault;
use crate::types::{GraphSnapshot, PipelinePayload, ValidationReport};

/// Validates a snapshot taken from the model.
#[instrument(level = "trace", skip(snapshot), fields(node_count = snapshot.node_count(), edge_count = snapshot.edge_count()))]
pub fn validate(snapshot: &GraphSnapshot) -> Result<ValidationReport, ConsistencyFault> {
  let nodes = snapshot.nodes().iter().map(|n| n.id.as_str());
  let edges = snapshot
    .edges()
    .iter()
    .map(|e| (e.id.to_string(), e.source.node.as_str(), e.target.node.as_str()));
  analyze(nodes, edges)
}

/// Validates a pipeline as received on the wire.
#[instrument(level = "trace", skip(payload), fields(node_count = payload.nodes.len(), edge_count = payload.edges.len()))]
pub fn validate_payload(payload: &PipelinePayload) -> Result<ValidationReport, ConsistencyFault> {
  let nodes = payload.nodes.iter().map(|n| n.id.as_str());
  let edges = payload
    .edges
    .iter()
    .map(|e| (e.id.clone(), e.source.as_str(), e.target.as_str()));
  analyze(nodes, edges)
}

fn analyze<'a>(
  nodes: impl Iterator<Item = &'a str>,
  edges: impl Iterator<Item = (String, &'a str, &'a str)>,
) -> Result<ValidationReport, ConsistencyFault> {
  let mut graph: DiGraph<&'a str, ()> = DiGraph::new();
  let mut index: HashMap<&'a str, NodeIndex> = HashMap::new();
  let mut node_count = 0;
  for id in nodes {
    node_count += 1;
    index.entry(id).or_insert_with(|| graph.add_node(id));
  }

  let mut edge_count = 0;
  for (edge, source, target) in edges {
    edge_count += 1;
    let lookup = |node: &str| {
      index.get(node).copied().ok_or_else(|| ConsistencyFault {
        edge: edge.clone(),
        node: node.to_string(),
      })
    };
    let from = lookup(source)?;
    let to = lookup(target)?;
    graph.add_edge(from, to, ());
  }

  // Self-loops count as back edges.
  let is_dag = !is_cyclic_directed(&graph);
  debug!(node_count, edge_count, is_dag, "pipeline validated");
  Ok(ValidationReport::new(node_count, edge_count, is_dag))
}
