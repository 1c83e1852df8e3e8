//! Verdict of the structural validator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node count, edge count and acyclicity of a pipeline.
///
/// Serialized with the validation service's field names (`num_nodes`, `num_edges`, `is_dag`),
/// so the same value is both the local verdict and the wire response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
  #[serde(rename = "num_nodes")]
  pub node_count: usize,
  #[serde(rename = "num_edges")]
  pub edge_count: usize,
  pub is_dag: bool,
}

impl ValidationReport {
  /// Creates a report from counts and the acyclicity verdict.
  pub fn new(node_count: usize, edge_count: usize, is_dag: bool) -> Self {
    Self {
      node_count,
      edge_count,
      is_dag,
    }
  }

  /// Verdict for a graph with no nodes.
  pub fn empty() -> Self {
    Self::new(0, 0, true)
  }
}

impl fmt::Display for ValidationReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} nodes, {} edges, {}",
      self.node_count,
      self.edge_count,
      if self.is_dag { "acyclic" } else { "cyclic" }
    )
  }
}
