//! Records exchanged with the validation service.
//!
//! Request: `{nodes: [{id, type, position, data}], edges: [{id, source, target}]}`.
//! Response: [ParseResponse], i.e. `{num_nodes, num_edges, is_dag}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{NodeKind, Position, ValidationReport};

/// Response of `POST /pipelines/parse`.
pub type ParseResponse = ValidationReport;

/// A node as sent to the validation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadNode {
  pub id: String,
  #[serde(rename = "type")]
  pub kind: NodeKind,
  #[serde(default)]
  pub position: Position,
  #[serde(default)]
  pub data: Value,
}

/// An edge as sent to the validation service; endpoints are node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadEdge {
  pub id: String,
  pub source: String,
  pub target: String,
}

/// Body of `POST /pipelines/parse`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelinePayload {
  pub nodes: Vec<PayloadNode>,
  pub edges: Vec<PayloadEdge>,
}
