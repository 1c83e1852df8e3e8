//! Error types for the pipeline model, the validator and the submission boundary.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::types::{NodeId, NodeKind, PortDirection, PortId, ValidationReport};

/// Result alias used across the crate.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// Errors raised by pipeline operations.
#[derive(Debug, Error)]
pub enum PipelineError {
  /// An edge endpoint does not exist on its node. Reject the edge and carry on.
  #[error("{direction} port '{port}' not found on node '{node}'")]
  PortNotFound {
    node: NodeId,
    port: PortId,
    direction: PortDirection,
  },

  #[error("node '{0}' not found")]
  NodeNotFound(NodeId),

  #[error("node '{node}' is a {current} node and cannot take a {requested} configuration")]
  KindMismatch {
    node: NodeId,
    current: NodeKind,
    requested: NodeKind,
  },

  #[error(transparent)]
  Transport(#[from] TransportError),

  #[error(transparent)]
  Consistency(#[from] ConsistencyFault),
}

/// Failures at the submission boundary. The pipeline itself is never modified.
#[derive(Debug, Error)]
pub enum TransportError {
  #[error("request to {endpoint} failed: {source}")]
  Request {
    endpoint: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("request to {endpoint} timed out after {timeout:?}")]
  Timeout { endpoint: String, timeout: Duration },

  #[error("backend error: {status}")]
  Status { status: u16, body: String },

  #[error("malformed response: {0}")]
  MalformedResponse(String),

  #[error("backend reported {remote} but the pipeline is {local}")]
  ResponseMismatch {
    remote: ValidationReport,
    local: ValidationReport,
  },
}

/// A snapshot edge names a node the snapshot does not contain.
///
/// The model never produces such a snapshot; seeing one means an internal invariant broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("edge '{edge}' references node '{node}' which is not in the pipeline")]
pub struct ConsistencyFault {
  pub edge: String,
  pub node: String,
}

/// Failures of the validation service.
#[derive(Debug, Error)]
pub enum ServerError {
  #[error("failed to bind to {address}: {source}")]
  Bind {
    address: SocketAddr,
    #[source]
    source: io::Error,
  },

  #[error("server error: {0}")]
  Runtime(#[source] io::Error),
}
