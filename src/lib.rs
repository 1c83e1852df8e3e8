//! # pipeline-builder
//!
//! Model of directed data-processing pipelines built from typed nodes, plus a structural
//! validator that reports node count, edge count and whether the pipeline is acyclic.
//!
//! ## Architecture
//!
//! - [template] extracts `{{name}}` variables from text templates.
//! - [ports] derives each node's ports from its configuration.
//! - [graph] is the editable model; every mutation keeps edges attached to existing ports.
//! - [validator] checks a detached [GraphSnapshot] for cycles.
//! - [submit] sends a snapshot to a validation service and builds the user-facing report.
//! - [server] is that validation service (`POST /pipelines/parse`).

pub mod config;
pub mod error;
pub mod graph;
pub mod ports;
pub mod server;
pub mod submit;
pub mod template;
pub mod types;
pub mod validator;
#[cfg(test)]
mod validator_test;

pub use error::{ConsistencyFault, PipelineError, PipelineResult, TransportError};
pub use graph::PipelineGraph;
pub use ports::resolve_ports;
pub use submit::{PipelineTransport, SubmissionReport, Submitter, render_failure};
pub use template::extract_variables;
pub use types::{GraphSnapshot, NodeConfig, NodeId, NodeKind, Port, ValidationReport};
pub use validator::{validate, validate_payload};
