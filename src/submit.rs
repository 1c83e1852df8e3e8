//! Submission adapter: sends a snapshot to the validation service and turns the answer into a
//! report for the user.
//!
//! A submission works on a detached [GraphSnapshot], so the model can keep being edited while a
//! request is in flight. Two submissions in parallel are independent.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::config::SubmitConfig;
use crate::error::{PipelineError, TransportError};
use crate::types::{GraphSnapshot, ParseResponse, PipelinePayload, ValidationReport};
use crate::validator::{validate, validate_payload};

/// Something that answers the `/pipelines/parse` contract.
#[async_trait]
pub trait PipelineTransport: Send + Sync {
  async fn parse(&self, payload: &PipelinePayload) -> Result<ParseResponse, TransportError>;
}

/// Posts payloads as JSON to a remote validation service.
#[derive(Debug, Clone)]
pub struct HttpTransport {
  client: reqwest::Client,
  endpoint: String,
  timeout: Duration,
}

impl HttpTransport {
  /// Creates a transport posting to `config.endpoint` with `config.timeout` per request.
  pub fn new(config: &SubmitConfig) -> Result<Self, TransportError> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|source| TransportError::Request {
        endpoint: config.endpoint.clone(),
        source,
      })?;
    Ok(Self {
      client,
      endpoint: config.endpoint.clone(),
      timeout: config.timeout,
    })
  }

  /// URL requests are posted to.
  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  fn request_error(&self, source: reqwest::Error) -> TransportError {
    if source.is_timeout() {
      TransportError::Timeout {
        endpoint: self.endpoint.clone(),
        timeout: self.timeout,
      }
    } else {
      TransportError::Request {
        endpoint: self.endpoint.clone(),
        source,
      }
    }
  }
}

#[async_trait]
impl PipelineTransport for HttpTransport {
  #[instrument(level = "debug", skip(self, payload), fields(endpoint = %self.endpoint))]
  async fn parse(&self, payload: &PipelinePayload) -> Result<ParseResponse, TransportError> {
    let response = self
      .client
      .post(&self.endpoint)
      .json(payload)
      .send()
      .await
      .map_err(|e| self.request_error(e))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| self.request_error(e))?;
    if !status.is_success() {
      warn!(status = status.as_u16(), "validation service answered with an error");
      return Err(TransportError::Status {
        status: status.as_u16(),
        body,
      });
    }
    serde_json::from_str(&body).map_err(|e| TransportError::MalformedResponse(e.to_string()))
  }
}

/// Runs the validator in process; answers exactly what the service would.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTransport;

#[async_trait]
impl PipelineTransport for LocalTransport {
  async fn parse(&self, payload: &PipelinePayload) -> Result<ParseResponse, TransportError> {
    validate_payload(payload).map_err(|fault| TransportError::Status {
      status: 400,
      body: serde_json::json!({ "detail": fault.to_string() }).to_string(),
    })
  }
}

/// Submits snapshots through a transport and checks the answer against the local verdict.
#[derive(Clone)]
pub struct Submitter {
  transport: Arc<dyn PipelineTransport>,
}

impl Submitter {
  /// Creates a submitter over `transport`.
  pub fn new(transport: impl PipelineTransport + 'static) -> Self {
    Self {
      transport: Arc::new(transport),
    }
  }

  /// Submitter posting to the endpoint in `config`.
  pub fn http(config: &SubmitConfig) -> Result<Self, TransportError> {
    Ok(Self::new(HttpTransport::new(config)?))
  }

  /// Submitter that never leaves the process.
  pub fn local() -> Self {
    Self::new(LocalTransport)
  }

  /// Sends `snapshot` and returns the report to show.
  ///
  /// A response that disagrees with the local analysis of the same snapshot is rejected as
  /// [TransportError::ResponseMismatch].
  #[instrument(level = "debug", skip(self, snapshot), fields(node_count = snapshot.node_count(), edge_count = snapshot.edge_count()))]
  pub async fn submit(&self, snapshot: &GraphSnapshot) -> Result<SubmissionReport, PipelineError> {
    let local = validate(snapshot)?;
    let payload = snapshot.to_payload();
    debug!("submitting pipeline");

    let remote = self.transport.parse(&payload).await.map_err(|e| {
      warn!(error = %e, "pipeline submission failed");
      e
    })?;
    if remote != local {
      warn!(%remote, %local, "validation service disagrees with local analysis");
      return Err(TransportError::ResponseMismatch { remote, local }.into());
    }

    info!(
      node_count = remote.node_count,
      edge_count = remote.edge_count,
      is_dag = remote.is_dag,
      "pipeline submitted"
    );
    Ok(SubmissionReport::new(remote))
  }
}

impl fmt::Debug for Submitter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Submitter").finish_non_exhaustive()
  }
}

/// Outcome of a successful submission; `Display` renders the text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReport {
  pub report: ValidationReport,
}

impl SubmissionReport {
  /// Wraps a verdict for display.
  pub fn new(report: ValidationReport) -> Self {
    Self { report }
  }
}

impl fmt::Display for SubmissionReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Pipeline Analysis Results:")?;
    writeln!(f, "Number of Nodes: {}", self.report.node_count)?;
    writeln!(f, "Number of Edges: {}", self.report.edge_count)?;
    if self.report.is_dag {
      write!(f, "Is DAG: Yes")
    } else {
      write!(f, "Is DAG: No (Contains Cycles)")
    }
  }
}

/// Text shown to the user when a submission fails.
pub fn render_failure(err: &PipelineError) -> String {
  format!("Error submitting pipeline:\n{}", err)
}
