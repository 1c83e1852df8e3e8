//! Validation service: exposes the structural validator over HTTP.
//!
//! - `GET /` answers `{"Ping": "Pong"}`.
//! - `POST /pipelines/parse` takes a [PipelinePayload] and answers a [ParseResponse].
//!
//! Any origin may call it, so a browser editor served elsewhere can submit directly.

use std::future::Future;

use axum::{
  Json, Router,
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::error::{ConsistencyFault, ServerError};
use crate::types::{ParseResponse, PipelinePayload};
use crate::validator::validate_payload;

/// Path of the validation endpoint.
pub const PARSE_PATH: &str = "/pipelines/parse";

/// Routes of the validation service with CORS and request tracing applied.
pub fn router() -> Router {
  Router::new()
    .route("/", get(ping))
    .route(PARSE_PATH, post(parse_pipeline))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}

async fn ping() -> Json<Value> {
  Json(json!({ "Ping": "Pong" }))
}

async fn parse_pipeline(
  Json(payload): Json<PipelinePayload>,
) -> Result<Json<ParseResponse>, RejectedPipeline> {
  debug!(
    nodes = payload.nodes.len(),
    edges = payload.edges.len(),
    "parse request"
  );
  let report = validate_payload(&payload)?;
  info!(
    node_count = report.node_count,
    edge_count = report.edge_count,
    is_dag = report.is_dag,
    "pipeline parsed"
  );
  Ok(Json(report))
}

/// A payload the validator refused; answered as `400 {"detail": ...}`.
#[derive(Debug)]
pub struct RejectedPipeline(ConsistencyFault);

impl From<ConsistencyFault> for RejectedPipeline {
  fn from(fault: ConsistencyFault) -> Self {
    Self(fault)
  }
}

impl IntoResponse for RejectedPipeline {
  fn into_response(self) -> Response {
    warn!(edge = %self.0.edge, node = %self.0.node, "rejected pipeline with dangling edge");
    (
      StatusCode::BAD_REQUEST,
      Json(json!({ "detail": self.0.to_string() })),
    )
      .into_response()
  }
}

/// Binds `config`'s address and serves until ctrl-c (or SIGTERM on unix).
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
  let address = config.server_addr();
  let listener = TcpListener::bind(address).await.map_err(|source| {
    error!(%address, error = %source, "failed to bind");
    ServerError::Bind { address, source }
  })?;
  if config.binds_to_all_interfaces() {
    warn!("validation service is bound to all interfaces");
  }
  run(listener, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn run(
  listener: TcpListener,
  shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
  if let Ok(addr) = listener.local_addr() {
    info!(%addr, "validation service listening");
  }
  axum::serve(listener, router())
    .with_graceful_shutdown(shutdown)
    .await
    .map_err(|e| {
      error!(error = %e, "validation service failed");
      ServerError::Runtime(e)
    })?;
  info!("validation service shut down");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      error!(error = %e, "failed to install ctrl-c handler");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};
    match signal(SignalKind::terminate()) {
      Ok(mut s) => {
        s.recv().await;
      }
      Err(e) => {
        error!(error = %e, "failed to install SIGTERM handler");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }
  info!("shutdown signal received");
}
