//! CLI: Run the pipeline validation service.
//!
//! Serves `GET /` and `POST /pipelines/parse` until ctrl-c.
//!
//! Usage: `pipeline_server [--host HOST] [--port PORT]`
//!
//! Set RUST_LOG=pipeline_builder=debug for per-request validation events.

use clap::Parser;
use pipeline_builder::config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use pipeline_builder::server;
use std::net::IpAddr;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run the pipeline validation service.
#[derive(Parser, Debug)]
#[command(name = "pipeline_server")]
#[command(
  after_help = r#"Environment variables (override --host and --port when set and parseable):
  PIPELINE_HOST   Address to bind (default: 127.0.0.1).
  PIPELINE_PORT   Port to bind (default: 8000).

Examples:
  pipeline_server
  pipeline_server --host 0.0.0.0 --port 9000"#
)]
struct Args {
  /// Address to bind. Overridden by PIPELINE_HOST if set.
  #[arg(long, value_name = "HOST", default_value_t = DEFAULT_HOST)]
  host: IpAddr,

  /// Port to bind. Overridden by PIPELINE_PORT if set.
  #[arg(long, value_name = "PORT", default_value_t = DEFAULT_PORT)]
  port: u16,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = Args::parse();

  // Env vars override flags.
  let config = ServerConfig::new(args.host, args.port).with_env_overrides();

  info!(addr = %config.server_addr(), "pipeline_server starting");
  if let Err(e) = server::serve(config).await {
    eprintln!("Server error: {}", e);
    process::exit(1);
  }
}
