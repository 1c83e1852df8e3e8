//! Runtime configuration for the validation service and the submission client.
//!
//! Environment variables:
//! - `PIPELINE_HOST`, `PIPELINE_PORT`: address the service binds to (default `127.0.0.1:8000`).
//! - `PIPELINE_ENDPOINT`: URL the submission client posts to
//!   (default `http://127.0.0.1:8000/pipelines/parse`).
//! - `PIPELINE_TIMEOUT_SECS`: submission request timeout in seconds (default 30).

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/pipelines/parse";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the validation service listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
  pub host: IpAddr,
  pub port: u16,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST,
      port: DEFAULT_PORT,
    }
  }
}

impl ServerConfig {
  /// Creates a config for `host:port`.
  pub fn new(host: IpAddr, port: u16) -> Self {
    Self { host, port }
  }

  /// Defaults overridden by `PIPELINE_HOST` / `PIPELINE_PORT`.
  pub fn from_env() -> Self {
    Self::default().with_env_overrides()
  }

  /// `self` with `PIPELINE_HOST` / `PIPELINE_PORT` applied on top. Unparseable values are
  /// ignored with a warning.
  pub fn with_env_overrides(self) -> Self {
    Self {
      host: env_parsed("PIPELINE_HOST").unwrap_or(self.host),
      port: env_parsed("PIPELINE_PORT").unwrap_or(self.port),
    }
  }

  /// Socket address to bind.
  pub fn server_addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }

  /// True for `0.0.0.0` / `::`.
  pub fn binds_to_all_interfaces(&self) -> bool {
    self.host.is_unspecified()
  }
}

/// How pipelines are submitted to the validation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitConfig {
  pub endpoint: String,
  #[serde(with = "secs")]
  pub timeout: Duration,
}

impl Default for SubmitConfig {
  fn default() -> Self {
    Self {
      endpoint: DEFAULT_ENDPOINT.to_string(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
  }
}

impl SubmitConfig {
  /// Creates a config posting to `endpoint` with `timeout` per request.
  pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
    Self {
      endpoint: endpoint.into(),
      timeout,
    }
  }

  /// Defaults overridden by `PIPELINE_ENDPOINT` / `PIPELINE_TIMEOUT_SECS`.
  pub fn from_env() -> Self {
    let defaults = Self::default();
    Self {
      endpoint: env::var("PIPELINE_ENDPOINT")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(defaults.endpoint),
      timeout: env_parsed::<u64>("PIPELINE_TIMEOUT_SECS")
        .map(Duration::from_secs)
        .unwrap_or(defaults.timeout),
    }
  }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
  let raw = env::var(key).ok()?;
  match raw.trim().parse() {
    Ok(v) => Some(v),
    Err(_) => {
      warn!(key, value = %raw, "ignoring unparseable environment variable");
      None
    }
  }
}

mod secs {
  use std::time::Duration;

  use serde::{Deserialize, Deserializer, Serializer};

  /// Writes a duration as whole seconds.
  pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_secs())
  }

  /// Reads whole seconds into a duration.
  pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
    u64::deserialize(d).map(Duration::from_secs)
  }
}
