//! Variable extraction from `{{name}}` text templates.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::instrument;

/// Prefix of input ports derived from template variables.
pub const VARIABLE_PORT_PREFIX: &str = "var-";

/// `{{name}}` where name is one or more ASCII word characters. Whitespace inside the braces is
/// not allowed, so `{{ name }}` stays literal text.
static VARIABLE_PATTERN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("valid variable pattern"));

/// Returns the distinct variables referenced in `text`, in first-occurrence order.
///
/// Malformed delimiters simply fail to match; there are no error cases.
#[instrument(level = "trace")]
pub fn extract_variables(text: &str) -> Vec<String> {
  let mut vars: Vec<String> = Vec::new();
  for cap in VARIABLE_PATTERN.captures_iter(text) {
    let name = &cap[1];
    if !vars.iter().any(|v| v == name) {
      vars.push(name.to_string());
    }
  }
  vars
}

/// Port id for a template variable (`var-<name>`).
pub fn variable_port_id(name: &str) -> String {
  format!("{VARIABLE_PORT_PREFIX}{name}")
}

/// Variable name embedded in a port id produced by [variable_port_id].
pub fn variable_from_port_id(port_id: &str) -> Option<&str> {
  port_id
    .strip_prefix(VARIABLE_PORT_PREFIX)
    .filter(|name| !name.is_empty())
}
