//! Kind-specific configuration records for pipeline nodes.
//!
//! The variant of [NodeConfig] is the node's type tag: a node's ports are a function of its
//! configuration alone (see [crate::ports::resolve_ports]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{NodeKind, UnknownTag};

/// Default template of a freshly created text node.
pub const DEFAULT_TEXT_TEMPLATE: &str = "{{input}}";

/// Maximum length of a merger separator.
pub const MAX_SEPARATOR_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputType {
  #[default]
  Text,
  File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputType {
  #[default]
  Text,
  Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorOperation {
  #[default]
  Add,
  Subtract,
  Multiply,
  Divide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCondition {
  #[default]
  Equals,
  Contains,
  Greater,
  Less,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeType {
  #[default]
  Concatenate,
  Array,
  Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationType {
  #[default]
  Email,
  Url,
  Phone,
  Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  Debug,
  #[default]
  Info,
  Warn,
  Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
  pub input_name: String,
  pub input_type: InputType,
}

impl Default for InputConfig {
  fn default() -> Self {
    Self {
      input_name: "input".to_string(),
      input_type: InputType::Text,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
  pub output_name: String,
  pub output_type: OutputType,
}

impl Default for OutputConfig {
  fn default() -> Self {
    Self {
      output_name: "output".to_string(),
      output_type: OutputType::Text,
    }
  }
}

/// Text node: a template whose `{{variables}}` become input ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
  pub text: String,
}

impl TextConfig {
  /// Creates a text configuration with `text` as its template.
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }
}

impl Default for TextConfig {
  fn default() -> Self {
    Self::new(DEFAULT_TEXT_TEMPLATE)
  }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
  pub operation: CalculatorOperation,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
  pub condition: FilterCondition,
  pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergerConfig {
  pub merge_type: MergeType,
  pub separator: String,
}

impl MergerConfig {
  /// Builds a merger config, truncating the separator to [MAX_SEPARATOR_LEN] characters.
  pub fn new(merge_type: MergeType, separator: &str) -> Self {
    Self {
      merge_type,
      separator: separator.chars().take(MAX_SEPARATOR_LEN).collect(),
    }
  }
}

impl Default for MergerConfig {
  fn default() -> Self {
    Self::new(MergeType::Concatenate, ", ")
  }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfig {
  pub validation_type: ValidationType,
  pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
  pub log_level: LogLevel,
  pub prefix: String,
}

impl Default for LoggerConfig {
  fn default() -> Self {
    Self {
      log_level: LogLevel::Info,
      prefix: "[LOG]".to_string(),
    }
  }
}

/// Configuration of a node; one variant per [NodeKind].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeConfig {
  Input(InputConfig),
  Output(OutputConfig),
  Text(TextConfig),
  Calculator(CalculatorConfig),
  Filter(FilterConfig),
  Merger(MergerConfig),
  Validator(ValidatorConfig),
  Logger(LoggerConfig),
  Llm,
  /// Node of a kind this crate does not model; its data record is carried as is.
  Unknown {
    kind: UnknownTag,
    data: Map<String, Value>,
  },
}

impl NodeConfig {
  /// Default configuration for a freshly instantiated node of `kind`.
  pub fn default_for(kind: &NodeKind) -> Self {
    match kind {
      NodeKind::Input => NodeConfig::Input(InputConfig::default()),
      NodeKind::Output => NodeConfig::Output(OutputConfig::default()),
      NodeKind::Text => NodeConfig::Text(TextConfig::default()),
      NodeKind::Calculator => NodeConfig::Calculator(CalculatorConfig::default()),
      NodeKind::Filter => NodeConfig::Filter(FilterConfig::default()),
      NodeKind::Merger => NodeConfig::Merger(MergerConfig::default()),
      NodeKind::Validator => NodeConfig::Validator(ValidatorConfig::default()),
      NodeKind::Logger => NodeConfig::Logger(LoggerConfig::default()),
      NodeKind::Llm => NodeConfig::Llm,
      NodeKind::Unknown(tag) => NodeConfig::Unknown {
        kind: tag.clone(),
        data: Map::new(),
      },
    }
  }

  /// Configuration for a node of an unmodelled kind carrying `data`.
  ///
  /// `None` if `tag` names a known kind; those take their typed configuration.
  pub fn opaque(tag: &str, data: Map<String, Value>) -> Option<Self> {
    match NodeKind::from(tag) {
      NodeKind::Unknown(kind) => Some(NodeConfig::Unknown { kind, data }),
      _ => None,
    }
  }

  /// Shorthand for a text node configuration.
  pub fn text(template: impl Into<String>) -> Self {
    NodeConfig::Text(TextConfig::new(template))
  }

  /// Kind of the node this configuration belongs to.
  pub fn kind(&self) -> NodeKind {
    match self {
      NodeConfig::Input(_) => NodeKind::Input,
      NodeConfig::Output(_) => NodeKind::Output,
      NodeConfig::Text(_) => NodeKind::Text,
      NodeConfig::Calculator(_) => NodeKind::Calculator,
      NodeConfig::Filter(_) => NodeKind::Filter,
      NodeConfig::Merger(_) => NodeKind::Merger,
      NodeConfig::Validator(_) => NodeKind::Validator,
      NodeConfig::Logger(_) => NodeKind::Logger,
      NodeConfig::Llm => NodeKind::Llm,
      NodeConfig::Unknown { kind, .. } => NodeKind::Unknown(kind.clone()),
    }
  }

  /// Template text, for text nodes.
  pub fn template(&self) -> Option<&str> {
    match self {
      NodeConfig::Text(c) => Some(&c.text),
      _ => None,
    }
  }

  /// Serializes the configuration into the `data` record sent to the validator.
  ///
  /// The record carries `id` and `nodeType`. Keys already present in an unmodelled kind's
  /// data are kept as they are.
  pub fn to_data(&self, node_id: &str) -> Value {
    let fields = match self {
      NodeConfig::Input(c) => serde_json::to_value(c),
      NodeConfig::Output(c) => serde_json::to_value(c),
      NodeConfig::Text(c) => serde_json::to_value(c),
      NodeConfig::Calculator(c) => serde_json::to_value(c),
      NodeConfig::Filter(c) => serde_json::to_value(c),
      NodeConfig::Merger(c) => serde_json::to_value(c),
      NodeConfig::Validator(c) => serde_json::to_value(c),
      NodeConfig::Logger(c) => serde_json::to_value(c),
      NodeConfig::Llm => Ok(Value::Object(Map::new())),
      NodeConfig::Unknown { data, .. } => Ok(Value::Object(data.clone())),
    };
    let mut map = match fields {
      Ok(Value::Object(map)) => map,
      _ => Map::new(),
    };
    map
      .entry("id")
      .or_insert_with(|| Value::String(node_id.to_string()));
    map
      .entry("nodeType")
      .or_insert_with(|| Value::String(self.kind().as_str().to_string()));
    Value::Object(map)
  }
}
