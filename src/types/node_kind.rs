//! Node kinds available on the pipeline canvas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Type tag of a pipeline node.
///
/// Wire tags follow the editor's palette (`customInput`, `llm`, `text`, ...). Tags this crate
/// does not know are kept verbatim in [NodeKind::Unknown]. A known tag never ends up there:
/// [UnknownTag] is only produced by parsing a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
  Input,
  Output,
  Text,
  Calculator,
  Filter,
  Merger,
  Validator,
  Logger,
  /// Language-model processor.
  Llm,
  Unknown(UnknownTag),
}

/// A wire tag that names none of the known kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownTag(String);

impl UnknownTag {
  /// The tag as received.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for UnknownTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl NodeKind {
  /// Every kind the palette can instantiate, in palette order.
  pub const KNOWN: [NodeKind; 9] = [
    NodeKind::Input,
    NodeKind::Llm,
    NodeKind::Output,
    NodeKind::Text,
    NodeKind::Calculator,
    NodeKind::Filter,
    NodeKind::Merger,
    NodeKind::Validator,
    NodeKind::Logger,
  ];

  /// Wire tag, also used as the node id prefix.
  pub fn as_str(&self) -> &str {
    match self {
      NodeKind::Input => "customInput",
      NodeKind::Output => "customOutput",
      NodeKind::Text => "text",
      NodeKind::Calculator => "calculator",
      NodeKind::Filter => "filter",
      NodeKind::Merger => "merger",
      NodeKind::Validator => "validator",
      NodeKind::Logger => "logger",
      NodeKind::Llm => "llm",
      NodeKind::Unknown(tag) => tag.as_str(),
    }
  }

  /// Label shown in the palette and in node headers.
  pub fn display_name(&self) -> &str {
    match self {
      NodeKind::Input => "Input",
      NodeKind::Output => "Output",
      NodeKind::Text => "Text",
      NodeKind::Calculator => "Calculator",
      NodeKind::Filter => "Filter",
      NodeKind::Merger => "Merger",
      NodeKind::Validator => "Validator",
      NodeKind::Logger => "Logger",
      NodeKind::Llm => "LLM",
      NodeKind::Unknown(tag) => tag.as_str(),
    }
  }

  /// False for tags parsed into [NodeKind::Unknown].
  pub fn is_known(&self) -> bool {
    !matches!(self, NodeKind::Unknown(_))
  }
}

impl fmt::Display for NodeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl From<&str> for NodeKind {
  fn from(tag: &str) -> Self {
    match tag {
      "customInput" => NodeKind::Input,
      "customOutput" => NodeKind::Output,
      "text" => NodeKind::Text,
      "calculator" => NodeKind::Calculator,
      "filter" => NodeKind::Filter,
      "merger" => NodeKind::Merger,
      "validator" => NodeKind::Validator,
      "logger" => NodeKind::Logger,
      "llm" => NodeKind::Llm,
      other => NodeKind::Unknown(UnknownTag(other.to_string())),
    }
  }
}

impl FromStr for NodeKind {
  type Err = std::convert::Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(NodeKind::from(s))
  }
}

impl Serialize for NodeKind {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for NodeKind {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let tag = String::deserialize(deserializer)?;
    Ok(NodeKind::from(tag.as_str()))
  }
}
