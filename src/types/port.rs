//! Connection points on a pipeline node.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a port receives data (target) or emits it (source).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
  /// Input port; edges end here.
  #[serde(alias = "target")]
  Input,
  /// Output port; edges start here.
  #[serde(alias = "source")]
  Output,
}

impl PortDirection {
  /// Name used by rendering surfaces for this direction (`target` / `source`).
  pub fn handle_type(self) -> &'static str {
    match self {
      PortDirection::Input => "target",
      PortDirection::Output => "source",
    }
  }
}

impl fmt::Display for PortDirection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PortDirection::Input => write!(f, "input"),
      PortDirection::Output => write!(f, "output"),
    }
  }
}

/// Identifier of a port, unique within its owning node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortId(String);

impl PortId {
  /// Creates a port id from any string.
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  /// The id as a string slice.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for PortId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for PortId {
  fn from(s: &str) -> Self {
    Self(s.to_string())
  }
}

impl From<String> for PortId {
  fn from(s: String) -> Self {
    Self(s)
  }
}

/// Side of the node box a port is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortSide {
  Left,
  Right,
}

/// Vertical placement of a port along its side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "unit", content = "value")]
pub enum PortOffset {
  /// Percentage of the node height.
  Percent(f32),
  /// Absolute distance from the top edge, in pixels.
  Pixels(u32),
}

/// Display hint for a port. Has no structural meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortAnchor {
  pub side: PortSide,
  /// `None` centres the port on its side.
  pub offset: Option<PortOffset>,
}

impl PortAnchor {
  /// Anchor on the left side, optionally offset.
  pub fn left(offset: Option<PortOffset>) -> Self {
    Self {
      side: PortSide::Left,
      offset,
    }
  }

  /// Anchor on the right side, optionally offset.
  pub fn right(offset: Option<PortOffset>) -> Self {
    Self {
      side: PortSide::Right,
      offset,
    }
  }
}

/// A resolved port of a node. Computed from the node's configuration, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
  pub id: PortId,
  pub direction: PortDirection,
  pub anchor: Option<PortAnchor>,
}

impl Port {
  /// Input port drawn on the left side.
  pub fn input(id: impl Into<PortId>, offset: Option<PortOffset>) -> Self {
    Self {
      id: id.into(),
      direction: PortDirection::Input,
      anchor: Some(PortAnchor::left(offset)),
    }
  }

  /// Output port drawn on the right side.
  pub fn output(id: impl Into<PortId>, offset: Option<PortOffset>) -> Self {
    Self {
      id: id.into(),
      direction: PortDirection::Output,
      anchor: Some(PortAnchor::right(offset)),
    }
  }

  /// True for target ports.
  pub fn is_input(&self) -> bool {
    self.direction == PortDirection::Input
  }

  /// True for source ports.
  pub fn is_output(&self) -> bool {
    self.direction == PortDirection::Output
  }

  /// Template variable this port was derived from, if any.
  pub fn variable_name(&self) -> Option<&str> {
    crate::template::variable_from_port_id(self.id.as_str())
  }

  /// Handle id a rendering surface attaches to this port: `<node-id>-<port-id>`.
  pub fn handle_id(&self, node_id: &str) -> String {
    format!("{}-{}", node_id, self.id)
  }
}
