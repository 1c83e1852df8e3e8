//! The node palette: kinds an editing surface offers, grouped for the toolbar.

use serde::Serialize;

use super::NodeKind;

/// One draggable palette entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
  pub kind: NodeKind,
  pub label: String,
}

/// A labelled toolbar group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteGroup {
  pub label: &'static str,
  pub entries: Vec<PaletteEntry>,
}

fn group(label: &'static str, kinds: &[NodeKind]) -> PaletteGroup {
  PaletteGroup {
    label,
    entries: kinds
      .iter()
      .map(|kind| PaletteEntry {
        kind: kind.clone(),
        label: kind.display_name().to_string(),
      })
      .collect(),
  }
}

/// Palette groups in toolbar order.
pub fn palette() -> Vec<PaletteGroup> {
  vec![
    group(
      "Core",
      &[NodeKind::Input, NodeKind::Llm, NodeKind::Output, NodeKind::Text],
    ),
    group(
      "Processing",
      &[
        NodeKind::Calculator,
        NodeKind::Filter,
        NodeKind::Merger,
        NodeKind::Validator,
      ],
    ),
    group("Utilities", &[NodeKind::Logger]),
  ]
}
