//! Tests for the node palette.

use super::{NodeKind, palette};

#[test]
fn groups_in_toolbar_order() {
  let labels: Vec<_> = palette().iter().map(|g| g.label).collect();
  assert_eq!(labels, vec!["Core", "Processing", "Utilities"]);
}

#[test]
fn every_known_kind_appears_once() {
  let kinds: Vec<NodeKind> = palette()
    .into_iter()
    .flat_map(|g| g.entries.into_iter().map(|e| e.kind))
    .collect();
  assert_eq!(kinds.len(), NodeKind::KNOWN.len());
  for kind in NodeKind::KNOWN {
    assert!(kinds.contains(&kind), "missing {kind}");
  }
}

#[test]
fn core_group_entries() {
  let core = &palette()[0];
  let labels: Vec<_> = core.entries.iter().map(|e| e.label.as_str()).collect();
  assert_eq!(labels, vec!["Input", "LLM", "Output", "Text"]);
}
