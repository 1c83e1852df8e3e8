//! Tests for `NodeKind`.

use super::NodeKind;

#[test]
fn wire_tags_round_trip() {
  for kind in NodeKind::KNOWN {
    assert_eq!(NodeKind::from(kind.as_str()), kind);
  }
}

#[test]
fn unknown_tag_is_preserved() {
  let kind = NodeKind::from("webhook");
  assert!(matches!(&kind, NodeKind::Unknown(tag) if tag.as_str() == "webhook"));
  assert!(!kind.is_known());
  assert_eq!(kind.as_str(), "webhook");
  assert_eq!(kind.display_name(), "webhook");
}

#[test]
fn input_and_output_use_custom_tags() {
  assert_eq!(NodeKind::Input.as_str(), "customInput");
  assert_eq!(NodeKind::Output.as_str(), "customOutput");
  assert_eq!(NodeKind::Llm.display_name(), "LLM");
}

#[test]
fn serde_uses_wire_tag() {
  let json = serde_json::to_string(&NodeKind::Input).unwrap();
  assert_eq!(json, "\"customInput\"");
  let kind: NodeKind = serde_json::from_str("\"merger\"").unwrap();
  assert_eq!(kind, NodeKind::Merger);
  let kind: NodeKind = serde_json::from_str("\"mystery\"").unwrap();
  assert_eq!(kind, NodeKind::from("mystery"));
  assert!(!kind.is_known());
}

#[test]
fn parse_is_infallible() {
  let kind: NodeKind = "text".parse().unwrap();
  assert_eq!(kind, NodeKind::Text);
  assert_eq!(kind.to_string(), "text");
}

#[test]
fn known_tags_never_parse_as_unknown() {
  for kind in NodeKind::KNOWN {
    assert!(NodeKind::from(kind.as_str()).is_known());
    let json = serde_json::to_string(&kind).unwrap();
    let back: NodeKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, kind);
  }
}

#[test]
fn unknown_kind_round_trips_through_serde() {
  let kind = NodeKind::from("webhook");
  let json = serde_json::to_string(&kind).unwrap();
  let back: NodeKind = serde_json::from_str(&json).unwrap();
  assert_eq!(back, kind);
}
