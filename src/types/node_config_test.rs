//! Tests for `NodeConfig`.

use serde_json::{Map, Value, json};

use super::{
  CalculatorOperation, DEFAULT_TEXT_TEMPLATE, LogLevel, MergeType, MergerConfig, NodeConfig,
  NodeKind,
};

#[test]
fn default_for_matches_kind() {
  for kind in NodeKind::KNOWN {
    assert_eq!(NodeConfig::default_for(&kind).kind(), kind);
  }
  let unknown = NodeKind::from("webhook");
  assert_eq!(NodeConfig::default_for(&unknown).kind(), unknown);
}

#[test]
fn text_default_template() {
  let cfg = NodeConfig::default_for(&NodeKind::Text);
  assert_eq!(cfg.template(), Some(DEFAULT_TEXT_TEMPLATE));
  assert_eq!(NodeConfig::Llm.template(), None);
}

#[test]
fn defaults_follow_palette() {
  match NodeConfig::default_for(&NodeKind::Calculator) {
    NodeConfig::Calculator(c) => assert_eq!(c.operation, CalculatorOperation::Add),
    other => panic!("unexpected config {:?}", other),
  }
  match NodeConfig::default_for(&NodeKind::Logger) {
    NodeConfig::Logger(c) => {
      assert_eq!(c.log_level, LogLevel::Info);
      assert_eq!(c.prefix, "[LOG]");
    }
    other => panic!("unexpected config {:?}", other),
  }
}

#[test]
fn merger_separator_is_truncated() {
  let cfg = MergerConfig::new(MergeType::Array, " | -- | ");
  assert_eq!(cfg.separator.chars().count(), 5);
  assert_eq!(MergerConfig::default().separator, ", ");
}

#[test]
fn to_data_carries_node_type_and_fields() {
  let data = NodeConfig::text("Hello {{name}}").to_data("text-1");
  assert_eq!(data["nodeType"], "text");
  assert_eq!(data["id"], "text-1");
  assert_eq!(data["text"], "Hello {{name}}");

  let data = NodeConfig::default_for(&NodeKind::Input).to_data("customInput-1");
  assert_eq!(data["nodeType"], "customInput");
  assert_eq!(data["inputName"], "input");
  assert_eq!(data["inputType"], "Text");
}

#[test]
fn to_data_for_unknown_keeps_payload() {
  let data = json!({ "url": "http://example.invalid" });
  let cfg = NodeConfig::opaque("webhook", object(data)).unwrap();
  let data = cfg.to_data("webhook-1");
  assert_eq!(data["url"], "http://example.invalid");
  assert_eq!(data["id"], "webhook-1");
  assert_eq!(data["nodeType"], "webhook");
}

#[test]
fn to_data_for_unknown_never_overwrites_its_own_keys() {
  let cfg = NodeConfig::opaque(
    "webhook",
    object(json!({ "id": "upstream-7", "nodeType": "hook", "items": ["a", "b"] })),
  )
  .unwrap();
  let data = cfg.to_data("webhook-1");
  assert_eq!(data["id"], "upstream-7");
  assert_eq!(data["nodeType"], "hook");
  assert_eq!(data["items"], json!(["a", "b"]));
}

#[test]
fn opaque_refuses_known_tags() {
  assert!(NodeConfig::opaque("text", Map::new()).is_none());
  assert!(NodeConfig::opaque("customInput", Map::new()).is_none());
  let cfg = NodeConfig::opaque("webhook", Map::new()).unwrap();
  assert!(!cfg.kind().is_known());
}

fn object(value: Value) -> Map<String, Value> {
  match value {
    Value::Object(map) => map,
    other => panic!("expected an object, got {other}"),
  }
}
