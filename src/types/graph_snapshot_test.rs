//! Tests for `GraphSnapshot`.

use super::{
  EdgeId, Endpoint, GraphSnapshot, NodeConfig, NodeId, NodeKind, PipelineEdge, PipelineNode,
  PortId, Position,
};

fn two_node_snapshot() -> (GraphSnapshot, EdgeId) {
  let input = PipelineNode::new(
    NodeId::from("customInput-1"),
    NodeConfig::default_for(&NodeKind::Input),
    Position::new(0.0, 0.0),
  );
  let text = PipelineNode::new(
    NodeId::from("text-1"),
    NodeConfig::text("{{input}}"),
    Position::new(100.0, 0.0),
  );
  let edge_id = EdgeId::new_v4();
  let edge = PipelineEdge {
    id: edge_id,
    source: Endpoint::new(NodeId::from("customInput-1"), PortId::from("value")),
    target: Endpoint::new(NodeId::from("text-1"), PortId::from("var-input")),
  };
  (GraphSnapshot::from_parts(vec![input, text], vec![edge]), edge_id)
}

#[test]
fn counts_and_order() {
  let (snap, _) = two_node_snapshot();
  assert_eq!(snap.node_count(), 2);
  assert_eq!(snap.edge_count(), 1);
  assert!(!snap.is_empty());
  assert_eq!(snap.nodes()[0].id.as_str(), "customInput-1");
}

#[test]
fn clones_share_contents() {
  let (snap, _) = two_node_snapshot();
  let copy = snap.clone();
  assert_eq!(copy, snap);
  assert!(std::ptr::eq(copy.nodes().as_ptr(), snap.nodes().as_ptr()));
}

#[test]
fn to_payload_projects_edges_onto_node_ids() {
  let (snap, edge_id) = two_node_snapshot();
  let payload = snap.to_payload();
  assert_eq!(payload.nodes.len(), 2);
  assert_eq!(payload.nodes[1].kind, NodeKind::Text);
  assert_eq!(payload.nodes[1].data["text"], "{{input}}");
  assert_eq!(payload.edges[0].id, edge_id.to_string());
  assert_eq!(payload.edges[0].source, "customInput-1");
  assert_eq!(payload.edges[0].target, "text-1");
}

#[test]
fn snapshot_is_send_and_sync() {
  fn assert_send_sync<T: Send + Sync>() {}
  assert_send_sync::<GraphSnapshot>();
}

#[test]
fn empty_snapshot() {
  let snap = GraphSnapshot::from_parts(vec![], vec![]);
  assert!(snap.is_empty());
  assert!(snap.to_payload().nodes.is_empty());
}
