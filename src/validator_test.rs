//! Tests for the structural validator.

use proptest::prelude::*;

use crate::error::ConsistencyFault;
use crate::graph::PipelineGraph;
use crate::types::{
  EdgeId, Endpoint, GraphSnapshot, NodeConfig, NodeId, NodeKind, PayloadEdge, PayloadNode,
  PipelineEdge, PipelineNode, PipelinePayload, PortId, Position, ValidationReport,
};
use crate::validator::{validate, validate_payload};

fn logger_chain(n: usize) -> (PipelineGraph, Vec<NodeId>) {
  let mut g = PipelineGraph::new();
  let ids: Vec<_> = (0..n)
    .map(|_| g.add_node_of_kind(&NodeKind::Logger, Position::default()))
    .collect();
  for pair in ids.windows(2) {
    g.add_edge(&pair[0], "output", &pair[1], "input").unwrap();
  }
  (g, ids)
}

fn payload(nodes: &[&str], edges: &[(&str, &str)]) -> PipelinePayload {
  PipelinePayload {
    nodes: nodes
      .iter()
      .map(|id| PayloadNode {
        id: id.to_string(),
        kind: NodeKind::Logger,
        position: Position::default(),
        data: serde_json::Value::Null,
      })
      .collect(),
    edges: edges
      .iter()
      .enumerate()
      .map(|(i, (s, t))| PayloadEdge {
        id: format!("e{}", i),
        source: s.to_string(),
        target: t.to_string(),
      })
      .collect(),
  }
}

#[test]
fn empty_graph_is_a_dag() {
  let report = validate(&PipelineGraph::new().snapshot()).unwrap();
  assert_eq!(report, ValidationReport::new(0, 0, true));
}

#[test]
fn chain_is_acyclic_until_closed() {
  let (mut g, ids) = logger_chain(3);
  assert_eq!(
    validate(&g.snapshot()).unwrap(),
    ValidationReport::new(3, 2, true)
  );
  g.add_edge(&ids[2], "output", &ids[0], "input").unwrap();
  assert_eq!(
    validate(&g.snapshot()).unwrap(),
    ValidationReport::new(3, 3, false)
  );
}

#[test]
fn self_loop_is_a_cycle() {
  let mut g = PipelineGraph::new();
  let a = g.add_node_of_kind(&NodeKind::Logger, Position::default());
  g.add_edge(&a, "output", &a, "input").unwrap();
  assert!(!validate(&g.snapshot()).unwrap().is_dag);
}

#[test]
fn isolated_nodes_and_disjoint_components() {
  let (mut g, _) = logger_chain(3);
  g.add_node_of_kind(&NodeKind::Llm, Position::default());
  let x = g.add_node_of_kind(&NodeKind::Calculator, Position::default());
  let y = g.add_node_of_kind(&NodeKind::Calculator, Position::default());
  g.add_edge(&x, "result", &y, "input1").unwrap();
  assert_eq!(
    validate(&g.snapshot()).unwrap(),
    ValidationReport::new(6, 3, true)
  );
}

#[test]
fn cycle_in_second_component_is_found() {
  let r = validate_payload(&payload(
    &["a", "b", "c", "d"],
    &[("a", "b"), ("c", "d"), ("d", "c")],
  ))
  .unwrap();
  assert_eq!(r, ValidationReport::new(4, 3, false));
}

#[test]
fn diamond_is_acyclic() {
  let r = validate_payload(&payload(
    &["a", "b", "c", "d"],
    &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
  ))
  .unwrap();
  assert!(r.is_dag);
}

#[test]
fn parallel_edges_count_separately() {
  let r = validate_payload(&payload(&["a", "b"], &[("a", "b"), ("a", "b")])).unwrap();
  assert_eq!(r, ValidationReport::new(2, 2, true));
}

#[test]
fn ports_do_not_affect_the_verdict() {
  let mut g = PipelineGraph::new();
  let input = g.add_node_of_kind(&NodeKind::Input, Position::default());
  let text = g.add_node(NodeConfig::text("{{a}} {{b}}"), Position::default());
  g.add_edge(&input, "value", &text, "var-a").unwrap();
  g.add_edge(&input, "value", &text, "var-b").unwrap();
  assert_eq!(
    validate(&g.snapshot()).unwrap(),
    ValidationReport::new(2, 2, true)
  );
}

#[test]
fn dangling_edge_in_payload_is_a_consistency_fault() {
  let err = validate_payload(&payload(&["a"], &[("a", "ghost")])).unwrap_err();
  assert_eq!(
    err,
    ConsistencyFault {
      edge: "e0".to_string(),
      node: "ghost".to_string(),
    }
  );
}

#[test]
fn dangling_edge_in_hand_built_snapshot_is_a_consistency_fault() {
  let node = PipelineNode::new(
    NodeId::from("logger-1"),
    NodeConfig::default_for(&NodeKind::Logger),
    Position::default(),
  );
  let edge = PipelineEdge {
    id: EdgeId::new_v4(),
    source: Endpoint::new(NodeId::from("logger-0"), PortId::from("output")),
    target: Endpoint::new(NodeId::from("logger-1"), PortId::from("input")),
  };
  let err = validate(&GraphSnapshot::from_parts(vec![node], vec![edge])).unwrap_err();
  assert_eq!(err.node, "logger-0");
}

#[test]
fn deep_chain_does_not_overflow() {
  let n = 100_000;
  let ids: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();
  let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
  let pairs: Vec<(&str, &str)> = refs.windows(2).map(|w| (w[0], w[1])).collect();
  let r = validate_payload(&payload(&refs, &pairs)).unwrap();
  assert_eq!(r, ValidationReport::new(n, n - 1, true));
}

/// Edges that only go from a lower index to a higher one can never form a cycle.
fn forward_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
  (2usize..20).prop_flat_map(|n| {
    let edge = (0..n - 1).prop_flat_map(move |a| (Just(a), (a + 1)..n));
    (Just(n), prop::collection::vec(edge, 0..40))
  })
}

fn index_payload(n: usize, edges: &[(usize, usize)]) -> PipelinePayload {
  let ids: Vec<String> = (0..n).map(|i| i.to_string()).collect();
  let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
  let pairs: Vec<(&str, &str)> = edges.iter().map(|&(a, b)| (refs[a], refs[b])).collect();
  payload(&refs, &pairs)
}

proptest! {
  #[test]
  fn forward_only_graphs_are_dags((n, edges) in forward_edges()) {
    let r = validate_payload(&index_payload(n, &edges)).unwrap();
    prop_assert_eq!(r, ValidationReport::new(n, edges.len(), true));
  }

  #[test]
  fn any_back_edge_makes_a_cycle((n, mut edges) in forward_edges(), pick in any::<prop::sample::Index>()) {
    prop_assume!(!edges.is_empty());
    let (a, b) = edges[pick.index(edges.len())];
    edges.push((b, a));
    let r = validate_payload(&index_payload(n, &edges)).unwrap();
    prop_assert!(!r.is_dag);
  }

  #[test]
  fn verdict_ignores_edge_order((n, edges) in forward_edges(), extra in (0usize..20, 0usize..20)) {
    let (a, b) = (extra.0 % n, extra.1 % n);
    let mut with_extra = edges.clone();
    with_extra.push((a, b));
    let mut reversed = with_extra.clone();
    reversed.reverse();
    let left = validate_payload(&index_payload(n, &with_extra)).unwrap();
    let right = validate_payload(&index_payload(n, &reversed)).unwrap();
    prop_assert_eq!(left, right);
  }
}
