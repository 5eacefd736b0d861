//! # Model Test Suite
//!
//! Covers the node and edge records: canvas-compatible JSON field names,
//! payload defaults, and shallow-merge semantics.

use crate::edge::Edge;
use crate::node::{Node, Position};
use serde_json::{Map, Value, json};

#[test]
fn test_node_serializes_with_canvas_field_names() {
  let mut data = Map::new();
  data.insert("text".to_string(), Value::String("Hi".to_string()));
  let node = Node::new("1", "textNode", Position { x: 250.0, y: 100.0 }, data);

  let value = serde_json::to_value(&node).unwrap();
  assert_eq!(
    value,
    json!({
      "id": "1",
      "type": "textNode",
      "position": { "x": 250.0, "y": 100.0 },
      "data": { "text": "Hi" }
    })
  );
}

#[test]
fn test_node_data_defaults_on_deserialize() {
  let node: Node = serde_json::from_value(json!({
    "id": "1",
    "type": "textNode",
    "position": { "x": 0.0, "y": 0.0 }
  }))
  .unwrap();
  assert!(node.data.is_empty());
}

#[test]
fn test_edge_omits_absent_handles() {
  let edge = Edge::new("e1", "1", "2");
  let value = serde_json::to_value(&edge).unwrap();
  assert_eq!(value, json!({ "id": "e1", "source": "1", "target": "2" }));
}

#[test]
fn test_edge_handles_use_canvas_field_names() {
  let edge = Edge {
    id: "e1".to_string(),
    source: "1".to_string(),
    target: "2".to_string(),
    source_handle: Some("yes".to_string()),
    target_handle: Some("in".to_string()),
  };
  let value = serde_json::to_value(&edge).unwrap();
  assert_eq!(value["sourceHandle"], json!("yes"));
  assert_eq!(value["targetHandle"], json!("in"));
}

#[test]
fn test_merge_data_is_shallow() {
  let mut data = Map::new();
  data.insert("text".to_string(), Value::String("old".to_string()));
  data.insert("kept".to_string(), Value::Bool(true));
  let mut node = Node::new("1", "textNode", Position::default(), data);

  let mut patch = Map::new();
  patch.insert("text".to_string(), Value::String("new".to_string()));
  node.merge_data(patch);

  assert_eq!(node.data.get("text"), Some(&Value::String("new".to_string())));
  assert_eq!(node.data.get("kept"), Some(&Value::Bool(true)));
}

#[test]
fn test_merge_data_replaces_nested_values_wholesale() {
  let mut data = Map::new();
  data.insert("headers".to_string(), json!({ "a": 1, "b": 2 }));
  let mut node = Node::new("1", "apiCallNode", Position::default(), data);

  let mut patch = Map::new();
  patch.insert("headers".to_string(), json!({ "c": 3 }));
  node.merge_data(patch);

  // Shallow merge: the nested object is swapped out, not deep-merged
  assert_eq!(node.data.get("headers"), Some(&json!({ "c": 3 })));
}
