//! # Node Model
//!
//! A node is one step of the conversation flow: a unique id, the node-type id
//! that resolves against the [`NodeTypeRegistry`](crate::NodeTypeRegistry), a
//! canvas position, and an open data payload whose shape depends on the type.
//!
//! The payload stays a schemaless JSON map on purpose. Node types are an open
//! set extended by downstream code, so the core never interprets `data` beyond
//! shallow-merging edits into it; the component that renders a given type is
//! the one that knows its fields.
//!
//! Serialization uses the canvas-side field names (`type`), so a node
//! round-trips unchanged through the hosting editor's JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canvas position of a node.
///
/// Presentational only: validation and the registry never read it, and no
/// range constraint applies.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
  /// Horizontal coordinate in canvas space.
  pub x: f64,
  /// Vertical coordinate in canvas space.
  pub y: f64,
}

/// One step in the conversation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  /// Unique id within the flow.
  pub id: String,
  /// Node-type id, resolved against the registry for display and defaults.
  #[serde(rename = "type")]
  pub node_type: String,
  /// Where the node sits on the canvas.
  pub position: Position,
  /// Open per-type payload (e.g. `{"text": "..."}` for a message node).
  #[serde(default)]
  pub data: Map<String, Value>,
}

impl Node {
  /// Creates a node with the given id, type, position, and initial payload.
  pub fn new(
    id: impl Into<String>,
    node_type: impl Into<String>,
    position: Position,
    data: Map<String, Value>,
  ) -> Self {
    Self {
      id: id.into(),
      node_type: node_type.into(),
      position,
      data,
    }
  }

  /// Shallow-merges `patch` into the node's payload.
  ///
  /// Keys present in `patch` overwrite the existing entry; keys absent from
  /// `patch` are left untouched. Nested values are replaced wholesale, not
  /// merged, matching how settings edits apply.
  pub fn merge_data(&mut self, patch: Map<String, Value>) {
    for (key, value) in patch {
      self.data.insert(key, value);
    }
  }
}
