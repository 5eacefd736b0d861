//! # Edge Model
//!
//! A directed connection from one node's output to another node's input. A
//! node may expose several named connection points, so both endpoints carry an
//! optional handle discriminator; `None` means the node's default handle.
//!
//! The one structural invariant on edges - a given `(source, source handle)`
//! pair backs at most one outgoing edge - is enforced at connection time by
//! [`FlowSession::connect`](crate::FlowSession::connect), not here: an edge
//! record by itself is just data.

use serde::{Deserialize, Serialize};

/// Directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
  /// Unique id within the flow.
  pub id: String,
  /// Id of the node the edge leaves.
  pub source: String,
  /// Id of the node the edge enters.
  pub target: String,
  /// Named connection point on the source node, if any.
  #[serde(rename = "sourceHandle", skip_serializing_if = "Option::is_none")]
  pub source_handle: Option<String>,
  /// Named connection point on the target node, if any.
  #[serde(rename = "targetHandle", skip_serializing_if = "Option::is_none")]
  pub target_handle: Option<String>,
}

impl Edge {
  /// Creates an edge between the default handles of `source` and `target`.
  pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      source: source.into(),
      target: target.into(),
      source_handle: None,
      target_handle: None,
    }
  }
}
