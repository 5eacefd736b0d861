//! # Flow Validation
//!
//! Save-time connectivity check over the current node and edge collections,
//! plus diagnostic helpers. Every function here is a pure, stateless pass over
//! its inputs: calling twice on the same graph yields the same verdict, and
//! nothing is retained between calls.
//!
//! ## The rule
//!
//! Every node except a single start node must have at least one incoming
//! connection. The check counts *roots* - nodes with no incoming edge - and
//! rejects the flow when more than one exists.
//!
//! This is deliberately weaker than true single-source reachability: a cycle
//! with no external entry edge has zero roots and passes, and the check never
//! verifies that a traversal from the start node covers the whole graph. The
//! weaker rule is what the editor has always enforced, and callers depend on
//! its verdicts, so it is preserved as-is rather than silently strengthened.
//! No cycle detection, dangling-edge check, or per-type field validation runs
//! here either.
//!
//! ## Diagnostics
//!
//! [`find_disconnected_groups`] partitions the nodes into undirected connected
//! components. It is not on the save path; it exists as a building block for
//! richer "these islands are separate" reporting.

use crate::edge::Edge;
use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Verdict of a flow validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
  /// Whether the flow may be saved.
  pub is_valid: bool,
  /// User-facing diagnostic; present exactly when `is_valid` is false.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl ValidationResult {
  /// A passing verdict.
  pub fn valid() -> Self {
    Self {
      is_valid: true,
      error: None,
    }
  }

  /// A failing verdict carrying a user-facing message.
  pub fn invalid(message: impl Into<String>) -> Self {
    Self {
      is_valid: false,
      error: Some(message.into()),
    }
  }
}

/// Validates that the flow is connected enough to save.
///
/// An empty flow is valid, and a single node is valid unconditionally (it is
/// the implicit start node). Otherwise the flow is valid when at most one node
/// lacks an incoming edge; see the module docs for why this is weaker than
/// full reachability.
///
/// Never panics; the verdict and message carry all failure information.
pub fn validate(nodes: &[Node], edges: &[Edge]) -> ValidationResult {
  // An empty flow is trivially valid
  if nodes.is_empty() {
    return ValidationResult::valid();
  }

  // A single node is the start node
  if nodes.len() == 1 {
    return ValidationResult::valid();
  }

  // One root is allowed: the start node
  let roots = unconnected_nodes(nodes, edges);
  if roots.len() > 1 {
    return ValidationResult::invalid(format!(
      "Cannot save flow: {} nodes are not connected. Each node (except the start node) must have at least one incoming connection.",
      roots.len()
    ));
  }

  ValidationResult::valid()
}

/// Returns the nodes with no incoming edge, in node-collection order.
///
/// These are the *roots* the validator counts.
/// [`FlowSession::save`](crate::FlowSession::save) uses the same set to report
/// how many nodes a rejected save left unconnected.
pub fn unconnected_nodes<'a>(nodes: &'a [Node], edges: &[Edge]) -> Vec<&'a Node> {
  let targets: HashSet<&str> = edges.iter().map(|edge| edge.target.as_str()).collect();
  nodes
    .iter()
    .filter(|node| !targets.contains(node.id.as_str()))
    .collect()
}

/// Partitions the nodes into maximal groups connected by any edge.
///
/// Edges are treated as undirected here, so a group is an island of nodes the
/// user has wired together in either direction. Groups come back in discovery
/// order; the nodes within a group carry no ordering guarantee. Edges whose
/// endpoint ids match no node are ignored.
pub fn find_disconnected_groups<'a>(nodes: &'a [Node], edges: &[Edge]) -> Vec<Vec<&'a Node>> {
  let by_id: HashMap<&str, &Node> = nodes.iter().map(|node| (node.id.as_str(), node)).collect();

  let mut neighbors: HashMap<&str, Vec<&str>> = HashMap::new();
  for edge in edges {
    neighbors
      .entry(edge.source.as_str())
      .or_default()
      .push(edge.target.as_str());
    neighbors
      .entry(edge.target.as_str())
      .or_default()
      .push(edge.source.as_str());
  }

  let mut visited: HashSet<&str> = HashSet::new();
  let mut groups: Vec<Vec<&Node>> = Vec::new();

  for node in nodes {
    if visited.contains(node.id.as_str()) {
      continue;
    }

    // Depth-first flood from this node over undirected adjacency
    let mut group: Vec<&Node> = Vec::new();
    let mut stack: Vec<&str> = vec![node.id.as_str()];
    while let Some(id) = stack.pop() {
      if !visited.insert(id) {
        continue;
      }
      if let Some(found) = by_id.get(id) {
        group.push(found);
      }
      if let Some(adjacent) = neighbors.get(id) {
        for next in adjacent {
          if !visited.contains(next) {
            stack.push(next);
          }
        }
      }
    }

    if !group.is_empty() {
      groups.push(group);
    }
  }

  groups
}
