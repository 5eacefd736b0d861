//! # Flow Session
//!
//! The authoritative node and edge collections behind one open editor, plus
//! the mutations the canvas forwards: instantiating a node of a registered
//! type, connecting two nodes, shallow-merging settings edits, deleting, and
//! saving.
//!
//! The session owns its registry and graph outright; the validator and
//! registry never retain references across calls. All mutation is through
//! `&mut self` on a single thread - the session makes no thread-safety claim
//! beyond that, matching its place behind a UI event loop.
//!
//! ## Connection semantics
//!
//! A `(source, source handle)` pair backs at most one outgoing edge.
//! [`FlowSession::connect`] enforces this the way the canvas does: connecting
//! from an occupied handle silently drops the prior edge and installs the new
//! one.
//!
//! ## Saving
//!
//! [`FlowSession::save`] runs [`validate`] and aborts with
//! [`FlowError::NotConnected`] on a failing verdict - no partial save. On
//! success it logs the serialized flow as a diagnostic and returns a
//! timestamped [`FlowSnapshot`]; durable storage is the host's concern, not
//! defined here.

use crate::edge::Edge;
use crate::error::FlowError;
use crate::node::{Node, Position};
use crate::registry::NodeTypeRegistry;
use crate::validation::{self, validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Serialized form of a successfully saved flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSnapshot {
  /// The nodes at save time.
  pub nodes: Vec<Node>,
  /// The edges at save time.
  pub edges: Vec<Edge>,
  /// When the save happened.
  pub saved_at: DateTime<Utc>,
}

/// One editor session: a node-type registry plus the live graph.
#[derive(Debug, Clone)]
pub struct FlowSession {
  registry: NodeTypeRegistry,
  nodes: Vec<Node>,
  edges: Vec<Edge>,
}

impl FlowSession {
  /// Creates an empty session over the given registry.
  pub fn new(registry: NodeTypeRegistry) -> Self {
    Self {
      registry,
      nodes: Vec::new(),
      edges: Vec::new(),
    }
  }

  /// Creates a session seeded with the default welcome flow: a single
  /// `textNode` greeting the user.
  pub fn with_welcome_node(registry: NodeTypeRegistry) -> Self {
    let mut session = Self::new(registry);
    let mut data = Map::new();
    data.insert(
      "text".to_string(),
      Value::String("Welcome to our chatbot!".to_string()),
    );
    session
      .nodes
      .push(Node::new("1", "textNode", Position { x: 250.0, y: 100.0 }, data));
    session
  }

  /// Returns the registry this session resolves node types against.
  pub fn registry(&self) -> &NodeTypeRegistry {
    &self.registry
  }

  /// Returns the current nodes, in creation order.
  pub fn nodes(&self) -> &[Node] {
    &self.nodes
  }

  /// Returns the current edges.
  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  /// Finds a node by id, e.g. for the settings panel.
  pub fn node(&self, id: &str) -> Option<&Node> {
    self.nodes.iter().find(|node| node.id == id)
  }

  /// Instantiates a node of `node_type` at `position`.
  ///
  /// The new node clones the type's registered default payload and receives a
  /// minted `{type}-{timestamp}` id, unique within the session. Returns a
  /// reference to the inserted node.
  ///
  /// # Errors
  ///
  /// [`FlowError::UnknownNodeType`] if `node_type` has no registered
  /// configuration; the session is left unchanged.
  pub fn insert_node(&mut self, node_type: &str, position: Position) -> Result<&Node, FlowError> {
    let data = match self.registry.get_config(node_type) {
      Some(config) => config.default_data.clone(),
      None => return Err(FlowError::UnknownNodeType(node_type.to_string())),
    };

    let id = self.mint_node_id(node_type);
    debug!(node_type = %node_type, id = %id, "inserting node");
    self.nodes.push(Node::new(id, node_type, position, data));
    Ok(&self.nodes[self.nodes.len() - 1])
  }

  /// Connects `source` to `target`, with optional handle discriminators.
  ///
  /// If an edge already leaves the same `(source, source_handle)` pair it is
  /// silently replaced. Endpoint ids are not checked against the node set;
  /// the canvas only offers existing nodes to connect. Returns a reference to
  /// the installed edge.
  pub fn connect(
    &mut self,
    source: &str,
    source_handle: Option<&str>,
    target: &str,
    target_handle: Option<&str>,
  ) -> &Edge {
    if let Some(occupied) = self
      .edges
      .iter()
      .position(|edge| edge.source == source && edge.source_handle.as_deref() == source_handle)
    {
      let replaced = self.edges.remove(occupied);
      debug!(edge = %replaced.id, "replacing edge from occupied source handle");
    }

    let id = format!(
      "edge-{}{}-{}{}",
      source,
      source_handle.unwrap_or(""),
      target,
      target_handle.unwrap_or("")
    );
    self.edges.push(Edge {
      id,
      source: source.to_string(),
      target: target.to_string(),
      source_handle: source_handle.map(str::to_string),
      target_handle: target_handle.map(str::to_string),
    });
    &self.edges[self.edges.len() - 1]
  }

  /// Shallow-merges `patch` into the payload of node `id`.
  ///
  /// Returns whether a node with that id existed; edits to a vanished node
  /// (deleted under an open settings panel) are dropped.
  pub fn update_node_data(&mut self, id: &str, patch: Map<String, Value>) -> bool {
    match self.nodes.iter_mut().find(|node| node.id == id) {
      Some(node) => {
        node.merge_data(patch);
        true
      }
      None => false,
    }
  }

  /// Removes node `id` together with every edge touching it.
  ///
  /// Returns whether the node existed.
  pub fn remove_node(&mut self, id: &str) -> bool {
    let before = self.nodes.len();
    self.nodes.retain(|node| node.id != id);
    if self.nodes.len() == before {
      return false;
    }
    self.edges.retain(|edge| edge.source != id && edge.target != id);
    true
  }

  /// Removes edge `id`. Returns whether the edge existed.
  pub fn remove_edge(&mut self, id: &str) -> bool {
    let before = self.edges.len();
    self.edges.retain(|edge| edge.id != id);
    self.edges.len() != before
  }

  /// Validates the flow and, if it passes, returns a timestamped snapshot.
  ///
  /// The snapshot is also logged in serialized form as the save diagnostic.
  /// On a failing verdict the session is untouched and nothing is saved.
  ///
  /// # Errors
  ///
  /// [`FlowError::NotConnected`] carrying the unconnected-node count and the
  /// user-facing message when validation fails.
  pub fn save(&self) -> Result<FlowSnapshot, FlowError> {
    let verdict = validate(&self.nodes, &self.edges);
    if !verdict.is_valid {
      let count = validation::unconnected_nodes(&self.nodes, &self.edges).len();
      return Err(FlowError::NotConnected {
        count,
        message: verdict.error.unwrap_or_default(),
      });
    }

    let snapshot = FlowSnapshot {
      nodes: self.nodes.clone(),
      edges: self.edges.clone(),
      saved_at: Utc::now(),
    };
    match serde_json::to_string(&snapshot) {
      Ok(json) => info!(flow = %json, "flow saved"),
      Err(err) => warn!(error = %err, "flow saved but snapshot did not serialize"),
    }
    Ok(snapshot)
  }

  /// Mints a node id from the type and the current time, disambiguating with
  /// a numeric suffix if the session already holds that id.
  fn mint_node_id(&self, node_type: &str) -> String {
    let base = format!("{}-{}", node_type, Utc::now().timestamp_millis());
    if self.node(&base).is_none() {
      return base;
    }
    let mut suffix = 1;
    loop {
      let candidate = format!("{base}-{suffix}");
      if self.node(&candidate).is_none() {
        return candidate;
      }
      suffix += 1;
    }
  }
}
