//! # Node-Type Registry
//!
//! Open plugin table mapping a node-type id to its display and default
//! configuration. The palette enumerates it, node instantiation clones its
//! default payload, and rendering looks up labels and icons through it.
//!
//! The table is keyed by string rather than by a closed enum so downstream
//! code can add node kinds without touching core dispatch. Cardinality is tens
//! of types at most and no lookup sits on a hot path, so a flat map with an
//! insertion-order side list is all the structure needed.
//!
//! Lookup of an unregistered type returns `None` rather than failing: callers
//! degrade gracefully (an "unknown node type" placeholder in the canvas, a
//! refused instantiation in the session).
//!
//! Future extension points anticipated here but deliberately not implemented:
//! per-type required-field schemas and per-type validation hooks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

/// Immutable display/default template for one node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTypeConfig {
  /// Short palette label, e.g. "Message".
  pub label: String,
  /// One-line description shown alongside the label.
  pub description: String,
  /// Icon reference understood by the hosting UI, e.g. "message-square".
  pub icon: String,
  /// Payload cloned into every freshly instantiated node of this type.
  pub default_data: Map<String, Value>,
}

impl NodeTypeConfig {
  /// Creates a config from its four parts.
  pub fn new(
    label: impl Into<String>,
    description: impl Into<String>,
    icon: impl Into<String>,
    default_data: Map<String, Value>,
  ) -> Self {
    Self {
      label: label.into(),
      description: description.into(),
      icon: icon.into(),
      default_data,
    }
  }
}

/// Registry of node types available to the editor.
///
/// Populated once at startup (see [`NodeTypeRegistry::with_builtins`]) and
/// normally immutable afterwards, though [`register`](Self::register) stays
/// callable for runtime extension. Enumeration preserves first-insertion
/// order, which is the order the palette displays.
#[derive(Debug, Clone, Default)]
pub struct NodeTypeRegistry {
  configs: HashMap<String, NodeTypeConfig>,
  order: Vec<String>,
}

impl NodeTypeRegistry {
  /// Creates an empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a registry holding the built-in node types.
  ///
  /// Currently one type, the plain message node:
  ///
  /// | id | label | default data |
  /// |----|-------|--------------|
  /// | `textNode` | Message | `{"text": "Hello! How can I help you today?"}` |
  pub fn with_builtins() -> Self {
    let mut registry = Self::new();
    let mut default_data = Map::new();
    default_data.insert(
      "text".to_string(),
      Value::String("Hello! How can I help you today?".to_string()),
    );
    registry.register(
      "textNode",
      NodeTypeConfig::new(
        "Message",
        "Send a text message to the user",
        "message-square",
        default_data,
      ),
    );
    registry
  }

  /// Inserts or overwrites the configuration for `node_type`.
  ///
  /// Last writer wins. Overwriting keeps the type's original position in the
  /// enumeration order; only a first registration appends to it.
  pub fn register(&mut self, node_type: impl Into<String>, config: NodeTypeConfig) {
    let node_type = node_type.into();
    debug!(node_type = %node_type, label = %config.label, "registering node type");
    if !self.configs.contains_key(&node_type) {
      self.order.push(node_type.clone());
    }
    self.configs.insert(node_type, config);
  }

  /// Looks up the configuration for `node_type`.
  ///
  /// Returns `None` for unregistered types; never panics.
  pub fn get_config(&self, node_type: &str) -> Option<&NodeTypeConfig> {
    self.configs.get(node_type)
  }

  /// Returns all registered type ids in first-insertion order.
  pub fn list_types(&self) -> Vec<String> {
    self.order.clone()
  }

  /// Returns whether `node_type` has a registered configuration.
  pub fn is_registered(&self, node_type: &str) -> bool {
    self.configs.contains_key(node_type)
  }
}
