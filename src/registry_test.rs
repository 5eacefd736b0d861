//! # Registry Test Suite
//!
//! Covers registration, lookup, enumeration order, overwrite semantics, and
//! the built-in node types.

use crate::registry::{NodeTypeConfig, NodeTypeRegistry};
use serde_json::{Map, Value};

fn config(label: &str) -> NodeTypeConfig {
  NodeTypeConfig::new(label, format!("{label} description"), "circle", Map::new())
}

#[test]
fn test_register_and_get_config() {
  let mut registry = NodeTypeRegistry::new();
  let cfg = config("Condition");
  registry.register("conditionalNode", cfg.clone());
  assert_eq!(registry.get_config("conditionalNode"), Some(&cfg));
}

#[test]
fn test_get_config_unregistered_returns_none() {
  let registry = NodeTypeRegistry::new();
  assert_eq!(registry.get_config("nonexistent"), None);
}

#[test]
fn test_is_registered() {
  let mut registry = NodeTypeRegistry::new();
  registry.register("apiCallNode", config("API Call"));
  assert!(registry.is_registered("apiCallNode"));
  assert!(!registry.is_registered("textNode"));
}

#[test]
fn test_list_types_insertion_order() {
  let mut registry = NodeTypeRegistry::new();
  registry.register("textNode", config("Message"));
  registry.register("conditionalNode", config("Condition"));
  registry.register("apiCallNode", config("API Call"));
  assert_eq!(
    registry.list_types(),
    vec!["textNode", "conditionalNode", "apiCallNode"]
  );
}

#[test]
fn test_register_overwrite_last_writer_wins() {
  let mut registry = NodeTypeRegistry::new();
  registry.register("textNode", config("Message"));
  registry.register("conditionalNode", config("Condition"));
  let replacement = config("Message v2");
  registry.register("textNode", replacement.clone());

  assert_eq!(registry.get_config("textNode"), Some(&replacement));
  // Overwriting keeps the original enumeration position
  assert_eq!(registry.list_types(), vec!["textNode", "conditionalNode"]);
}

#[test]
fn test_empty_registry_lists_nothing() {
  let registry = NodeTypeRegistry::new();
  assert!(registry.list_types().is_empty());
}

#[test]
fn test_builtins_contains_text_node() {
  let registry = NodeTypeRegistry::with_builtins();
  assert_eq!(registry.list_types(), vec!["textNode"]);

  let cfg = registry.get_config("textNode").unwrap();
  assert_eq!(cfg.label, "Message");
  assert_eq!(cfg.description, "Send a text message to the user");
  assert_eq!(cfg.icon, "message-square");
  assert_eq!(
    cfg.default_data.get("text"),
    Some(&Value::String("Hello! How can I help you today?".to_string()))
  );
}
