//! # Error Types
//!
//! The two failure conditions this core can report, both recoverable at the
//! editor boundary:
//!
//! - [`FlowError::UnknownNodeType`]: a node-type id did not resolve in the
//!   registry, so the node cannot be instantiated. The hosting UI should
//!   degrade (skip the drop, or render a placeholder).
//! - [`FlowError::NotConnected`]: save-time validation found more than one
//!   node without an incoming connection. The message is user-facing and the
//!   save is aborted; nothing is written partially.
//!
//! Neither condition is fatal to the process and neither benefits from a
//! retry: both require the user to change the flow.

use thiserror::Error;

/// Error surfaced by flow construction and saving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
  /// The node-type id has no registered configuration.
  #[error("unknown node type '{0}'")]
  UnknownNodeType(String),
  /// The flow failed the save-time connectivity check.
  #[error("{message}")]
  NotConnected {
    /// Number of nodes with no incoming edge.
    count: usize,
    /// User-facing diagnostic, suitable for direct display.
    message: String,
  },
}
