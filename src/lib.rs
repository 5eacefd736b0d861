//! # FlowWeave
//!
//! Core logic for a chatbot conversation-flow builder.
//!
//! FlowWeave holds the non-presentational half of a visual flow editor: the
//! node-type registry that backs the palette, the connectivity check that runs
//! on save, and the session container that owns the node and edge collections
//! the canvas renders. Rendering, drag-and-drop, and panel layout belong to the
//! hosting UI; this crate only ever sees node ids, type ids, and edge
//! endpoints.
//!
//! ## Key Components
//!
//! - **[`NodeTypeRegistry`]**: open plugin table mapping a node-type id to its
//!   display label, description, icon reference, and default data payload
//! - **[`validate`]**: pure save-time connectivity verdict over the current
//!   node and edge collections
//! - **[`FlowSession`]**: the authoritative graph state plus the editor-side
//!   mutations (instantiate, connect, edit, delete, save)
//!
//! ## Quick Start
//!
//! ```rust
//! use flowweave::{FlowSession, NodeTypeRegistry, Position};
//!
//! let mut session = FlowSession::new(NodeTypeRegistry::with_builtins());
//! let first = session
//!   .insert_node("textNode", Position { x: 250.0, y: 100.0 })?
//!   .id
//!   .clone();
//! let second = session
//!   .insert_node("textNode", Position { x: 250.0, y: 260.0 })?
//!   .id
//!   .clone();
//! session.connect(&first, None, &second, None);
//! let snapshot = session.save()?;
//! assert_eq!(snapshot.nodes.len(), 2);
//! # Ok::<(), flowweave::FlowError>(())
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Edge record connecting two node ports.
pub mod edge;
/// Error types surfaced at the editor boundary.
pub mod error;
/// Node record and its open data payload.
pub mod node;
/// Node-type registry backing the palette.
pub mod registry;
/// Editor session owning the node and edge collections.
pub mod session;
/// Save-time connectivity validation and diagnostics.
pub mod validation;

pub use edge::Edge;
pub use error::FlowError;
pub use node::{Node, Position};
pub use registry::{NodeTypeConfig, NodeTypeRegistry};
pub use session::{FlowSession, FlowSnapshot};
pub use validation::{ValidationResult, find_disconnected_groups, unconnected_nodes, validate};

#[cfg(test)]
mod model_test;
#[cfg(test)]
mod registry_test;
