//! Navigable tree representation of a parsed JSON value
//!
//! The render core treats tree presentation as an external collaborator
//! with a narrow contract: given any well-formed JSON value, produce a
//! deterministic, navigable tree with expand/collapse per nested node.
//! This module is that collaborator.

pub mod model;
pub mod treeviz;

pub use model::{FlattenedNode, Model, NodeId, ValueKind};
pub use treeviz::to_treeviz_str;
