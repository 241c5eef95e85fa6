//! jsonv - parse-with-fallback JSON rendering with a terminal tree viewer
//!
//! The core contract lives in [`render`]: attempt to interpret a raw
//! string as JSON and mount a navigable, collapsible tree onto a target
//! surface; if the string is not valid JSON, emit one diagnostic warning
//! and show the original text verbatim instead. Exactly one of those two
//! is the visible end state of a non-skipped render.
//!
//! [`tree`] holds the tree widget model (selection, expand/collapse,
//! flattening) and a static line-tree serializer; [`viewer`] is the
//! interactive terminal UI built on top of it.

pub mod render;
pub mod tree;
pub mod viewer;

pub use render::{
    parse_payload, render, render_with, Mounted, ParseError, RenderOutcome, Surface,
    TreeModelPresenter, TreePresenter, FALLBACK_WARNING,
};
pub use tree::{to_treeviz_str, Model, NodeId};
