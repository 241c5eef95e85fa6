//! Data model for the JSON tree widget
//!
//! The Model struct holds the pure widget state:
//! - The parsed JSON value
//! - Current selection (a tree node)
//! - Expanded/collapsed state of tree nodes
//!
//! This separation of concerns makes testing easier: the model is pure data
//! and can be tested independently of rendering and UI logic.

use serde_json::Value;
use std::collections::HashSet;

/// Stable identifier for a node in the JSON tree.
///
/// A NodeId is a path through the tree, represented as child indices from
/// the root. For example, [0, 1, 2] means: entry 0 of the root, then entry 1
/// of that, then entry 2 of that. Object entries are indexed in document
/// order, array entries by position. JSON nesting is unbounded, so the path
/// is heap-allocated rather than capped at a fixed depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId {
    path: Vec<usize>,
}

impl NodeId {
    /// The root node (empty path)
    pub fn root() -> Self {
        NodeId { path: Vec::new() }
    }

    /// Create a new NodeId from a path
    pub fn new(path: &[usize]) -> Self {
        NodeId {
            path: path.to_vec(),
        }
    }

    /// Get the path as a slice
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Depth of this node (root is 0)
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Whether this is the root node
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the parent NodeId, or None if this is the root
    pub fn parent(&self) -> Option<NodeId> {
        if self.path.is_empty() {
            None
        } else {
            Some(NodeId {
                path: self.path[..self.path.len() - 1].to_vec(),
            })
        }
    }

    /// Create a child NodeId
    pub fn child(&self, index: usize) -> NodeId {
        let mut path = self.path.clone();
        path.push(index);
        NodeId { path }
    }
}

/// Classification of a JSON value for display purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl ValueKind {
    /// Classify a JSON value
    pub fn of(value: &Value) -> ValueKind {
        match value {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
            Value::Null => ValueKind::Null,
        }
    }

    /// Icon shown next to nodes of this kind
    pub fn icon(self) -> &'static str {
        match self {
            ValueKind::Object => "⊞",
            ValueKind::Array => "☰",
            ValueKind::String => "\"",
            ValueKind::Number => "#",
            ValueKind::Bool => "◐",
            ValueKind::Null => "∅",
        }
    }

    /// Human-readable kind name (used in the status line)
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Object => "Object",
            ValueKind::Array => "Array",
            ValueKind::String => "String",
            ValueKind::Number => "Number",
            ValueKind::Bool => "Bool",
            ValueKind::Null => "Null",
        }
    }
}

/// A node in the flattened tree representation
///
/// This represents a single node in a depth-first flattening of the JSON
/// tree. Used for rendering the tree viewer where nodes are displayed in
/// a list.
#[derive(Debug, Clone)]
pub struct FlattenedNode {
    /// Stable identifier for this node
    pub node_id: NodeId,
    /// Depth in the tree (for indentation)
    pub depth: usize,
    /// Display label for this node
    pub label: String,
    /// Whether this node is currently expanded
    pub is_expanded: bool,
    /// Whether this node has children
    pub has_children: bool,
    /// The kind of the JSON value at this node
    pub kind: ValueKind,
}

/// How a node is named by its parent
enum NodeName<'a> {
    Root,
    Key(&'a str),
    Index(usize),
}

/// One-line preview of a value: scalars as their JSON rendering,
/// containers as their entry count
pub fn value_preview(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{{{}}}", map.len()),
        Value::Array(items) => format!("[{}]", items.len()),
        // Compact JSON rendering; strings come out quoted and escaped
        other => other.to_string(),
    }
}

fn node_label(name: &NodeName, value: &Value) -> String {
    let preview = value_preview(value);
    match name {
        NodeName::Root => preview,
        NodeName::Key(key) => format!("{}: {}", key, preview),
        NodeName::Index(index) => format!("[{}]: {}", index, preview),
    }
}

fn child_count(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => 0,
    }
}

/// The core widget state
#[derive(Debug, Clone)]
pub struct Model {
    /// The parsed JSON value
    value: Value,

    /// Currently selected node, if any
    selected: Option<NodeId>,

    /// Which tree nodes are expanded (rest are collapsed)
    expanded: HashSet<NodeId>,
}

impl Model {
    /// Create a new model from a parsed value
    pub fn new(value: Value) -> Self {
        let mut model = Model {
            value,
            selected: None,
            expanded: HashSet::new(),
        };
        // Start with all nodes expanded
        model.expand_all();
        model
    }

    /// The parsed value this model presents
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Navigate to the value at a node, or None if the path does not exist
    pub fn value_at(&self, node_id: &NodeId) -> Option<&Value> {
        let mut current = &self.value;
        for &index in node_id.path() {
            current = match current {
                Value::Object(map) => map.iter().nth(index).map(|(_, v)| v)?,
                Value::Array(items) => items.get(index)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Get the currently selected node
    pub fn selected_node(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// Select a tree node
    pub fn select_node(&mut self, node_id: NodeId) {
        self.selected = Some(node_id);
    }

    /// Check if a node is expanded
    pub fn is_node_expanded(&self, node_id: &NodeId) -> bool {
        self.expanded.contains(node_id)
    }

    /// Toggle whether a node is expanded
    pub fn toggle_node_expansion(&mut self, node_id: &NodeId) {
        if !self.expanded.remove(node_id) {
            self.expanded.insert(node_id.clone());
        }
    }

    /// Expand a node
    pub fn expand_node(&mut self, node_id: NodeId) {
        self.expanded.insert(node_id);
    }

    /// Collapse a node
    pub fn collapse_node(&mut self, node_id: &NodeId) {
        self.expanded.remove(node_id);
    }

    /// Expand every container node in the tree
    pub fn expand_all(&mut self) {
        let mut expanded = HashSet::new();
        collect_containers(&self.value, NodeId::root(), &mut expanded);
        self.expanded = expanded;
    }

    /// Collapse every node; the root and its direct entries stay visible
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Get the ancestors of a node (path from root to parent, not
    /// including the node itself)
    pub fn get_ancestors(&self, node_id: &NodeId) -> Vec<NodeId> {
        let path = node_id.path();
        (0..path.len()).map(|i| NodeId::new(&path[..i])).collect()
    }

    /// If the selected node is hidden by a collapsed ancestor, move the
    /// selection up to its deepest visible ancestor
    pub fn clamp_selection_to_visible(&mut self) {
        let Some(selected) = self.selected.clone() else {
            return;
        };
        let visible: HashSet<NodeId> = self
            .flattened_tree()
            .into_iter()
            .map(|n| n.node_id)
            .collect();
        let mut current = selected;
        while !visible.contains(&current) {
            match current.parent() {
                Some(parent) => current = parent,
                // Root is always visible, but terminate regardless
                None => break,
            }
        }
        self.selected = Some(current);
    }

    /// Build a flattened tree structure for rendering
    ///
    /// Creates a depth-first flattening of the JSON tree, respecting the
    /// expanded/collapsed state. Children of collapsed nodes are omitted.
    /// The root node is always present and always traversed.
    pub fn flattened_tree(&self) -> Vec<FlattenedNode> {
        let mut nodes = Vec::new();
        self.flatten_recursive(&NodeName::Root, &self.value, NodeId::root(), &mut nodes);
        nodes
    }

    fn flatten_recursive(
        &self,
        name: &NodeName,
        value: &Value,
        node_id: NodeId,
        nodes: &mut Vec<FlattenedNode>,
    ) {
        let has_children = child_count(value) > 0;
        let is_expanded = node_id.is_root() || self.is_node_expanded(&node_id);

        nodes.push(FlattenedNode {
            node_id: node_id.clone(),
            depth: node_id.depth(),
            label: node_label(name, value),
            is_expanded,
            has_children,
            kind: ValueKind::of(value),
        });

        if !(is_expanded && has_children) {
            return;
        }

        match value {
            Value::Object(map) => {
                for (index, (key, child)) in map.iter().enumerate() {
                    self.flatten_recursive(
                        &NodeName::Key(key.as_str()),
                        child,
                        node_id.child(index),
                        nodes,
                    );
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    self.flatten_recursive(
                        &NodeName::Index(index),
                        child,
                        node_id.child(index),
                        nodes,
                    );
                }
            }
            _ => {}
        }
    }
}

/// Recursively collect the NodeIds of all container nodes
fn collect_containers(value: &Value, node_id: NodeId, out: &mut HashSet<NodeId>) {
    match value {
        Value::Object(map) => {
            for (index, (_, child)) in map.iter().enumerate() {
                collect_containers(child, node_id.child(index), out);
            }
            out.insert(node_id);
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_containers(child, node_id.child(index), out);
            }
            out.insert(node_id);
        }
        _ => {}
    }
}
