//! Application state aggregation
//!
//! The App owns the widget model and the two panes, tracks which pane has
//! keyboard focus, and applies the events viewers emit back to the model.

use super::rawviewer::RawViewer;
use super::treeviewer::TreeViewer;
use super::viewer::{Viewer, ViewerEvent};
use crate::render::Mounted;
use crate::tree::Model;
use crossterm::event::KeyEvent;

/// Which viewer currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Tree viewer has focus
    #[default]
    TreeViewer,
    /// Raw text viewer has focus
    RawViewer,
}

impl Focus {
    /// Toggle focus to the other viewer
    pub fn toggle(&self) -> Focus {
        match self {
            Focus::TreeViewer => Focus::RawViewer,
            Focus::RawViewer => Focus::TreeViewer,
        }
    }
}

/// The viewer application
pub struct App {
    /// The tree widget model; None on the fallback path
    pub model: Option<Model>,
    /// Which pane has focus
    pub focus: Focus,
    /// The tree pane
    pub tree_viewer: TreeViewer,
    /// The raw text pane
    pub raw_viewer: RawViewer,
}

impl App {
    /// Create the app from mounted surface content
    ///
    /// `raw` is the original payload text for the source pane. For text
    /// content the mounted text itself is shown (it equals the raw input
    /// on the fallback path).
    pub fn new(mounted: Mounted, raw: String) -> Self {
        match mounted {
            Mounted::Tree(model) => App {
                model: Some(model),
                focus: Focus::TreeViewer,
                tree_viewer: TreeViewer::new(),
                raw_viewer: RawViewer::new(raw),
            },
            Mounted::Text(text) => App {
                model: None,
                focus: Focus::RawViewer,
                tree_viewer: TreeViewer::new(),
                raw_viewer: RawViewer::new(text),
            },
        }
    }

    /// Whether the app is showing the verbatim fallback
    pub fn is_fallback(&self) -> bool {
        self.model.is_none()
    }

    /// Toggle focus between the panes; a no-op on the fallback path
    /// where only the raw pane exists
    pub fn toggle_focus(&mut self) {
        if !self.is_fallback() {
            self.focus = self.focus.toggle();
        }
    }

    /// Route a key event to the focused viewer and apply the result
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ViewerEvent> {
        let event = match self.focus {
            Focus::TreeViewer => self.tree_viewer.handle_key(key, self.model.as_ref()),
            Focus::RawViewer => self.raw_viewer.handle_key(key, self.model.as_ref()),
        };
        if let Some(event) = event.clone() {
            self.apply(event);
        }
        event
    }

    /// Apply a viewer event to the model
    fn apply(&mut self, event: ViewerEvent) {
        let Some(model) = self.model.as_mut() else {
            return;
        };
        match event {
            ViewerEvent::SelectNode(node_id) => model.select_node(node_id),
            ViewerEvent::ToggleNodeExpansion(node_id) => {
                model.toggle_node_expansion(&node_id);
                model.select_node(node_id);
                model.clamp_selection_to_visible();
            }
            ViewerEvent::ExpandAll => model.expand_all(),
            ViewerEvent::CollapseAll => {
                model.collapse_all();
                model.clamp_selection_to_visible();
            }
            ViewerEvent::NoChange => {}
        }
    }
}
