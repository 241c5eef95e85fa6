//! Tree viewer - displays and navigates the JSON tree
//!
//! The tree viewer shows the parsed payload as a tree of nodes.
//! Users can navigate with arrow keys and expand/collapse nodes.

use super::viewer::{Viewer, ViewerEvent};
use crate::tree::{Model, NodeId};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Tree viewer - displays and navigates the JSON tree
///
/// Selection and expansion state live in the Model; the viewer itself is
/// stateless and derives its scroll position from the selection.
#[derive(Debug, Default)]
pub struct TreeViewer;

impl TreeViewer {
    /// Create a new tree viewer
    pub fn new() -> Self {
        TreeViewer
    }

    /// Get the next visible node in the flattened tree
    ///
    /// Returns the NodeId of the next node considering only visible nodes
    /// (respecting expansion state). Returns None if already at the last node.
    pub fn get_next_visible_node(&self, current: &NodeId, model: &Model) -> Option<NodeId> {
        let flattened = model.flattened_tree();
        let index = flattened.iter().position(|n| &n.node_id == current)?;
        if index < flattened.len() - 1 {
            Some(flattened[index + 1].node_id.clone())
        } else {
            None
        }
    }

    /// Get the previous visible node in the flattened tree
    ///
    /// Returns the NodeId of the previous node considering only visible nodes
    /// (respecting expansion state). Returns None if already at the first node.
    pub fn get_previous_visible_node(&self, current: &NodeId, model: &Model) -> Option<NodeId> {
        let flattened = model.flattened_tree();
        let index = flattened.iter().position(|n| &n.node_id == current)?;
        if index > 0 {
            Some(flattened[index - 1].node_id.clone())
        } else {
            None
        }
    }
}

impl Viewer for TreeViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: Option<&Model>) {
        let Some(model) = model else {
            return;
        };

        let flattened = model.flattened_tree();
        let selected = model.selected_node();
        let selected_index = selected
            .and_then(|id| flattened.iter().position(|n| &n.node_id == id))
            .unwrap_or(0);

        // Build lines from the flattened tree
        let lines: Vec<Line> = flattened
            .iter()
            .map(|node| {
                // Indentation based on depth (2 spaces per level)
                let indent = "  ".repeat(node.depth);
                let icon = node.kind.icon();

                // Available width for the label after indent + icon + space
                let indent_width = indent.chars().count();
                let icon_width = icon.chars().count();
                let space_width = 1;
                let available_width = area.width as usize;
                let label_max_width = available_width
                    .saturating_sub(indent_width)
                    .saturating_sub(icon_width)
                    .saturating_sub(space_width);

                // Truncate label if necessary
                let truncated_label: String = if node.label.chars().count() > label_max_width {
                    node.label.chars().take(label_max_width).collect()
                } else {
                    node.label.clone()
                };

                let text = format!("{}{} {}", indent, icon, truncated_label);

                // Style the line based on selection and expansion state
                let is_collapsed = !node.is_expanded && node.has_children;
                let is_highlighted = selected == Some(&node.node_id);

                if is_highlighted {
                    // Highlighted node: blue background, muted text if collapsed
                    let text_color = if is_collapsed {
                        Color::Gray
                    } else {
                        Color::White
                    };

                    Line::from(text).style(
                        Style::default()
                            .bg(Color::Blue)
                            .fg(text_color)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if is_collapsed {
                    // Collapsed node (not highlighted): muted gray text
                    Line::from(text)
                        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM))
                } else {
                    Line::from(text)
                }
            })
            .collect();

        // Scroll just enough to keep the selection inside the viewport
        let height = area.height as usize;
        let scroll = if height == 0 {
            0
        } else {
            selected_index.saturating_sub(height - 1)
        };

        let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, model: Option<&Model>) -> Option<ViewerEvent> {
        let Some(model) = model else {
            return Some(ViewerEvent::NoChange);
        };

        // The root node always exists, so the flattened tree is never empty
        let flattened = model.flattened_tree();
        let current = match model.selected_node() {
            Some(id) => id.clone(),
            None => flattened[0].node_id.clone(),
        };

        match key.code {
            KeyCode::Up => {
                // Move to previous visible node
                match self.get_previous_visible_node(&current, model) {
                    Some(prev) => Some(ViewerEvent::SelectNode(prev)),
                    None => Some(ViewerEvent::SelectNode(current)),
                }
            }
            KeyCode::Down => {
                // Move to next visible node
                match self.get_next_visible_node(&current, model) {
                    Some(next) => Some(ViewerEvent::SelectNode(next)),
                    None => Some(ViewerEvent::SelectNode(current)),
                }
            }
            KeyCode::Left | KeyCode::Right => {
                // Toggle collapse/expand for the currently selected node
                let has_children = flattened
                    .iter()
                    .find(|n| n.node_id == current)
                    .map(|n| n.has_children)
                    .unwrap_or(false);
                if has_children {
                    Some(ViewerEvent::ToggleNodeExpansion(current))
                } else {
                    Some(ViewerEvent::NoChange)
                }
            }
            KeyCode::Char('e') => Some(ViewerEvent::ExpandAll),
            KeyCode::Char('c') => Some(ViewerEvent::CollapseAll),
            _ => Some(ViewerEvent::NoChange),
        }
    }
}
