//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Middle section (responsive height):
//!   - Tree viewer (40 chars, fixed width)
//!   - Source viewer (remaining space)
//!   - On the fallback path the raw pane takes the full width
//! - Status line (1 line, fixed)

use super::app::{App, Focus};
use super::viewer::Viewer;
use crate::tree::ValueKind;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 50;
/// Width allocated to the tree viewer
const TREE_VIEWER_WIDTH: u16 = 40;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App, source_name: &str) {
    let size = frame.area();

    // Check minimum width
    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    // Split layout vertically: title, middle, status line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Title bar
            Constraint::Min(1),                     // Middle section
            Constraint::Length(STATUS_LINE_HEIGHT), // Status line
        ])
        .split(size);

    render_title_bar(frame, chunks[0], source_name);
    render_middle_section(frame, chunks[1], app);
    render_status_line(frame, chunks[2], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, source_name: &str) {
    let title = format!("jsonv:: {}", source_name);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_middle_section(frame: &mut Frame, area: Rect, app: &App) {
    if app.is_fallback() {
        // Fallback: the raw pane takes the whole middle section
        render_raw_viewer(frame, area, app);
        return;
    }

    // Split horizontally: tree viewer and source viewer
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(TREE_VIEWER_WIDTH), // Tree viewer
            Constraint::Min(1),                    // Source viewer
        ])
        .split(area);

    render_tree_viewer(frame, chunks[0], app);
    render_raw_viewer(frame, chunks[1], app);
}

fn render_tree_viewer(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::TreeViewer {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = format!("Tree{}", focus_indicator);
    let block = Block::default().borders(Borders::ALL).title(title);

    // Get inner area for content (inside the border)
    let inner_area = block.inner(area);

    // Render the border
    frame.render_widget(block, area);

    // Render the tree viewer's content
    app.tree_viewer.render(frame, inner_area, app.model.as_ref());
}

fn render_raw_viewer(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::RawViewer || app.is_fallback() {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = format!(
        "{}{}",
        if app.is_fallback() { "Raw" } else { "Source" },
        focus_indicator
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    // Get inner area for content (inside the border)
    let inner_area = block.inner(area);

    // Render the border
    frame.render_widget(block, area);

    // Render the raw viewer's content
    app.raw_viewer.render(frame, inner_area, app.model.as_ref());
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    match &app.model {
        None => {
            spans.push(Span::styled(
                "⚠ Fallback",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" | "));
            spans.push(Span::raw("payload shown verbatim (not valid JSON)"));
        }
        Some(model) => {
            spans.push(Span::styled(
                "🌳 Tree",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" | "));

            match model.selected_node() {
                None => {
                    spans.push(Span::styled(
                        "Selection: ",
                        Style::default().fg(Color::Yellow),
                    ));
                    spans.push(Span::raw("none"));
                }
                Some(node_id) if node_id.is_root() => {
                    spans.push(Span::styled(
                        "Selection: ",
                        Style::default().fg(Color::Yellow),
                    ));
                    spans.push(Span::raw("Root"));
                    if let Some(value) = model.value_at(node_id) {
                        spans.push(Span::raw(format!(" ({})", ValueKind::of(value).as_str())));
                    }
                }
                Some(node_id) => {
                    spans.push(Span::styled("Path: ", Style::default().fg(Color::Yellow)));
                    let path_str = node_id
                        .path()
                        .iter()
                        .map(|i| i.to_string())
                        .collect::<Vec<_>>()
                        .join("→");
                    spans.push(Span::raw(format!("[{}]", path_str)));

                    if let Some(value) = model.value_at(node_id) {
                        spans.push(Span::raw(" | "));
                        spans.push(Span::styled("Kind: ", Style::default().fg(Color::Yellow)));
                        spans.push(Span::raw(ValueKind::of(value).as_str()));
                    }

                    let is_expanded = model.is_node_expanded(node_id);
                    spans.push(Span::raw(" | "));
                    spans.push(Span::styled("State: ", Style::default().fg(Color::Yellow)));
                    spans.push(Span::raw(if is_expanded {
                        "Expanded"
                    } else {
                        "Collapsed"
                    }));
                }
            }
        }
    }

    let paragraph = Paragraph::new(ratatui::text::Line::from(spans))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_viewer_width_constant() {
        assert_eq!(TREE_VIEWER_WIDTH, 40);
    }

    #[test]
    fn test_status_line_height_constant() {
        assert_eq!(STATUS_LINE_HEIGHT, 1);
    }

    #[test]
    fn test_min_terminal_width() {
        assert_eq!(MIN_TERMINAL_WIDTH, 50);
    }
}
