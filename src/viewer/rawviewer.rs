//! Raw viewer - displays the payload text
//!
//! The raw viewer shows the original input verbatim with line scrolling.
//! On the fallback path it is the only pane; next to a rendered tree it
//! serves as the source pane.

use super::viewer::{Viewer, ViewerEvent};
use crate::tree::Model;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// How many lines a page scroll moves
const PAGE_SIZE: usize = 10;

/// Raw viewer - displays the payload text with scrolling
#[derive(Debug)]
pub struct RawViewer {
    /// The raw payload text
    content: String,
    /// How many lines are scrolled off the top
    scroll_offset: usize,
}

impl RawViewer {
    /// Create a new raw viewer with content
    pub fn new(content: String) -> Self {
        RawViewer {
            content,
            scroll_offset: 0,
        }
    }

    /// The displayed text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the scroll offset
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn max_scroll(&self) -> usize {
        self.content.lines().count().saturating_sub(1)
    }

    fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = (self.scroll_offset + amount).min(self.max_scroll());
    }

    fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }
}

impl Viewer for RawViewer {
    fn render(&self, frame: &mut Frame, area: Rect, _model: Option<&Model>) {
        // Verbatim display: no styling, no reflow, just the text
        let lines: Vec<Line> = self.content.lines().map(Line::from).collect();
        let paragraph = Paragraph::new(lines).scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, _model: Option<&Model>) -> Option<ViewerEvent> {
        match key.code {
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE_SIZE),
            KeyCode::PageDown => self.scroll_down(PAGE_SIZE),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = self.max_scroll(),
            _ => {}
        }
        // Scrolling is viewer-local state; the model never changes
        Some(ViewerEvent::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_viewer_creation() {
        let viewer = RawViewer::new("test content".to_string());
        assert_eq!(viewer.content(), "test content");
        assert_eq!(viewer.scroll_offset(), 0);
    }

    #[test]
    fn test_scrolling_clamps_to_content() {
        let mut viewer = RawViewer::new("a\nb\nc".to_string());

        viewer.handle_key(KeyEvent::from(KeyCode::Up), None);
        assert_eq!(viewer.scroll_offset(), 0);

        viewer.handle_key(KeyEvent::from(KeyCode::PageDown), None);
        assert_eq!(viewer.scroll_offset(), 2);

        viewer.handle_key(KeyEvent::from(KeyCode::Home), None);
        assert_eq!(viewer.scroll_offset(), 0);

        viewer.handle_key(KeyEvent::from(KeyCode::End), None);
        assert_eq!(viewer.scroll_offset(), 2);
    }
}
