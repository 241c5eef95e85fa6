//! Viewer module - trait, events, and main entry point
//!
//! The Viewer trait defines a common interface for UI components that:
//! - Render themselves given the widget model and an area
//! - Handle keyboard input and return events
//!
//! This module also contains the main viewer application entry point.

use super::app::App;
use super::ui;
use crate::render::Mounted;
use crate::tree::{Model, NodeId};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use ratatui::Frame;
use std::io;
use std::time::Duration;

/// Events that can be emitted by viewers
///
/// These represent model changes that should be applied after handling input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Select a tree node
    SelectNode(NodeId),
    /// Toggle whether a node is expanded
    ToggleNodeExpansion(NodeId),
    /// Expand every container node
    ExpandAll,
    /// Collapse every node
    CollapseAll,
    /// No change to model
    NoChange,
}

/// Trait for UI viewers
///
/// A viewer is a component that:
/// - Knows how to render itself given the tree model (absent on the
///   fallback path, where only raw text is shown)
/// - Knows how to interpret keyboard input
/// - Emits ViewerEvents when user interactions require model changes
pub trait Viewer {
    /// Render this viewer to the given area
    fn render(&self, frame: &mut Frame, area: Rect, model: Option<&Model>);

    /// Handle a keyboard event and return the resulting event
    fn handle_key(&mut self, key: KeyEvent, model: Option<&Model>) -> Option<ViewerEvent>;
}

/// Run the interactive viewer over mounted surface content
///
/// `raw` is the original payload text, shown in the source pane next to
/// the tree. On the fallback path the mounted text is the only pane.
pub fn run_viewer(source_name: &str, mounted: Mounted, raw: String) -> io::Result<()> {
    let mut app = App::new(mounted, raw);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, source_name);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source_name: &str,
) -> io::Result<()> {
    loop {
        // Render the full UI every frame
        terminal.draw(|frame| {
            ui::render(frame, app, source_name);
        })?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(key, app) {
                        return Ok(());
                    }
                }
                // On terminal resize, the next loop iteration will re-render
                // with the new dimensions
                Event::Resize(_, _) => {}
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}

fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Tab => {
            app.toggle_focus();
            false
        }
        _ => {
            // Delegate to app's key handler
            let _ = app.handle_key(key);
            false
        }
    }
}
