//! Parse-with-fallback rendering of raw text payloads
//!
//! The contract here is small but strict: attempt to interpret a raw
//! string as JSON and mount a navigable tree onto the target surface; if
//! the string is not valid JSON, emit a single diagnostic warning and set
//! the surface to the original text verbatim. Exactly one of those two is
//! the end state of a non-skipped render. Parse failure is modeled as a
//! value, not an escaping error: nothing on this path is fatal.

use crate::tree::Model;
use serde_json::Value;
use std::fmt;

/// Fixed diagnostic message emitted once on the fallback path
pub const FALLBACK_WARNING: &str =
    "Payload could not be parsed. Falling back to displaying it as a string.";

/// The single recoverable error kind: input is not valid JSON
#[derive(Debug)]
pub struct ParseError {
    source: serde_json::Error,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid JSON payload: {}", self.source)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(source: serde_json::Error) -> Self {
        ParseError { source }
    }
}

/// Parse a raw payload as strict JSON
///
/// Strict means the common interchange grammar: no trailing commas, no
/// comments, double-quoted keys and strings only. Trailing garbage after
/// the first value is rejected.
pub fn parse_payload(raw: &str) -> Result<Value, ParseError> {
    serde_json::from_str(raw).map_err(ParseError::from)
}

/// Content mounted on a surface: either a navigable tree or plain text
#[derive(Debug, Clone)]
pub enum Mounted {
    /// A tree widget model presenting a parsed value
    Tree(Model),
    /// Verbatim text (the fallback path)
    Text(String),
}

/// The render target: a mutable display surface holding at most one
/// mounted content
///
/// Mounting fully replaces whatever was there before, which is what makes
/// repeated renders idempotent.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    mounted: Option<Mounted>,
}

impl Surface {
    /// Create an empty surface
    pub fn new() -> Self {
        Surface { mounted: None }
    }

    /// The currently mounted content, if any
    pub fn mounted(&self) -> Option<&Mounted> {
        self.mounted.as_ref()
    }

    /// Consume the surface, taking its mounted content
    pub fn into_mounted(self) -> Option<Mounted> {
        self.mounted
    }

    /// Whether nothing is mounted
    pub fn is_empty(&self) -> bool {
        self.mounted.is_none()
    }

    /// Mount content, replacing any previous content
    pub fn mount(&mut self, content: Mounted) {
        self.mounted = Some(content);
    }

    /// Set the surface to plain text
    pub fn set_text(&mut self, text: &str) {
        self.mounted = Some(Mounted::Text(text.to_string()));
    }

    /// Remove any mounted content
    pub fn clear(&mut self) {
        self.mounted = None;
    }

    /// The visible text of the surface: verbatim for text content, the
    /// indented node labels for a tree. Empty surfaces have no text.
    pub fn visible_text(&self) -> Option<String> {
        match &self.mounted {
            Some(Mounted::Text(text)) => Some(text.clone()),
            Some(Mounted::Tree(model)) => {
                let lines: Vec<String> = model
                    .flattened_tree()
                    .into_iter()
                    .map(|node| format!("{}{}", "  ".repeat(node.depth), node.label))
                    .collect();
                Some(lines.join("\n"))
            }
            None => None,
        }
    }
}

/// Adapter interface for tree presentation
///
/// The renderer never depends on how the tree is presented; any
/// implementation must deterministically mount a navigable tree for any
/// well-formed value, without failing.
pub trait TreePresenter {
    /// Mount a visual representation of `value` onto `target`
    fn present(&self, value: Value, target: &mut Surface);
}

/// Default presenter: mounts the interactive tree widget model
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeModelPresenter;

impl TreePresenter for TreeModelPresenter {
    fn present(&self, value: Value, target: &mut Surface) {
        target.mount(Mounted::Tree(Model::new(value)));
    }
}

/// Result of a render call; informational, the primary effect is the
/// side effect on the target surface
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The payload parsed and a tree was mounted
    Rendered(Value),
    /// The payload did not parse; the raw text was mounted verbatim
    FellBackToRaw(String),
    /// Nothing to do: no target, or the payload was empty
    Skipped,
}

/// Render a raw payload onto a surface with the default tree presenter
pub fn render(raw: &str, target: Option<&mut Surface>) -> RenderOutcome {
    render_with(raw, target, &TreeModelPresenter)
}

/// Render a raw payload onto a surface
///
/// A missing target is a precondition check, not an error path: the call
/// is a no-op. An empty payload is also skipped rather than rendered as
/// empty text, matching a host that omits the attribute entirely.
///
/// The surface is only touched after the parse decision, so a failed
/// parse can never leave it partially modified.
pub fn render_with(
    raw: &str,
    target: Option<&mut Surface>,
    presenter: &dyn TreePresenter,
) -> RenderOutcome {
    let Some(target) = target else {
        return RenderOutcome::Skipped;
    };
    if raw.is_empty() {
        return RenderOutcome::Skipped;
    }

    match parse_payload(raw) {
        Ok(value) => {
            presenter.present(value.clone(), target);
            RenderOutcome::Rendered(value)
        }
        Err(_) => {
            log::warn!("{}", FALLBACK_WARNING);
            target.set_text(raw);
            RenderOutcome::FellBackToRaw(raw.to_string())
        }
    }
}
