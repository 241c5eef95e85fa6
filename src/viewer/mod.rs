//! Rich terminal viewer app for JSON payloads
pub mod app;
pub mod rawviewer;
pub mod treeviewer;
pub mod ui;
#[allow(clippy::module_inception)]
pub mod viewer;


pub use viewer::run_viewer;
