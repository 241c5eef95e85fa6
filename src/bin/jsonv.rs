//! Standalone binary for the jsonv viewer.
//! Usage:
//!   jsonv <path>          open the interactive viewer
//!   jsonv --plain <path>  print a static tree to stdout
//!   jsonv -               read the payload from stdin

use clap::{Arg, ArgAction, Command, ValueHint};
use jsonv::render::{render, Mounted, RenderOutcome, Surface};
use jsonv::tree::to_treeviz_str;
use jsonv::viewer::run_viewer;
use std::io::{IsTerminal, Read};
use std::path::Path;

fn main() {
    // Diagnostics go to stderr; the fallback warning is emitted at warn
    // level, so make that the default filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("jsonv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal viewer for JSON payloads")
        .arg(
            Arg::new("path")
                .help("Path to the JSON file to open, or '-' to read from stdin")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("Print a static tree to stdout instead of opening the viewer")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();

    let (raw, source_name) = match read_payload(path) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let mut surface = Surface::new();
    let outcome = render(&raw, Some(&mut surface));
    if outcome == RenderOutcome::Skipped {
        // Empty payload: nothing to show
        return;
    }

    // The interactive viewer needs a terminal on both ends: piped output
    // or a payload consumed from stdin forces the static tree
    let plain =
        matches.get_flag("plain") || path == "-" || !std::io::stdout().is_terminal();

    if plain {
        match surface.into_mounted() {
            Some(Mounted::Tree(model)) => print!("{}", to_treeviz_str(model.value())),
            Some(Mounted::Text(text)) => println!("{}", text),
            None => {}
        }
        return;
    }

    if let Some(mounted) = surface.into_mounted() {
        if let Err(err) = run_viewer(&source_name, mounted, raw) {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

/// Read the payload and derive a display name for the title bar
fn read_payload(path: &str) -> std::io::Result<(String, String)> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        return Ok((raw, "stdin".to_string()));
    }

    let raw = std::fs::read_to_string(path)?;
    let source_name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    Ok((raw, source_name))
}
