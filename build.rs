use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("jsonv")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "jsonv", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "jsonv", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "jsonv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
