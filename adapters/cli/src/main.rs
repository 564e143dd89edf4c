#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Console adapter that puts the controller on frequency.
//!
//! Transmissions are read from an interactive prompt, or from a script file
//! when `--script` is given, and run through the parse, roster, validation,
//! and readback stages in `dispatch`. Accepted instructions print one
//! readback line each; a rejected transmission prints its rejection message
//! verbatim and executes nothing. This adapter is the only crate that
//! performs I/O.

mod dispatch;
mod roster;

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use radar_contact_core::SCOPE_BANNER;
use rustyline::{error::ReadlineError, DefaultEditor};

use self::roster::Roster;

/// Radar-scope console: type a callsign followed by instructions and read
/// back what the scope accepts.
#[derive(Debug, Parser)]
#[command(name = "radar-contact", version)]
struct Options {
    /// Runs the transmissions listed in the file instead of prompting.
    ///
    /// Blank lines are skipped. The process exits non-zero when any
    /// transmission in the script is rejected.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Restricts dispatch to callsigns listed in the roster manifest.
    #[arg(long, value_name = "PATH")]
    roster: Option<PathBuf>,
}

/// Entry point for the radar-contact console.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let options = Options::parse();
    let roster = match &options.roster {
        Some(path) => Some(Roster::from_manifest_path(path)?),
        None => None,
    };

    match &options.script {
        Some(path) => run_script(path, roster.as_ref()),
        None => run_interactive(roster.as_ref()),
    }
}

fn run_script(path: &Path, roster: Option<&Roster>) -> Result<ExitCode> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read transmission script at {}", path.display()))?;

    let mut all_accepted = true;
    for line in contents.lines() {
        let transmission = line.trim();
        if transmission.is_empty() {
            continue;
        }
        if !deliver(transmission, roster) {
            all_accepted = false;
        }
    }

    Ok(if all_accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_interactive(roster: Option<&Roster>) -> Result<ExitCode> {
    println!("{SCOPE_BANNER}");
    if let Some(roster) = roster {
        if !roster.is_empty() {
            println!("on frequency: {}", roster.on_frequency());
        }
    }

    let mut editor = DefaultEditor::new().context("failed to start the console line editor")?;
    loop {
        match editor.readline("scope> ") {
            Ok(line) => {
                let transmission = line.trim();
                if transmission.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(transmission);
                let _ = deliver(transmission, roster);
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => return Err(error).context("failed to read from the console"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Prints the outcome of one transmission and reports whether it was accepted.
fn deliver(transmission: &str, roster: Option<&Roster>) -> bool {
    match dispatch::respond(transmission, roster) {
        Ok(readbacks) => {
            for readback in readbacks {
                println!("{readback}");
            }
            true
        }
        Err(rejection) => {
            println!("{rejection}");
            false
        }
    }
}
