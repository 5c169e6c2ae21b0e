//! Interactive entry point for the xsh shell
//!
//! Owns what the execution core treats as external collaborators: the
//! prompt/read loop, the `exit`/`quit` commands, and startup wiring
//! (search-path capture, logging init, argument handling).

use std::env;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use xsh_shell::{execute_line, ShellState};

fn main() -> Result<()> {
    // Log level comes from XSH_LOG, defaulting to warnings only.
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("XSH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if let Some(option) = env::args().nth(1) {
        if option.eq_ignore_ascii_case("--help") {
            print_usage();
            return Ok(());
        }
        eprintln!("Unknown option: {option}");
        print_usage();
        std::process::exit(1);
    }

    run_interactive_shell()
}

fn print_usage() {
    println!("Usage:");
    println!("  xsh            - Start the shell interactively.");
    println!("  xsh --help     - Show this help message.");
    println!();
    println!("This shell supports:");
    println!("  Built-ins: cd, pwd, set, unset, echo.");
    println!("  Variable substitution: $VAR.");
    println!("  Piping with '|', I/O redirection with '<' and '>'.");
    println!("  Background execution with '&'.");
}

/// Prompt for and execute lines until `exit`/`quit` or end of input.
fn run_interactive_shell() -> Result<()> {
    let mut state = ShellState::from_system();
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("xsh# ") {
            Ok(line) => {
                let line = line.trim_start_matches([' ', '\t', '\r', '\n']);
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
                    break;
                }
                let _ = editor.add_history_entry(line);
                execute_line(line, &mut state);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C cancels the current line, not the shell.
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
