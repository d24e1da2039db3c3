//! # dirsweep CLI
//!
//! The command-line interface for dirsweep, a tool that finds and
//! interactively deletes dependency-cache directories like `node_modules`.
//!
//! ## Commands
//!
//! - **scan**: find matching directories and report their sizes
//! - **clean**: scan, then interactively select and delete matches
//! - **config**: manage the persisted target folder list
//!
//! ## Quick Start
//!
//! ```bash
//! # Report every node_modules under ~/projects, largest first
//! dirsweep scan ~/projects
//!
//! # Interactively delete matches bigger than 100 MiB, at most 4 levels deep
//! dirsweep clean ~/projects --depth 4 --min-size 100M
//!
//! # Search for additional folder names
//! dirsweep config add target .venv
//! ```
//!
//! ## Environment Variables
//!
//! - `DIRSWEEP_CONFIG`: Override the configuration file location
//! - `DIRSWEEP_VERBOSE`: Enable verbose output
//! - `DIRSWEEP_QUIET`: Silence all output except errors

use std::io::IsTerminal;

use clap::Parser;
use dirsweep::cli::Cli;

fn main() -> miette::Result<()> {
    // Install miette's fancy panic and error report handler
    miette::set_panic_hook();

    // Configure miette handler based on terminal capabilities
    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        // Use a simpler handler for non-TTY environments (pipes, logs)
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    let cli = Cli::parse();

    let result = dirsweep::commands::execute(&cli);

    // Convert our error type to miette's Result
    result.map_err(Into::into)
}
