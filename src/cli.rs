//! Command-line interface definitions for dirsweep.
//!
//! This module defines the CLI structure using clap, including all
//! subcommands and their arguments. The main entry point is the [`Cli`]
//! struct.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

/// Main command-line interface for dirsweep.
#[derive(Parser)]
#[command(
    name = "dirsweep",
    author,
    version,
    about = "Find and interactively delete dependency-cache directories like node_modules",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the command
    pub fn command(&self) -> &Commands {
        &self.command
    }
}

/// Global options that apply to all dirsweep commands.
#[derive(Parser)]
pub struct GlobalOpts {
    /// Path to the configuration file (defaults to the user config dir)
    #[arg(long, global = true, env = "DIRSWEEP_CONFIG")]
    config_path: Option<PathBuf>,

    /// Enable verbose output (use multiple times for more verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = "DIRSWEEP_VERBOSE")]
    verbose: u8,

    /// Silence all output except for errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        env = "DIRSWEEP_QUIET"
    )]
    quiet: bool,
}

impl GlobalOpts {
    /// Get the configuration file path override
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

/// Available dirsweep subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan for matching directories and report their sizes
    ///
    /// Walks the tree beneath PATH looking for target-named directories
    /// (default: node_modules, or whatever the configuration lists),
    /// measures each match, and prints a table ordered by size. Hidden
    /// VCS/IDE metadata folders (.git, .vs, .idea, .vscode, .github) are
    /// never traversed or matched.
    Scan {
        /// Root path to scan beneath
        path: PathBuf,

        /// Maximum match depth; direct children of PATH are depth 1
        #[arg(long)]
        depth: Option<usize>,

        /// Hide results smaller than this size (e.g. "500M", "2G", bytes)
        #[arg(long)]
        min_size: Option<String>,

        /// Target folder name to search for instead of the configured list
        /// (repeatable; never persisted back to the configuration)
        #[arg(long = "target")]
        targets: Vec<String>,
    },

    /// Scan, then interactively select and delete matches
    ///
    /// Runs the same scan as `dirsweep scan`, then prompts for which
    /// matches to delete and asks for confirmation before removing them
    /// one at a time. Deletion clears read-only attributes and removes
    /// symlinks as links without following them; a failed deletion is
    /// reported per directory and never aborts the rest of the batch.
    Clean {
        /// Root path to scan beneath
        path: PathBuf,

        /// Maximum match depth; direct children of PATH are depth 1
        #[arg(long)]
        depth: Option<usize>,

        /// Skip results smaller than this size (e.g. "500M", "2G", bytes)
        #[arg(long)]
        min_size: Option<String>,

        /// Target folder name to search for instead of the configured list
        /// (repeatable; never persisted back to the configuration)
        #[arg(long = "target")]
        targets: Vec<String>,

        /// Delete every match without prompting for selection or
        /// confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Manage the persisted target folder list
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands of `dirsweep config`.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the configured target folder names
    List,

    /// Add target folder names to the configuration
    Add {
        /// Folder names to add
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Remove target folder names from the configuration
    Remove {
        /// Folder names to remove (case-insensitive)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Reset the configuration to the default (node_modules)
    Reset,
}
