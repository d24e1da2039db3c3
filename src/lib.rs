//! # dirsweep
//!
//! A CLI tool that finds directories matching configurable target names
//! (default: `node_modules`) beneath a root path, measures their disk
//! usage, and optionally deletes selected ones interactively.
//!
//! ## Key Features
//!
//! - **Depth-bounded scanning**: lazy depth-first search with name-based
//!   pruning and a fixed denylist for VCS/IDE metadata folders
//! - **Best-effort sizing**: recursive aggregation that tolerates access
//!   failures and never follows symlinks, fanned out with rayon
//! - **Defensive deletion**: bottom-up removal that clears read-only
//!   attributes and removes reparse points as leaf links
//! - **Configurable targets**: a persisted JSON list of folder names, with
//!   one-off `--target` overrides that never persist
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`commands`]: Implementation of the scan, clean, and config commands
//! - [`config`]: Persisted target-name configuration (JSON)
//! - [`error`]: Error types and handling with thiserror + miette
//! - [`sweep`]: The scanning, sizing, and deletion core
//!
//! ## Library Usage
//!
//! While dirsweep is primarily a CLI tool, the sweep core is exposed for
//! integration into other tools:
//!
//! ```no_run
//! use dirsweep::sweep::{Sweep, TargetSet, delete_directory};
//!
//! let results = Sweep::builder()
//!     .root("/home/me/projects")
//!     .targets(TargetSet::new(["node_modules"]))
//!     .build()
//!     .run()?;
//!
//! for result in &results {
//!     delete_directory(result.path()).ok();
//! }
//! # Ok::<(), dirsweep::error::SweepError>(())
//! ```
//!
//! ## Error Handling
//!
//! The crate uses a combination of:
//! - `thiserror` for strongly-typed errors
//! - `miette` for rich diagnostic output in the CLI
//!
//! Per-node traversal and sizing failures are absorbed (skip the subtree,
//! contribute nothing); per-directory deletion failures are reported
//! individually without aborting the batch. Only a missing scan root is a
//! hard failure.

// Re-export public modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod sweep;

// Internal modules
mod logging;
