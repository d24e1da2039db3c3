//! Error types for dirsweep.
//!
//! This module defines the fatal error taxonomy used throughout dirsweep,
//! using `thiserror` for ergonomic error definitions and `miette` for rich
//! diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - Fatal errors derive from [`SweepError`] and abort the current command
//! - Per-node traversal and sizing failures are never surfaced here; the
//!   scanner and sizer absorb them and skip the affected subtree
//! - Per-directory deletion failures use [`crate::sweep::DeleteError`] so a
//!   single locked or protected directory never aborts the remaining batch
//! - Errors are automatically converted to `miette::Result` for CLI output

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Fatal errors that abort a dirsweep command
#[derive(Error, Debug, Diagnostic)]
pub enum SweepError {
    /// The scan root does not exist or is not a directory.
    ///
    /// This is the only traversal error surfaced to the caller; everything
    /// deeper in the tree is absorbed as "skip that subtree". Raised before
    /// any scanning work begins.
    #[error("Scan root not found: '{0}'")]
    #[diagnostic(
        code(dirsweep::scan::root_not_found),
        help("Check that the path exists and is a directory.")
    )]
    RootNotFound(
        /// The root path that was requested for scanning
        PathBuf,
    ),

    /// File system I/O error during dirsweep operations.
    ///
    /// Used for operations outside the scan/size/delete core, such as
    /// writing the configuration file or resolving the working directory.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(dirsweep::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid size specification for --min-size.
    ///
    /// Raised when parsing size strings like "500M" or "2G" fails. Valid
    /// suffixes are B, K, M, G, or T; numbers without a suffix are bytes.
    #[error("Invalid size: '{0}' - {1}")]
    #[diagnostic(
        code(dirsweep::cli::invalid_size),
        help(
            "Specify sizes as a number with optional suffix (e.g. '500M', '2G', '1024K', or raw \
             bytes)"
        )
    )]
    InvalidSize(
        /// The invalid size value provided
        String,
        /// Description of the parsing error
        String,
    ),

    /// The configuration file could not be written.
    ///
    /// Loading is always best-effort (an absent or unparsable file yields
    /// the default target list), but a failed save is reported so updates
    /// to the target list are never silently dropped.
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(dirsweep::config::error),
        help("Check permissions on the configuration directory.")
    )]
    ConfigError(
        /// Description of the configuration error
        String,
    ),

    /// Failed to read an interactive response from standard input.
    #[error("Failed to read from standard input")]
    #[diagnostic(code(dirsweep::prompt::read_error))]
    PromptError(
        /// The underlying I/O error
        #[source]
        std::io::Error,
    ),
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SweepError>;
