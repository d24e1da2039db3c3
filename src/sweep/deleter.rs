use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Per-directory deletion failures.
///
/// These are reported per attempted directory and never abort the remaining
/// batch; the caller accumulates them into a [`DeleteSummary`].
#[derive(Error, Debug)]
pub enum DeleteError {
    /// The directory vanished between scanning and deletion.
    #[error("Directory not found: '{0}'")]
    NotFound(PathBuf),

    /// Insufficient permissions to remove an entry.
    #[error("Access denied: '{path}'")]
    AccessDenied {
        /// The entry that could not be removed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An I/O failure, e.g. a file still locked by another process.
    #[error("I/O error: '{path}'")]
    IoError {
        /// The entry that could not be removed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Catch-all for uncategorized failures; preserves the message.
    #[error("Unexpected error: '{path}': {source}")]
    Unexpected {
        /// The entry that could not be removed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

fn classify(path: &Path, source: io::Error) -> DeleteError {
    let path = path.to_path_buf();
    match source.kind() {
        io::ErrorKind::NotFound => DeleteError::NotFound(path),
        io::ErrorKind::PermissionDenied => DeleteError::AccessDenied { path, source },
        io::ErrorKind::Other => DeleteError::Unexpected { path, source },
        _ => DeleteError::IoError { path, source },
    }
}

/// Recursively delete `dir` and everything inside it.
///
/// Deletion is bottom-up and attribute-aware:
///
/// 1. Symlinked children are removed as links without descending; deleting
///    through a junction must never destroy the link's target contents.
/// 2. Plain subdirectories recurse first (post-order).
/// 3. Files get a read-only attribute clear before removal, covering
///    package ecosystems that ship read-only files.
/// 4. The emptied directory itself is removed non-recursively.
///
/// A failure leaves the tree partially deleted but never touches anything
/// outside it. Returns [`DeleteError::NotFound`] if `dir` is already gone,
/// leaving the filesystem unchanged.
pub fn delete_directory(dir: &Path) -> Result<(), DeleteError> {
    let meta = std::fs::symlink_metadata(dir).map_err(|source| classify(dir, source))?;
    if meta.file_type().is_symlink() {
        return remove_link(dir);
    }

    delete_contents(dir)?;
    std::fs::remove_dir(dir).map_err(|source| classify(dir, source))
}

fn delete_contents(dir: &Path) -> Result<(), DeleteError> {
    let read = std::fs::read_dir(dir).map_err(|source| classify(dir, source))?;

    for entry in read {
        let entry = entry.map_err(|source| classify(dir, source))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|source| classify(&path, source))?;

        if file_type.is_symlink() {
            remove_link(&path)?;
        } else if file_type.is_dir() {
            delete_contents(&path)?;
            std::fs::remove_dir(&path).map_err(|source| classify(&path, source))?;
        } else {
            remove_file_forced(&path)?;
        }
    }

    Ok(())
}

/// Remove a symlink or junction itself, never its target.
fn remove_link(path: &Path) -> Result<(), DeleteError> {
    #[cfg(windows)]
    {
        // Directory symlinks and junctions unlink via remove_dir on Windows.
        if std::fs::remove_dir(path).is_ok() {
            return Ok(());
        }
    }
    std::fs::remove_file(path).map_err(|source| classify(path, source))
}

/// Remove a file, clearing a read-only attribute first if present.
fn remove_file_forced(path: &Path) -> Result<(), DeleteError> {
    if let Ok(meta) = std::fs::symlink_metadata(path) {
        let mut perms = meta.permissions();
        if perms.readonly() {
            #[allow(clippy::permissions_set_readonly_false)]
            perms.set_readonly(false);
            let _ = std::fs::set_permissions(path, perms);
        }
    }
    std::fs::remove_file(path).map_err(|source| classify(path, source))
}

/// The result of one deletion attempt within a batch.
#[derive(Debug)]
pub struct DeleteOutcome {
    /// The directory that was attempted
    pub path: PathBuf,
    /// Success, or the reason the deletion failed
    pub result: Result<(), DeleteError>,
}

/// Aggregate bookkeeping for a sequential deletion batch.
///
/// Bytes freed count only successful deletions, using the size measured at
/// scan time.
#[derive(Debug, Default)]
pub struct DeleteSummary {
    /// Number of directories deleted successfully
    pub success_count: usize,
    /// Number of directories that could not be deleted
    pub failure_count: usize,
    /// Total bytes reclaimed from successful deletions
    pub bytes_freed: u64,
}

impl DeleteSummary {
    /// Fold one outcome into the summary. `size` is the scan-time size of
    /// the directory and is counted only on success.
    pub fn record(&mut self, outcome: &DeleteOutcome, size: u64) {
        match outcome.result {
            Ok(()) => {
                self.success_count += 1;
                self.bytes_freed += size;
            }
            Err(_) => self.failure_count += 1,
        }
    }
}
