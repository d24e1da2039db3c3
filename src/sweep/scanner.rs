use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SweepError};

/// The folder name searched for when no targets are configured.
pub const DEFAULT_TARGET: &str = "node_modules";

/// Hidden VCS/IDE metadata folders that are never traversed and never
/// matched, even when they also appear in the target set.
const SYSTEM_FOLDERS: &[&str] = &[".git", ".vs", ".idea", ".vscode", ".github"];

fn is_system_folder(name: &str) -> bool {
    SYSTEM_FOLDERS
        .iter()
        .any(|folder| folder.eq_ignore_ascii_case(name))
}

/// A case-insensitive set of folder names to search for.
///
/// Built from the persisted configuration or from a `--target` override on
/// the command line; overrides never persist back to the configuration.
#[derive(Clone, Debug)]
pub struct TargetSet {
    names: HashSet<String>,
}

impl TargetSet {
    /// Build a target set from folder names. Names are matched
    /// case-insensitively; duplicates and order are irrelevant.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Check whether a folder name is a target.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    /// Number of distinct target names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no target names are configured.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for TargetSet {
    fn default() -> Self {
        Self::new([DEFAULT_TARGET])
    }
}

/// Lazily scan for target-named directories beneath `root`.
///
/// Traversal is depth-first with the root's direct children at depth 1. At
/// every directory the system-folder denylist is checked before the target
/// set, so a denylisted name can never be returned as a match. Matched
/// directories are yielded without descending into them; a target nested
/// inside another target is never a separate match. When `max_depth` is set,
/// only matches at depth <= `max_depth` are yielded and traversal stops
/// below that depth; `Some(0)` therefore admits no matches at all.
///
/// The root is absolutized first, so yielded paths are always absolute no
/// matter how the root was given.
///
/// Directories that cannot be enumerated (permission denied, vanished) are
/// skipped silently along with their subtrees. Symbolic links are never
/// followed; a link to a directory whose name is a target is yielded as a
/// leaf match without being descended into.
///
/// # Errors
///
/// Returns [`SweepError::RootNotFound`] if `root` does not exist or is not
/// a directory. This is the only error surfaced from a scan.
pub fn scan(root: &Path, max_depth: Option<usize>, targets: &TargetSet) -> Result<ScanIter> {
    if !root.is_dir() {
        return Err(SweepError::RootNotFound(root.to_path_buf()));
    }

    let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

    // walkdir clamps max_depth up to min_depth, so a zero bound cannot be
    // handed to the walker: direct children already sit at depth 1.
    if max_depth == Some(0) {
        return Ok(ScanIter {
            inner: None,
            targets: targets.clone(),
        });
    }

    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    Ok(ScanIter {
        inner: Some(walker.into_iter()),
        targets: targets.clone(),
    })
}

/// One-shot iterator over matched directories, produced by [`scan`].
pub struct ScanIter {
    inner: Option<walkdir::IntoIter>,
    targets: TargetSet,
}

impl Iterator for ScanIter {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let inner = self.inner.as_mut()?;
        loop {
            let entry = match inner.next()? {
                Ok(entry) => entry,
                // Inaccessible subtree: contributes nothing, keep walking.
                Err(_) => continue,
            };

            let file_type = entry.file_type();
            let is_dir = file_type.is_dir();
            // A link to a directory enumerates like a directory and can
            // match, but only ever as a leaf link.
            let is_dir_link = file_type.is_symlink() && entry.path().is_dir();
            if !is_dir && !is_dir_link {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if is_system_folder(&name) {
                // skip_current_dir pops the walker's deepest open listing;
                // links were never opened, so only prune real directories.
                if is_dir {
                    inner.skip_current_dir();
                }
                continue;
            }

            if self.targets.contains(&name) {
                // Contents of a match are irrelevant to further matching.
                if is_dir {
                    inner.skip_current_dir();
                }
                return Some(entry.into_path());
            }
        }
    }
}
