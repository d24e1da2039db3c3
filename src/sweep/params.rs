use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use rayon::prelude::*;

use super::scanner::{TargetSet, scan};
use super::usage::directory_size;
use crate::error::Result;

/// One matched directory with its measured disk usage.
///
/// Created once per match after size aggregation and never mutated; the
/// result list is ordered by size descending for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    path: PathBuf,
    size: u64,
    last_modified: SystemTime,
}

impl ScanResult {
    /// Absolute path of the matched directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total bytes of all contained files.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Last-modified timestamp of the directory itself.
    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }
}

/// A configured sweep: where to scan, how deep, and what to look for.
#[derive(Clone, Debug)]
pub struct Sweep {
    /// Root path to scan beneath
    root: PathBuf,
    /// Maximum match depth; the root's direct children are depth 1
    max_depth: Option<usize>,
    /// Drop results smaller than this many bytes
    min_size: Option<u64>,
    /// Folder names to search for
    targets: TargetSet,
}

impl Sweep {
    /// Creates a new builder for [`Sweep`]
    pub fn builder() -> SweepBuilder {
        SweepBuilder::default()
    }

    /// Get the scan root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the maximum match depth
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Get the minimum result size in bytes
    pub fn min_size(&self) -> Option<u64> {
        self.min_size
    }

    /// Get the target name set
    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    /// Scan for matches and measure each one.
    ///
    /// Composes the tree scanner with the size aggregator: traversal runs
    /// single-threaded, then sizing fans out across matches on the rayon
    /// pool. The minimum-size filter is applied strictly after sizing
    /// (a directory's size is unknown until fully aggregated) and results
    /// are sorted by size descending, largest first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SweepError::RootNotFound`] if the root does
    /// not exist; all deeper traversal errors are absorbed.
    pub fn run(&self) -> Result<Vec<ScanResult>> {
        let matches: Vec<PathBuf> = scan(&self.root, self.max_depth, &self.targets)?.collect();

        let mut results: Vec<ScanResult> = matches
            .into_par_iter()
            .map(|path| {
                let size = directory_size(&path);
                let last_modified = fs::metadata(&path)
                    .and_then(|meta| meta.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                ScanResult {
                    path,
                    size,
                    last_modified,
                }
            })
            .filter(|result| self.min_size.is_none_or(|min| result.size >= min))
            .collect();

        // Stable display order: largest first, path as tiebreaker.
        results.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));

        Ok(results)
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_depth: None,
            min_size: None,
            targets: TargetSet::default(),
        }
    }
}

/// Builder for [`Sweep`]
#[derive(Debug, Default)]
pub struct SweepBuilder {
    root: Option<PathBuf>,
    max_depth: Option<usize>,
    min_size: Option<u64>,
    targets: Option<TargetSet>,
}

impl SweepBuilder {
    /// Set the scan root
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the maximum match depth
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the minimum result size in bytes
    pub fn min_size(mut self, bytes: Option<u64>) -> Self {
        self.min_size = bytes;
        self
    }

    /// Set the target name set
    pub fn targets(mut self, targets: TargetSet) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Build the [`Sweep`]
    pub fn build(self) -> Sweep {
        Sweep {
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            max_depth: self.max_depth,
            min_size: self.min_size,
            targets: self.targets.unwrap_or_default(),
        }
    }
}
