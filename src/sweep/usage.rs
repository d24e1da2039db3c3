use std::fs;
use std::path::Path;

use rayon::prelude::*;

/// Calculate the total size in bytes of all files under `dir`, recursively.
///
/// Sizing is always best-effort and never fails: entries whose metadata
/// cannot be read contribute zero, and if `dir` itself cannot be enumerated
/// the whole call returns 0. Symbolic links and other reparse points are
/// never followed; the link itself contributes nothing, which avoids
/// double-counting and cycles through junctions. A `dir` that is itself a
/// link reports 0 for the same reason.
///
/// Metadata lookups within each directory level fan out across the rayon
/// pool. The reduction is a commutative sum, so the result is identical to
/// a sequential walk regardless of scheduling.
pub fn directory_size(dir: &Path) -> u64 {
    // read_dir would resolve a link root, so the link check comes first.
    if fs::symlink_metadata(dir).is_ok_and(|meta| meta.file_type().is_symlink()) {
        return 0;
    }
    let Ok(read) = fs::read_dir(dir) else {
        return 0;
    };
    let entries: Vec<_> = read.filter_map(|entry| entry.ok()).collect();

    entries
        .par_iter()
        .map(|entry| {
            // DirEntry::file_type does not traverse symlinks.
            let Ok(file_type) = entry.file_type() else {
                return 0;
            };
            if file_type.is_symlink() {
                0
            } else if file_type.is_dir() {
                directory_size(&entry.path())
            } else {
                entry.metadata().map_or(0, |meta| meta.len())
            }
        })
        .sum()
}
