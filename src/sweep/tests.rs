use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use super::deleter::{DeleteError, DeleteOutcome, DeleteSummary, delete_directory};
use super::scanner::{TargetSet, scan};
use super::size::{format_size, parse_size};
use super::usage::directory_size;

// Helpers

fn write_file(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; size]).unwrap();
}

fn scan_paths(root: &Path, max_depth: Option<usize>, targets: &TargetSet) -> Vec<PathBuf> {
    let mut paths: Vec<_> = scan(root, max_depth, targets).unwrap().collect();
    paths.sort();
    paths
}

// TargetSet

#[test]
fn test_target_set_is_case_insensitive() {
    let targets = TargetSet::new(["Node_Modules"]);
    assert!(targets.contains("node_modules"));
    assert!(targets.contains("NODE_MODULES"));
    assert!(!targets.contains("node_modules2"));
}

#[test]
fn test_target_set_default_is_node_modules() {
    let targets = TargetSet::default();
    assert_eq!(targets.len(), 1);
    assert!(targets.contains("node_modules"));
}

// Scanner

#[test]
fn test_scan_missing_root_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");
    let result = scan(&missing, None, &TargetSet::default());
    assert!(matches!(
        result,
        Err(crate::error::SweepError::RootNotFound(_))
    ));
}

#[test]
fn test_scan_without_targets_present_is_empty() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("a/b/c")).unwrap();
    write_file(&temp.path().join("a/file.txt"), 10);

    let matches = scan_paths(temp.path(), None, &TargetSet::default());
    assert!(matches.is_empty());
}

#[test]
fn test_scan_does_not_descend_into_matches() {
    let temp = TempDir::new().unwrap();
    // A target nested inside another target must not be a separate match.
    fs::create_dir_all(temp.path().join("app/node_modules/dep/node_modules")).unwrap();

    let matches = scan_paths(temp.path(), None, &TargetSet::default());
    assert_eq!(matches, vec![temp.path().join("app/node_modules")]);
}

#[test]
fn test_scan_denylist_beats_target_set() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".git/node_modules")).unwrap();
    fs::create_dir_all(temp.path().join(".idea")).unwrap();
    fs::create_dir_all(temp.path().join("app/node_modules")).unwrap();

    // Even naming a denylisted folder as a target cannot match it.
    let targets = TargetSet::new(["node_modules", ".git", ".idea"]);
    let matches = scan_paths(temp.path(), None, &targets);
    assert_eq!(matches, vec![temp.path().join("app/node_modules")]);
}

#[test]
fn test_scan_depth_bound() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("node_modules")).unwrap(); // depth 1
    fs::create_dir_all(temp.path().join("a/node_modules")).unwrap(); // depth 2
    fs::create_dir_all(temp.path().join("b/sub/node_modules")).unwrap(); // depth 3

    let targets = TargetSet::default();

    let all = scan_paths(temp.path(), None, &targets);
    assert_eq!(all.len(), 3);

    let shallow = scan_paths(temp.path(), Some(2), &targets);
    assert_eq!(
        shallow,
        vec![
            temp.path().join("a/node_modules"),
            temp.path().join("node_modules"),
        ]
    );

    // Depth 0 admits no matches: direct children already sit at depth 1.
    assert!(scan_paths(temp.path(), Some(0), &targets).is_empty());
}

#[test]
fn test_scan_depth_zero_ignores_direct_children() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("node_modules")).unwrap();

    let matches = scan_paths(temp.path(), Some(0), &TargetSet::default());
    assert!(matches.is_empty());
}

#[test]
fn test_scan_relative_root_yields_absolute_paths() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("app/node_modules")).unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp.path()).unwrap();
    let matches = scan_paths(Path::new("."), None, &TargetSet::default());
    std::env::set_current_dir(original).unwrap();

    assert_eq!(matches.len(), 1);
    assert!(matches[0].is_absolute());
    assert!(matches[0].ends_with("app/node_modules"));
}

#[test]
fn test_scan_multiple_targets() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("py/__pycache__")).unwrap();
    fs::create_dir_all(temp.path().join("js/node_modules")).unwrap();
    fs::create_dir_all(temp.path().join("js/src")).unwrap();

    let targets = TargetSet::new(["node_modules", "__pycache__"]);
    let matches = scan_paths(temp.path(), None, &targets);
    assert_eq!(
        matches,
        vec![
            temp.path().join("js/node_modules"),
            temp.path().join("py/__pycache__"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_scan_does_not_follow_symlinked_directories() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    fs::create_dir_all(outside.path().join("node_modules")).unwrap();
    std::os::unix::fs::symlink(outside.path(), temp.path().join("linked")).unwrap();

    let matches = scan_paths(temp.path(), None, &TargetSet::default());
    assert!(matches.is_empty());
}

#[cfg(unix)]
#[test]
fn test_scan_matches_target_named_link_as_leaf() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    // The link target contains a nested match that must stay unreachable.
    fs::create_dir_all(outside.path().join("dep/node_modules")).unwrap();
    std::os::unix::fs::symlink(outside.path(), temp.path().join("node_modules")).unwrap();

    let matches = scan_paths(temp.path(), None, &TargetSet::default());
    assert_eq!(matches, vec![temp.path().join("node_modules")]);
}

// Size aggregation

#[test]
fn test_directory_size_empty_is_zero() {
    let temp = TempDir::new().unwrap();
    assert_eq!(directory_size(temp.path()), 0);
}

#[test]
fn test_directory_size_missing_is_zero() {
    let temp = TempDir::new().unwrap();
    assert_eq!(directory_size(&temp.path().join("gone")), 0);
}

#[test]
fn test_directory_size_sums_across_nesting() {
    let temp = TempDir::new().unwrap();
    write_file(&temp.path().join("a.bin"), 1024);
    write_file(&temp.path().join("sub/b.bin"), 2048);
    write_file(&temp.path().join("sub/deep/c.bin"), 0);
    write_file(&temp.path().join("sub/deep/d.bin"), 500);

    assert_eq!(directory_size(temp.path()), 3572);
}

#[cfg(unix)]
#[test]
fn test_directory_size_ignores_symlinks() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    write_file(&outside.path().join("big.bin"), 4096);
    write_file(&temp.path().join("real.bin"), 100);
    std::os::unix::fs::symlink(outside.path(), temp.path().join("dir_link")).unwrap();
    std::os::unix::fs::symlink(
        outside.path().join("big.bin"),
        temp.path().join("file_link"),
    )
    .unwrap();

    // Links contribute nothing and are never followed.
    assert_eq!(directory_size(temp.path()), 100);
}

#[cfg(unix)]
#[test]
fn test_directory_size_of_link_root_is_zero() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    write_file(&outside.path().join("big.bin"), 4096);
    let link = temp.path().join("node_modules");
    std::os::unix::fs::symlink(outside.path(), &link).unwrap();

    assert_eq!(directory_size(&link), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// The aggregate is the plain sum of file lengths, independent of how
    /// the files are nested.
    #[test]
    fn test_directory_size_matches_sum(sizes in prop::collection::vec(0usize..4096, 1..8)) {
        let temp = TempDir::new().unwrap();
        let mut dir = temp.path().to_path_buf();
        for (i, size) in sizes.iter().enumerate() {
            // Alternate between nesting deeper and writing siblings.
            if i % 2 == 0 {
                dir = dir.join(format!("level{i}"));
            }
            write_file(&dir.join(format!("file{i}.bin")), *size);
        }

        let expected: usize = sizes.iter().sum();
        prop_assert_eq!(directory_size(temp.path()), expected as u64);
    }
}

// Deletion

#[test]
fn test_delete_missing_directory_is_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("gone");

    let result = delete_directory(&missing);
    assert!(matches!(result, Err(DeleteError::NotFound(_))));
    // Filesystem unchanged
    assert!(temp.path().exists());
}

#[test]
fn test_delete_removes_nested_tree() {
    let temp = TempDir::new().unwrap();
    let victim = temp.path().join("node_modules");
    write_file(&victim.join("a/b/c.txt"), 10);
    write_file(&victim.join("a/d.txt"), 10);
    write_file(&victim.join("e.txt"), 10);

    delete_directory(&victim).unwrap();
    assert!(!victim.exists());
    // Siblings untouched
    assert!(temp.path().exists());
}

#[test]
fn test_delete_clears_read_only_files() {
    let temp = TempDir::new().unwrap();
    let victim = temp.path().join("node_modules");
    let file = victim.join("package/LICENSE");
    write_file(&file, 24);

    let mut perms = fs::metadata(&file).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&file, perms).unwrap();

    delete_directory(&victim).unwrap();
    assert!(!victim.exists());
}

#[cfg(unix)]
#[test]
fn test_delete_removes_links_without_following() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    write_file(&outside.path().join("keep.txt"), 10);

    let victim = temp.path().join("node_modules");
    fs::create_dir_all(&victim).unwrap();
    std::os::unix::fs::symlink(outside.path(), victim.join("escape")).unwrap();
    std::os::unix::fs::symlink(outside.path().join("keep.txt"), victim.join("f_link")).unwrap();

    delete_directory(&victim).unwrap();
    assert!(!victim.exists());
    // Only the links were removed; the targets survive.
    assert!(outside.path().join("keep.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_delete_symlinked_root_removes_only_the_link() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    write_file(&outside.path().join("keep.txt"), 10);

    let link = temp.path().join("node_modules");
    std::os::unix::fs::symlink(outside.path(), &link).unwrap();

    delete_directory(&link).unwrap();
    assert!(link.symlink_metadata().is_err());
    assert!(outside.path().join("keep.txt").exists());
}

#[test]
fn test_delete_summary_counts_only_successes() {
    let temp = TempDir::new().unwrap();
    let victim = temp.path().join("node_modules");
    write_file(&victim.join("a.txt"), 512);

    let mut summary = DeleteSummary::default();

    let ok = DeleteOutcome {
        path: victim.clone(),
        result: delete_directory(&victim),
    };
    summary.record(&ok, 512);

    let failed = DeleteOutcome {
        path: victim.clone(),
        result: delete_directory(&victim), // already gone
    };
    summary.record(&failed, 512);

    assert_eq!(summary.success_count, 1);
    assert_eq!(summary.failure_count, 1);
    assert_eq!(summary.bytes_freed, 512);
}

// Size parsing and formatting

#[test]
fn test_parse_size() {
    assert_eq!(parse_size("100").unwrap(), 100);
    assert_eq!(parse_size("100B").unwrap(), 100);
    assert_eq!(parse_size("1K").unwrap(), 1024);
    assert_eq!(parse_size("1KiB").unwrap(), 1024);
    assert_eq!(parse_size("2M").unwrap(), 2 * 1024 * 1024);
    assert_eq!(parse_size("2MB").unwrap(), 2 * 1024 * 1024);
    assert_eq!(parse_size("3G").unwrap(), 3 * 1024 * 1024 * 1024);
    assert_eq!(
        parse_size("1.5G").unwrap(),
        (1.5 * 1024.0 * 1024.0 * 1024.0) as u64
    );
    assert_eq!(parse_size(" 500M ").unwrap(), 500 * 1024 * 1024);

    assert!(parse_size("").is_err());
    assert!(parse_size("abc").is_err());
    assert!(parse_size("100X").is_err());
}

#[test]
fn test_format_size() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(100), "100 B");
    assert_eq!(format_size(1024), "1.0 KiB");
    assert_eq!(format_size(1536), "1.5 KiB");
    assert_eq!(format_size(1024 * 1024), "1.0 MiB");
    assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GiB");
}
