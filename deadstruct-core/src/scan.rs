//! Sequential, deterministic file discovery with directory pruning.
//!
//! The scan is deliberately single-threaded: the whole analysis is a
//! short-lived batch run with one shared table, so files are enumerated and
//! later traversed one at a time in a fixed order. Entries are sorted by file
//! name so two runs over the same tree always produce the same file order
//! (and therefore the same first-declaration report order).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DeadstructError, DeadstructResult};

/// Directories to exclude by default (standard Rust project conventions).
const EXCLUDED_DIRS: &[&str] = &["target", ".git", "node_modules", ".cargo"];

/// Checks if a directory entry should be pruned (excluded from traversal).
///
/// Called by `WalkDir::filter_entry`, which enables O(1) subtree skipping
/// for excluded directories.
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

fn walk(root: &Path, excludes: &HashSet<&str>) -> DeadstructResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, excludes))
    {
        // Any enumeration failure (unreadable directory, broken cycle)
        // aborts the run; per-file problems surface later, at parse time.
        let entry = entry.map_err(|e| DeadstructError::scan(root, e.to_string()))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Gathers all .rs files recursively under the root path, in sorted
/// traversal order.
///
/// Automatically excludes `target/`, `.git/`, `node_modules/`, and `.cargo/`.
pub fn gather_rs_files(root: &Path) -> DeadstructResult<Vec<PathBuf>> {
    let excludes: HashSet<&str> = EXCLUDED_DIRS.iter().copied().collect();
    walk(root, &excludes)
}

/// Gathers all .rs files with custom exclusion patterns layered on top of
/// the defaults.
pub fn gather_rs_files_with_excludes(
    root: &Path,
    excludes: &[&str],
) -> DeadstructResult<Vec<PathBuf>> {
    let all_excludes: HashSet<&str> = EXCLUDED_DIRS
        .iter()
        .copied()
        .chain(excludes.iter().copied())
        .collect();
    walk(root, &all_excludes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_tree(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("deadstruct_scan_test")
            .join(format!("{}_{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(dir.join("src/nested")).unwrap();
        fs::create_dir_all(dir.join("target/debug")).unwrap();
        fs::write(dir.join("src/b.rs"), "struct B;").unwrap();
        fs::write(dir.join("src/a.rs"), "struct A;").unwrap();
        fs::write(dir.join("src/nested/c.rs"), "struct C;").unwrap();
        fs::write(dir.join("src/notes.txt"), "not source").unwrap();
        fs::write(dir.join("target/debug/gen.rs"), "struct Generated;").unwrap();
        dir
    }

    #[test]
    fn test_gathers_only_rs_files() {
        let dir = create_tree("only_rs");
        let files = gather_rs_files(&dir).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.extension().unwrap() == "rs"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_excludes_target_dir() {
        let dir = create_tree("excl_build_dir");
        let files = gather_rs_files(&dir).unwrap();
        assert!(!files.iter().any(|f| f.to_string_lossy().contains("target")));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_order_is_sorted_and_stable() {
        let dir = create_tree("stable_order");
        let first = gather_rs_files(&dir).unwrap();
        let second = gather_rs_files(&dir).unwrap();
        assert_eq!(first, second);
        // a.rs sorts before b.rs within the same directory.
        let names: Vec<_> = first
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        let a = names.iter().position(|n| n == "a.rs").unwrap();
        let b = names.iter().position(|n| n == "b.rs").unwrap();
        assert!(a < b);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_custom_excludes() {
        let dir = create_tree("custom_excl");
        let files = gather_rs_files_with_excludes(&dir, &["nested"]).unwrap();
        assert_eq!(files.len(), 2);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let err = gather_rs_files(Path::new("/no/such/root")).unwrap_err();
        assert!(!err.is_recoverable());
    }
}
