//! Two-pass analysis orchestration.
//!
//! Drives the whole run: resolve the root path, enumerate source files,
//! parse each file once, then traverse every syntax tree twice against one
//! shared [`UsageTable`] - a declaration-only pass followed by a usage-only
//! pass. The two passes are mutually exclusive by construction (separate
//! visitor types), so declaration order between files can never leak usages
//! into pass 1 or late declarations into pass 2.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{DeadstructResult, IoResultExt};
use crate::parse::parse_source_file;
use crate::scan::gather_rs_files_with_excludes;
use crate::table::UsageTable;
use crate::visit::{StructDeclVisitor, StructUsageVisitor};
use syn::visit::Visit;

/// Options controlling one analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Print `New struct found: <name>` as declarations are discovered.
    pub announce: bool,
    /// Struct name patterns excluded from the final report.
    pub ignore: Vec<String>,
    /// Extra directory names pruned during the scan.
    pub excluded_dirs: Vec<String>,
}

/// A per-file failure that was reported and skipped.
#[derive(Debug, Clone)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// Result of a completed analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The analyzed root (file or directory).
    pub root: PathBuf,
    /// Number of files that were enumerated (including ones that failed).
    pub files_scanned: usize,
    /// Every declared struct name, first-declaration order.
    pub declared: Vec<String>,
    /// Declared names never referenced, first-declaration order, with
    /// ignore patterns filtered out.
    pub unused: Vec<String>,
    /// Files that failed to read or parse and contributed nothing.
    pub file_errors: Vec<FileError>,
}

impl AnalysisOutcome {
    /// Whether the run found any unused structs.
    pub fn has_unused(&self) -> bool {
        !self.unused.is_empty()
    }
}

/// Checks if a struct name matches any ignore pattern
/// (exact, suffix, or substring). Empty patterns match nothing.
fn is_ignored(name: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .filter(|p| !p.is_empty())
        .any(|p| p == name || name.ends_with(p.as_str()) || name.contains(p.as_str()))
}

/// Analyzes a directory tree or a single file for unused struct declarations.
///
/// A failure to stat the root path or to enumerate the directory is fatal
/// and returned as an error. A failure on an individual file is printed,
/// logged, recorded in the outcome, and skipped; that file contributes zero
/// declarations and zero usages.
pub fn analyze_path(path: &Path, options: &AnalyzeOptions) -> DeadstructResult<AnalysisOutcome> {
    let meta = fs::metadata(path).with_path(path)?;

    // A single-file root short-circuits directory enumeration but still
    // runs both passes, so results match a directory holding only that file.
    let files = if meta.is_file() {
        vec![path.to_path_buf()]
    } else {
        let extra: Vec<&str> = options.excluded_dirs.iter().map(String::as_str).collect();
        gather_rs_files_with_excludes(path, &extra)?
    };

    info!(root = %path.display(), files = files.len(), "starting analysis");

    // Parse each file exactly once; both passes traverse the stored trees.
    let mut parsed: Vec<(PathBuf, syn::File)> = Vec::with_capacity(files.len());
    let mut file_errors = Vec::new();
    for file in &files {
        match parse_source_file(file) {
            Ok(ast) => parsed.push((file.clone(), ast)),
            Err(e) => {
                println!("Error while analyzing the file {}: {}", file.display(), e);
                warn!(file = %file.display(), error = %e, "skipping file");
                file_errors.push(FileError {
                    path: file.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    let mut table = UsageTable::new();

    // Pass 1: declarations only.
    for (file, ast) in &parsed {
        let mut visitor = StructDeclVisitor::new(&mut table);
        visitor.visit_file(ast);
        debug!(file = %file.display(), found = visitor.discovered.len(), "declaration pass");
        if options.announce {
            for name in &visitor.discovered {
                println!("New struct found: {name}");
            }
        }
    }

    // Pass 2: usages only, same shared table.
    for (_file, ast) in &parsed {
        let mut visitor = StructUsageVisitor::new(&mut table);
        visitor.visit_file(ast);
    }

    let declared: Vec<String> = table.declared().map(str::to_string).collect();
    let unused: Vec<String> = table
        .unused()
        .filter(|name| !is_ignored(name, &options.ignore))
        .map(str::to_string)
        .collect();

    info!(
        declared = declared.len(),
        unused = unused.len(),
        failed_files = file_errors.len(),
        "analysis complete"
    );

    Ok(AnalysisOutcome {
        root: path.to_path_buf(),
        files_scanned: files.len(),
        declared,
        unused,
        file_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ignored_exact_and_suffix() {
        let patterns = vec!["Proto".to_string()];
        assert!(is_ignored("Proto", &patterns));
        assert!(is_ignored("UserProto", &patterns));
        assert!(!is_ignored("Prot", &patterns));
    }

    #[test]
    fn test_is_ignored_substring() {
        let patterns = vec!["Gen".to_string()];
        assert!(is_ignored("GenTable", &patterns));
        assert!(is_ignored("MyGenType", &patterns));
    }

    #[test]
    fn test_empty_pattern_ignores_nothing() {
        // `contains("")` holds for every name, so a stray empty entry in
        // deadstruct.toml must not blank the whole report.
        let patterns = vec![String::new()];
        assert!(!is_ignored("Foo", &patterns));

        let mixed = vec![String::new(), "Proto".to_string()];
        assert!(is_ignored("UserProto", &mixed));
        assert!(!is_ignored("Plain", &mixed));
    }

    #[test]
    fn test_root_path_error_is_fatal() {
        let err =
            analyze_path(Path::new("/no/such/path"), &AnalyzeOptions::default()).unwrap_err();
        // Surfaced to the caller instead of being swallowed as a file error.
        assert!(matches!(err, crate::error::DeadstructError::Io { .. }));
    }
}
