//! Per-file source parsing.
//!
//! The analysis core never tokenizes Rust itself; syn is the external tree
//! walker. This module turns one file path into a traversable AST or a typed
//! error with location info.

use std::fs;
use std::path::Path;

use crate::error::{DeadstructError, DeadstructResult, IoResultExt};

/// Maximum file size to parse (10 MB).
/// Larger files are rejected to prevent pathological memory use.
const MAX_FILE_SIZE: u64 = 10_000_000;

/// Reads and parses one Rust source file into a syntax tree.
///
/// Failures are per-file and recoverable: the caller reports them and moves
/// on to the next file. Parse errors carry 1-indexed line/column positions
/// taken from proc-macro2 span locations.
pub fn parse_source_file(path: &Path) -> DeadstructResult<syn::File> {
    let meta = fs::metadata(path).with_path(path)?;
    if meta.len() > MAX_FILE_SIZE {
        return Err(DeadstructError::parse(
            path,
            format!("file exceeds {} byte parse limit", MAX_FILE_SIZE),
        ));
    }

    let content = fs::read_to_string(path).with_path(path)?;
    syn::parse_file(&content).map_err(|e| {
        let start = e.span().start();
        DeadstructError::parse_at(path, e.to_string(), start.line, start.column + 1)
    })
}
