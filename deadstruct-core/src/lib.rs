//! deadstruct-core: unused struct detection library for Rust source trees.
//!
//! Scans a directory (or a single file) of Rust source and reports every
//! `struct` declaration that is never referenced by a qualified name
//! anywhere in the scanned set. Correlation is purely by name: a struct
//! counts as used when any multi-segment path or named field access ends in
//! its identifier, regardless of module, scope, or file.
//!
//! The analysis is two explicit passes over one shared table:
//!
//! 1. **Declaration pass** - every `struct` item inserts its name with a
//!    `used = false` flag.
//! 2. **Usage pass** - every qualified reference flips an existing entry to
//!    `used = true`; unknown names are silently ignored.
//!
//! The passes are mutually exclusive by construction (separate visitor
//! types), the table is owned by the run (no global state), and report
//! order is first-declaration order, so output is deterministic.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use deadstruct_core::prelude::*;
//!
//! let outcome = Deadstruct::new("/path/to/crate").analyze()?;
//! for name in &outcome.unused {
//!     println!("Unused struct: {}", name);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`table`]: declaration/usage table with monotonic flags
//! - [`visit`]: the two syn AST visitors (declarations, usages)
//! - [`parse`]: per-file parsing with typed, located errors
//! - [`scan`]: sequential deterministic file discovery
//! - [`analyze`]: two-pass orchestration over a file or directory
//! - [`report`]: plaintext and JSON output
//! - [`config`]: deadstruct.toml loading
//! - [`builder`]: fluent configuration API
//! - [`error`]: typed error handling

pub mod analyze;
pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod parse;
pub mod prelude;
pub mod report;
pub mod scan;
pub mod table;
pub mod visit;

// Error types
pub use error::{DeadstructError, DeadstructResult, IoResultExt};

// Core model
pub use table::UsageTable;
pub use visit::{StructDeclVisitor, StructUsageVisitor};

// Orchestration
pub use analyze::{analyze_path, AnalysisOutcome, AnalyzeOptions, FileError};

// Parsing and scanning
pub use parse::parse_source_file;
pub use scan::{gather_rs_files, gather_rs_files_with_excludes};

// Configuration
pub use config::{load_config, DeadstructConfig, OutputConfig};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{print_json, print_plain};

// Builder API
pub use builder::Deadstruct;
