//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use deadstruct_core::prelude::*;
//! ```

// Core analysis types
pub use crate::analyze::{analyze_path, AnalysisOutcome, AnalyzeOptions, FileError};
pub use crate::error::{DeadstructError, DeadstructResult};
pub use crate::table::UsageTable;

// File scanning
pub use crate::scan::{gather_rs_files, gather_rs_files_with_excludes};

// Parsing
pub use crate::parse::parse_source_file;

// Configuration
pub use crate::config::{load_config, DeadstructConfig};

// Builder API
pub use crate::builder::Deadstruct;
