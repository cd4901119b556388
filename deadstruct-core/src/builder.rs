//! Builder pattern API for deadstruct analysis.
//!
//! Provides a fluent interface for configuring and running a scan:
//!
//! ```rust,ignore
//! use deadstruct_core::prelude::*;
//!
//! let outcome = Deadstruct::new("/path/to/crate")
//!     .announce(false)
//!     .ignore_patterns(["Generated"])
//!     .analyze()?;
//!
//! for name in &outcome.unused {
//!     println!("Unused struct: {}", name);
//! }
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analyze::{analyze_path, AnalysisOutcome, AnalyzeOptions};

/// Builder for configuring an unused-struct analysis run.
#[derive(Debug, Clone)]
pub struct Deadstruct {
    /// Root path (file or directory) to analyze
    root: PathBuf,

    /// Print `New struct found:` notices while scanning
    announce: bool,

    /// Struct name patterns excluded from the report
    ignored_patterns: Vec<String>,

    /// Extra directory names skipped during the scan
    excluded_dirs: Vec<String>,
}

impl Deadstruct {
    /// Create a new analysis builder for the given path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            announce: false,
            ignored_patterns: Vec::new(),
            excluded_dirs: Vec::new(),
        }
    }

    /// Enable or disable `New struct found:` notices during the scan.
    pub fn announce(mut self, enabled: bool) -> Self {
        self.announce = enabled;
        self
    }

    /// Add patterns for struct names to exclude from the report.
    pub fn ignore_patterns(
        mut self,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.ignored_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add directory names to exclude from scanning.
    pub fn exclude_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluded_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Run both passes and return the outcome.
    pub fn analyze(&self) -> Result<AnalysisOutcome> {
        let options = AnalyzeOptions {
            announce: self.announce,
            ignore: self.ignored_patterns.clone(),
            excluded_dirs: self.excluded_dirs.clone(),
        };

        analyze_path(&self.root, &options)
            .with_context(|| format!("Failed to analyze {}", self.root.display()))
    }
}
