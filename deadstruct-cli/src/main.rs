//! deadstruct CLI - unused struct detector for Rust source trees.
//!
//! Scans a directory or a single file and prints every struct declaration
//! that is never referenced by a qualified name in the scanned set.
//!
//! Exit codes (CI-friendly):
//! - 0: run completed, no unused structs
//! - 1: run completed, unused structs found
//! - 2: fatal error (unreadable root path, directory enumeration failure)
//!
//! Per-file parse errors are reported inline and in the JSON payload but do
//! not change the exit code of an otherwise successful run.

use clap::Parser;
use std::path::Path;

use deadstruct_core::{
    analyze_path, init_structured_logging, load_config, print_json, print_plain, AnalyzeOptions,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Unused struct detector for Rust source trees")]
pub struct Cli {
    /// Path to a directory or a single .rs file to analyze
    path: String,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Suppress the per-struct discovery notices during the scan
    #[arg(long)]
    quiet: bool,

    /// Struct name patterns to exclude from the report
    #[arg(long, num_args = 1..)]
    ignore: Vec<String>,

    /// Additional directory names to skip while scanning
    #[arg(long, num_args = 1..)]
    exclude_dir: Vec<String>,
}

fn main() {
    init_structured_logging();

    let cli = Cli::parse();
    let path = Path::new(&cli.path);

    // Merge deadstruct.toml from the scanned root, if present. A broken
    // config is reported but never blocks the scan.
    let mut ignore = cli.ignore.clone();
    let mut announce = !cli.quiet && !cli.json;
    let mut json = cli.json;
    let config_root = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or(Path::new("."))
    };
    match load_config(config_root) {
        Ok(Some(cfg)) => {
            if let Some(list) = cfg.ignore {
                ignore.extend(list);
            }
            if let Some(flag) = cfg.announce {
                announce = announce && flag;
            }
            if let Some(output) = cfg.output {
                if output.format.as_deref() == Some("json") {
                    json = true;
                    announce = false;
                }
            }
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("[WARN] config load failed: {e}");
        }
    }

    let options = AnalyzeOptions {
        announce,
        ignore,
        excluded_dirs: cli.exclude_dir.clone(),
    };

    let outcome = match analyze_path(path, &options) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error while analyzing the specified path: {e}");
            std::process::exit(2);
        }
    };

    if json {
        print_json(&outcome);
    } else {
        print_plain(&outcome);
    }

    std::process::exit(if outcome.has_unused() { 1 } else { 0 });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_path_is_required() {
        assert!(Cli::try_parse_from(["deadstruct"]).is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["deadstruct", "."]);
        assert_eq!(cli.path, ".");
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert!(cli.ignore.is_empty());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "deadstruct",
            "src/",
            "--json",
            "--ignore",
            "Generated",
            "Proto",
            "--exclude-dir",
            "vendor",
        ]);
        assert_eq!(cli.path, "src/");
        assert!(cli.json);
        assert_eq!(cli.ignore, vec!["Generated", "Proto"]);
        assert_eq!(cli.exclude_dir, vec!["vendor"]);
    }
}
