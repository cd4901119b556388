//! Configuration loading from deadstruct.toml.
//!
//! The config file is optional and lives at the analyzed root. A malformed
//! file is a recoverable error: callers warn and continue with defaults.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{DeadstructError, DeadstructResult};

/// Main configuration structure for deadstruct.toml.
#[derive(Debug, Deserialize, Default)]
pub struct DeadstructConfig {
    /// Struct name patterns to exclude from the report.
    pub ignore: Option<Vec<String>>,
    /// Whether to announce each newly found struct during the scan.
    pub announce: Option<bool>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from deadstruct.toml if it exists.
pub fn load_config(root: &Path) -> DeadstructResult<Option<DeadstructConfig>> {
    let path = root.join("deadstruct.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content =
        fs::read_to_string(&path).map_err(|e| DeadstructError::config(&path, e.to_string()))?;
    let cfg = toml::from_str(&content)
        .map_err(|e| DeadstructError::config(&path, format!("invalid deadstruct.toml: {e}")))?;
    Ok(Some(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("deadstruct_config_test")
            .join(format!("{}_{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_config_is_none() {
        let root = temp_root("missing");
        assert!(load_config(&root).unwrap().is_none());
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_load_ignore_patterns() {
        let root = temp_root("patterns");
        fs::write(
            root.join("deadstruct.toml"),
            "ignore = [\"Generated\", \"Proto\"]\nannounce = false\n",
        )
        .unwrap();

        let cfg = load_config(&root).unwrap().unwrap();
        assert_eq!(cfg.ignore.unwrap(), vec!["Generated", "Proto"]);
        assert_eq!(cfg.announce, Some(false));
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_malformed_config_is_recoverable() {
        let root = temp_root("malformed");
        fs::write(root.join("deadstruct.toml"), "ignore = not-a-list").unwrap();

        let err = load_config(&root).unwrap_err();
        assert!(matches!(err, DeadstructError::Config { .. }));
        assert!(err.is_recoverable());
        fs::remove_dir_all(&root).ok();
    }
}
