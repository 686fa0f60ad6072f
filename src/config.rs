//! Configuration management for the clipboard store
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, error::ClipError, utils::fs::FileSystemUtils};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name used when no store path is given, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "clipboard.json";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// JSON file backing the store
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ClipError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::default()
        };

        if let Some(path) = &args.store {
            config.store_path = path.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ClipError> {
        if self.store_path.as_os_str().is_empty() {
            return Err(ClipError::config("store path cannot be empty"));
        }

        if FileSystemUtils::new().is_dir(&self.store_path) {
            return Err(ClipError::config(format!(
                "store path is a directory: {}",
                self.store_path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::parse_from;
    use tempfile::TempDir;

    #[test]
    fn test_default_store_file() {
        let args = parse_from(["clipboard", "list"]).unwrap();
        let config = Config::from_args(&args).unwrap();

        assert!(!config.debug);
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_FILE));
    }

    #[test]
    fn test_store_override_and_debug() {
        let args = parse_from(["clipboard", "--debug", "--store", "data/kv.json", "list"]).unwrap();
        let config = Config::from_args(&args).unwrap();

        assert!(config.debug);
        assert_eq!(config.store_path, PathBuf::from("data/kv.json"));
    }

    #[test]
    fn test_directory_store_path_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            store_path: temp_dir.path().to_path_buf(),
            ..Config::default()
        };

        assert!(matches!(config.validate(), Err(ClipError::Config { .. })));
    }

    #[test]
    fn test_empty_store_path_rejected() {
        let config = Config {
            store_path: PathBuf::new(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
