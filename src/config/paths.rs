//! Path management for FinSmart
//!
//! ## Path Resolution Order
//!
//! 1. `FINSMART_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/finsmart` on Linux,
//!    `~/Library/Application Support/finsmart` on macOS, `%APPDATA%\finsmart`
//!    on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinsmartError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINSMART_DATA_DIR";

/// Manages all paths used by FinSmart
#[derive(Debug, Clone)]
pub struct FinsmartPaths {
    /// Base directory for all FinSmart data
    base_dir: PathBuf,
}

impl FinsmartPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinsmartError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinsmartPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the persisted lists
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinsmartError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinsmartError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinsmartError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if FinSmart has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinsmartError> {
    ProjectDirs::from("", "", "finsmart")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinsmartError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsmartPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(DATA_DIR_ENV, temp_dir.path());
        let paths = FinsmartPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsmartPaths::with_base_dir(temp_dir.path().join("finsmart"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
