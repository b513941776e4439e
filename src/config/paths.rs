//! Path management for fintrack
//!
//! Resolves where configuration and the session token live.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/fintrack` on Linux, `~/Library/Application Support/...` on
//!    macOS, `%APPDATA%\...` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinanceError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "FINTRACK_CONFIG_DIR";

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    /// Base directory for all fintrack files
    base_dir: PathBuf,
}

impl FintrackPaths {
    /// Create a new FintrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FintrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the stored session (access token)
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Default directory for exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create config directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, FinanceError> {
    ProjectDirs::from("dev", "fintrack", "fintrack")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinanceError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.session_file(), temp_dir.path().join("session.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(CONFIG_DIR_ENV, custom_path);
        let paths = FintrackPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("fintrack");
        let paths = FintrackPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.exists());
    }
}
