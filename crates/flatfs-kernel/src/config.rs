//! Filesystem limits.
//!
//! The defaults are the classic fixed-table sizes: 100 files of at most
//! 4096 bytes each, names up to 255 bytes. Hosts can override any of them
//! from a TOML file:
//!
//! ```toml
//! max_files = 16
//! max_file_size = 65536
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default maximum number of files in the table.
pub const DEFAULT_MAX_FILES: usize = 100;

/// Default per-file content capacity in bytes.
pub const DEFAULT_MAX_FILE_SIZE: usize = 4096;

/// Default maximum file name length in bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 255;

/// Largest accepted `max_files`. The table is allocated up front.
pub const MAX_FILES_CEILING: usize = 65_536;

/// Largest accepted `max_file_size` (16 MiB). Every file allocates its full
/// capacity on create, and byte counts must fit the `u32` the driver uses.
pub const MAX_FILE_SIZE_CEILING: usize = 16 * 1024 * 1024;

/// Largest accepted `max_name_len`.
pub const MAX_NAME_LEN_CEILING: usize = 4096;

/// Errors from loading limits.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Capacity limits for a filesystem instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FsLimits {
    /// Maximum number of files in the table.
    pub max_files: usize,
    /// Fixed content capacity of every file.
    pub max_file_size: usize,
    /// Maximum file name length in bytes.
    pub max_name_len: usize,
}

impl Default for FsLimits {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

impl FsLimits {
    /// Parse limits from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let limits: FsLimits = toml::from_str(s)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Load limits from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let limits = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?limits, "Loaded filesystem limits");
        Ok(limits)
    }

    /// Reject limits that would make the filesystem unusable, or that would
    /// allocate unbounded memory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("max_files", self.max_files, MAX_FILES_CEILING)?;
        check_range("max_file_size", self.max_file_size, MAX_FILE_SIZE_CEILING)?;
        check_range("max_name_len", self.max_name_len, MAX_NAME_LEN_CEILING)
    }
}

fn check_range(key: &str, value: usize, ceiling: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid(format!("{key} must be at least 1")));
    }
    if value > ceiling {
        return Err(ConfigError::Invalid(format!(
            "{key} = {value} exceeds the maximum of {ceiling}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let limits = FsLimits::default();
        assert_eq!(limits.max_files, 100);
        assert_eq!(limits.max_file_size, 4096);
        assert_eq!(limits.max_name_len, 255);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let limits = FsLimits::from_toml_str("max_files = 8\n").unwrap();
        assert_eq!(limits.max_files, 8);
        assert_eq!(limits.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert_eq!(limits.max_name_len, DEFAULT_MAX_NAME_LEN);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(FsLimits::from_toml_str("").unwrap(), FsLimits::default());
    }

    #[test]
    fn test_rejects_zero() {
        let err = FsLimits::from_toml_str("max_file_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_oversized_file_size() {
        let err = FsLimits::from_toml_str("max_file_size = 9223372036854775807").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = FsLimits::from_toml_str("max_file_size = 16777217").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let limits = FsLimits::from_toml_str("max_file_size = 16777216").unwrap();
        assert_eq!(limits.max_file_size, MAX_FILE_SIZE_CEILING);
        assert!(u32::try_from(MAX_FILE_SIZE_CEILING).is_ok());
    }

    #[test]
    fn test_rejects_oversized_table_and_names() {
        let err = FsLimits::from_toml_str("max_files = 1000000000").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = FsLimits::from_toml_str("max_name_len = 4097").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = FsLimits::from_toml_str("max_dirs = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_files = 4").unwrap();
        writeln!(file, "max_name_len = 32").unwrap();

        let limits = FsLimits::load(file.path()).unwrap();
        assert_eq!(limits.max_files, 4);
        assert_eq!(limits.max_name_len, 32);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsLimits::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
