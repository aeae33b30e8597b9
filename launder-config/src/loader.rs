//! Configuration file loading
//!
//! Reads `machine.toml` from disk. Falls back to built-in defaults only
//! when the file is absent.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use launder_core::config::{ConfigError, MachineConfig};
use launder_core::PercentageError;

use super::toml::parse_config;

/// Configuration loading errors
#[derive(Debug)]
pub enum LoadError {
    /// File could not be read
    Io(io::Error),
    /// TOML syntax or type error
    Toml(::toml::de::Error),
    /// Threshold outside 0-100
    Threshold(PercentageError),
    /// Values the machine cannot operate with
    Invalid(ConfigError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read config: {e}"),
            LoadError::Toml(e) => write!(f, "invalid machine.toml: {e}"),
            LoadError::Threshold(e) => write!(f, "invalid autodetect threshold: {e}"),
            LoadError::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Toml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<::toml::de::Error> for LoadError {
    fn from(e: ::toml::de::Error) -> Self {
        LoadError::Toml(e)
    }
}

impl From<PercentageError> for LoadError {
    fn from(e: PercentageError) -> Self {
        LoadError::Threshold(e)
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<MachineConfig, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load configuration, using defaults if the file does not exist
///
/// Any other failure (unreadable file, bad TOML, invalid values) is
/// still reported.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<MachineConfig, LoadError> {
    match load_config(path) {
        Err(LoadError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            Ok(MachineConfig::default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("launder-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("load.toml");
        fs::write(&path, "[machine]\nmax_load_kg = 6.5\n").unwrap();

        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.max_load_kg, 6.5);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_path("missing.toml");
        assert!(matches!(load_config(&path), Err(LoadError::Io(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let path = temp_path("absent.toml");
        assert_eq!(load_or_default(&path).unwrap(), MachineConfig::default());
    }

    #[test]
    fn test_bad_file_is_not_replaced_by_default() {
        let path = temp_path("bad.toml");
        fs::write(&path, "[machine]\nmax_load_kg = -1.0\n").unwrap();

        let result = load_or_default(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(LoadError::Invalid(ConfigError::InvalidCapacity))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = LoadError::from(ConfigError::InvalidThreshold);
        assert_eq!(err.to_string(), "long_threshold_percent must be at least 1");

        let err = LoadError::from(PercentageError(120));
        assert_eq!(
            err.to_string(),
            "invalid autodetect threshold: percentage 120 is outside 0-100"
        );
    }
}
