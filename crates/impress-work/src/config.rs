//! Configuration for impress-work
//!
//! Loaded from TOML. Every section is optional:
//!
//! ```toml
//! [fingerprint]
//! scheme = "concatenated"   # or "delimited"
//!
//! [normalize]
//! drop_blank_authors = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fingerprint::FingerprintScheme;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkConfig {
    /// Fingerprint derivation settings
    pub fingerprint: FingerprintConfig,
    /// Normalization pipeline settings
    pub normalize: NormalizeConfig,
}

/// Fingerprint derivation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Keep `concatenated` to match hashes already in storage
    pub scheme: FingerprintScheme,
}

/// Normalization pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Drop authors that clean to the empty string. Blank keywords are
    /// always kept.
    pub drop_blank_authors: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            drop_blank_authors: true,
        }
    }
}

impl WorkConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded work config from {:?}", path);
        Ok(config)
    }

    /// Standard config location: ~/.impress/work.toml
    pub fn standard_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".impress").join("work.toml"))
    }

    /// Load from the standard location, or defaults when no file exists
    pub fn load_standard() -> Result<Self, ConfigError> {
        match Self::standard_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = WorkConfig::default();
        assert_eq!(config.fingerprint.scheme, FingerprintScheme::Concatenated);
        assert!(config.normalize.drop_blank_authors);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(WorkConfig::from_toml_str("").unwrap(), WorkConfig::default());
    }

    #[test]
    fn test_parse_sections() {
        let config = WorkConfig::from_toml_str(
            r#"
            [fingerprint]
            scheme = "delimited"

            [normalize]
            drop_blank_authors = false
            "#,
        )
        .unwrap();
        assert_eq!(config.fingerprint.scheme, FingerprintScheme::Delimited);
        assert!(!config.normalize.drop_blank_authors);
    }

    #[test]
    fn test_unknown_scheme_is_parse_error() {
        let err = WorkConfig::from_toml_str("[fingerprint]\nscheme = \"md5\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fingerprint]\nscheme = \"delimited\"").unwrap();
        let config = WorkConfig::load(file.path()).unwrap();
        assert_eq!(config.fingerprint.scheme, FingerprintScheme::Delimited);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = WorkConfig::load(Path::new("/nonexistent/work.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
