//! Error types for impress-work

use thiserror::Error;

/// Result type alias for work operations
pub type Result<T> = std::result::Result<T, WorkError>;

/// A field every usable work must carry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Title,
    Authors,
}

impl RequiredField {
    /// Wire name of the field
    pub fn field_name(&self) -> &'static str {
        match self {
            RequiredField::Title => "title",
            RequiredField::Authors => "authors",
        }
    }

    /// Stable identifier reported to callers when the field is missing
    pub fn missing_message(&self) -> &'static str {
        match self {
            RequiredField::Title => "no title",
            RequiredField::Authors => "no author",
        }
    }
}

/// Failures raised while normalizing a work
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkError {
    /// A required field is empty after cleaning
    #[error("{}", .0.missing_message())]
    MissingField(RequiredField),
}

impl WorkError {
    /// Machine-checkable identifier, identical to the display text
    pub fn code(&self) -> &'static str {
        match self {
            WorkError::MissingField(field) => field.missing_message(),
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("IO error: {0}")]
    Io(String),

    /// The config file is not valid TOML for this schema
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
