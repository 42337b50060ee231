//! Error types for addon-config.
//!
//! Uses thiserror for derive macros. Every failure surfaces as a single
//! [`ConfigError`] whose message is meant to be shown to a user as-is.

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for configuration loading, resolution and registry upkeep.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A requested document does not exist.
    #[error("missing configuration file: {}", path.display())]
    MissingFile { path: PathBuf },

    /// Malformed input prevented tree construction.
    #[error("line {line}: {message}")]
    Structural { line: usize, message: String },

    /// A parsed document (or a requested change) has the wrong shape.
    #[error("{0}")]
    Shape(String),

    /// Reading or writing a file failed for a reason other than absence.
    #[error("failed to access '{}': {message}", path.display())]
    Io { path: PathBuf, message: String },
}

impl ConfigError {
    pub(crate) fn structural(line: usize, message: impl Into<String>) -> Self {
        ConfigError::Structural {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: &Path, err: &std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Attach the file a structural error came from.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            ConfigError::Structural { line, message } => ConfigError::Structural {
                line,
                message: format!("{} (in {})", message, path.display()),
            },
            other => other,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::MissingFile { .. } => exit_codes::USER_ERROR,
            ConfigError::Shape(_) => exit_codes::USER_ERROR,
            ConfigError::Io { .. } => exit_codes::USER_ERROR,
            ConfigError::Structural { .. } => exit_codes::MALFORMED_DOCUMENT,
        }
    }
}

/// Result type alias for addon-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
