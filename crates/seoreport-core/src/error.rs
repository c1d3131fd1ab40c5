//! Error types for seoreport-core.

use std::path::{Path, PathBuf};

/// Errors that can occur while computing or rendering a report.
///
/// Form input never produces an error on its own: fields degrade to empty
/// or zero defaults. Errors come from the boundaries (a month name typed
/// as free text, the config file, the output directory) or from a broken
/// document template.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A month name outside the twelve canonical names.
    #[error("Unknown month: {name}")]
    UnknownMonth {
        /// The rejected input
        name: String,
    },

    /// The document template references a placeholder with no binding,
    /// or contains an unterminated placeholder.
    #[error("Template error: {message}")]
    Template {
        /// What is wrong with the template
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error, optionally tied to a path
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        /// Path involved in the failed operation, if known
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

/// Convenience `Result` type alias for seoreport-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

impl Error {
    /// Creates an unknown-month error.
    pub fn unknown_month<S: Into<String>>(name: S) -> Self {
        Error::UnknownMonth { name: name.into() }
    }

    /// Creates a template error.
    pub fn template<S: Into<String>>(message: S) -> Self {
        Error::Template {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Returns `true` if the error was caused by user input rather than
    /// by the environment or the program itself.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::UnknownMonth { .. })
    }
}
