//! Error types for seoreport-cli

use thiserror::Error;

/// Result type alias for seoreport-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in seoreport-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from seoreport-core
    #[error("Core error: {0}")]
    Core(#[from] seoreport_core::Error),

    /// Error from seoreport-api
    #[error("Server error: {0}")]
    Api(#[from] seoreport_api::Error),
}
