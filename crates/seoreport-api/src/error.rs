//! Error types for seoreport-api

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use seoreport_core::markup::Markup;
use thiserror::Error;

/// Result type alias for seoreport-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in seoreport-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from seoreport-core
    #[error("Core error: {0}")]
    Core(#[from] seoreport_core::Error),

    /// The listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address we tried to bind
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl Error {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Core(e) if e.is_user_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }

        let body = format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{code}</title></head>\
             <body><h1>{code}</h1><p>{message}</p><p><a href=\"/\">Back to the form</a></p></body></html>",
            code = status,
            message = Markup::escape(&self.to_string()),
        );
        (status, Html(body)).into_response()
    }
}
