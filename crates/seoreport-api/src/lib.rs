//! # seoreport-api
//!
//! HTTP form server for the monthly SEO report generator.
//!
//! The server keeps no per-user state. Every form post carries all field
//! values plus the current keyword row count, and each request rebuilds its
//! [`seoreport_core::FormSession`] from them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use error::{Error, Result};
pub use server::Server;
pub use state::AppState;
