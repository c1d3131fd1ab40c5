//! # seoreport-cli
//!
//! Command-line front end for the monthly SEO report generator:
//! - `serve`: run the HTTP form server
//! - `render`: render a report from a TOML submission file
//! - `period`: print the reporting period for a month
//! - `config`: inspect and edit the configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;

pub use error::{Error, Result};
