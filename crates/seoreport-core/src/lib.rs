#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! SEO Report Core
//!
//! Period calculation, keyword rows, field aggregation, and HTML rendering
//! for monthly SEO reports.
//!
//! # Modules
//!
//! - [`period`]: reporting month and its date range
//! - [`rows`]: keyword ranking rows and the growing row collector
//! - [`fields`]: form field access and the metrics record
//! - [`submission`]: all inputs of one generate action
//! - [`session`]: per-session form state
//! - [`markup`], [`template`], [`render`]: escaping-aware document rendering
//! - [`output`]: the rendered report, its file name, preview, and download
//! - [`config`]: TOML configuration

pub mod config;
pub mod error;
pub mod fields;
pub mod markup;
pub mod output;
pub mod period;
pub mod render;
pub mod rows;
pub mod session;
pub mod submission;
pub mod template;

mod proptests;

// Re-exports for convenience
pub use config::{AppConfig, ConfigManager};
pub use error::{Error, Result};
pub use fields::{FieldSource, FormValues, MetricsRecord};
pub use output::Report;
pub use period::ReportPeriod;
pub use rows::{KeywordRow, RowCollector};
pub use session::{FormSession, SessionState};
pub use submission::Submission;
