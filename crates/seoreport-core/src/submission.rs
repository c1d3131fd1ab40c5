//! Everything one "generate" action needs.

use std::path::Path;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::fields::{FieldSource, MetricsRecord, keys};
use crate::period::{self, ReportPeriod};
use crate::rows::{KeywordRow, RowCollector};
use crate::{Error, Result};

/// The complete input for one report.
///
/// Collected from the form at generate time, or loaded from a TOML file
/// for headless rendering:
///
/// ```toml
/// project_name = "Acme"
/// month = "July"
///
/// [[keywords]]
/// keyword = "Sofas"
/// current_rank = "2"
/// previous_rank = "3"
///
/// [metrics]
/// organic_traffic = "1.8K"
/// prev_bounce = 55.2
/// curr_bounce = 50.1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    /// Client project name
    pub project_name: String,
    /// Selected month name
    pub month: String,
    /// Keyword rows in entry order, blank ones included
    pub keywords: Vec<KeywordRow>,
    /// Scalar metrics
    pub metrics: MetricsRecord,
}

impl Submission {
    /// Reads a submission from the current field values.
    ///
    /// An absent month field falls back to `default_month`.
    pub fn collect<S: FieldSource + ?Sized>(
        source: &S,
        rows: &RowCollector,
        default_month: Month,
    ) -> Self {
        let month = source
            .field(keys::MONTH)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default_month.name().to_string());

        Self {
            project_name: source.text(keys::PROJECT_NAME),
            month,
            keywords: rows.collect(source),
            metrics: MetricsRecord::from_source(source),
        }
    }

    /// Parses a submission from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a submission from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
    }

    /// The reporting period for the selected month in `year`.
    pub fn period(&self, year: i32) -> Result<ReportPeriod> {
        ReportPeriod::new(period::parse_month(&self.month)?, year)
    }
}
