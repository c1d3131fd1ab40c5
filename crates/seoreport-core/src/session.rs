//! Per-session form state.
//!
//! A session is one person filling in one form. Its state (field values
//! and the visible row count) is owned by whoever drives the session; for
//! the HTTP form it is rebuilt from every post, the row count riding along
//! in a hidden field.

use std::fmt;

use chrono::Month;

use crate::fields::{FieldSource, FormValues, keys};
use crate::output::Report;
use crate::rows::RowCollector;
use crate::submission::Submission;
use crate::Result;

/// What the user currently sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The form, without a report.
    CollectingInput,
    /// The form plus the report generated from it.
    ReportGenerated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::CollectingInput => write!(f, "collecting_input"),
            SessionState::ReportGenerated => write!(f, "report_generated"),
        }
    }
}

/// One form-filling session.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    values: FormValues,
    rows: RowCollector,
    state: SessionState,
}

impl FormSession {
    /// A fresh, empty form with `initial_rows` keyword rows.
    pub fn new(initial_rows: usize) -> Self {
        Self {
            values: FormValues::new(),
            rows: RowCollector::new(initial_rows),
            state: SessionState::CollectingInput,
        }
    }

    /// Resumes a session from posted values.
    ///
    /// The row count comes from the `rows` field; it never drops below
    /// `initial_rows`, and a missing or unreadable count means
    /// `initial_rows`. The posted count is not trusted beyond what the post
    /// itself could describe: it is capped at `initial_rows` plus the number
    /// of posted fields plus one. Any post that is not a generate action
    /// puts the session back into [`SessionState::CollectingInput`].
    pub fn resume(values: FormValues, initial_rows: usize) -> Self {
        let ceiling = initial_rows.saturating_add(values.len()).saturating_add(1);
        let count = values
            .field(keys::ROWS)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(initial_rows)
            .clamp(initial_rows, ceiling);
        Self {
            values,
            rows: RowCollector::new(count),
            state: SessionState::CollectingInput,
        }
    }

    /// Current field values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current value of one field, empty when absent.
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key)
    }

    /// Number of visible keyword rows.
    pub fn row_count(&self) -> usize {
        self.rows.count()
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Shows one more keyword row; entered values are kept.
    pub fn add_row(&mut self) {
        self.rows.add_row();
        self.state = SessionState::CollectingInput;
    }

    /// Reads the submission the form currently describes.
    pub fn submission(&self, default_month: Month) -> Submission {
        Submission::collect(&self.values, &self.rows, default_month)
    }

    /// Generates the report and moves to [`SessionState::ReportGenerated`].
    pub fn generate(&mut self, default_month: Month, year: i32) -> Result<Report> {
        let report = Report::generate(&self.submission(default_month), year)?;
        self.state = SessionState::ReportGenerated;
        Ok(report)
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(crate::rows::INITIAL_ROWS)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = FormSession::default();
        assert_eq!(session.row_count(), 5);
        assert_eq!(session.state(), SessionState::CollectingInput);
        assert!(session.values().is_empty());
    }

    #[test]
    fn test_resume_reads_row_count() {
        let values = FormValues::new().with(keys::ROWS, "7");
        assert_eq!(FormSession::resume(values, 5).row_count(), 7);
    }

    #[test]
    fn test_resume_never_below_initial() {
        let values = FormValues::new().with(keys::ROWS, "2");
        assert_eq!(FormSession::resume(values, 5).row_count(), 5);

        let values = FormValues::new().with(keys::ROWS, "lots");
        assert_eq!(FormSession::resume(values, 5).row_count(), 5);
    }

    #[test]
    fn test_resume_caps_row_count_by_posted_fields() {
        let values = FormValues::new().with(keys::ROWS, usize::MAX.to_string());
        let session = FormSession::resume(values, 5);
        assert_eq!(session.row_count(), 7);
        assert_eq!(session.submission(Month::July).keywords.len(), 7);

        let values = FormValues::new()
            .with(keys::ROWS, "50000000")
            .with("kw_0", "Sofas")
            .with("cr_0", "2");
        assert_eq!(FormSession::resume(values, 5).row_count(), 9);
    }

    #[test]
    fn test_resume_keeps_browser_row_count() {
        let mut values = FormValues::new().with(keys::ROWS, "12");
        for i in 0..12 {
            values.set(format!("kw_{i}"), "");
            values.set(format!("cr_{i}"), "");
            values.set(format!("pr_{i}"), "");
        }
        assert_eq!(FormSession::resume(values, 5).row_count(), 12);
    }

    #[test]
    fn test_add_row_keeps_values() {
        let values = FormValues::new().with("kw_0", "Sofas");
        let mut session = FormSession::resume(values, 5);
        session.add_row();
        assert_eq!(session.row_count(), 6);
        assert_eq!(session.value("kw_0"), "Sofas");
        assert_eq!(session.submission(Month::July).keywords.len(), 6);
    }

    #[test]
    fn test_generate_transitions_state() {
        let values = FormValues::new()
            .with(keys::PROJECT_NAME, "Acme")
            .with(keys::MONTH, "July");
        let mut session = FormSession::resume(values, 5);
        let report = session.generate(Month::July, 2025).unwrap();
        assert_eq!(session.state(), SessionState::ReportGenerated);
        assert_eq!(report.file_name(), "Acme_SEO_Report_July_2025.html");

        session.add_row();
        assert_eq!(session.state(), SessionState::CollectingInput);
    }

    #[test]
    fn test_generate_failure_keeps_state() {
        let values = FormValues::new().with(keys::MONTH, "Smarch");
        let mut session = FormSession::resume(values, 5);
        assert!(session.generate(Month::July, 2025).is_err());
        assert_eq!(session.state(), SessionState::CollectingInput);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(SessionState::CollectingInput.to_string(), "collecting_input");
        assert_eq!(SessionState::ReportGenerated.to_string(), "report_generated");
    }
}
