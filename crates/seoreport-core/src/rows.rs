//! Keyword ranking rows.
//!
//! The form shows a number of keyword rows that only ever grows. Each row
//! has three free-text cells; ranks are text so `N/A` or `>100` are fine.

use serde::{Deserialize, Serialize};

use crate::fields::FieldSource;

/// Rows visible on a fresh form.
pub const INITIAL_ROWS: usize = 5;

/// One tracked keyword with its current and previous rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordRow {
    /// The search keyword
    pub keyword: String,
    /// Rank this month
    pub current_rank: String,
    /// Rank last month
    pub previous_rank: String,
}

impl KeywordRow {
    /// Creates a row.
    pub fn new(
        keyword: impl Into<String>,
        current_rank: impl Into<String>,
        previous_rank: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            current_rank: current_rank.into(),
            previous_rank: previous_rank.into(),
        }
    }

    /// Returns `true` if the keyword cell is filled in. Rows without a
    /// keyword never reach the report.
    pub fn has_keyword(&self) -> bool {
        !self.keyword.is_empty()
    }
}

/// Rows with a keyword, in entry order.
pub fn filled_rows(rows: &[KeywordRow]) -> impl Iterator<Item = &KeywordRow> {
    rows.iter().filter(|row| row.has_keyword())
}

/// Form field name of the keyword cell in row `index` (zero-based).
pub fn keyword_key(index: usize) -> String {
    format!("kw_{index}")
}

/// Form field name of the current-rank cell in row `index`.
pub fn current_rank_key(index: usize) -> String {
    format!("cr_{index}")
}

/// Form field name of the previous-rank cell in row `index`.
pub fn previous_rank_key(index: usize) -> String {
    format!("pr_{index}")
}

/// Tracks how many keyword rows are visible and reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCollector {
    visible: usize,
}

impl RowCollector {
    /// Starts with `initial` visible rows.
    pub fn new(initial: usize) -> Self {
        Self { visible: initial }
    }

    /// Number of visible rows.
    pub fn count(&self) -> usize {
        self.visible
    }

    /// Shows one more row. There is no upper bound and no way back.
    pub fn add_row(&mut self) {
        self.visible = self.visible.saturating_add(1);
        log::debug!("keyword rows: {}", self.visible);
    }

    /// Reads every visible row from `source`, in order, including rows
    /// whose keyword is empty.
    pub fn collect<S: FieldSource + ?Sized>(&self, source: &S) -> Vec<KeywordRow> {
        (0..self.visible)
            .map(|i| KeywordRow {
                keyword: source.text(&keyword_key(i)),
                current_rank: source.text(&current_rank_key(i)),
                previous_rank: source.text(&previous_rank_key(i)),
            })
            .collect()
    }
}

impl Default for RowCollector {
    fn default() -> Self {
        Self::new(INITIAL_ROWS)
    }
}
