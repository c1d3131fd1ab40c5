//! Reporting period calculation.
//!
//! A report always covers one whole calendar month of a fixed year. The
//! month is picked from the twelve canonical month names; everything else
//! (first day, last day, inclusive day count, the following month's name)
//! is derived from it.
//!
//! ```rust
//! use chrono::Month;
//! use seoreport_core::period::ReportPeriod;
//!
//! let period = ReportPeriod::new(Month::February, 2025).unwrap();
//! assert_eq!(period.day_count(), 28);
//! assert_eq!(period.next_month_name(), "March");
//! ```

use chrono::{Datelike, Month, Months, NaiveDate};

use crate::{Error, Result};

/// Year every report covers unless configuration says otherwise.
pub const REPORT_YEAR: i32 = 2025;

/// Month preselected on a fresh form.
pub const DEFAULT_MONTH: Month = Month::July;

/// `strftime` pattern for period boundaries, e.g. `01 July 2025`.
pub const DATE_FORMAT: &str = "%d %B %Y";

/// The twelve canonical month names, in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parses a month from its name.
///
/// Accepts the canonical names case-insensitively (and the three-letter
/// abbreviations chrono understands). Anything else is rejected.
pub fn parse_month(name: &str) -> Result<Month> {
    name.trim()
        .parse::<Month>()
        .map_err(|_| Error::unknown_month(name))
}

/// A calendar month in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    year: i32,
    month: Month,
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportPeriod {
    /// Computes the period covering `month` of `year`.
    ///
    /// Fails only when `year` is outside the range chrono can represent.
    pub fn new(month: Month, year: i32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
            .ok_or_else(|| Error::config(format!("report year {year} is out of range")))?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|first_of_next| first_of_next.pred_opt())
            .ok_or_else(|| Error::config(format!("report year {year} is out of range")))?;

        Ok(Self {
            year,
            month,
            start,
            end,
        })
    }

    /// Parses `month_name` and computes its period in `year`.
    pub fn from_month_name(month_name: &str, year: i32) -> Result<Self> {
        Self::new(parse_month(month_name)?, year)
    }

    /// The report year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The selected month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// One-based month index (January = 1).
    pub fn month_index(&self) -> u32 {
        self.month.number_from_month()
    }

    /// Canonical name of the selected month.
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// First day of the month.
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last calendar day of the month.
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive number of days in the period.
    pub fn day_count(&self) -> u32 {
        self.end.day()
    }

    /// Name of the month after the selected one, wrapping December to January.
    pub fn next_month_name(&self) -> &'static str {
        self.month.succ().name()
    }

    /// `start_date` formatted as `DD Month YYYY`.
    pub fn start_label(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// `end_date` formatted as `DD Month YYYY`.
    pub fn end_label(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// One-line summary shown above the form.
    pub fn banner(&self) -> String {
        format!(
            "Selected Period: {} to {} ({} days)",
            self.start_label(),
            self.end_label(),
            self.day_count()
        )
    }
}
