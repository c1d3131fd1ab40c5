//! Report rendering.
//!
//! Builds the three computed fragments of the report (keyword table, plan
//! bullets, bounce-rate sentence) and substitutes them, together with the
//! escaped text fields, into the fixed document template.

use std::fmt;

use crate::markup::Markup;
use crate::period::ReportPeriod;
use crate::rows::{KeywordRow, filled_rows};
use crate::submission::Submission;
use crate::template::Template;
use crate::Result;

/// The fixed report document.
pub const REPORT_TEMPLATE: &str = include_str!("templates/report.html");

/// Keyword table header cells, in column order.
pub const KEYWORD_COLUMNS: [&str; 3] = ["Keyword", "Current Rank", "Previous Rank"];

// ============================================================================
// Keyword table
// ============================================================================

/// Renders rows with a keyword as a bordered table with a centered header.
///
/// Rows with an empty keyword are skipped; the rest keep their order. With
/// no rows left the table still has its header and an empty body.
pub fn keyword_table(rows: &[KeywordRow]) -> Markup {
    let mut html = Markup::trusted("<table border=\"1\" class=\"keywords\">\n");
    html.push_trusted("  <thead>\n    <tr style=\"text-align: center;\">\n");
    for column in KEYWORD_COLUMNS {
        html.push_trusted("      <th>");
        html.push_escaped(column);
        html.push_trusted("</th>\n");
    }
    html.push_trusted("    </tr>\n  </thead>\n  <tbody>\n");

    for row in filled_rows(rows) {
        html.push_trusted("    <tr>\n");
        for cell in [&row.keyword, &row.current_rank, &row.previous_rank] {
            html.push_trusted("      <td>");
            html.push_escaped(cell);
            html.push_trusted("</td>\n");
        }
        html.push_trusted("    </tr>\n");
    }

    html.push_trusted("  </tbody>\n</table>");
    html
}

// ============================================================================
// Next month plan
// ============================================================================

/// Splits the plan into trimmed, non-blank lines.
pub fn plan_items(plan: &str) -> Vec<&str> {
    plan.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Renders each plan line as a list item.
pub fn plan_bullets(plan: &str) -> Markup {
    let mut html = Markup::default();
    for item in plan_items(plan) {
        html.push_trusted("<li>");
        html.push_escaped(item);
        html.push_trusted("</li>");
    }
    html
}

// ============================================================================
// Bounce rate
// ============================================================================

/// Direction of the month-over-month bounce-rate change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceTrend {
    /// Bounce rate went down.
    Decrease,
    /// Bounce rate went up or stayed the same.
    Increase,
}

impl BounceTrend {
    /// Classifies a change. Equal rates count as an increase.
    pub fn between(previous: f64, current: f64) -> Self {
        if previous > current {
            BounceTrend::Decrease
        } else {
            BounceTrend::Increase
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            BounceTrend::Decrease => "Decrease",
            BounceTrend::Increase => "Increase",
        }
    }
}

impl fmt::Display for BounceTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Previous and current bounce rate, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceChange {
    /// Last month
    pub previous: f64,
    /// This month
    pub current: f64,
}

impl BounceChange {
    /// Creates a change from `previous` to `current`.
    pub fn new(previous: f64, current: f64) -> Self {
        Self { previous, current }
    }

    /// Direction of the change.
    pub fn trend(&self) -> BounceTrend {
        BounceTrend::between(self.previous, self.current)
    }

    /// Plain-text sentence, e.g. `Decrease from 55.2% to 50.1%`.
    pub fn sentence(&self) -> String {
        format!(
            "{} from {}% to {}%",
            self.trend(),
            format_percent(self.previous),
            format_percent(self.current)
        )
    }

    /// The sentence with the trend label in bold.
    pub fn to_markup(&self) -> Markup {
        Markup::trusted(format!(
            "<b>{}</b> from {}% to {}%",
            self.trend(),
            format_percent(self.previous),
            format_percent(self.current)
        ))
    }
}

/// Formats a percentage in shortest form, keeping at least one decimal
/// place: `0.0`, `50.0`, `55.2`.
pub fn format_percent(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

// ============================================================================
// Document
// ============================================================================

/// Renders the full report document for `submission` over `period`.
pub fn render_report(submission: &Submission, period: &ReportPeriod) -> Result<String> {
    let metrics = &submission.metrics;
    let bounce = BounceChange::new(metrics.prev_bounce, metrics.curr_bounce);
    let kept = filled_rows(&submission.keywords).count();

    log::debug!(
        "rendering report for '{}' ({} {}): {kept} of {} keyword rows, bounce {}",
        submission.project_name,
        period.month_name(),
        period.year(),
        submission.keywords.len(),
        bounce.sentence()
    );

    let year = period.year().to_string();
    let start = period.start_label();
    let end = period.end_label();

    Template::new(REPORT_TEMPLATE)
        .bind_text("project_name", &submission.project_name)
        .bind_text("month_name", period.month_name())
        .bind_text("year", &year)
        .bind_text("start_date", &start)
        .bind_text("end_date", &end)
        .bind("keyword_table", keyword_table(&submission.keywords))
        .bind_text("organic_traffic", &metrics.organic_traffic)
        .bind_text("new_users", &metrics.new_users)
        .bind_text("event_count", &metrics.event_count)
        .bind("bounce_rate", bounce.to_markup())
        .bind_text("backlinks", &metrics.backlinks)
        .bind_text("site_speed", &metrics.site_speed)
        .bind_text("mobile_usability", &metrics.mobile_usability)
        .bind_text("next_month_name", period.next_month_name())
        .bind("plan_items", plan_bullets(&metrics.next_month_plan))
        .bind_text("submitted_by", &metrics.submitted_by)
        .render()
}
