//! The `serve`, `render`, and `period` commands.

use std::path::{Path, PathBuf};

use seoreport_api::Server;
use seoreport_core::{AppConfig, Report, ReportPeriod, Submission};

use crate::Result;

/// Runs the form server until Ctrl-C.
///
/// `host` and `port` override the configured bind address.
pub async fn serve(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    Server::new(config)?.serve().await?;
    Ok(())
}

/// Renders the submission at `path` into `out_dir` and returns the written
/// file.
///
/// A submission without a month covers the configured default month.
pub fn render(config: &AppConfig, path: &Path, out_dir: &Path) -> Result<PathBuf> {
    let mut submission = Submission::load(path)?;
    if submission.month.trim().is_empty() {
        submission.month = config.report.default_month()?.name().to_string();
    }

    let report = Report::generate(&submission, config.report.year)?;
    tracing::debug!(
        project = %submission.project_name,
        month = %submission.month,
        keywords = submission.keywords.len(),
        "rendered report"
    );
    Ok(report.write_to_dir(out_dir)?)
}

/// The period banner and the following month for `month` in `year`, or in
/// the configured year.
pub fn period(config: &AppConfig, month: &str, year: Option<i32>) -> Result<String> {
    let period = ReportPeriod::from_month_name(month, year.unwrap_or(config.report.year))?;
    Ok(format!(
        "{}\nNext month: {}",
        period.banner(),
        period.next_month_name()
    ))
}
