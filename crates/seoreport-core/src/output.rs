//! Generated reports and the ways they leave the program.
//!
//! A [`Report`] is produced once per generate action and is not kept
//! anywhere: it is either shown inline, handed to the user as a download,
//! or written to a directory by the CLI.

use std::path::{Path, PathBuf};

use crate::markup::Markup;
use crate::period::ReportPeriod;
use crate::render::render_report;
use crate::submission::Submission;
use crate::{Error, Result};

/// MIME type of the downloaded document.
pub const MIME_TYPE: &str = "text/html; charset=utf-8";

/// Default height of the inline preview frame, in pixels.
pub const PREVIEW_HEIGHT: u32 = 800;

/// Download file name: `<project>_SEO_Report_<month>_<year>.html`.
pub fn report_file_name(project_name: &str, month_name: &str, year: i32) -> String {
    format!("{project_name}_SEO_Report_{month_name}_{year}.html")
}

/// A rendered report document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    html: String,
    file_name: String,
}

impl Report {
    /// Renders `submission` for its month of `year`.
    pub fn generate(submission: &Submission, year: i32) -> Result<Self> {
        let period = submission.period(year)?;
        Self::generate_for(submission, &period)
    }

    /// Renders `submission` over an already computed period.
    pub fn generate_for(submission: &Submission, period: &ReportPeriod) -> Result<Self> {
        let html = render_report(submission, period)?;
        let file_name = report_file_name(
            &submission.project_name,
            period.month_name(),
            period.year(),
        );
        log::info!("generated {file_name} ({} bytes)", html.len());
        Ok(Self { html, file_name })
    }

    /// The document.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Take the document.
    pub fn into_html(self) -> String {
        self.html
    }

    /// The download file name, exactly as derived from the inputs.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The file name with characters that cannot live in a single path
    /// component replaced by `_`.
    pub fn safe_file_name(&self) -> String {
        self.file_name
            .chars()
            .map(|c| match c {
                '/' | '\\' | '\0' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect()
    }

    /// `Content-Disposition` value for a download response.
    ///
    /// The quoted `filename` is an ASCII fallback: anything that is not
    /// visible ASCII (and the quote and backslash characters) becomes `_`.
    /// When that changes the name, the exact name follows as an RFC 5987
    /// `filename*` parameter.
    pub fn content_disposition(&self) -> String {
        let ascii: String = self
            .file_name
            .chars()
            .map(|c| match c {
                '"' | '\\' => '_',
                c if c.is_ascii_graphic() || c == ' ' => c,
                _ => '_',
            })
            .collect();
        if ascii == self.file_name {
            format!("attachment; filename=\"{ascii}\"")
        } else {
            format!(
                "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
                urlencoding::encode(&self.file_name)
            )
        }
    }

    /// Inline preview: a scrollable frame of fixed height with the
    /// document as its `srcdoc`.
    pub fn preview(&self, height: u32) -> Markup {
        let mut html = Markup::trusted(format!(
            "<iframe class=\"report-preview\" title=\"Report preview\" \
             style=\"width:100%; height:{height}px; border:1px solid #ccc;\" \
             scrolling=\"yes\" sandbox srcdoc=\""
        ));
        html.push_escaped(&self.html);
        html.push_trusted("\"></iframe>");
        html
    }

    /// Writes the document into `dir` under [`Report::safe_file_name`].
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| Error::io_with_path(e, dir))?;
        let path = dir.join(self.safe_file_name());
        std::fs::write(&path, &self.html).map_err(|e| Error::io_with_path(e, &path))?;
        log::info!("wrote {}", path.display());
        Ok(path)
    }
}
