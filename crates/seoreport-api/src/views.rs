//! HTML for the form page.
//!
//! One page serves both session states: the form alone while collecting
//! input, the form followed by the report preview and download button once
//! a report has been generated. All field values are echoed back escaped.

use seoreport_core::fields::{FieldSource, keys};
use seoreport_core::markup::Markup;
use seoreport_core::period::{MONTH_NAMES, parse_month};
use seoreport_core::rows::{current_rank_key, keyword_key, previous_rank_key};
use seoreport_core::{FormSession, Report};

use crate::state::AppState;

/// Page title and heading.
pub const PAGE_TITLE: &str = "Monthly SEO Report Generator";

/// A single-line text field.
struct TextField {
    key: &'static str,
    label: &'static str,
    placeholder: &'static str,
}

const TRAFFIC_FIELDS: &[TextField] = &[
    TextField {
        key: keys::ORGANIC_TRAFFIC,
        label: "Organic Traffic (number only)",
        placeholder: "Example: 1.8K",
    },
    TextField {
        key: keys::NEW_USERS,
        label: "New Users (number only)",
        placeholder: "Example: 1.7K",
    },
    TextField {
        key: keys::EVENT_COUNT,
        label: "Event Count",
        placeholder: "Example: 12.4K",
    },
];

const SEO_FIELDS: &[TextField] = &[
    TextField {
        key: keys::BACKLINKS,
        label: "Backlinks Acquired (number only)",
        placeholder: "Example: 34",
    },
    TextField {
        key: keys::SITE_SPEED,
        label: "Site Speed Optimization (%)",
        placeholder: "Example: 95",
    },
    TextField {
        key: keys::MOBILE_USABILITY,
        label: "Mobile Usability (%)",
        placeholder: "Example: 76",
    },
];

const PLAN_PLACEHOLDER: &str = "Example:\nImprove Internal Linking Structure...\n\
                                Build High-Quality Backlinks...\n\
                                Optimize Core Web Vitals...";

const STYLE: &str = "\
body { font-family: Arial, sans-serif; max-width: 760px; margin: 2em auto; padding: 0 1em; }
label { display: block; margin: 0.6em 0; }
input[type=text], input[type=number], select, textarea { width: 100%; box-sizing: border-box; padding: 4px; }
textarea { min-height: 7em; }
.cols { display: flex; gap: 0.8em; }
.cols > label { flex: 1; }
.info { background: #e8f0fe; padding: 0.6em 1em; border-radius: 4px; }
.error { background: #fdecea; padding: 0.6em 1em; border-radius: 4px; }
button { margin: 0.6em 0.4em 0.6em 0; padding: 0.4em 1em; }";

/// Renders the whole form page for `session`.
///
/// `report` is the report generated by this request, if any.
pub fn form_page(state: &AppState, session: &FormSession, report: Option<&Report>) -> Markup {
    let mut page = Markup::trusted(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n<title>",
    );
    page.push_escaped(PAGE_TITLE);
    page.push_trusted("</title>\n<style>\n");
    page.push_trusted(STYLE);
    page.push_trusted("\n</style>\n</head>\n<body>\n<h1>&#x1F4CA; ");
    page.push_escaped(PAGE_TITLE);
    page.push_trusted("</h1>\n<form method=\"post\" action=\"/report\">\n");

    page.push(&hidden(keys::ROWS, &session.row_count().to_string()));
    page.push(&text_input(
        session,
        keys::PROJECT_NAME,
        "Project Name",
        "Example: Sai Furniture Art",
    ));
    page.push(&month_select(state, session));
    page.push(&period_banner(state, session));

    page.push_trusted("<h3>Keyword Rankings</h3>\n");
    page.push(&keyword_rows(session));
    page.push_trusted(
        "<button type=\"submit\" formaction=\"/rows\" name=\"action\" value=\"add_row\">\
         &#x2795; Add Row</button>\n",
    );

    for field in TRAFFIC_FIELDS {
        page.push(&text_input(session, field.key, field.label, field.placeholder));
    }
    page.push(&bounce_inputs(session));
    for field in SEO_FIELDS {
        page.push(&text_input(session, field.key, field.label, field.placeholder));
    }
    page.push(&plan_textarea(session));
    page.push(&text_input(
        session,
        keys::SUBMITTED_BY,
        "Submitted By",
        "Example: Harinder Baweja",
    ));

    page.push_trusted(
        "<button type=\"submit\" name=\"action\" value=\"generate\">Generate Report</button>\n",
    );

    if let Some(report) = report {
        page.push_trusted("<h3>&#x2709;&#xFE0F; Final Report Preview</h3>\n");
        page.push(&report.preview(state.config().form.preview_height));
        page.push_trusted(
            "\n<button type=\"submit\" formaction=\"/report/download\" name=\"action\" \
             value=\"download\">&#x1F4E5; Download Report (HTML File)</button>\n",
        );
    }

    page.push_trusted("</form>\n</body>\n</html>\n");
    page
}

fn hidden(name: &str, value: &str) -> Markup {
    let mut html = Markup::trusted("<input type=\"hidden\" name=\"");
    html.push_escaped(name);
    html.push_trusted("\" value=\"");
    html.push_escaped(value);
    html.push_trusted("\">\n");
    html
}

fn text_input(session: &FormSession, name: &str, label: &str, placeholder: &str) -> Markup {
    let mut html = Markup::trusted("<label>");
    html.push_escaped(label);
    html.push_trusted(" <input type=\"text\" name=\"");
    html.push_escaped(name);
    html.push_trusted("\" value=\"");
    html.push_escaped(session.value(name));
    html.push_trusted("\" placeholder=\"");
    html.push_escaped(placeholder);
    html.push_trusted("\"></label>\n");
    html
}

fn month_select(state: &AppState, session: &FormSession) -> Markup {
    let selected = session
        .values()
        .field(keys::MONTH)
        .filter(|m| !m.trim().is_empty())
        .map_or(Some(state.default_month()), |m| parse_month(m).ok());

    let mut html = Markup::trusted("<label>Select Reporting Month (");
    html.push_escaped(&state.year().to_string());
    html.push_trusted(") <select name=\"month\">\n");
    for name in MONTH_NAMES {
        html.push_trusted("<option");
        if selected.is_some_and(|month| month.name() == name) {
            html.push_trusted(" selected");
        }
        html.push_trusted(">");
        html.push_escaped(name);
        html.push_trusted("</option>\n");
    }
    html.push_trusted("</select></label>\n");
    html
}

fn period_banner(state: &AppState, session: &FormSession) -> Markup {
    match session.submission(state.default_month()).period(state.year()) {
        Ok(period) => {
            let mut html = Markup::trusted("<p class=\"info\">");
            html.push_escaped(&period.banner());
            html.push_trusted("</p>\n");
            html
        }
        Err(e) => {
            let mut html = Markup::trusted("<p class=\"error\">");
            html.push_escaped(&e.to_string());
            html.push_trusted("</p>\n");
            html
        }
    }
}

fn keyword_rows(session: &FormSession) -> Markup {
    let mut html = Markup::default();
    for i in 0..session.row_count() {
        let n = i + 1;
        html.push_trusted("<div class=\"cols\">\n");
        html.push(&text_input(
            session,
            &keyword_key(i),
            &format!("Keyword {n}"),
            "Example: Sofa Set Manufacturers",
        ));
        html.push(&text_input(
            session,
            &current_rank_key(i),
            &format!("Current Rank {n}"),
            "Example: 2",
        ));
        html.push(&text_input(
            session,
            &previous_rank_key(i),
            &format!("Previous Rank {n}"),
            "Example: 3",
        ));
        html.push_trusted("</div>\n");
    }
    html
}

fn bounce_inputs(session: &FormSession) -> Markup {
    let mut html = Markup::trusted("<div class=\"cols\">\n");
    for (key, label) in [
        (keys::PREV_BOUNCE, "Previous Bounce Rate (%)"),
        (keys::CURR_BOUNCE, "Current Bounce Rate (%)"),
    ] {
        let value = format!("{:.2}", session.values().percent(key));
        html.push_trusted("<label>");
        html.push_escaped(label);
        html.push_trusted(" <input type=\"number\" step=\"0.01\" name=\"");
        html.push_escaped(key);
        html.push_trusted("\" value=\"");
        html.push_escaped(&value);
        html.push_trusted("\"></label>\n");
    }
    html.push_trusted("</div>\n");
    html
}

fn plan_textarea(session: &FormSession) -> Markup {
    let mut html =
        Markup::trusted("<label>Next Month Improvement (Each point on a new line) <textarea name=\"");
    html.push_escaped(keys::NEXT_MONTH_PLAN);
    html.push_trusted("\" placeholder=\"");
    html.push_escaped(PLAN_PLACEHOLDER);
    html.push_trusted("\">");
    html.push_escaped(session.value(keys::NEXT_MONTH_PLAN));
    html.push_trusted("</textarea></label>\n");
    html
}
