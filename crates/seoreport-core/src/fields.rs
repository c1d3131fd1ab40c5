//! Form field aggregation.
//!
//! Fields are read through [`FieldSource`], a key lookup over whatever the
//! current UI state is (a decoded form post, a map in a test). Reading never
//! fails and never mutates anything: a missing field is an empty string, a
//! bounce rate that does not parse is `0.0`.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

/// Field names shared by the form, the aggregator, and submission files.
pub mod keys {
    /// Project (client site) name
    pub const PROJECT_NAME: &str = "project_name";
    /// Selected reporting month
    pub const MONTH: &str = "month";
    /// Organic traffic, free text
    pub const ORGANIC_TRAFFIC: &str = "organic_traffic";
    /// New users, free text
    pub const NEW_USERS: &str = "new_users";
    /// Event count, free text
    pub const EVENT_COUNT: &str = "event_count";
    /// Previous bounce rate, percent
    pub const PREV_BOUNCE: &str = "prev_bounce";
    /// Current bounce rate, percent
    pub const CURR_BOUNCE: &str = "curr_bounce";
    /// Backlinks acquired, free text
    pub const BACKLINKS: &str = "backlinks";
    /// Site speed improvement, free text percent
    pub const SITE_SPEED: &str = "site_speed";
    /// Mobile usability improvement, free text percent
    pub const MOBILE_USABILITY: &str = "mobile_usability";
    /// Next month plan, one point per line
    pub const NEXT_MONTH_PLAN: &str = "next_month_plan";
    /// Name of whoever submits the report
    pub const SUBMITTED_BY: &str = "submitted_by";
    /// Number of visible keyword rows
    pub const ROWS: &str = "rows";
}

/// Read access to the current value of named form fields.
pub trait FieldSource {
    /// The raw value of `key`, if the field is present.
    fn field(&self, key: &str) -> Option<&str>;

    /// The value of `key` as text, empty when absent.
    fn text(&self, key: &str) -> String {
        self.field(key).unwrap_or_default().to_string()
    }

    /// The value of `key` as a two-decimal percentage, `0.0` when absent
    /// or not a number.
    fn percent(&self, key: &str) -> f64 {
        self.field(key).map(parse_percent).unwrap_or_default()
    }
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Parses a bounce-rate input, rounding to two decimals.
///
/// Empty, non-numeric, and non-finite input all coerce to `0.0`.
pub fn parse_percent(raw: &str) -> f64 {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .map(normalize_percent)
        .unwrap_or_default()
}

/// Rounds a bounce rate to two decimals; `NaN` and infinities become `0.0`.
pub fn normalize_percent(v: f64) -> f64 {
    if v.is_finite() {
        round_two_decimals(v)
    } else {
        0.0
    }
}

/// Reads a bounce rate from a submission file, written either as a number
/// or as text such as `"55.2%"`.
fn deserialize_percent<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(v) => normalize_percent(v),
        Raw::Text(s) => parse_percent(&s),
    })
}

fn round_two_decimals(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Decoded form values, one value per field name.
///
/// When a key is posted more than once the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    /// Creates an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder form of [`FormValues::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// The value of `key`, empty when absent.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Iterates over all fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FieldSource for FormValues {
    fn field(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Every scalar metric on the form.
///
/// Text metrics are display text and are never parsed, so values such as
/// `1.8K` or `N/A` survive unchanged. Only the two bounce rates are numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsRecord {
    /// Organic traffic, e.g. `1.8K`
    pub organic_traffic: String,
    /// New users, e.g. `1.7K`
    pub new_users: String,
    /// Event count, e.g. `12.4K`
    pub event_count: String,
    /// Bounce rate last month, percent
    #[serde(deserialize_with = "deserialize_percent")]
    pub prev_bounce: f64,
    /// Bounce rate this month, percent
    #[serde(deserialize_with = "deserialize_percent")]
    pub curr_bounce: f64,
    /// Backlinks acquired, e.g. `34`
    pub backlinks: String,
    /// Site speed improvement, percent as text
    pub site_speed: String,
    /// Mobile usability improvement, percent as text
    pub mobile_usability: String,
    /// Planned work for next month, one point per line
    pub next_month_plan: String,
    /// Name of the submitter
    pub submitted_by: String,
}

impl MetricsRecord {
    /// Reads every metric field from `source`.
    pub fn from_source<S: FieldSource + ?Sized>(source: &S) -> Self {
        Self {
            organic_traffic: source.text(keys::ORGANIC_TRAFFIC),
            new_users: source.text(keys::NEW_USERS),
            event_count: source.text(keys::EVENT_COUNT),
            prev_bounce: source.percent(keys::PREV_BOUNCE),
            curr_bounce: source.percent(keys::CURR_BOUNCE),
            backlinks: source.text(keys::BACKLINKS),
            site_speed: source.text(keys::SITE_SPEED),
            mobile_usability: source.text(keys::MOBILE_USABILITY),
            next_month_plan: source.text(keys::NEXT_MONTH_PLAN),
            submitted_by: source.text(keys::SUBMITTED_BY),
        }
    }
}
