//! Query-string building for API requests.
//!
//! Parameters keep insertion order. Entries with a blank key or an empty
//! value are dropped at encode time, so optional filters can be pushed
//! unconditionally.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

use crate::models::{ChangeWindow, StageRange};

/// Ordered set of optional query parameters.
///
/// # Example
///
/// ```
/// use welldatalabs::client::QueryParams;
///
/// let query = QueryParams::new()
///     .with("fromStageNumber", Some("1".to_string()))
///     .with("toStageNumber", Some("100".to_string()))
///     .with("fromChangeUtc", None);
/// assert_eq!(query.encode(), "?fromStageNumber=1&toStageNumber=100");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: Option<String>) -> &mut Self {
        self.pairs.push((key.into(), value));
        self
    }

    /// Append a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Append `fromStageNumber` / `toStageNumber`.
    pub fn push_stage_range(&mut self, stages: StageRange) -> &mut Self {
        self.push("fromStageNumber", stages.from.map(format_stage_number));
        self.push("toStageNumber", stages.to.map(format_stage_number))
    }

    /// Append `fromChangeUtc` / `toChangeUtc`.
    pub fn push_change_window(&mut self, window: ChangeWindow) -> &mut Self {
        self.push("fromChangeUtc", window.from.map(format_change_utc));
        self.push("toChangeUtc", window.to.map(format_change_utc))
    }

    /// Returns `true` if encoding would produce an empty string.
    pub fn is_empty(&self) -> bool {
        self.effective().next().is_none()
    }

    /// Encode as `?k=v&k=v`, or `""` when nothing survives filtering.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.effective() {
            out.push(if out.is_empty() { '?' } else { '&' });
            out.push_str(&urlencoding::encode(key));
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out
    }

    fn effective(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().filter_map(|(key, value)| {
            let value = value.as_deref()?;
            if key.trim().is_empty() || value.is_empty() {
                None
            } else {
                Some((key.as_str(), value))
            }
        })
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Render a stage number for a query string.
///
/// Whole numbers drop the decimal point (`20.0` becomes `20`); fractional
/// values keep every significant digit (`20.10` becomes `20.1`).
pub fn format_stage_number(stage: Decimal) -> String {
    stage.normalize().to_string()
}

/// Render a change-time bound for a query string (RFC 3339, UTC, seconds).
pub fn format_change_utc(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
