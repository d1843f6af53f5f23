//! JSON decoding helpers shared by every service.
//!
//! The API answers list endpoints with a JSON array, but some endpoints
//! answer an unknown id with an empty body instead. A blank body or a bare
//! `null` therefore decodes to the type's default ("no results") rather
//! than an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;

use crate::Result;

/// Decode a JSON response body.
///
/// Blank or whitespace-only input and a literal `null` yield
/// `T::default()`. Anything else must be valid JSON for `T`.
///
/// # Example
///
/// ```
/// use welldatalabs::serialization::from_json_text;
/// use welldatalabs::models::StageComment;
///
/// let none: Vec<StageComment> = from_json_text("  ").unwrap();
/// assert!(none.is_empty());
/// ```
pub fn from_json_text<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    let value: Option<T> = serde_json::from_str(text)?;
    Ok(value.unwrap_or_default())
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp as UTC.
///
/// Offsets are honoured and converted; timestamps without an offset are
/// taken to already be UTC. A bare date means midnight UTC.
pub fn parse_utc(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` helper for nullable UTC timestamps.
pub(crate) fn optional_utc<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_utc(s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid UTC timestamp: {}", s))),
    }
}

/// `deserialize_with` helper for nullable strings where the API sometimes
/// sends numbers (e.g. surface coordinates in older payloads).
pub(crate) fn optional_lenient_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(lenient_cell))
}

/// `deserialize_with` helper that reads an explicit `null` as
/// `T::default()`. Pair with `#[serde(default)]` to cover a missing key too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `deserialize_with` helper for positional table rows.
///
/// A `null` table or row reads as empty; cells follow the same rules as
/// [`optional_lenient_string`].
pub(crate) fn lenient_rows<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<Vec<Option<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<Vec<serde_json::Value>>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.unwrap_or_default().into_iter().map(lenient_cell).collect())
        .collect())
}

fn lenient_cell(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
