//! Shared domain types.
//!
//! These types are intentionally kept small and serializable so they can be:
//!
//! - built by the fetcher and the parser
//! - printed by the report formatters
//! - exported to JSON as-is

use std::fmt;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use url::form_urlencoded;

/// Display form of the absent-value sentinel.
///
/// OCat's own tooling has always printed missing fields as `None`, so text
/// and TSV output keep that token. A field whose real value is the text
/// `None` prints the same way there; JSON output (`null` vs `"None"`) and
/// `FieldValue` itself keep the two apart.
pub const ABSENT_MARKER: &str = "None";

/// Output format selector that makes the service return tab-delimited text.
pub const TEXT_FORMAT: &str = "text";

/// Query parameters sent to the catalog service, in insertion order.
///
/// Values are stored already rendered as strings; integers and strings are
/// accepted through `Display`. No validation is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParameters {
    pairs: IndexMap<String, String>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for a single-observation lookup in tab-delimited format.
    pub fn for_obsid(obsid: u64) -> Self {
        Self::new().with("obsid", obsid).with("format", TEXT_FORMAT)
    }

    /// Builder-style insert. A repeated key replaces the earlier value in place.
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.pairs.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` rendering: every key and value is
    /// percent-encoded and pairs are joined with `&`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// A response body as returned by the service, with its HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Column names of a tabular response, in the order the service sent them.
pub type HeaderRow = Vec<String>;

/// A single field of a data row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Present(String),
    /// The field was there but empty (adjacent tabs) or missing at the end of a short row.
    Absent,
}

impl FieldValue {
    /// Empty text maps to `Absent`; anything else is kept verbatim.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Self::Absent
        } else {
            Self::Present(raw.to_string())
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Present(s) => Some(s),
            Self::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(ABSENT_MARKER))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Present(value.to_string())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(s) => Self::Present(s),
            None => Self::Absent,
        })
    }
}

/// One data row keyed by column name, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationRecord {
    fields: IndexMap<String, FieldValue>,
}

impl ObservationRecord {
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    /// Present value of `column`, or `None` when the column is unknown or absent.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(FieldValue::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for ObservationRecord {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Parsed response: the header plus one record per data row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObservationTable {
    pub header: HeaderRow,
    pub records: Vec<ObservationRecord>,
}

/// Output formats for `qocat query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `CODE: value` line per field, grouped by observation.
    Text,
    /// Tab-separated header and rows, as the service sent them.
    Tsv,
    /// JSON array with one entry per obsid.
    Json,
}
