//! Parser for OCat's tab-delimited (`format=text`) responses.
//!
//! The service returns:
//!
//! ```text
//! # comment line(s), each beginning with '#'
//! COL1<TAB>COL2<TAB>...<TAB>COLn      header row
//! units/type annotation row           always discarded
//! val1<TAB>val2<TAB>...<TAB>valn      data rows
//! ```
//!
//! Rules:
//! - comment lines are dropped wherever they appear
//! - column names are taken verbatim (no re-casing, no vocabulary check)
//! - empty fields become `FieldValue::Absent`; adjacent tabs never collapse
//! - a row shorter than the header is padded with `Absent`, so every record
//!   carries exactly the header's columns
//! - values are never type-coerced
//! - a trailing `\r` is stripped from every line
//! - blank lines before the header are skipped and the empty segment after a
//!   final newline is dropped; any other blank line is a data row whose
//!   fields are all `Absent`
//! - a header naming the same column twice is rejected as malformed

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{FieldValue, HeaderRow, ObservationRecord, ObservationTable};
use crate::error::{OcatError, Result};

const COMMENT_MARKER: char = '#';
const FIELD_SEPARATOR: char = '\t';

/// Parse a response body into one record per data row.
pub fn parse(body: &str) -> Result<Vec<ObservationRecord>> {
    parse_table(body).map(|table| table.records)
}

/// Parse a response body, keeping the header alongside the records.
pub fn parse_table(body: &str) -> Result<ObservationTable> {
    let mut lines = content_lines(body).skip_while(|line| line.is_empty());

    let header_line = lines.next().ok_or_else(|| {
        OcatError::malformed("no header line found (body is empty or contains only comments)")
    })?;
    let header: HeaderRow = header_line
        .split(FIELD_SEPARATOR)
        .map(str::to_string)
        .collect();
    check_unique_columns(&header)?;

    // Units/type annotations, not data.
    let _units = lines.next();

    let records: Vec<ObservationRecord> = lines
        .enumerate()
        .map(|(idx, line)| build_record(&header, line, idx + 1))
        .collect();

    debug!(
        columns = header.len(),
        rows = records.len(),
        "parsed tabular response"
    );

    Ok(ObservationTable { header, records })
}

/// Non-comment lines with any trailing `\r` removed, minus the empty
/// segment that follows a final newline.
fn content_lines(body: &str) -> impl Iterator<Item = &str> {
    let body = body.strip_suffix('\n').unwrap_or(body);
    let body = body.strip_suffix('\r').unwrap_or(body);
    let segments = if body.is_empty() { None } else { Some(body.split('\n')) };
    segments
        .into_iter()
        .flatten()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.starts_with(COMMENT_MARKER))
}

/// Records are keyed by column name, so a repeated name would silently drop a field.
fn check_unique_columns(header: &HeaderRow) -> Result<()> {
    let mut seen = HashSet::with_capacity(header.len());
    match header.iter().find(|name| !seen.insert(*name)) {
        Some(name) => Err(OcatError::malformed(format!("duplicate column name '{name}'"))),
        None => Ok(()),
    }
}

/// Split a data row into fields, turning every empty field into `Absent`.
///
/// `str::split` yields an empty slice between each pair of adjacent tabs, so
/// `"A\t\t\tB"` gives four fields, two of them absent.
fn split_fields(line: &str) -> Vec<FieldValue> {
    line.split(FIELD_SEPARATOR).map(FieldValue::from_raw).collect()
}

fn build_record(header: &HeaderRow, line: &str, row: usize) -> ObservationRecord {
    let mut fields = split_fields(line);

    if fields.len() > header.len() {
        warn!(
            row,
            expected = header.len(),
            found = fields.len(),
            "data row has more fields than the header; dropping the surplus"
        );
        fields.truncate(header.len());
    }

    let padding = header.len() - fields.len();
    header
        .iter()
        .cloned()
        .zip(fields.into_iter().chain(std::iter::repeat_n(FieldValue::Absent, padding)))
        .collect()
}
