//! End-to-end parsing scenarios through the public API.

mod common;

use common::TWO_ROW_BODY;
use qocat::OcatError;
use qocat::domain::FieldValue;
use qocat::fields;
use qocat::io::tabular::{parse, parse_table};

/// A response in the shape the live service sends for a single obsid.
const OCAT_SAMPLE: &str = "\
#---------------------------------------------------------------
# Chandra Observation Catalog
# Generated by ocatDetails
#---------------------------------------------------------------
SEQ_NUM\tSTATUS\tOBSID\tPR_NUM\tTARGET_NAME\tGRID_NAME\tINSTR\tGRAT\tRA\tDec
string\tstring\tint\tstring\tstring\tstring\tstring\tstring\tstring\tstring
100004\tarchived\t315\t01700001\tCas A\t\tACIS-S\tNONE\t23 23 24.00\t+58 48 54.00
";

#[test]
fn basic_two_row_table() {
    let records = parse(TWO_ROW_BODY).unwrap();
    let json = serde_json::to_string(&records).unwrap();
    assert_eq!(
        json,
        r#"[{"SEQ_NUM":"101","OBSID":"315","STATUS":"Observed"},{"SEQ_NUM":"102","OBSID":"1838","STATUS":"Scheduled"}]"#
    );
}

#[test]
fn realistic_response_keeps_every_column() {
    let table = parse_table(OCAT_SAMPLE).unwrap();
    assert_eq!(table.header.len(), 10);
    assert_eq!(table.records.len(), 1);

    let record = &table.records[0];
    assert_eq!(record.columns().collect::<Vec<_>>(), table.header.iter().map(String::as_str).collect::<Vec<_>>());
    assert_eq!(record.value("TARGET_NAME"), Some("Cas A"));
    assert_eq!(record.get("GRID_NAME"), Some(&FieldValue::Absent));
    assert_eq!(record.value("Dec"), Some("+58 48 54.00"));

    for column in record.columns() {
        assert!(fields::is_known(column), "{column} missing from the field dictionary");
    }
}

#[test]
fn comment_lines_never_reach_records() {
    let table = parse_table(OCAT_SAMPLE).unwrap();
    assert!(table.header.iter().all(|h| !h.starts_with('#')));
    for record in &table.records {
        for (column, value) in record.iter() {
            assert!(!column.starts_with('#'));
            assert!(!value.as_str().unwrap_or_default().starts_with('#'));
        }
    }
}

#[test]
fn every_record_has_the_full_header() {
    let body = "#x\nA\tB\tC\tD\nu\tu\tu\tu\n1\t2\t3\t4\n1\t\t3\n\n1\n\t\t\t\n";
    let table = parse_table(body).unwrap();
    // The interior blank line is a row of its own; the final newline is not.
    assert_eq!(table.records.len(), 5);
    for record in &table.records {
        assert_eq!(record.len(), table.header.len());
        assert_eq!(record.columns().collect::<Vec<_>>(), vec!["A", "B", "C", "D"]);
    }
    assert!(table.records[2].iter().all(|(_, v)| v.is_absent()));
    assert!(table.records[4].iter().all(|(_, v)| v.is_absent()));
}

#[test]
fn repeated_header_column_is_rejected() {
    let err = parse_table("#c\nOBSID\tSTATUS\tOBSID\nint\tstring\tint\n315\tarchived\t315\n").unwrap_err();
    assert!(matches!(err, OcatError::MalformedResponse { .. }));
    assert!(err.to_string().contains("duplicate column name 'OBSID'"));
}

#[test]
fn no_data_rows_is_empty_not_error() {
    let body = "# ocat\nSEQ_NUM\tOBSID\tSTATUS\nint\tint\tstring\n";
    assert!(parse(body).unwrap().is_empty());
}

#[test]
fn all_comments_is_malformed() {
    let err = parse("# nothing\n# here\n").unwrap_err();
    assert!(matches!(err, OcatError::MalformedResponse { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn repeated_parses_are_equal() {
    let first = parse(OCAT_SAMPLE).unwrap();
    let second = parse(OCAT_SAMPLE).unwrap();
    assert_eq!(first, second);
}
