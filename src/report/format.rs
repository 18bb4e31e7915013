//! Terminal output for query results.
//!
//! We keep formatting code in one place so the fetch/parse code stays free of
//! presentation concerns and output changes stay localized.

use crate::app::pipeline::{ObsidResult, ObsidResultView};
use crate::error::{OcatError, Result};
use crate::fields;

/// Labelled, human-oriented listing.
///
/// ```text
/// === obsid 315 (1 record) ===
/// [1]
///   SEQ_NUM (Sequence Number): 101
///   GRAT (Grating): None
/// ```
pub fn format_text(results: &[ObsidResult], with_labels: bool) -> String {
    let mut out = String::new();

    for (i, r) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match &r.result {
            Ok(table) => {
                let n = table.records.len();
                out.push_str(&format!(
                    "=== obsid {} ({} record{}) ===\n",
                    r.obsid,
                    n,
                    if n == 1 { "" } else { "s" }
                ));
                for (idx, record) in table.records.iter().enumerate() {
                    out.push_str(&format!("[{}]\n", idx + 1));
                    for (column, value) in record.iter() {
                        let name = if with_labels {
                            fields::display_name(column)
                        } else {
                            column.to_string()
                        };
                        out.push_str(&format!("  {name}: {value}\n"));
                    }
                }
            }
            Err(e) => out.push_str(&format!("obsid {}: error: {e}\n", r.obsid)),
        }
    }

    out
}

/// Tab-separated output: the header once per obsid, then its rows.
///
/// Failed queries are reported as `# obsid N: error: ...` comment lines so the
/// output stays parseable by the same rules as the service's own responses.
///
/// Absent fields print as `None`, the same as a field whose value really is
/// the text `None`. Use `format_json` when the two must be told apart.
pub fn format_tsv(results: &[ObsidResult]) -> String {
    let mut out = String::new();

    for r in results {
        match &r.result {
            Ok(table) => {
                out.push_str(&format!("# obsid {}\n", r.obsid));
                out.push_str(&table.header.join("\t"));
                out.push('\n');
                for record in &table.records {
                    let row: Vec<String> = record.iter().map(|(_, v)| v.to_string()).collect();
                    out.push_str(&row.join("\t"));
                    out.push('\n');
                }
            }
            Err(e) => {
                // Keep multi-line error bodies inside the comment block.
                for line in format!("obsid {}: error: {e}", r.obsid).lines() {
                    out.push_str(&format!("# {line}\n"));
                }
            }
        }
    }

    out
}

/// Pretty JSON array, one object per obsid.
pub fn format_json(results: &[ObsidResult]) -> Result<String> {
    let views: Vec<ObsidResultView<'_>> = results.iter().map(ObsidResultView::from).collect();
    serde_json::to_string_pretty(&views)
        .map_err(|e| OcatError::json("Failed to serialize results", e))
}

/// Listing of the field dictionary for `qocat fields`.
///
/// With no codes, every known code is listed; otherwise only the requested
/// ones, flagging codes the dictionary does not know.
pub fn format_fields(codes: &[String]) -> String {
    let mut out = String::new();

    if codes.is_empty() {
        for (code, label) in fields::all() {
            out.push_str(&format!("{code:<24}{label}\n"));
        }
        return out;
    }

    for code in codes {
        let label = match (fields::is_known(code), fields::label(code)) {
            (_, Some(l)) => l,
            (true, None) => "",
            (false, None) => "(unknown field)",
        };
        out.push_str(&format!("{code:<24}{label}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::tabular::parse_table;

    const BODY: &str = "#comment\nSEQ_NUM\tOBSID\tGRAT\nint\tint\tstring\n101\t315\t\n102\t1838\tHETG";

    fn results() -> Vec<ObsidResult> {
        vec![
            ObsidResult {
                obsid: 315,
                result: parse_table(BODY),
            },
            ObsidResult {
                obsid: 99999,
                result: Err(OcatError::request_failed(404, "obsid not found")),
            },
        ]
    }

    #[test]
    fn text_output_with_labels() {
        let text = format_text(&results(), true);
        assert!(text.starts_with("=== obsid 315 (2 records) ===\n[1]\n"));
        assert!(text.contains("  SEQ_NUM (Sequence Number): 101\n"));
        assert!(text.contains("  GRAT (Grating): None\n"));
        assert!(text.contains("obsid 99999: error: Request failed with status 404: obsid not found\n"));
    }

    #[test]
    fn text_output_without_labels_uses_codes() {
        let text = format_text(&results(), false);
        assert!(text.contains("  OBSID: 1838\n"));
        assert!(!text.contains("Sequence Number"));
    }

    #[test]
    fn tsv_output_keeps_column_order_and_marks_absent() {
        let tsv = format_tsv(&results());
        let expected = "# obsid 315\nSEQ_NUM\tOBSID\tGRAT\n101\t315\tNone\n102\t1838\tHETG\n\
                        # obsid 99999: error: Request failed with status 404: obsid not found\n";
        assert_eq!(tsv, expected);
    }

    #[test]
    fn tsv_output_prints_header_for_empty_table() {
        let results = vec![ObsidResult {
            obsid: 1,
            result: parse_table("A\tB\nu\tu\n"),
        }];
        assert_eq!(format_tsv(&results), "# obsid 1\nA\tB\n");
    }

    #[test]
    fn json_output_round_trips_through_serde() {
        let json = format_json(&results()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["obsid"], 315);
        assert_eq!(value[0]["records"][0]["GRAT"], serde_json::Value::Null);
        assert_eq!(value[0]["records"][1]["GRAT"], "HETG");
        assert!(value[1]["error"].as_str().unwrap().contains("obsid not found"));
    }

    #[test]
    fn fields_listing_flags_unknown_codes() {
        let out = format_fields(&["STATUS".to_string(), "BOGUS".to_string(), "Y_AMP".to_string()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("STATUS") && lines[0].ends_with("Observation Status"));
        assert!(lines[1].ends_with("(unknown field)"));
        assert_eq!(lines[2].trim_end(), "Y_AMP");
    }

    #[test]
    fn fields_listing_defaults_to_everything() {
        assert_eq!(format_fields(&[]).lines().count(), fields::all().count());
    }
}
