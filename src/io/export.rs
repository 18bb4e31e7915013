//! Export query results to a JSON file.
//!
//! The export wraps the per-obsid results with enough run metadata to tell
//! later where and when the data came from.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::app::pipeline::{ObsidResult, ObsidResultView};
use crate::error::{OcatError, Result};

/// Top-level schema of an export file.
#[derive(Debug, Serialize)]
pub struct ExportFile<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub endpoint: &'a str,
    pub retrieved_at: DateTime<Utc>,
    pub results: Vec<ObsidResultView<'a>>,
}

impl<'a> ExportFile<'a> {
    pub fn new(endpoint: &'a str, retrieved_at: DateTime<Utc>, results: &'a [ObsidResult]) -> Self {
        Self {
            tool: "qocat",
            version: env!("CARGO_PKG_VERSION"),
            endpoint,
            retrieved_at,
            results: results.iter().map(ObsidResultView::from).collect(),
        }
    }
}

/// Write results to `path` as pretty-printed JSON.
pub fn write_export_json(
    path: &Path,
    endpoint: &str,
    retrieved_at: DateTime<Utc>,
    results: &[ObsidResult],
) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| OcatError::io(format!("Failed to create export file '{}'", path.display()), e))?;

    let export = ExportFile::new(endpoint, retrieved_at, results);
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &export)
        .map_err(|e| OcatError::json(format!("Failed to write export file '{}'", path.display()), e))?;
    writer
        .flush()
        .map_err(|e| OcatError::io(format!("Failed to flush export file '{}'", path.display()), e))?;

    info!(path = %path.display(), obsids = results.len(), "wrote export");
    Ok(())
}
