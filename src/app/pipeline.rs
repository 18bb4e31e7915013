//! Shared query pipeline used by the CLI front-end and library callers.
//!
//! Each observation id goes through the same steps on its own:
//! fetch -> parse -> result. No state is carried from one id to the next, and a
//! failure for one id never stops the others.

use serde::Serialize;
use tracing::{info, warn};

use crate::data::OcatClient;
use crate::domain::ObservationTable;
use crate::error::{OcatError, Result};
use crate::io::tabular;

/// Outcome of one observation id.
#[derive(Debug)]
pub struct ObsidResult {
    pub obsid: u64,
    pub result: Result<ObservationTable>,
}

impl ObsidResult {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&OcatError> {
        self.result.as_ref().err()
    }
}

/// JSON view of an `ObsidResult`: `{obsid, records}` or `{obsid, error}`.
#[derive(Debug, Serialize)]
pub struct ObsidResultView<'a> {
    pub obsid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<&'a [crate::domain::ObservationRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> From<&'a ObsidResult> for ObsidResultView<'a> {
    fn from(value: &'a ObsidResult) -> Self {
        match &value.result {
            Ok(table) => Self {
                obsid: value.obsid,
                records: Some(&table.records),
                error: None,
            },
            Err(e) => Self {
                obsid: value.obsid,
                records: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Fetch and parse a single observation.
pub fn query_obsid(client: &OcatClient, obsid: u64) -> Result<ObservationTable> {
    let raw = client.query_obsid(obsid)?;
    tabular::parse_table(&raw.body)
}

/// Query each id in turn, keeping one result per id in input order.
pub fn query_obsids(client: &OcatClient, obsids: &[u64]) -> Vec<ObsidResult> {
    obsids
        .iter()
        .map(|&obsid| {
            let result = query_obsid(client, obsid);
            match &result {
                Ok(table) => info!(obsid, records = table.records.len(), "query complete"),
                Err(e) => warn!(obsid, error = %e, "query failed"),
            }
            ObsidResult { obsid, result }
        })
        .collect()
}

/// Exit code of the first failed query, if any.
pub fn first_failure_exit_code(results: &[ObsidResult]) -> Option<u8> {
    results
        .iter()
        .find_map(ObsidResult::error)
        .map(OcatError::exit_code)
}
