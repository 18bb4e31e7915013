//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - request inputs (`QueryParameters`) and raw service output (`RawResponse`)
//! - parsed output (`HeaderRow`, `FieldValue`, `ObservationRecord`, `ObservationTable`)
//! - CLI-facing enums (`OutputFormat`)

pub mod types;

pub use types::*;
