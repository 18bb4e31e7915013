//! Remote data sources.

pub mod ocat;

pub use ocat::{OcatClient, check_response};
