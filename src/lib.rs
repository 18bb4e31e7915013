//! `qocat` library crate.
//!
//! Queries the Chandra Observation Catalog (OCat) by observation id and parses
//! its tab-delimited responses into ordered records.
//!
//! The binary (`qocat`) is a thin wrapper around this library so that:
//!
//! - the fetch and parse steps are testable without spawning processes
//! - other tools can call `data::OcatClient` and `io::tabular::parse` directly

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod fields;
pub mod io;
pub mod report;

pub use error::{OcatError, Result};
