//! Reporting utilities: formatted terminal output for query results.

pub mod format;

pub use format::*;
