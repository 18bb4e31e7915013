//! Input/output helpers.
//!
//! - tab-delimited response parsing (`tabular`)
//! - JSON result exports (`export`)

pub mod export;
pub mod tabular;

pub use export::*;
pub use tabular::*;
