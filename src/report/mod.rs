//! Report module - rendering analysis results

pub mod density;
pub mod document;
pub mod json_export;
pub mod stats_printout;

pub use density::*;
pub use document::*;
pub use json_export::*;
pub use stats_printout::*;
