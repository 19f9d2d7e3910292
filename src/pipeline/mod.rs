//! Pipeline module - loading and aggregating gratuity records

pub mod aggregate;
pub mod correlation;
pub mod loader;
pub mod records;

pub use aggregate::*;
pub use correlation::*;
pub use loader::*;
pub use records::*;
