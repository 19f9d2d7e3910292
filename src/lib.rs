//! Tipstat: Restaurant Gratuity Analysis Library
//!
//! A library for descriptive analysis of restaurant gratuity records:
//! typed CSV loading, grouped tip statistics, bill-to-tip correlation,
//! and paginated text report rendering.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
