//! Machine-readable export of the analysis results
//!
//! Mirrors the headline numbers of the text report as pretty-printed JSON so
//! downstream tooling does not have to scrape the human-readable output.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::path::Path;

use crate::pipeline::{
    bill_tip_correlation, by_day, by_party_size, by_sex, by_time_of_day, overall, top_tips,
    Record, Strength, TipAggregate,
};

#[derive(Debug, Clone, Serialize)]
pub struct GroupEntry {
    pub label: String,
    #[serde(flatten)]
    pub aggregate: TipAggregate,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationEntry {
    pub coefficient: f64,
    pub strength: Strength,
}

/// Complete analysis result for one run.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub generated_at: String,
    pub source: String,
    pub record_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<TipAggregate>,
    pub by_sex: Vec<GroupEntry>,
    pub by_party_size: Vec<GroupEntry>,
    pub by_day: Vec<GroupEntry>,
    pub by_time_of_day: Vec<GroupEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationEntry>,
    pub top_tips: Vec<Record>,
}

impl AnalysisReport {
    pub fn build(records: &[Record], source: &Path, top_n: usize) -> Self {
        AnalysisReport {
            generated_at: Utc::now().to_rfc3339(),
            source: source.display().to_string(),
            record_count: records.len(),
            overall: overall(records),
            by_sex: entries(by_sex(records)),
            by_party_size: entries(by_party_size(records)),
            by_day: entries(by_day(records)),
            by_time_of_day: entries(by_time_of_day(records)),
            correlation: bill_tip_correlation(records).map(|coefficient| CorrelationEntry {
                coefficient,
                strength: Strength::classify(coefficient),
            }),
            top_tips: top_tips(records, top_n),
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write JSON report: {}", path.display()))?;
        Ok(())
    }
}

fn entries<K: std::fmt::Display>(groups: Vec<(K, TipAggregate)>) -> Vec<GroupEntry> {
    groups
        .into_iter()
        .map(|(key, aggregate)| GroupEntry {
            label: key.to_string(),
            aggregate,
        })
        .collect()
}
