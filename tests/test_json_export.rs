//! Tests for the JSON summary export

use std::path::Path;
use tempfile::TempDir;

use tipstat::report::AnalysisReport;

#[path = "common/mod.rs"]
mod common;

use common::{sample_records, two_record_dataset};

#[test]
fn report_carries_all_sections() {
    let records = sample_records();

    let report = AnalysisReport::build(&records, Path::new("tips.csv"), 5);

    assert_eq!(report.record_count, 12);
    assert_eq!(report.by_sex.len(), 2);
    assert_eq!(report.by_time_of_day.len(), 2);
    assert_eq!(report.top_tips.len(), 5);
    assert!(report.overall.is_some());
    assert!(report.correlation.is_some());
}

#[test]
fn group_entries_use_display_labels() {
    let report = AnalysisReport::build(&two_record_dataset(), Path::new("tips.csv"), 5);

    let labels: Vec<&str> = report.by_sex.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Man", "Woman"]);

    let days: Vec<&str> = report.by_day.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(days, vec!["Sun", "Sat"]);
}

#[test]
fn empty_dataset_serializes_without_panicking() {
    let report = AnalysisReport::build(&[], Path::new("empty.csv"), 5);

    assert_eq!(report.record_count, 0);
    assert!(report.overall.is_none());
    assert!(report.correlation.is_none());
    assert!(report.top_tips.is_empty());

    let json = serde_json::to_string(&report).unwrap();
    assert!(!json.contains("\"overall\""));
}

#[test]
fn write_to_emits_valid_json() {
    let records = sample_records();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary.json");

    AnalysisReport::build(&records, Path::new("tips.csv"), 3)
        .write_to(&path)
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["record_count"], 12);
    assert_eq!(value["top_tips"].as_array().unwrap().len(), 3);
    assert_eq!(value["overall"]["count"], 12);
}
