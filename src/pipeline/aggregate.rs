//! Grouped descriptive statistics over the tip column

use serde::Serialize;
use std::collections::BTreeMap;

use crate::pipeline::records::{Day, Record, Sex, TimeOfDay};

/// Descriptive statistics of `tip` within one group.
///
/// `std` is the sample standard deviation (n-1 denominator) and is `None`
/// for singleton groups, where it is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipAggregate {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
}

impl TipAggregate {
    /// Compute the aggregate over a slice of tip values.
    ///
    /// Returns `None` for an empty slice: a degenerate group is an
    /// "insufficient data" result, never a division by zero.
    pub fn from_tips(tips: &[f64]) -> Option<Self> {
        if tips.is_empty() {
            return None;
        }

        let count = tips.len();
        let sum: f64 = tips.iter().sum();
        let mean = sum / count as f64;

        let mut sorted = tips.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = if count % 2 == 1 {
            sorted[count / 2]
        } else {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        };

        let std = if count > 1 {
            let sq_dev: f64 = tips.iter().map(|t| (t - mean) * (t - mean)).sum();
            Some((sq_dev / (count - 1) as f64).sqrt())
        } else {
            None
        };

        Some(TipAggregate {
            count,
            mean,
            median,
            std,
            min: sorted[0],
            max: sorted[count - 1],
        })
    }
}

/// Collect tip values per group key, in the key's canonical order.
///
/// Only keys actually present in the data appear; groups are therefore
/// never empty.
pub fn tips_grouped<K, F>(records: &[Record], key: F) -> Vec<(K, Vec<f64>)>
where
    K: Ord + Copy,
    F: Fn(&Record) -> K,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record.tip);
    }
    groups.into_iter().collect()
}

fn aggregate_by<K, F>(records: &[Record], key: F) -> Vec<(K, TipAggregate)>
where
    K: Ord + Copy,
    F: Fn(&Record) -> K,
{
    tips_grouped(records, key)
        .into_iter()
        .filter_map(|(k, tips)| TipAggregate::from_tips(&tips).map(|agg| (k, agg)))
        .collect()
}

/// Aggregate over the whole dataset.
pub fn overall(records: &[Record]) -> Option<TipAggregate> {
    let tips: Vec<f64> = records.iter().map(|r| r.tip).collect();
    TipAggregate::from_tips(&tips)
}

pub fn by_sex(records: &[Record]) -> Vec<(Sex, TipAggregate)> {
    aggregate_by(records, |r| r.sex)
}

/// Grouped by party size, ascending.
pub fn by_party_size(records: &[Record]) -> Vec<(u32, TipAggregate)> {
    aggregate_by(records, |r| r.party_size)
}

/// Grouped by day in canonical week order (Sun..Sat), filtered to days
/// present in the data.
pub fn by_day(records: &[Record]) -> Vec<(Day, TipAggregate)> {
    aggregate_by(records, |r| r.day)
}

pub fn by_time_of_day(records: &[Record]) -> Vec<(TimeOfDay, TipAggregate)> {
    aggregate_by(records, |r| r.time_of_day)
}

/// The `min(n, len)` records with the largest tips, descending.
///
/// The sort is stable, so records tied on tip keep their original order.
pub fn top_tips(records: &[Record], n: usize) -> Vec<Record> {
    let mut ranked: Vec<Record> = records.to_vec();
    ranked.sort_by(|a, b| b.tip.partial_cmp(&a.tip).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(n);
    ranked
}
