//! Pearson correlation between the bill total and the tip

use serde::Serialize;
use std::fmt;

use crate::pipeline::records::Record;

/// Display band for a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

impl Strength {
    pub fn classify(coefficient: f64) -> Self {
        if coefficient > 0.7 {
            Strength::Strong
        } else if coefficient > 0.3 {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::Strong => "STRONG positive",
            Strength::Moderate => "MODERATE positive",
            Strength::Weak => "WEAK",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pearson correlation between `total_bill` and `tip` over the full dataset.
///
/// Returns `None` for degenerate input (fewer than two records, or zero
/// variance in either column).
pub fn bill_tip_correlation(records: &[Record]) -> Option<f64> {
    pearson(records.iter().map(|r| (r.total_bill, r.tip)))
}

/// Single-pass Welford formulation for numerical stability.
fn pearson(pairs: impl Iterator<Item = (f64, f64)>) -> Option<f64> {
    let mut n = 0.0f64;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in pairs {
        n += 1.0;
        let dx = x - mean_x;
        let dy = y - mean_y;
        mean_x += dx / n;
        mean_y += dy / n;
        var_x += dx * (x - mean_x);
        var_y += dy * (y - mean_y);
        cov_xy += dx * (y - mean_y);
    }

    if n < 2.0 {
        return None;
    }

    let std_x = (var_x / n).sqrt();
    let std_y = (var_y / n).sqrt();
    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    Some(cov_xy / (n * std_x * std_y))
}
