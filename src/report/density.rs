//! Kernel density estimation and text rendering of tip distributions
//!
//! Charts are drawn with Unicode block characters so the report stays a
//! plain-text artifact; every series in a chart shares one x-axis and one
//! density scale, which keeps curve heights comparable across groups.

use std::f64::consts::PI;

/// Grid resolution of a rendered density curve, in characters.
pub const CHART_WIDTH: usize = 60;

const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One named group of tip values to draw as a density curve.
#[derive(Debug, Clone)]
pub struct DensitySeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl DensitySeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        DensitySeries {
            label: label.into(),
            values,
        }
    }
}

/// Silverman's rule-of-thumb bandwidth for a Gaussian kernel.
///
/// Falls back to 1.0 when the data has no spread, which keeps degenerate
/// groups drawable instead of collapsing the kernel to a spike.
pub fn silverman_bandwidth(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 1.0;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1) as f64;
    let std = variance.sqrt();

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let iqr = quantile(&sorted, 0.75) - quantile(&sorted, 0.25);

    let spread = if iqr > 0.0 {
        std.min(iqr / 1.34)
    } else {
        std
    };

    let h = 0.9 * spread * (n as f64).powf(-0.2);
    if h.is_finite() && h > 0.0 {
        h
    } else {
        1.0
    }
}

/// Gaussian kernel density estimate evaluated at each grid point.
pub fn gaussian_kde(values: &[f64], grid: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return vec![0.0; grid.len()];
    }

    let h = silverman_bandwidth(values);
    let norm = 1.0 / (n as f64 * h * (2.0 * PI).sqrt());

    grid.iter()
        .map(|x| {
            values
                .iter()
                .map(|v| {
                    let z = (x - v) / h;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm
        })
        .collect()
}

/// Render overlaid density curves for the given series as text lines.
///
/// Produces one sparkline row per series plus a shared x-axis. Series with
/// no values are skipped.
pub fn render_density_chart(series: &[DensitySeries]) -> Vec<String> {
    let drawable: Vec<&DensitySeries> = series.iter().filter(|s| !s.values.is_empty()).collect();
    if drawable.is_empty() {
        return vec!["(no data to plot)".to_string()];
    }

    let all: Vec<f64> = drawable.iter().flat_map(|s| s.values.iter().copied()).collect();
    let lo = all.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = all.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = 2.0 * silverman_bandwidth(&all);
    let (x_min, x_max) = if hi > lo {
        (lo - pad, hi + pad)
    } else {
        (lo - 1.0, hi + 1.0)
    };

    let grid: Vec<f64> = (0..CHART_WIDTH)
        .map(|i| x_min + (x_max - x_min) * i as f64 / (CHART_WIDTH - 1) as f64)
        .collect();

    let curves: Vec<(&DensitySeries, Vec<f64>)> = drawable
        .iter()
        .map(|s| (*s, gaussian_kde(&s.values, &grid)))
        .collect();

    let peak_density = curves
        .iter()
        .flat_map(|(_, d)| d.iter().copied())
        .fold(0.0f64, f64::max);
    if peak_density <= 0.0 {
        return vec!["(no data to plot)".to_string()];
    }

    let label_width = drawable.iter().map(|s| s.label.len()).max().unwrap_or(0);
    let mut lines = Vec::new();

    for (s, densities) in &curves {
        let spark: String = densities
            .iter()
            .map(|d| {
                let level = (d / peak_density * (BLOCKS.len() - 1) as f64).round() as usize;
                BLOCKS[level.min(BLOCKS.len() - 1)]
            })
            .collect();

        let peak_idx = densities
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap_or(0);

        lines.push(format!(
            "{:<label_width$} ({:>3})  {}  peak ≈ ${:.2}",
            s.label,
            s.values.len(),
            spark,
            grid[peak_idx],
        ));
    }

    let margin = " ".repeat(label_width + 8);
    lines.push(format!("{}└{}┘", margin, "─".repeat(CHART_WIDTH - 2)));

    let left = format!("${:.2}", x_min);
    let right = format!("${:.2}", x_max);
    let gap = CHART_WIDTH.saturating_sub(left.len() + right.len());
    lines.push(format!("{}{}{}{}", margin, left, " ".repeat(gap), right));

    lines
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let frac = pos - lower as f64;
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}
