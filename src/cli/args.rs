//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Tipstat - Analyze restaurant gratuity records: grouped statistics,
/// density charts, and a paginated text report
#[derive(Parser, Debug)]
#[command(name = "tipstat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file with columns: total_bill, tip, sex, party_size, day, time_of_day
    #[arg(short, long, default_value = "tips.csv")]
    pub input: PathBuf,

    /// Report output path.
    /// Defaults to the input directory with an '_analysis_report.txt' suffix
    /// (e.g. tips.csv → tips_analysis_report.txt).
    #[arg(short = 'o', long)]
    pub report: Option<PathBuf>,

    /// Number of top tips to include in the ranking
    #[arg(long, default_value = "5")]
    pub top_n: usize,

    /// Skip writing the machine-readable JSON summary
    #[arg(long, default_value = "false")]
    pub skip_json: bool,
}

impl Cli {
    /// Report path, derived from the input file when not explicitly provided.
    pub fn report_path(&self) -> PathBuf {
        self.report.clone().unwrap_or_else(|| {
            derive_sibling(&self.input, "_analysis_report.txt")
        })
    }

    /// JSON summary path, always derived from the input file.
    pub fn json_path(&self) -> PathBuf {
        derive_sibling(&self.input, "_summary.json")
    }
}

fn derive_sibling(input: &std::path::Path, suffix: &str) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("tips");
    parent.join(format!("{}{}", stem, suffix))
}
