//! Tipstat: Restaurant Gratuity Analysis CLI
//!
//! A command-line tool that loads a gratuity dataset, renders a paginated
//! analysis report, and prints detailed grouped statistics.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::Cli;
use pipeline::load_records;
use report::{build_report, print_statistics, AnalysisReport};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = cli.input.clone();
    let report_path = cli.report_path();
    let json_path = cli.json_path();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        &input,
        &report_path,
        (!cli.skip_json).then_some(json_path.as_path()),
        cli.top_n,
    );

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading gratuity records...");
    let records = load_records(&input)?;
    finish_with_success(&spinner, "Dataset loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Records: {}", records.len());
    println!("      Columns: {}", pipeline::REQUIRED_COLUMNS.join(", "));
    print_step_time(step_start.elapsed());

    if records.is_empty() {
        print_info("The dataset is empty; the report will note the missing data");
    }

    // Step 2: Render the paginated report
    print_step_header(2, "Render Analysis Report");

    let step_start = Instant::now();
    let spinner = create_spinner("Rendering report pages...");
    let document = build_report(&records, &input);
    document.write_to(&report_path)?;
    finish_with_success(
        &spinner,
        &format!(
            "Wrote {} pages to {}",
            document.page_count(),
            report_path.display()
        ),
    );
    print_step_time(step_start.elapsed());

    // Step 3: Detailed statistics on stdout
    print_step_header(3, "Detailed Statistics");
    let step_start = Instant::now();
    print_statistics(&records, cli.top_n);
    print_step_time(step_start.elapsed());

    // Step 4: Machine-readable summary
    if !cli.skip_json {
        print_step_header(4, "Export JSON Summary");

        let step_start = Instant::now();
        let analysis = AnalysisReport::build(&records, &input, cli.top_n);
        analysis.write_to(&json_path)?;
        print_success(&format!("Saved to {}", json_path.display()));
        print_step_time(step_start.elapsed());
    }

    print_completion();

    Ok(())
}
