//! Terminal styling utilities for the analysis run output

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ████████╗██╗██████╗ ███████╗████████╗ █████╗ ████████╗
    ╚══██╔══╝██║██╔══██╗██╔════╝╚══██╔══╝██╔══██╗╚══██╔══╝
       ██║   ██║██████╔╝███████╗   ██║   ███████║   ██║
       ██║   ██║██╔═══╝ ╚════██║   ██║   ██╔══██║   ██║
       ██║   ██║██║     ███████║   ██║   ██║  ██║   ██║
       ╚═╝   ╚═╝╚═╝     ╚══════╝   ╚═╝   ╚═╝  ╚═╝   ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("$").magenta().bold(),
        style("Restaurant gratuity analysis").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(input: &Path, report: &Path, json: Option<&Path>, top_n: usize) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:  {:<39}│",
        FOLDER,
        truncate_path(input, 38)
    );
    println!(
        "    │  {} Report: {:<39}│",
        SAVE,
        truncate_path(report, 38)
    );
    println!(
        "    │  {} JSON:   {:<39}│",
        SAVE,
        json.map(|p| truncate_path(p, 38))
            .unwrap_or_else(|| "disabled".to_string())
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Top tips shown:        {:<24}│",
        CHART,
        style(top_n).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the elapsed time of a completed step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("Completed in {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Tipstat analysis complete!").green().bold()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("...{}", &s[s.len() - max_len + 3..])
    }
}
