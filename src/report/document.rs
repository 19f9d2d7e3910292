//! Paginated plain-text report document
//!
//! The report is a fixed sequence of pages: an overview page, one density
//! page per grouping dimension, and a closing textual summary. Pages are
//! separated by form feeds so pagers and printers treat them as pages.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::pipeline::{
    by_day, by_party_size, by_sex, overall, tips_grouped, bill_tip_correlation, Record, Strength,
};
use crate::report::density::{render_density_chart, DensitySeries};

const PAGE_WIDTH: usize = 78;

/// Party sizes shown on the party-size density page. Other sizes are rare
/// enough to reduce the chart to noise.
pub const COMMON_PARTY_SIZES: [u32; 3] = [2, 3, 4];

/// One page of the report: a title and pre-rendered body lines.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub body: Vec<String>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: Vec<String>) -> Self {
        Page {
            title: title.into(),
            body,
        }
    }
}

/// An ordered collection of pages rendered to a single text artifact.
#[derive(Debug)]
pub struct ReportDocument {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pages: Vec<Page>,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>) -> Self {
        ReportDocument {
            title: title.into(),
            generated_at: Utc::now(),
            pages: Vec::new(),
        }
    }

    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Render all pages to one string, form-feed separated.
    pub fn render(&self) -> String {
        let total = self.pages.len();
        let mut out = String::new();

        for (idx, page) in self.pages.iter().enumerate() {
            if idx > 0 {
                out.push('\u{000C}');
                out.push('\n');
            }

            let rule = "═".repeat(PAGE_WIDTH);
            out.push_str(&rule);
            out.push('\n');
            out.push_str(&center(&page.title.to_uppercase()));
            out.push('\n');
            out.push_str(&rule);
            out.push_str("\n\n");

            for line in &page.body {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }

            out.push('\n');
            out.push_str(&"─".repeat(PAGE_WIDTH));
            out.push('\n');
            let footer = format!("Page {} of {}", idx + 1, total);
            let width = PAGE_WIDTH.saturating_sub(self.title.len());
            out.push_str(&format!("{}{:>width$}\n", self.title, footer));
        }

        out
    }

    /// Write the rendered document, flushing before the handle is dropped.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.render().as_bytes())
            .with_context(|| format!("Failed to write report file: {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush report file: {}", path.display()))?;
        Ok(())
    }
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= PAGE_WIDTH {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((PAGE_WIDTH - len) / 2), text)
}

/// Assemble the full report for a dataset: overview, three density pages,
/// and the textual summary, in that order.
pub fn build_report(records: &[Record], source: &Path) -> ReportDocument {
    let mut doc = ReportDocument::new("Restaurant Gratuity Analysis");

    doc.push_page(overview_page(records, source, doc.generated_at));
    doc.push_page(sex_density_page(records));
    doc.push_page(party_size_density_page(records));
    doc.push_page(day_density_page(records));
    doc.push_page(summary_page(records));

    doc
}

fn overview_page(records: &[Record], source: &Path, generated_at: DateTime<Utc>) -> Page {
    let mut body = vec![
        "Descriptive analysis of restaurant gratuity records: grouped tip".to_string(),
        "statistics, density charts per grouping dimension, and a closing".to_string(),
        "summary of headline numbers.".to_string(),
        String::new(),
        format!("Source file:  {}", source.display()),
        format!("Generated at: {}", generated_at.to_rfc3339()),
        format!("Records:      {}", records.len()),
        "Columns:      total_bill, tip, sex, party_size, day, time_of_day".to_string(),
    ];

    if !records.is_empty() {
        body.push(String::new());
        body.push("First rows:".to_string());
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["total_bill", "tip", "sex", "party_size", "day", "time"]);
        for record in records.iter().take(5) {
            table.add_row(vec![
                format!("{:.2}", record.total_bill),
                format!("{:.2}", record.tip),
                record.sex.to_string(),
                record.party_size.to_string(),
                record.day.to_string(),
                record.time_of_day.to_string(),
            ]);
        }
        body.extend(table.to_string().lines().map(str::to_string));
    }

    Page::new("Overview", body)
}

fn sex_density_page(records: &[Record]) -> Page {
    let series: Vec<DensitySeries> = tips_grouped(records, |r| r.sex)
        .into_iter()
        .map(|(sex, tips)| DensitySeries::new(sex.label(), tips))
        .collect();

    let mut body = vec![
        "Estimated tip density per sex (Gaussian kernel, Silverman bandwidth).".to_string(),
        String::new(),
    ];
    body.extend(render_density_chart(&series));

    Page::new("Tip Density by Sex", body)
}

fn party_size_density_page(records: &[Record]) -> Page {
    let filtered: Vec<Record> = records
        .iter()
        .filter(|r| COMMON_PARTY_SIZES.contains(&r.party_size))
        .copied()
        .collect();

    let series: Vec<DensitySeries> = tips_grouped(&filtered, |r| r.party_size)
        .into_iter()
        .map(|(size, tips)| DensitySeries::new(format!("{} people", size), tips))
        .collect();

    let mut body = vec![
        "Estimated tip density per party size, restricted to the common".to_string(),
        "table sizes of 2, 3 and 4 people.".to_string(),
        String::new(),
    ];
    body.extend(render_density_chart(&series));

    Page::new("Tip Density by Party Size", body)
}

fn day_density_page(records: &[Record]) -> Page {
    let series: Vec<DensitySeries> = tips_grouped(records, |r| r.day)
        .into_iter()
        .map(|(day, tips)| DensitySeries::new(day.label(), tips))
        .collect();

    let mut body = vec![
        "Estimated tip density per day of the week, in calendar order.".to_string(),
        String::new(),
    ];
    body.extend(render_density_chart(&series));

    Page::new("Tip Density by Day of Week", body)
}

fn summary_page(records: &[Record]) -> Page {
    let mut body = Vec::new();

    let Some(total) = overall(records) else {
        body.push("No records available; nothing to summarize.".to_string());
        return Page::new("Summary", body);
    };

    body.push(format!("Analysis of {} table visits.", total.count));
    body.push(String::new());

    body.push("TIPS BY SEX:".to_string());
    for (sex, agg) in by_sex(records) {
        body.push(format!("  {:<6} average tip ${:.2}", sex, agg.mean));
    }
    body.push(String::new());

    body.push("TIPS BY PARTY SIZE (common table sizes):".to_string());
    let by_size = by_party_size(records);
    for (size, agg) in by_size
        .iter()
        .filter(|(size, _)| COMMON_PARTY_SIZES.contains(size))
    {
        body.push(format!("  {} people: average tip ${:.2}", size, agg.mean));
    }
    body.push(String::new());

    body.push("TIPS BY DAY OF WEEK:".to_string());
    let by_day_stats = by_day(records);
    let best_day = by_day_stats
        .iter()
        .max_by(|(_, a), (_, b)| a.mean.partial_cmp(&b.mean).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(day, _)| *day);
    let busiest_day = by_day_stats
        .iter()
        .max_by_key(|(_, agg)| agg.count)
        .map(|(day, _)| *day);
    for (day, agg) in &by_day_stats {
        let mut note = String::new();
        if Some(*day) == best_day {
            note.push_str("  (highest average)");
        }
        if Some(*day) == busiest_day {
            note.push_str("  (busiest)");
        }
        body.push(format!(
            "  {:<4} average tip ${:.2} over {} visits{}",
            day.label(),
            agg.mean,
            agg.count,
            note
        ));
    }
    body.push(String::new());

    body.push("OVERALL:".to_string());
    body.push(format!(
        "  Average tip ${:.2}, median ${:.2}, range ${:.2} - ${:.2}",
        total.mean, total.median, total.min, total.max
    ));
    match bill_tip_correlation(records) {
        Some(corr) => body.push(format!(
            "  Bill-to-tip correlation {:.3} ({})",
            corr,
            Strength::classify(corr)
        )),
        None => body.push("  Bill-to-tip correlation: insufficient data".to_string()),
    }

    Page::new("Summary", body)
}
