//! Detailed statistics printout for stdout

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{
    bill_tip_correlation, by_day, by_party_size, by_sex, by_time_of_day, overall, top_tips,
    Record, Strength, TipAggregate,
};

/// Print the full statistics breakdown: overall numbers, one section per
/// grouping dimension, the bill-to-tip correlation, and the top-N tips.
pub fn print_statistics(records: &[Record], top_n: usize) {
    print_overall(records);
    print_dimension("BY SEX", records.len(), by_sex(records), "clients");
    print_dimension(
        "BY PARTY SIZE",
        records.len(),
        by_party_size(records),
        "tables",
    );
    print_dimension("BY DAY OF WEEK", records.len(), by_day(records), "visits");
    print_dimension(
        "BY TIME OF DAY",
        records.len(),
        by_time_of_day(records),
        "visits",
    );
    print_correlation(records);
    print_top_tips(records, top_n);
}

fn section_header(title: &str) {
    println!();
    println!("    {} {}", style("§").cyan(), style(title).white().bold());
    println!("    {}", style("─".repeat(50)).dim());
}

fn fmt_std(std: Option<f64>) -> String {
    match std {
        Some(s) => format!("${:.2}", s),
        None => "n/a".to_string(),
    }
}

fn print_overall(records: &[Record]) {
    section_header("OVERALL STATISTICS");

    let Some(agg) = overall(records) else {
        println!("      {}", style("No records loaded").yellow());
        return;
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Clients analyzed"), Cell::new(agg.count)]);
    table.add_row(vec![
        Cell::new("Average tip"),
        Cell::new(format!("${:.2}", agg.mean)).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Median tip"),
        Cell::new(format!("${:.2}", agg.median)),
    ]);
    table.add_row(vec![
        Cell::new("Standard deviation"),
        Cell::new(fmt_std(agg.std)),
    ]);
    table.add_row(vec![
        Cell::new("Tip range"),
        Cell::new(format!("${:.2} - ${:.2}", agg.min, agg.max)),
    ]);

    indent_table(&table);
}

fn print_dimension<K: std::fmt::Display>(
    title: &str,
    total: usize,
    groups: Vec<(K, TipAggregate)>,
    unit: &str,
) {
    section_header(title);

    if groups.is_empty() {
        println!("      {}", style("Insufficient data").yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new(unit).add_attribute(Attribute::Bold),
        Cell::new("Share").add_attribute(Attribute::Bold),
        Cell::new("Mean").add_attribute(Attribute::Bold),
        Cell::new("Median").add_attribute(Attribute::Bold),
        Cell::new("Std").add_attribute(Attribute::Bold),
        Cell::new("Range").add_attribute(Attribute::Bold),
    ]);

    for (key, agg) in &groups {
        let share = agg.count as f64 / total as f64 * 100.0;
        table.add_row(vec![
            Cell::new(key).add_attribute(Attribute::Bold),
            Cell::new(agg.count),
            Cell::new(format!("{:.1}%", share)),
            Cell::new(format!("${:.2}", agg.mean)).fg(Color::Green),
            Cell::new(format!("${:.2}", agg.median)),
            Cell::new(fmt_std(agg.std)),
            Cell::new(format!("${:.2} - ${:.2}", agg.min, agg.max)),
        ]);
    }

    indent_table(&table);
}

fn print_correlation(records: &[Record]) {
    section_header("CORRELATION: TOTAL BILL vs TIP");

    match bill_tip_correlation(records) {
        Some(corr) => {
            let strength = Strength::classify(corr);
            let styled = match strength {
                Strength::Strong => style(strength.label()).green().bold(),
                Strength::Moderate => style(strength.label()).yellow().bold(),
                Strength::Weak => style(strength.label()).dim(),
            };
            println!(
                "      Coefficient: {}",
                style(format!("{:.3}", corr)).cyan().bold()
            );
            println!("      Correlation is {}", styled);
        }
        None => println!(
            "      {}",
            style("Insufficient data for a correlation estimate").yellow()
        ),
    }
}

fn print_top_tips(records: &[Record], n: usize) {
    section_header(&format!("TOP {} TIPS", n));

    let top = top_tips(records, n);
    if top.is_empty() {
        println!("      {}", style("Insufficient data").yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Tip").add_attribute(Attribute::Bold),
        Cell::new("Bill").add_attribute(Attribute::Bold),
        Cell::new("Sex").add_attribute(Attribute::Bold),
        Cell::new("Party").add_attribute(Attribute::Bold),
        Cell::new("Day").add_attribute(Attribute::Bold),
        Cell::new("Time").add_attribute(Attribute::Bold),
    ]);

    for (rank, record) in top.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(format!("${:.2}", record.tip))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
            Cell::new(format!("${:.2}", record.total_bill)),
            Cell::new(record.sex),
            Cell::new(record.party_size),
            Cell::new(record.day),
            Cell::new(record.time_of_day),
        ]);
    }

    indent_table(&table);
}

fn indent_table(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
