//! Dataset loader: CSV file into typed records

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::pipeline::records::{Day, ParseError, Record, Sex, TimeOfDay};

/// Columns the input file must provide, by exact header name.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "total_bill",
    "tip",
    "sex",
    "party_size",
    "day",
    "time_of_day",
];

/// Load a gratuity dataset from a CSV file.
///
/// Fails if the file is missing, a required column is absent, or any row
/// cannot be coerced into a [`Record`]. There is no partial-success mode.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        bail!("Input file not found: {}", path.display());
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;

    records_from_frame(&df).with_context(|| format!("Malformed data in {}", path.display()))
}

/// Coerce a loaded frame into records. Split out from [`load_records`] so
/// column-level failures are testable without touching the filesystem.
pub fn records_from_frame(df: &DataFrame) -> Result<Vec<Record>> {
    for name in REQUIRED_COLUMNS {
        if df.column(name).is_err() {
            return Err(ParseError::MissingColumn(name.to_string()).into());
        }
    }

    // Numeric columns are cast non-strictly; a cell that fails the cast
    // surfaces as a null and is rejected per-row below.
    let total_bill = df.column("total_bill")?.cast(&DataType::Float64)?;
    let total_bill = total_bill.f64()?;
    let tip = df.column("tip")?.cast(&DataType::Float64)?;
    let tip = tip.f64()?;
    let party_size = df.column("party_size")?.cast(&DataType::Int64)?;
    let party_size = party_size.i64()?;
    let sex = df.column("sex")?.cast(&DataType::String)?;
    let sex = sex.str()?;
    let day = df.column("day")?.cast(&DataType::String)?;
    let day = day.str()?;
    let time_of_day = df.column("time_of_day")?.cast(&DataType::String)?;
    let time_of_day = time_of_day.str()?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        records.push(Record {
            total_bill: total_bill.get(row).ok_or(ParseError::BadCell {
                row,
                column: "total_bill",
            })?,
            tip: tip.get(row).ok_or(ParseError::BadCell { row, column: "tip" })?,
            sex: parse_label(sex.get(row), row, "sex", Sex::from_label)?,
            party_size: party_size
                .get(row)
                .filter(|n| *n > 0)
                .map(|n| n as u32)
                .ok_or(ParseError::BadCell {
                    row,
                    column: "party_size",
                })?,
            day: parse_label(day.get(row), row, "day", Day::from_label)?,
            time_of_day: parse_label(
                time_of_day.get(row),
                row,
                "time_of_day",
                TimeOfDay::from_label,
            )?,
        });
    }

    Ok(records)
}

fn parse_label<T>(
    cell: Option<&str>,
    row: usize,
    column: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ParseError> {
    let label = cell.ok_or(ParseError::BadCell { row, column })?;
    parse(label).ok_or_else(|| ParseError::UnknownLabel {
        row,
        column,
        label: label.to_string(),
    })
}
