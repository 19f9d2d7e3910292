//! Record model: one billed table visit with its categorical context

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised while coercing raw table cells into typed records
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' is empty or has the wrong type")]
    BadCell { row: usize, column: &'static str },

    #[error("row {row}: unrecognized {column} label '{label}'")]
    UnknownLabel {
        row: usize,
        column: &'static str,
        label: String,
    },
}

/// Sex of the bill payer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Sex {
    Man,
    Woman,
}

impl Sex {
    /// Parse a label defensively: accepts English and the Portuguese labels
    /// used by the source dataset, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "man" | "male" | "homem" => Some(Sex::Man),
            "woman" | "female" | "mulher" => Some(Sex::Woman),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Man => "Man",
            Sex::Woman => "Woman",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day of the week. Variant order is the canonical reporting order, so the
/// derived `Ord` drives group iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Day {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    /// Parse a label defensively: English abbreviations and full names
    /// (including the common "Thur" spelling) plus the Portuguese labels
    /// used by the source dataset.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "sun" | "sunday" | "dom" | "domingo" => Some(Day::Sun),
            "mon" | "monday" | "seg" | "segunda" => Some(Day::Mon),
            "tue" | "tues" | "tuesday" | "ter" | "terca" | "terça" => Some(Day::Tue),
            "wed" | "wednesday" | "qua" | "quarta" => Some(Day::Wed),
            "thu" | "thur" | "thurs" | "thursday" | "qui" | "quinta" => Some(Day::Thu),
            "fri" | "friday" | "sex" | "sexta" => Some(Day::Fri),
            "sat" | "saturday" | "sab" | "sabado" | "sábado" => Some(Day::Sat),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Day::Sun => "Sun",
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
        }
    }

}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Meal service period
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TimeOfDay {
    Lunch,
    Dinner,
}

impl TimeOfDay {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "lunch" | "almoco" | "almoço" => Some(TimeOfDay::Lunch),
            "dinner" | "jantar" => Some(TimeOfDay::Dinner),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Lunch => "Lunch",
            TimeOfDay::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One table-visit observation. Immutable once loaded; the dataset is
/// read-only for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Record {
    pub total_bill: f64,
    pub tip: f64,
    pub sex: Sex,
    pub party_size: u32,
    pub day: Day,
    pub time_of_day: TimeOfDay,
}
