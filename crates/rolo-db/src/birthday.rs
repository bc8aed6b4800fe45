//! Month-day windows for recurring-birthday lookups.
//!
//! A birthday matches on month and day only; the birth year never takes
//! part. Month-days are compared as zero-padded `"MM-DD"` strings, which
//! order the same way as the calendar within a single year.

use chrono::{Datelike, Days, NaiveDate};

/// An inclusive range of month-days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayWindow {
    /// `start <= mmdd <= end`, both within one calendar year.
    Range { start: String, end: String },
    /// Crosses Dec 31 into Jan 1: `mmdd >= start OR mmdd <= end`.
    Wrapped { start: String, end: String },
}

impl BirthdayWindow {
    /// Window covering `today` through `today + count_of_days`.
    ///
    /// A window long enough to reach today's month-day again collapses to
    /// the whole year.
    #[must_use]
    pub fn starting(today: NaiveDate, count_of_days: u32) -> Self {
        let Some(end) = today.checked_add_days(Days::new(u64::from(count_of_days))) else {
            return Self::whole_year();
        };

        let start_md = month_day(today);
        let end_md = month_day(end);

        match end.year() - today.year() {
            0 => Self::Range {
                start: start_md,
                end: end_md,
            },
            1 if end_md < start_md => Self::Wrapped {
                start: start_md,
                end: end_md,
            },
            _ => Self::whole_year(),
        }
    }

    fn whole_year() -> Self {
        Self::Range {
            start: String::from("01-01"),
            end: String::from("12-31"),
        }
    }

    /// SQL predicate over `expr` with two positional placeholders starting
    /// at `first_param`, plus the values to bind to them, in order.
    #[must_use]
    pub fn predicate(&self, expr: &str, first_param: usize) -> (String, [&str; 2]) {
        let lo = first_param;
        let hi = first_param + 1;
        match self {
            Self::Range { start, end } => (
                format!("{expr} BETWEEN ?{lo} AND ?{hi}"),
                [start.as_str(), end.as_str()],
            ),
            Self::Wrapped { start, end } => (
                format!("({expr} >= ?{lo} OR {expr} <= ?{hi})"),
                [start.as_str(), end.as_str()],
            ),
        }
    }

    /// Whether a date's month-day falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        let md = month_day(date);
        match self {
            Self::Range { start, end } => *start <= md && md <= *end,
            Self::Wrapped { start, end } => md >= *start || md <= *end,
        }
    }
}

/// `"MM-DD"` for a date.
#[must_use]
pub fn month_day(date: NaiveDate) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}
