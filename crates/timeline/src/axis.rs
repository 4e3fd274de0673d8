//! Header columns for a timeline.
//!
//! Splits the visible range into day, week or month buckets depending on
//! its span. Each column carries a label and its percentage placement, so
//! a renderer can draw grid lines at the same coordinates as the bars.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::DateRange;
use crate::position::position_percent;
use crate::range::{shift_days, start_of_week};

/// Bucket size for header columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    /// One column per day (ranges under 14 days).
    Days,
    /// One column per week (ranges of 14 to 89 days).
    Weeks,
    /// One column per month (ranges of 90 days or more).
    Months,
}

impl AxisScale {
    /// Pick a scale for a range spanning `days`.
    pub fn for_span(days: i64) -> Self {
        if days < 14 {
            AxisScale::Days
        } else if days < 90 {
            AxisScale::Weeks
        } else {
            AxisScale::Months
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AxisScale::Days => "days",
            AxisScale::Weeks => "weeks",
            AxisScale::Months => "months",
        }
    }
}

impl std::fmt::Display for AxisScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single header bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisColumn {
    /// Label to display for this column.
    pub label: String,
    /// First date covered by the column.
    pub start: NaiveDate,
    /// Offset from the range start, in percent.
    pub left: f64,
    /// Column width, in percent.
    pub width: f64,
}

/// Build header columns for `range` at the scale its span calls for.
///
/// Columns are ordered, contiguous and together cover `[0, 100]`. A leading
/// partial week or month is emitted when the range starts mid-bucket, and
/// the last column is clipped to the range end. A range with no positive
/// span has no columns.
pub fn build_axis(range: &DateRange, week_start: Weekday) -> Vec<AxisColumn> {
    let total_days = range.total_days();
    if total_days <= 0 {
        return Vec::new();
    }

    let scale = AxisScale::for_span(total_days);
    let mut columns = Vec::new();
    let mut cursor = range.start;

    while cursor < range.end {
        let next = next_boundary(cursor, scale, week_start, range.end).min(range.end);
        let left = position_percent(range, cursor);
        let right = position_percent(range, next);

        columns.push(AxisColumn {
            label: column_label(cursor, scale),
            start: cursor,
            left,
            width: right - left,
        });

        cursor = next;
    }

    columns
}

/// First date of the bucket after the one containing `date`.
fn next_boundary(
    date: NaiveDate,
    scale: AxisScale,
    week_start: Weekday,
    fallback: NaiveDate,
) -> NaiveDate {
    match scale {
        AxisScale::Days => shift_days(date, 1),
        AxisScale::Weeks => shift_days(start_of_week(date, week_start), 7),
        AxisScale::Months => date
            .with_day(1)
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .unwrap_or(fallback),
    }
}

fn column_label(date: NaiveDate, scale: AxisScale) -> String {
    match scale {
        AxisScale::Days | AxisScale::Weeks => date.format("%m/%d").to_string(),
        AxisScale::Months => date.format("%b %Y").to_string(),
    }
}
