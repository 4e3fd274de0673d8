//! Data models for the timeline engine
//!
//! Defines the schedule item supplied by callers, its lifecycle status,
//! and the derived visible date range.

use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

use crate::error::{TimelineError, TimelineResult};

/// Date format accepted for item start/end dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Item lifecycle status
///
/// `Closed` is the single terminal value; every other status counts as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemStatus {
    #[serde(rename = "Open")]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "Closed")]
    Closed,
}

impl ItemStatus {
    /// Returns the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Open => "Open",
            ItemStatus::InProgress => "In Progress",
            ItemStatus::Pending => "Pending",
            ItemStatus::OnHold => "On Hold",
            ItemStatus::Closed => "Closed",
        }
    }

    /// Whether this is the terminal (closed/completed) status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ItemStatus::Closed)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = TimelineError;

    /// Parse a status label, ignoring case and treating spaces, `_` and `-`
    /// as the same separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "open" => Ok(ItemStatus::Open),
            "inprogress" => Ok(ItemStatus::InProgress),
            "pending" => Ok(ItemStatus::Pending),
            "onhold" => Ok(ItemStatus::OnHold),
            "closed" | "done" | "completed" | "complete" => Ok(ItemStatus::Closed),
            _ => Err(TimelineError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Parse a `YYYY-MM-DD` date, naming the field in the error.
pub fn parse_date(field: &'static str, value: &str) -> TimelineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        TimelineError::InvalidDate {
            field,
            value: value.to_string(),
            source,
        }
    })
}

/// A dated schedule item (RFI, submittal, activity, ...)
///
/// `end_date >= start_date` is expected but not checked; the engine stays
/// total over reversed intervals. Items are built by callers, not read
/// straight from text; see [`parse_date`] and [`ItemStatus::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineItem {
    /// Opaque unique identifier
    pub id: String,

    /// Display text
    pub label: String,

    /// Grouping tag
    pub category: String,

    /// Identified/opening date
    pub start_date: NaiveDate,

    /// Due/closing date
    pub end_date: NaiveDate,

    /// Lifecycle status
    pub status: ItemStatus,

    /// Responsible party
    pub assignee: String,
}

impl TimelineItem {
    /// Create an item with empty category and assignee.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: ItemStatus,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: String::new(),
            start_date,
            end_date,
            status,
            assignee: String::new(),
        }
    }

    /// Set the category tag
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    /// Whole days from start to end. Negative for reversed intervals.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// The visible window shared by every bar on a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// First visible date
    pub start: NaiveDate,
    /// Last visible date
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whole days between start and end.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether `date` lies within `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
