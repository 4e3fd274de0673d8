//! CLI commands for SiteTrack
//!
//! This module contains all subcommand implementations for the stk CLI.

pub mod overdue;
pub mod range;
pub mod show;

pub use overdue::OverdueCommand;
pub use range::RangeCommand;
pub use show::{OutputFormat, ShowCommand};

use chrono::{NaiveDate, Weekday};
use clap::{Args, Subcommand, ValueEnum};
use sitetrack_timeline::{DEFAULT_PADDING_DAYS, RangeOptions, TimelineItem};

use crate::error::CliResult;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the timeline as a table, chart or JSON
    Show(ShowCommand),
    /// List items past their end date that are not closed
    Overdue(OverdueCommand),
    /// Print the visible date range for the items
    Range(RangeCommand),
}

impl Command {
    /// Execute the command against the loaded items.
    ///
    /// # Arguments
    ///
    /// * `items` - Items loaded from the items file
    /// * `today` - Date used for progress, overdue checks and the today marker
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the output cannot be produced.
    pub fn execute(&self, items: &[TimelineItem], today: NaiveDate) -> CliResult<String> {
        match self {
            Command::Show(cmd) => cmd.execute(items, today),
            Command::Overdue(cmd) => Ok(cmd.execute(items, today)),
            Command::Range(cmd) => Ok(cmd.execute(items, today).to_string()),
        }
    }
}

/// First day of the week for axis snapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(week_start: WeekStart) -> Self {
        match week_start {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// Options controlling the visible range, shared by several commands
#[derive(Debug, Clone, Args)]
pub struct RangeArgs {
    /// Days of padding before the first and after the last item date (capped at 36525)
    #[arg(long, default_value_t = DEFAULT_PADDING_DAYS)]
    pub padding: i64,

    /// First day of the week used to snap the range
    #[arg(long, value_enum, default_value_t = WeekStart::Sunday)]
    pub week_start: WeekStart,
}

impl Default for RangeArgs {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING_DAYS,
            week_start: WeekStart::Sunday,
        }
    }
}

impl RangeArgs {
    pub fn options(&self) -> RangeOptions {
        RangeOptions::default()
            .with_padding(self.padding)
            .with_week_start(self.week_start.into())
    }
}
