//! Show command for rendering the timeline
//!
//! Implements the `stk show` command: lays out the items and prints them as
//! a table, a text Gantt chart, or the full layout as JSON.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use sitetrack_timeline::{TimelineItem, TimelineLayout};
use tracing::debug;

use super::RangeArgs;
use crate::error::{CliError, CliResult};
use crate::output::{format_layout_table, render_chart};

/// Output format for `stk show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Chart,
    Json,
}

/// Show the timeline layout
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Width of the chart bar area in columns
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Only include items in this category (case-insensitive)
    #[arg(short, long)]
    pub category: Option<String>,
}

impl ShowCommand {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Serialize` if JSON output fails.
    pub fn execute(&self, items: &[TimelineItem], today: NaiveDate) -> CliResult<String> {
        let selected: Vec<TimelineItem> = match &self.category {
            Some(category) => items
                .iter()
                .filter(|item| item.category.eq_ignore_ascii_case(category))
                .cloned()
                .collect(),
            None => items.to_vec(),
        };
        debug!(
            "Showing {} of {} items as {:?}",
            selected.len(),
            items.len(),
            self.format
        );

        let layout = TimelineLayout::build(&selected, &self.range.options(), today);

        match self.format {
            OutputFormat::Table => Ok(format_layout_table(&layout)),
            OutputFormat::Chart => Ok(render_chart(&layout, self.width)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&layout).map_err(CliError::Serialize)
            }
        }
    }
}
