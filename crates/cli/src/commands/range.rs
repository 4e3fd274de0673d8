//! Range command
//!
//! Implements the `stk range` command to print the visible window the
//! timeline would use for the loaded items.

use chrono::NaiveDate;
use clap::Args;
use sitetrack_timeline::{AxisScale, DateRange, TimelineItem, compute_date_range_at};

use super::RangeArgs;

/// Print the computed visible date range
#[derive(Debug, Args)]
pub struct RangeCommand {
    #[command(flatten)]
    pub range: RangeArgs,
}

/// Result of the range command
#[derive(Debug)]
pub struct RangeResult {
    pub range: DateRange,
    pub item_count: usize,
}

impl std::fmt::Display for RangeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days = self.range.total_days();
        writeln!(f, "Start: {}", self.range.start)?;
        writeln!(f, "End:   {}", self.range.end)?;
        write!(
            f,
            "Span:  {} days ({} scale, {} items)",
            days,
            AxisScale::for_span(days),
            self.item_count
        )
    }
}

impl RangeCommand {
    /// Execute the range command.
    pub fn execute(&self, items: &[TimelineItem], today: NaiveDate) -> RangeResult {
        RangeResult {
            range: compute_date_range_at(items, &self.range.options(), today),
            item_count: items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::WeekStart;
    use sitetrack_timeline::ItemStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_for_single_item() {
        let items = vec![TimelineItem::new(
            "A",
            "Pour slab",
            date(2025, 3, 1),
            date(2025, 3, 10),
            ItemStatus::Open,
        )];
        let cmd = RangeCommand {
            range: RangeArgs::default(),
        };
        let result = cmd.execute(&items, date(2025, 1, 1));

        assert_eq!(result.range.start, date(2025, 2, 16));
        assert_eq!(result.range.end, date(2025, 3, 22));
        assert_eq!(
            result.to_string(),
            "Start: 2025-02-16\nEnd:   2025-03-22\nSpan:  34 days (weeks scale, 1 items)"
        );
    }

    #[test]
    fn test_range_monday_weeks() {
        let items = vec![TimelineItem::new(
            "A",
            "Pour slab",
            date(2025, 3, 1),
            date(2025, 3, 10),
            ItemStatus::Open,
        )];
        let cmd = RangeCommand {
            range: RangeArgs {
                padding: 7,
                week_start: WeekStart::Monday,
            },
        };
        let result = cmd.execute(&items, date(2025, 1, 1));
        assert_eq!(result.range.start, date(2025, 2, 17));
    }

    #[test]
    fn test_range_for_no_items_includes_today() {
        let cmd = RangeCommand {
            range: RangeArgs::default(),
        };
        let today = date(2025, 3, 5);
        let result = cmd.execute(&[], today);

        assert!(result.range.contains(today));
        assert_eq!(result.item_count, 0);
    }
}
