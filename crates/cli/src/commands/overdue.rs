//! Overdue command
//!
//! Implements the `stk overdue` command to list open items whose end date
//! has already passed.

use chrono::NaiveDate;
use clap::Args;
use sitetrack_timeline::{RangeOptions, TimelineItem, TimelineLayout};

use crate::output::format_rows_table;

/// List items that are past their end date and not closed
#[derive(Debug, Args)]
pub struct OverdueCommand {
    /// Only report the number of overdue items
    #[arg(long)]
    pub count: bool,
}

impl OverdueCommand {
    /// Execute the overdue command.
    pub fn execute(&self, items: &[TimelineItem], today: NaiveDate) -> String {
        let layout = TimelineLayout::build(items, &RangeOptions::default(), today);

        if self.count {
            return layout.summary.overdue.to_string();
        }

        if layout.summary.overdue == 0 {
            return format!("No overdue items as of {}.", today);
        }

        format!(
            "{}\n\n{} of {} items overdue as of {}",
            format_rows_table(layout.overdue_rows()),
            layout.summary.overdue,
            layout.summary.total,
            today
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitetrack_timeline::ItemStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn items() -> Vec<TimelineItem> {
        vec![
            TimelineItem::new(
                "RFI-1",
                "Late one",
                date(2025, 1, 1),
                date(2025, 1, 5),
                ItemStatus::Pending,
            ),
            TimelineItem::new(
                "RFI-2",
                "Closed late",
                date(2025, 1, 1),
                date(2025, 1, 5),
                ItemStatus::Closed,
            ),
            TimelineItem::new(
                "RFI-3",
                "Still in time",
                date(2025, 1, 1),
                date(2025, 3, 1),
                ItemStatus::Open,
            ),
        ]
    }

    #[test]
    fn test_overdue_lists_only_open_past_due_items() {
        let cmd = OverdueCommand { count: false };
        let output = cmd.execute(&items(), date(2025, 2, 1));

        assert!(output.contains("RFI-1"));
        assert!(!output.contains("RFI-2"));
        assert!(!output.contains("RFI-3"));
        assert!(output.ends_with("1 of 3 items overdue as of 2025-02-01"));
    }

    #[test]
    fn test_overdue_count() {
        let cmd = OverdueCommand { count: true };
        assert_eq!(cmd.execute(&items(), date(2025, 2, 1)), "1");
        assert_eq!(cmd.execute(&items(), date(2025, 6, 1)), "2");
    }

    #[test]
    fn test_overdue_none() {
        let cmd = OverdueCommand { count: false };
        assert_eq!(
            cmd.execute(&items(), date(2025, 1, 3)),
            "No overdue items as of 2025-01-03."
        );
    }
}
