//! Full timeline layout.
//!
//! Runs the range, position, progress and overdue calculations over a list
//! of items in one pass and bundles the results for a renderer.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace};

use crate::axis::{AxisColumn, AxisScale, build_axis};
use crate::models::{DateRange, ItemStatus, TimelineItem};
use crate::overdue::is_overdue;
use crate::position::{BarGeometry, bar_geometry, position_percent};
use crate::progress::estimate_progress;
use crate::range::{RangeOptions, compute_date_range_at};

/// Layout values for a single item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemLayout {
    pub id: String,
    pub label: String,
    pub category: String,
    pub assignee: String,
    pub status: ItemStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Horizontal placement of the bar.
    pub bar: BarGeometry,
    /// Elapsed-time completion, 0 to 100.
    pub progress: f64,
    pub overdue: bool,
}

impl ItemLayout {
    fn from_item(item: &TimelineItem, range: &DateRange, today: NaiveDate) -> Self {
        Self {
            id: item.id.clone(),
            label: item.label.clone(),
            category: item.category.clone(),
            assignee: item.assignee.clone(),
            status: item.status,
            start_date: item.start_date,
            end_date: item.end_date,
            bar: bar_geometry(range, item.start_date, item.end_date),
            progress: estimate_progress(item, today),
            overdue: is_overdue(item, today),
        }
    }
}

/// Item counts for a timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimelineSummary {
    pub total: usize,
    pub closed: usize,
    pub open: usize,
    pub overdue: usize,
}

/// Everything a renderer needs to draw a timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    /// Date the layout was computed for.
    pub today: NaiveDate,
    pub range: DateRange,
    pub scale: AxisScale,
    pub axis: Vec<AxisColumn>,
    /// One row per item, in input order.
    pub rows: Vec<ItemLayout>,
    /// Position of `today` when it falls inside the range.
    pub today_marker: Option<f64>,
    pub summary: TimelineSummary,
}

impl TimelineLayout {
    /// Lay out `items` as of `today`.
    pub fn build(items: &[TimelineItem], options: &RangeOptions, today: NaiveDate) -> Self {
        let range = compute_date_range_at(items, options, today);
        let scale = AxisScale::for_span(range.total_days());
        let axis = build_axis(&range, options.week_start);

        let rows: Vec<ItemLayout> = items
            .iter()
            .map(|item| {
                let row = ItemLayout::from_item(item, &range, today);
                trace!("Row {}: {:?}", row.id, row.bar);
                row
            })
            .collect();

        let today_marker = range
            .contains(today)
            .then(|| position_percent(&range, today));

        let closed = rows.iter().filter(|r| r.status.is_terminal()).count();
        let summary = TimelineSummary {
            total: rows.len(),
            closed,
            open: rows.len() - closed,
            overdue: rows.iter().filter(|r| r.overdue).count(),
        };
        debug!(
            "Built layout for {} items: {} overdue, {} axis columns at {} scale",
            summary.total,
            summary.overdue,
            axis.len(),
            scale
        );

        Self {
            today,
            range,
            scale,
            axis,
            rows,
            today_marker,
            summary,
        }
    }

    /// Rows grouped by category, in order of first appearance.
    pub fn by_category(&self) -> Vec<(&str, Vec<&ItemLayout>)> {
        let mut groups: Vec<(&str, Vec<&ItemLayout>)> = Vec::new();

        for row in &self.rows {
            match groups.iter_mut().find(|(name, _)| *name == row.category) {
                Some((_, members)) => members.push(row),
                None => groups.push((row.category.as_str(), vec![row])),
            }
        }

        groups
    }

    /// Rows that are overdue as of the layout date.
    pub fn overdue_rows(&self) -> impl Iterator<Item = &ItemLayout> {
        self.rows.iter().filter(|r| r.overdue)
    }
}
