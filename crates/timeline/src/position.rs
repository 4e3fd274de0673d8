//! Mapping dates onto percentage offsets within a [`DateRange`].
//!
//! All day counts are whole-day differences; time of day never matters.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::DateRange;

/// Smallest width a bar is given, so zero-length items stay visible.
pub const MIN_WIDTH_PERCENT: f64 = 1.0;

/// Percentage position of `date` within `range`, clamped to `[0, 100]`.
///
/// A range with no positive span maps every date to 0.
pub fn position_percent(range: &DateRange, date: NaiveDate) -> f64 {
    let total_days = range.total_days();
    if total_days <= 0 {
        return 0.0;
    }

    let days_from_start = (date - range.start).num_days();
    (days_from_start as f64 / total_days as f64 * 100.0).clamp(0.0, 100.0)
}

/// Percentage width of the interval `[start, end]` within `range`.
///
/// Never below [`MIN_WIDTH_PERCENT`] (so reversed and zero-length intervals
/// still get a sliver) and never above 100.
pub fn width_percent(range: &DateRange, start: NaiveDate, end: NaiveDate) -> f64 {
    let total_days = range.total_days();
    if total_days <= 0 {
        return MIN_WIDTH_PERCENT;
    }

    let duration_days = (end - start).num_days();
    (duration_days as f64 / total_days as f64 * 100.0).clamp(MIN_WIDTH_PERCENT, 100.0)
}

/// Horizontal placement of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarGeometry {
    /// Offset from the range start, in percent.
    pub left: f64,
    /// Bar length, in percent.
    pub width: f64,
}

impl BarGeometry {
    /// Right edge of the bar, in percent.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Place a bar for `[start, end]` in `range`.
///
/// The bar always ends at or before 100%: when the width floor would push
/// it past the right edge, the bar is shifted left instead of shrunk.
pub fn bar_geometry(range: &DateRange, start: NaiveDate, end: NaiveDate) -> BarGeometry {
    let width = width_percent(range, start, end);
    let left = position_percent(range, start).min(100.0 - width).max(0.0);
    BarGeometry { left, width }
}
