//! Visible range calculation.
//!
//! The range covers every item's start and end date, padded outward by a
//! fixed number of days and snapped outward to whole calendar weeks.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::{debug, trace, warn};

use crate::models::{DateRange, TimelineItem};

/// Calendar days added on each side of the item span.
pub const DEFAULT_PADDING_DAYS: i64 = 7;

/// Days ahead of today covered by the range of an empty timeline.
pub const EMPTY_RANGE_DAYS: i64 = 30;

/// Largest padding honoured on each side, roughly a century.
pub const MAX_PADDING_DAYS: i64 = 36_525;

/// Options for [`compute_date_range_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOptions {
    /// Days of padding on each side. Negative values count as 0 and values
    /// above [`MAX_PADDING_DAYS`] are capped.
    pub padding_days: i64,
    /// First day of the calendar week used for snapping.
    pub week_start: Weekday,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            padding_days: DEFAULT_PADDING_DAYS,
            week_start: Weekday::Sun,
        }
    }
}

impl RangeOptions {
    pub fn with_padding(mut self, padding_days: i64) -> Self {
        self.padding_days = padding_days;
        self
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }
}

/// Move `date` by `days`, saturating at [`NaiveDate::MIN`] and [`NaiveDate::MAX`].
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

fn days_into_week(date: NaiveDate, week_start: Weekday) -> i64 {
    let offset =
        (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    offset as i64
}

/// First day of the week containing `date`, or [`NaiveDate::MIN`] when that
/// week starts before the calendar does.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    shift_days(date, -days_into_week(date, week_start))
}

/// Last day of the week containing `date`, or [`NaiveDate::MAX`] when that
/// week ends after the calendar does.
pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    shift_days(date, 6 - days_into_week(date, week_start))
}

/// Compute the visible range for `items` using today's local date for the
/// empty case and Sunday-start weeks.
pub fn compute_date_range(items: &[TimelineItem], padding_days: i64) -> DateRange {
    let options = RangeOptions::default().with_padding(padding_days);
    compute_date_range_at(items, &options, crate::today())
}

/// Compute the visible range for `items`.
///
/// An empty list yields today's week through [`EMPTY_RANGE_DAYS`] days
/// ahead, so there is always something to draw. Items with reversed dates
/// contribute both dates as points; nothing is validated.
pub fn compute_date_range_at(
    items: &[TimelineItem],
    options: &RangeOptions,
    today: NaiveDate,
) -> DateRange {
    let week_start = options.week_start;

    let dates = items
        .iter()
        .flat_map(|item| [item.start_date, item.end_date]);
    let (Some(min_date), Some(max_date)) = (dates.clone().min(), dates.max()) else {
        let range = DateRange::new(
            start_of_week(today, week_start),
            end_of_week(shift_days(today, EMPTY_RANGE_DAYS), week_start),
        );
        debug!("No items, using default range {} .. {}", range.start, range.end);
        return range;
    };

    if options.padding_days > MAX_PADDING_DAYS {
        warn!(
            "Padding of {} days capped at {}",
            options.padding_days, MAX_PADDING_DAYS
        );
    }
    let padding = options.padding_days.clamp(0, MAX_PADDING_DAYS);
    trace!("Item span {} .. {}, padding {} days", min_date, max_date, padding);

    let range = DateRange::new(
        start_of_week(shift_days(min_date, -padding), week_start),
        end_of_week(shift_days(max_date, padding), week_start),
    );
    debug!(
        "Computed range {} .. {} ({} days) for {} items",
        range.start,
        range.end,
        range.total_days(),
        items.len()
    );
    range
}
