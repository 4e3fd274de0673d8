use chrono::NaiveDate;

use crate::models::TimelineItem;

/// An item is overdue when it is still open and its end date is before `now`.
///
/// Closed items are never overdue.
pub fn is_overdue(item: &TimelineItem, now: NaiveDate) -> bool {
    !item.status.is_terminal() && item.end_date < now
}
