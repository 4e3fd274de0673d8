//! Elapsed-time progress estimate.
//!
//! There is no reported completion percentage on an item, so progress is
//! the share of the item's duration that has passed by `now`. Closed items
//! are always complete.

use chrono::NaiveDate;

use crate::models::TimelineItem;

/// Estimated completion of `item` at `now`, in `[0, 100]`.
///
/// Items whose end does not fall after their start have nothing to elapse
/// and report 0 unless they are closed.
pub fn estimate_progress(item: &TimelineItem, now: NaiveDate) -> f64 {
    if item.status.is_terminal() {
        return 100.0;
    }

    let total_days = item.duration_days();
    if total_days <= 0 {
        return 0.0;
    }

    let elapsed_days = (now - item.start_date).num_days().min(total_days);
    (elapsed_days as f64 / total_days as f64 * 100.0).clamp(0.0, 100.0)
}
