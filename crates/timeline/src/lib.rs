//! Timeline layout engine for SiteTrack
//!
//! Turns a list of dated schedule items into Gantt-style layout values:
//! a shared visible date range, per-item bar positions and widths as
//! percentages of that range, elapsed-time progress, and overdue flags.
//!
//! Every function here is pure. Callers choose `today` (normally the local
//! wall-clock date) and render the percentages however they like.

pub mod axis;
pub mod error;
pub mod layout;
pub mod models;
pub mod overdue;
pub mod position;
pub mod progress;
pub mod range;

pub use axis::{AxisColumn, AxisScale, build_axis};
pub use error::{TimelineError, TimelineResult};
pub use layout::{ItemLayout, TimelineLayout, TimelineSummary};
pub use models::{DateRange, ItemStatus, TimelineItem};
pub use overdue::is_overdue;
pub use position::{BarGeometry, bar_geometry, position_percent, width_percent};
pub use progress::estimate_progress;
pub use range::{
    DEFAULT_PADDING_DAYS, EMPTY_RANGE_DAYS, MAX_PADDING_DAYS, RangeOptions, compute_date_range,
    compute_date_range_at, end_of_week, shift_days, start_of_week,
};

use chrono::{Local, NaiveDate};

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

static_assertions::assert_impl_all!(TimelineItem: Send, Sync);
static_assertions::assert_impl_all!(TimelineLayout: Send, Sync);
