use thiserror::Error;

/// Errors raised while turning caller-supplied text into timeline values.
///
/// The layout calculations themselves never fail; these only surface when
/// a status label or date string cannot be understood.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// Status text that matches none of the known lifecycle labels
    #[error("Unknown status '{value}' (expected one of: Open, In Progress, Pending, On Hold, Closed)")]
    UnknownStatus { value: String },

    /// Date text that is not a `YYYY-MM-DD` calendar date
    #[error("Invalid {field} '{value}': {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type alias for timeline conversions
pub type TimelineResult<T> = Result<T, TimelineError>;
