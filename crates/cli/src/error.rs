use std::path::PathBuf;
use thiserror::Error;

use sitetrack_timeline::TimelineError;

/// Error types for the SiteTrack CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// The items file could not be read
    #[error("Failed to read items file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The items file is not valid JSON of the expected shape
    #[error("Failed to parse items file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record in the items file has an unusable status or date
    #[error("Invalid item #{index} ('{id}'): {source}")]
    InvalidItem {
        index: usize,
        id: String,
        #[source]
        source: TimelineError,
    },

    /// Layout could not be written as JSON
    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
