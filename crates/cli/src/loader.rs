//! Loading schedule items from a JSON file.
//!
//! The file holds either a bare array of item records or an object with an
//! `items` array. Dates and statuses arrive as text and are validated here,
//! before anything reaches the layout engine.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, trace};

use sitetrack_timeline::models::parse_date;
use sitetrack_timeline::{ItemStatus, TimelineItem, TimelineResult};

use crate::error::{CliError, CliResult};

/// An item record as written in the items file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub category: String,
    #[serde(alias = "start_date")]
    pub start_date: String,
    #[serde(alias = "end_date")]
    pub end_date: String,
    pub status: String,
    #[serde(default)]
    pub assignee: String,
}

impl RawItem {
    /// Validate dates and status and build a [`TimelineItem`].
    pub fn into_item(self) -> TimelineResult<TimelineItem> {
        let start_date = parse_date("start_date", &self.start_date)?;
        let end_date = parse_date("end_date", &self.end_date)?;
        let status: ItemStatus = self.status.parse()?;

        Ok(TimelineItem::new(self.id, self.label, start_date, end_date, status)
            .with_category(self.category)
            .with_assignee(self.assignee))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemsFile {
    List(Vec<RawItem>),
    Wrapped { items: Vec<RawItem> },
}

/// Parse items from JSON text. `path` is only used for error messages.
pub fn parse_items(json: &str, path: &Path) -> CliResult<Vec<TimelineItem>> {
    let file: ItemsFile = serde_json::from_str(json).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = match file {
        ItemsFile::List(items) | ItemsFile::Wrapped { items } => items,
    };

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            trace!("Item #{}: {:?}", index, record);
            let id = record.id.clone();
            record
                .into_item()
                .map_err(|source| CliError::InvalidItem { index, id, source })
        })
        .collect()
}

/// Read and parse the items file at `path`.
pub fn load_items(path: &Path) -> CliResult<Vec<TimelineItem>> {
    debug!("Loading items from {}", path.display());
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_items(&json, path)?;
    debug!("Loaded {} items", items.len());
    Ok(items)
}
