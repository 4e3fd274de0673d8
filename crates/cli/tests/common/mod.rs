//! Test infrastructure for integration tests
//!
//! Provides isolated items files and command helpers. Each test writes its
//! own file into a unique temp directory so tests never share state.

use chrono::NaiveDate;
use std::path::PathBuf;

use sitetrack_cli::CliResult;
use sitetrack_cli::commands::{
    Command, OutputFormat, OverdueCommand, RangeArgs, RangeCommand, ShowCommand,
};
use sitetrack_cli::loader::load_items;

/// A small construction schedule: RFIs, submittals and an inspection.
pub const SAMPLE_ITEMS: &str = r#"[
    {"id": "RFI-101", "label": "Curtain wall anchor detail", "category": "RFI",
     "startDate": "2025-01-01", "endDate": "2025-01-31", "status": "In Progress",
     "assignee": "Envelope consultant"},
    {"id": "SUB-014", "label": "Rebar shop drawings", "category": "Submittal",
     "startDate": "2025-01-01", "endDate": "2025-01-10", "status": "Closed",
     "assignee": "Structural"},
    {"id": "RFI-102", "label": "Slab edge embed conflict", "category": "RFI",
     "startDate": "2025-01-01", "endDate": "2025-01-05", "status": "Pending",
     "assignee": "Structural"},
    {"id": "INS-003", "label": "Fire stopping inspection", "category": "Inspection",
     "startDate": "2025-01-20", "endDate": "2025-01-20", "status": "open"}
]"#;

/// Test context owning a temp directory with an items file
pub struct TestContext {
    pub temp_dir: PathBuf,
    pub items_path: PathBuf,
}

impl TestContext {
    /// Create a context whose items file contains `json`.
    pub fn with_items(json: &str) -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "stk-integration-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&temp_dir).unwrap();

        let items_path = temp_dir.join("items.json");
        std::fs::write(&items_path, json).unwrap();

        Self {
            temp_dir,
            items_path,
        }
    }

    /// Create a context holding [`SAMPLE_ITEMS`].
    pub fn sample() -> Self {
        Self::with_items(SAMPLE_ITEMS)
    }

    /// Load the items file and run `command` as of `today`.
    pub fn run(&self, command: Command, today: NaiveDate) -> CliResult<String> {
        let items = load_items(&self.items_path)?;
        command.execute(&items, today)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

// =============================================================================
// Command Builder Helpers
// =============================================================================

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn show_cmd(format: OutputFormat) -> Command {
    Command::Show(ShowCommand {
        format,
        range: RangeArgs::default(),
        width: 60,
        category: None,
    })
}

pub fn show_category_cmd(format: OutputFormat, category: &str) -> Command {
    Command::Show(ShowCommand {
        format,
        range: RangeArgs::default(),
        width: 60,
        category: Some(category.to_string()),
    })
}

pub fn overdue_cmd() -> Command {
    Command::Overdue(OverdueCommand { count: false })
}

pub fn overdue_count_cmd() -> Command {
    Command::Overdue(OverdueCommand { count: true })
}

pub fn range_cmd() -> Command {
    Command::Range(RangeCommand {
        range: RangeArgs::default(),
    })
}

pub fn range_padding_cmd(padding: i64) -> Command {
    Command::Range(RangeCommand {
        range: RangeArgs {
            padding,
            ..RangeArgs::default()
        },
    })
}
